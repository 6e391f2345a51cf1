//! Dual-representation chess position core.
//!
//! This crate provides two independent position representations and the
//! move generation built on them:
//! - [`Bitboard`] - 64-bit occupancy mask with efficient operations
//! - [`BitboardPosition`] - twelve packed masks plus side to move, with an
//!   unvalidated move primitive and a per-square symbol query
//! - [`GridPosition`] - square-indexed 8×8 grid of piece symbols
//! - [`movegen`] - pseudo-legal pawn and knight enumeration over a grid
//!   snapshot
//!
//! # Architecture
//!
//! The two representations serve different access patterns and are kept as
//! separate value types on purpose: the bitboard side answers "where are
//! the pieces of this kind" in parallel across all 64 squares, while the
//! grid side answers "what stands on this square" for per-square move
//! logic. Nothing synchronizes them; a caller integrating both owns that
//! concern.
//!
//! # Example
//!
//! ```
//! use bitgrid_core::{Piece, Square};
//! use bitgrid_engine::{movegen, BitboardPosition, GridPosition};
//!
//! let mut position = BitboardPosition::new();
//! position.move_piece(Piece::Pawn, Square::A2, Square::A3);
//! assert!(position.move_piece_raw(100, 0, 0).is_err());
//!
//! let grid = GridPosition::new();
//! let pawn_pushes = movegen::pawn_moves(&grid, 6, 4);
//! assert_eq!(pawn_pushes.len(), 2);
//! ```

mod bitboard;
mod grid;
pub mod movegen;
mod position;

pub use bitboard::Bitboard;
pub use grid::GridPosition;
pub use movegen::{in_bounds, knight_moves, pawn_moves};
pub use position::{BitboardPosition, PositionError};
