//! Packed bitboard position representation.

use bitgrid_core::{Color, Piece, PieceSymbol, Square};
use thiserror::Error;

use crate::Bitboard;

/// Errors from the raw move boundary.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PositionError {
    /// The piece index does not name one of the six piece types.
    #[error("unknown piece type: {0}")]
    UnknownPieceType(u8),

    /// The square index falls outside 0-63.
    #[error("invalid square index: {0}")]
    InvalidSquare(u8),
}

/// The standard starting layout as twelve literal masks, indexed
/// `[color][piece]` in `Piece` discriminant order.
const START: [[Bitboard; 6]; 2] = [
    [
        Bitboard::new(0x0000_0000_0000_FF00), // pawns on a2-h2
        Bitboard::new(0x0000_0000_0000_0081), // rooks on a1, h1
        Bitboard::new(0x0000_0000_0000_0042), // knights on b1, g1
        Bitboard::new(0x0000_0000_0000_0024), // bishops on c1, f1
        Bitboard::new(0x0000_0000_0000_0008), // queen on d1
        Bitboard::new(0x0000_0000_0000_0010), // king on e1
    ],
    [
        Bitboard::new(0x00FF_0000_0000_0000), // pawns on a7-h7
        Bitboard::new(0x8100_0000_0000_0000), // rooks on a8, h8
        Bitboard::new(0x4200_0000_0000_0000), // knights on b8, g8
        Bitboard::new(0x2400_0000_0000_0000), // bishops on c8, f8
        Bitboard::new(0x0800_0000_0000_0000), // queen on d8
        Bitboard::new(0x1000_0000_0000_0000), // king on e8
    ],
];

/// A chess position packed into twelve occupancy masks, one per
/// (color, piece type) pair, plus the side to move.
///
/// The masks of a well-formed position never overlap: each occupied square
/// is claimed by exactly one mask. [`BitboardPosition::move_piece`] does not
/// enforce this; it trusts its caller to supply squares consistent with the
/// current occupancy, the same way it skips every other legality check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitboardPosition {
    boards: [[Bitboard; 6]; 2],
    side_to_move: Color,
}

impl BitboardPosition {
    /// Creates the standard starting position with White to move.
    pub const fn new() -> Self {
        BitboardPosition {
            boards: START,
            side_to_move: Color::White,
        }
    }

    /// Returns the side to move.
    #[inline]
    pub const fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Returns the occupancy mask for the given color and piece type.
    #[inline]
    pub const fn bitboard(&self, color: Color, piece: Piece) -> Bitboard {
        self.boards[color.index()][piece.index()]
    }

    /// Returns the union of all twelve masks.
    pub fn occupied(&self) -> Bitboard {
        let mut all = Bitboard::EMPTY;
        for color_boards in &self.boards {
            for board in color_boards {
                all |= *board;
            }
        }
        all
    }

    /// Moves a piece of the side to move from one square to another and
    /// flips the turn.
    ///
    /// This is a deliberately low-level primitive: it clears `from` (a
    /// silent no-op if the bit was already clear), sets `to`, and advances
    /// the turn unconditionally. It does not check that `from` holds a piece
    /// of the claimed type, that `to` is unoccupied, or even that the two
    /// squares differ. Legality belongs to a layer above this one.
    pub fn move_piece(&mut self, piece: Piece, from: Square, to: Square) {
        let board = &mut self.boards[self.side_to_move.index()][piece.index()];
        board.clear(from);
        board.set(to);
        self.side_to_move = self.side_to_move.opposite();
    }

    /// The unparsed-input boundary of [`BitboardPosition::move_piece`].
    ///
    /// Validates the raw indices a protocol layer would hand over and
    /// delegates to the typed primitive. On error nothing is mutated and
    /// the turn does not flip.
    pub fn move_piece_raw(&mut self, piece: u8, from: u8, to: u8) -> Result<(), PositionError> {
        let piece = Piece::from_index(piece).ok_or(PositionError::UnknownPieceType(piece))?;
        let from = Square::from_index(from).ok_or(PositionError::InvalidSquare(from))?;
        let to = Square::from_index(to).ok_or(PositionError::InvalidSquare(to))?;
        self.move_piece(piece, from, to);
        Ok(())
    }

    /// Returns the symbol occupying the given square.
    ///
    /// Scans the twelve masks in fixed priority order: White pawn, rook,
    /// knight, bishop, queen, king, then the same for Black. With disjoint
    /// masks at most one can match, so the order is a tie-break in name
    /// only.
    pub fn symbol_at(&self, sq: Square) -> PieceSymbol {
        debug_assert!(self.masks_disjoint());
        for color in [Color::White, Color::Black] {
            for piece in Piece::ALL {
                if self.bitboard(color, piece).contains(sq) {
                    return PieceSymbol::new(color, piece);
                }
            }
        }
        PieceSymbol::Empty
    }

    /// Checks that no square is claimed by more than one mask.
    fn masks_disjoint(&self) -> bool {
        let mut seen = Bitboard::EMPTY;
        for color_boards in &self.boards {
            for board in color_boards {
                if (seen & *board).is_not_empty() {
                    return false;
                }
                seen |= *board;
            }
        }
        true
    }
}

impl Default for BitboardPosition {
    fn default() -> Self {
        Self::new()
    }
}
