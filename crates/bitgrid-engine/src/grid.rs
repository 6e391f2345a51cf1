//! Square-indexed grid position representation.

use bitgrid_core::PieceSymbol;

use PieceSymbol::{
    BlackBishop, BlackKing, BlackKnight, BlackPawn, BlackQueen, BlackRook, Empty, WhiteBishop,
    WhiteKing, WhiteKnight, WhitePawn, WhiteQueen, WhiteRook,
};

/// The standard starting grid. Row 0 is Black's back rank; the layout is
/// symbol-for-symbol the position the bitboard starting masks encode.
#[rustfmt::skip]
const START: [[PieceSymbol; 8]; 8] = [
    [BlackRook, BlackKnight, BlackBishop, BlackQueen, BlackKing, BlackBishop, BlackKnight, BlackRook],
    [BlackPawn, BlackPawn, BlackPawn, BlackPawn, BlackPawn, BlackPawn, BlackPawn, BlackPawn],
    [Empty, Empty, Empty, Empty, Empty, Empty, Empty, Empty],
    [Empty, Empty, Empty, Empty, Empty, Empty, Empty, Empty],
    [Empty, Empty, Empty, Empty, Empty, Empty, Empty, Empty],
    [Empty, Empty, Empty, Empty, Empty, Empty, Empty, Empty],
    [WhitePawn, WhitePawn, WhitePawn, WhitePawn, WhitePawn, WhitePawn, WhitePawn, WhitePawn],
    [WhiteRook, WhiteKnight, WhiteBishop, WhiteQueen, WhiteKing, WhiteBishop, WhiteKnight, WhiteRook],
];

/// An 8×8 grid of piece symbols, indexed `[row][column]` with row 0 at the
/// top (Black's back rank) and row 7 at the bottom (White's back rank).
///
/// The grid is a read-only snapshot: move enumeration never mutates it, and
/// there is no mutation path at all. Arbitrary positions are built through
/// `From` at construction time. It is an independent representation, never
/// synchronized with [`BitboardPosition`](crate::BitboardPosition).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridPosition {
    rows: [[PieceSymbol; 8]; 8],
}

impl GridPosition {
    /// Creates the standard starting grid.
    pub const fn new() -> Self {
        GridPosition { rows: START }
    }

    /// Returns the symbol at the given row and column.
    #[inline]
    pub const fn get(&self, x: usize, y: usize) -> PieceSymbol {
        self.rows[x][y]
    }

    /// Returns the raw rows.
    #[inline]
    pub const fn rows(&self) -> &[[PieceSymbol; 8]; 8] {
        &self.rows
    }
}

impl Default for GridPosition {
    fn default() -> Self {
        Self::new()
    }
}

impl From<[[PieceSymbol; 8]; 8]> for GridPosition {
    fn from(rows: [[PieceSymbol; 8]; 8]) -> Self {
        GridPosition { rows }
    }
}
