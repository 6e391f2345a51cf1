//! Pseudo-legal move enumeration over a grid snapshot.
//!
//! Generation is purely geometric: nothing here knows about checks, pins,
//! en passant, or promotion. Destinations are materialized eagerly and the
//! generation order is not part of the contract; callers that need a
//! canonical order sort for themselves.

use crate::GridPosition;

/// The eight knight offsets as (row, column) deltas.
const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
];

/// Returns true if (x, y) lies on the board.
#[inline]
pub const fn in_bounds(x: i32, y: i32) -> bool {
    x >= 0 && x < 8 && y >= 0 && y < 8
}

/// Enumerates the destinations of the pawn at (x, y).
///
/// Forward one row if empty; two rows from the pawn's starting row when
/// both squares ahead are empty; diagonal steps only onto opponent pieces.
/// An empty origin square yields nothing.
pub fn pawn_moves(grid: &GridPosition, x: usize, y: usize) -> Vec<(usize, usize)> {
    let mut moves = Vec::new();
    let Some(color) = grid.get(x, y).color() else {
        return moves;
    };
    let step = color.row_step();
    let (ix, iy) = (x as i32, y as i32);

    let ahead = ix + step;
    if in_bounds(ahead, iy) && grid.get(ahead as usize, y).is_empty() {
        moves.push((ahead as usize, y));

        // From the starting row both squares ahead stay on the board.
        if x == color.pawn_row() {
            let two_ahead = (ix + 2 * step) as usize;
            if grid.get(two_ahead, y).is_empty() {
                moves.push((two_ahead, y));
            }
        }
    }

    for dy in [-1, 1] {
        let (cx, cy) = (ix + step, iy + dy);
        if in_bounds(cx, cy) && grid.get(cx as usize, cy as usize).is_opponent_of(color) {
            moves.push((cx as usize, cy as usize));
        }
    }

    moves
}

/// Enumerates the destinations of the knight at (x, y).
///
/// Every in-bounds offset square is included unless one of the knight's own
/// pieces sits there; captures and quiet moves are not distinguished. An
/// empty origin square yields nothing.
pub fn knight_moves(grid: &GridPosition, x: usize, y: usize) -> Vec<(usize, usize)> {
    let mut moves = Vec::new();
    let Some(color) = grid.get(x, y).color() else {
        return moves;
    };

    for (dx, dy) in KNIGHT_OFFSETS {
        let (nx, ny) = (x as i32 + dx, y as i32 + dy);
        if !in_bounds(nx, ny) {
            continue;
        }
        let target = grid.get(nx as usize, ny as usize);
        if target.is_empty() || target.is_opponent_of(color) {
            moves.push((nx as usize, ny as usize));
        }
    }

    moves
}
