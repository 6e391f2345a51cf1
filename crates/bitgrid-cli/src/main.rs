//! Board presentation and demo driver.
//!
//! This binary sits outside the position core: it reads the per-square
//! symbol query to render the board and drives the move primitive, but no
//! state ever flows back in.

use std::fmt::Write;

use bitgrid_core::{File, Piece, Rank, Square};
use bitgrid_engine::BitboardPosition;
use tracing::error;

/// Renders the position as an 8×8 grid with rank and file labels,
/// rank 8 at the top.
fn render(position: &BitboardPosition) -> String {
    let mut out = String::new();
    out.push_str("  a b c d e f g h\n");
    out.push_str(" +----------------\n");

    for rank in Rank::ALL.iter().rev() {
        write!(out, "{rank}|").unwrap();
        for file in File::ALL {
            let symbol = position.symbol_at(Square::new(file, *rank));
            write!(out, "{symbol} ").unwrap();
        }
        out.push_str("|\n");
    }

    out.push_str(" +----------------\n");
    out.push_str("  a b c d e f g h\n");
    out
}

fn main() {
    tracing_subscriber::fmt().init();

    let mut position = BitboardPosition::new();

    // A piece index the engine does not know: the boundary rejects it
    // without touching the position.
    if let Err(err) = position.move_piece_raw(100, Square::A2.index(), Square::A3.index()) {
        error!("move rejected: {err}");
    }

    position.move_piece(Piece::Pawn, Square::A2, Square::A3);

    print!("{}", render(&position));
}
