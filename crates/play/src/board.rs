//! Plain-text board diagram for the terminal.

use chess_core::{sq, sq_to_coord, Position};

/// Eight ranks, White at the bottom. Squares of the last move are bracketed.
pub fn render(pos: &Position, last_move: Option<(u8, u8)>) -> String {
    let mut out = String::new();

    for rank in (0..8).rev() {
        out.push_str(&format!("{} ", rank + 1));
        for file in 0..8 {
            let Some(square) = sq(file, rank) else {
                continue;
            };
            let ch = pos.piece_at(square).map(|p| p.to_char()).unwrap_or('.');
            let marked = last_move.is_some_and(|(from, to)| square == from || square == to);
            if marked {
                out.push_str(&format!("[{ch}]"));
            } else {
                out.push_str(&format!(" {ch} "));
            }
        }
        out.push('\n');
    }
    out.push_str("   a  b  c  d  e  f  g  h\n");
    out
}

/// `e2-e4` style description of a move for status output.
pub fn describe_move(last_move: (u8, u8)) -> String {
    format!("{}-{}", sq_to_coord(last_move.0), sq_to_coord(last_move.1))
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
