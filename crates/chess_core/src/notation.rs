//! SAN and coordinate (UCI) notation.

use cozy_chess::Board;

use crate::moves::CandidateMove;
use crate::position::{count_legal, Position};
use crate::types::*;

pub fn move_to_uci(mv: &CandidateMove) -> String {
    mv.uci()
}

/// Parses coordinate notation against the legal moves of `pos`, so flags
/// (castle/ep/capture) come out right. A missing promotion suffix means a
/// queen.
pub fn parse_uci_move(pos: &Position, txt: &str) -> Option<CandidateMove> {
    let txt = txt.trim();
    if txt.len() < 4 || !txt.is_ascii() {
        return None;
    }
    let from = coord_to_sq(&txt[0..2])?;
    let to = coord_to_sq(&txt[2..4])?;
    let promo = if txt.len() >= 5 {
        match txt.as_bytes()[4] as char {
            'q' | 'Q' => Some(PieceKind::Queen),
            'r' | 'R' => Some(PieceKind::Rook),
            'b' | 'B' => Some(PieceKind::Bishop),
            'n' | 'N' => Some(PieceKind::Knight),
            _ => return None,
        }
    } else {
        None
    };

    pos.legal_moves().into_iter().find(|m| {
        m.from == from
            && m.to == to
            && match m.promotion {
                None => promo.is_none(),
                Some(p) => p == promo.unwrap_or(PieceKind::Queen),
            }
    })
}

/// Strips check/mate markers and annotation glyphs, and accepts zeros for
/// castling.
pub fn normalize_san(san: &str) -> String {
    san.trim()
        .trim_end_matches(&['+', '#', '!', '?'][..])
        .replace('0', "O")
}

/// Whether `notation` has the shape of a move (SAN or UCI), legal or not.
pub(crate) fn looks_like_move(notation: &str) -> bool {
    let s = normalize_san(notation);
    if s == "O-O" || s == "O-O-O" {
        return true;
    }
    if s.len() >= 4
        && s.is_ascii()
        && coord_to_sq(&s[0..2]).is_some()
        && coord_to_sq(&s[2..4]).is_some()
    {
        return true;
    }
    // SAN ends with the destination square, optionally followed by a promotion
    let core = match s.find('=') {
        Some(i) => &s[..i],
        None => s.as_str(),
    };
    core.len() >= 2 && core.is_ascii() && coord_to_sq(&core[core.len() - 2..]).is_some()
}

/// Builds SAN for `mv`, which must be legal on `board`. `siblings` is the
/// full legal move list of `board`, used for disambiguation.
pub(crate) fn san_for(board: &Board, mv: &CandidateMove, siblings: &[cozy_chess::Move]) -> String {
    let mut san = String::new();

    if mv.flags.castle_kingside {
        san.push_str("O-O");
    } else if mv.flags.castle_queenside {
        san.push_str("O-O-O");
    } else {
        if let Some(letter) = mv.piece.san_letter() {
            san.push(letter);
        }

        if mv.piece != PieceKind::Pawn && mv.piece != PieceKind::King {
            san.push_str(&disambiguation(board, mv, siblings));
        }

        if mv.is_capture() {
            if mv.piece == PieceKind::Pawn {
                san.push((b'a' + (mv.from % 8)) as char);
            }
            san.push('x');
        }

        san.push_str(&sq_to_coord(mv.to));

        if let Some(promo) = mv.promotion.and_then(PieceKind::san_letter) {
            san.push('=');
            san.push(promo);
        }
    }

    let mut next = board.clone();
    next.play_unchecked(mv.raw);
    if !next.checkers().is_empty() {
        san.push(if count_legal(&next) == 0 { '#' } else { '+' });
    }
    san
}

fn disambiguation(board: &Board, mv: &CandidateMove, siblings: &[cozy_chess::Move]) -> String {
    let rivals: Vec<u8> = siblings
        .iter()
        .filter(|other| {
            other.to == mv.raw.to
                && other.from != mv.raw.from
                && board.piece_on(other.from) == Some(mv.piece.to_cozy())
        })
        .map(|other| from_cozy_sq(other.from))
        .collect();

    if rivals.is_empty() {
        return String::new();
    }

    let coord = sq_to_coord(mv.from);
    let same_file = rivals.iter().any(|&r| file_of(r) == file_of(mv.from));
    let same_rank = rivals.iter().any(|&r| rank_of(r) == rank_of(mv.from));
    if !same_file {
        coord[0..1].to_string()
    } else if !same_rank {
        coord[1..2].to_string()
    } else {
        coord
    }
}

#[cfg(test)]
#[path = "notation_tests.rs"]
mod notation_tests;
