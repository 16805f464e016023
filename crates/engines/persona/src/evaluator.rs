//! Single-ply move scoring.
//!
//! Every candidate is played on a private copy of the position and the
//! resulting position is scored with a handful of weighted features. The
//! material term is always counted from Black's side: personas play Black.

use chess_core::{CandidateMove, Color, PieceKind, Position};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, trace};

use crate::error::Result;

/// Returned as the whole score of a move that mates.
pub const CHECKMATE_SCORE: i32 = 100_000;

const MATERIAL_WEIGHT: i32 = -100;
const HANGING_PENALTY: i32 = 200;
const CAPTURE_BONUS: i32 = 50;
const FORCING_CHECK_BONUS: i32 = 100;
const FORCING_REPLY_LIMIT: usize = 3;
const CHECK_BONUS: i32 = 10;
const CENTER_BONUS: i32 = 30;
const CENTER_PLY_LIMIT: usize = 15;
/// d4, e4, d5, e5
const CENTER_SQUARES: [u8; 4] = [27, 28, 35, 36];
const DEVELOPMENT_BONUS: i32 = 25;
const DEVELOPMENT_PLY_LIMIT: usize = 10;
const CASTLE_BONUS: i32 = 100;
const KING_EXPOSURE_PENALTY: i32 = 50;

/// Material values in pawns.
pub fn piece_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => 1,
        PieceKind::Knight => 3,
        PieceKind::Bishop => 3,
        PieceKind::Rook => 5,
        PieceKind::Queen => 9,
        PieceKind::King => 0,
    }
}

/// Signed material sum: positive favours White.
pub fn material_balance(pos: &Position) -> i32 {
    pos.pieces()
        .into_iter()
        .map(|(_, pc)| match pc.color {
            Color::White => piece_value(pc.kind),
            Color::Black => -piece_value(pc.kind),
        })
        .sum()
}

/// Per-feature contributions to a move's score.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScoreBreakdown {
    /// The move mates; every other term is left at zero.
    pub checkmate: bool,
    pub material: i32,
    pub hanging: i32,
    pub capture: i32,
    pub check: i32,
    pub center: i32,
    pub development: i32,
    pub castling: i32,
    pub king_safety: i32,
}

impl ScoreBreakdown {
    pub fn total(&self) -> i32 {
        if self.checkmate {
            return CHECKMATE_SCORE;
        }
        self.material
            + self.hanging
            + self.capture
            + self.check
            + self.center
            + self.development
            + self.castling
            + self.king_safety
    }
}

/// Scores `mv`, which must be one of `pos.legal_moves()`.
pub fn score(pos: &Position, mv: &CandidateMove) -> Result<i32> {
    Ok(breakdown(pos, mv)?.total())
}

pub fn breakdown(pos: &Position, mv: &CandidateMove) -> Result<ScoreBreakdown> {
    let after = pos.after(mv)?;
    let mover = pos.side_to_move();
    let enemy = mover.other();
    let ply = pos.ply_count();

    if after.is_checkmate() {
        return Ok(ScoreBreakdown {
            checkmate: true,
            ..ScoreBreakdown::default()
        });
    }

    let mut s = ScoreBreakdown {
        material: material_balance(&after) * MATERIAL_WEIGHT,
        ..ScoreBreakdown::default()
    };

    if let Some(landed) = after.piece_at(mv.to) {
        let attackers = after.attackers(mv.to, enemy);
        let defenders = after.attackers(mv.to, mover);
        if attackers > defenders {
            s.hanging = -piece_value(landed.kind) * HANGING_PENALTY;
        }
    }

    if let Some(captured) = mv.captured {
        s.capture = piece_value(captured) * CAPTURE_BONUS;
    }

    if after.is_check() {
        // Mate already returned above
        s.check = if after.legal_move_count() < FORCING_REPLY_LIMIT {
            FORCING_CHECK_BONUS
        } else {
            CHECK_BONUS
        };
    }

    if ply < CENTER_PLY_LIMIT && CENTER_SQUARES.contains(&mv.to) {
        s.center = CENTER_BONUS;
    }

    if ply < DEVELOPMENT_PLY_LIMIT && mv.piece != PieceKind::Pawn {
        s.development = DEVELOPMENT_BONUS;
    }

    if mv.is_castle() {
        s.castling = CASTLE_BONUS;
    }

    let king = after.king_square(mover);
    s.king_safety = -(after.attackers(king, enemy) as i32) * KING_EXPOSURE_PENALTY;

    trace!(san = %mv.san, total = s.total(), breakdown = ?s, "scored move");
    Ok(s)
}

/// Best score over `moves` and every move reaching it, in input order.
pub fn best_moves<'a>(
    pos: &Position,
    moves: &'a [CandidateMove],
) -> Result<Option<(i32, Vec<&'a CandidateMove>)>> {
    let mut best: Option<(i32, Vec<&'a CandidateMove>)> = None;

    for mv in moves {
        let value = score(pos, mv)?;
        match &mut best {
            Some((top, tied)) if value == *top => tied.push(mv),
            Some((top, _)) if value < *top => {}
            _ => best = Some((value, vec![mv])),
        }
    }

    Ok(best)
}

/// Picks uniformly among the top-scoring moves. `None` only when `moves`
/// is empty.
pub fn select_best<'a, R: Rng + ?Sized>(
    pos: &Position,
    moves: &'a [CandidateMove],
    rng: &mut R,
) -> Result<Option<(&'a CandidateMove, i32)>> {
    let Some((top, tied)) = best_moves(pos, moves)? else {
        return Ok(None);
    };
    let choice = tied.choose(rng).copied();
    debug!(
        best = top,
        tied = tied.len(),
        chosen = choice.map(|m| m.san.as_str()).unwrap_or("-"),
        "best move selected"
    );
    Ok(choice.map(|mv| (mv, top)))
}

#[cfg(test)]
#[path = "evaluator_tests.rs"]
mod evaluator_tests;
