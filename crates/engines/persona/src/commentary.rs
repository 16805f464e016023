//! Picking what a persona says.
//!
//! A remark is chosen in two steps: the game state decides the [`Category`],
//! then a message is drawn from the persona's pool for that category while
//! steering clear of the last few lines the persona used.

use chess_core::{Color, Position};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::catalog::{Category, Persona};
use crate::evaluator::material_balance;

/// Plies (inclusive) during which every remark is an opening remark.
pub const OPENING_PLIES: usize = 3;
/// Material balance beyond which one side counts as clearly ahead.
pub const MATERIAL_MARGIN: i32 = 3;
/// The recent-message set is cleared once it grows past this many entries.
pub const RECENT_LIMIT: usize = 10;

const GOOD_MOVE_BELOW: f64 = 0.2;
const BAD_MOVE_BELOW: f64 = 0.3;

/// Game facts the category decision looks at.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommentContext {
    pub ply_count: usize,
    pub in_check: bool,
    pub side_to_move: Color,
    pub engine_color: Color,
    /// The move being reacted to captured something.
    pub last_move_capture: bool,
    /// White minus Black, in pawns.
    pub material_balance: i32,
}

impl CommentContext {
    /// `last_move` is the SAN just played, if any; captures are recognised
    /// by the `x` marker.
    pub fn from_position(pos: &Position, engine_color: Color, last_move: Option<&str>) -> Self {
        Self {
            ply_count: pos.ply_count(),
            in_check: pos.is_check(),
            side_to_move: pos.side_to_move(),
            engine_color,
            last_move_capture: last_move.is_some_and(|san| san.contains('x')),
            material_balance: material_balance(pos),
        }
    }
}

/// First matching rule wins. Only the final fallback consumes randomness.
pub fn category_for<R: Rng + ?Sized>(ctx: &CommentContext, rng: &mut R) -> Category {
    if ctx.ply_count <= OPENING_PLIES {
        return Category::Opening;
    }
    if ctx.in_check && ctx.side_to_move == ctx.engine_color {
        return Category::Check;
    }
    if ctx.last_move_capture {
        return Category::Capture;
    }
    // White ahead reads as Losing: the engine is Black.
    if ctx.material_balance > MATERIAL_MARGIN {
        return Category::Losing;
    }
    if ctx.material_balance < -MATERIAL_MARGIN {
        return Category::Winning;
    }

    let roll: f64 = rng.gen_range(0.0..1.0);
    if roll < GOOD_MOVE_BELOW {
        Category::GoodMove
    } else if roll < BAD_MOVE_BELOW {
        Category::BadMove
    } else {
        Category::General
    }
}

/// Messages said recently, oldest first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecentMessages {
    entries: Vec<String>,
}

impl RecentMessages {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, msg: &str) -> bool {
        self.entries.iter().any(|m| m == msg)
    }

    /// Records `msg`; if that pushes the set past [`RECENT_LIMIT`] it is
    /// emptied completely.
    pub fn remember(&mut self, msg: &str) {
        if !self.contains(msg) {
            self.entries.push(msg.to_string());
        }
        if self.entries.len() > RECENT_LIMIT {
            debug!(size = self.entries.len(), "recent messages cleared");
            self.entries.clear();
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }
}

/// Draws a message for `category`, preferring ones not in `recent`. When
/// every message was used recently the whole pool is eligible again.
pub fn pick<R: Rng + ?Sized>(
    persona: &Persona,
    category: Category,
    recent: &mut RecentMessages,
    rng: &mut R,
) -> String {
    let pool = persona.messages(category);
    let fresh: Vec<&String> = pool.iter().filter(|m| !recent.contains(m)).collect();

    let chosen = if fresh.is_empty() {
        pool.choose(rng)
    } else {
        fresh.choose(rng).copied()
    };
    // Catalog validation guarantees non-empty pools.
    let msg = chosen.cloned().unwrap_or_default();

    recent.remember(&msg);
    debug!(persona = persona.name(), %category, recent = recent.len(), "picked message");
    msg
}

#[cfg(test)]
#[path = "commentary_tests.rs"]
mod commentary_tests;
