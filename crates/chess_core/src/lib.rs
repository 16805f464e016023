//! Chess rules for the persona engines.
//!
//! Legality and move generation come from `cozy-chess`. This crate wraps it
//! in the vocabulary the engines speak: [`Position`] with its half-move
//! history, [`CandidateMove`] with flags and SAN, and [`GameStatus`].

pub mod error;
pub mod moves;
pub mod notation;
pub mod position;
pub mod types;

pub use error::RulesError;
pub use moves::*;
pub use notation::{move_to_uci, normalize_san, parse_uci_move};
pub use position::{DrawReason, GameStatus, Position};
pub use types::*;

// =============================================================================
// Engine trait: implemented by every move picker (persona, random, ...)
// =============================================================================

/// Trait that all chess engines must implement.
///
/// This lets the match runner pit personas against baseline movers without
/// knowing how either picks its moves.
pub trait Engine: Send {
    /// Pick a move for the side to move. `None` when there are no legal
    /// moves.
    fn choose_move(&mut self, pos: &Position) -> Option<CandidateMove>;

    /// Returns the engine's name for reports
    fn name(&self) -> &str;

    /// Returns the engine's author for reports
    fn author(&self) -> &str {
        "persona-chess"
    }

    /// Reset internal state for a new game
    fn new_game(&mut self) {}
}
