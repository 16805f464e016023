//! Personality-driven chess opponent.
//!
//! A persona is a fixed character with a skill level and a pool of chat
//! lines. On each turn it either plays the best move found by a one-ply
//! heuristic or a random legal move, then says something that fits the
//! game state.
//!
//! ```no_run
//! use persona_engine::{PersonaCatalog, PersonaOpponent};
//! use chess_core::Position;
//!
//! let catalog = PersonaCatalog::builtin()?;
//! let mut opponent = PersonaOpponent::seeded(catalog.by_name("Zen")?, 7);
//! let pos = Position::from_fen("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1")?;
//! let decision = opponent.decide_move(&pos)?;
//! println!("{} ({})", decision.mv, decision.comment);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod catalog;
pub mod commentary;
pub mod error;
pub mod evaluator;
pub mod opponent;
pub mod scheduler;
pub mod session;

pub use catalog::{Category, MessagePool, Persona, PersonaCatalog};
pub use commentary::{CommentContext, RecentMessages};
pub use error::{EngineError, Result};
pub use opponent::{Decision, EngineState, PersonaOpponent, ENGINE_COLOR};
pub use session::GameSession;
