//! Match runner for persona calibration
//!
//! This crate provides infrastructure for:
//! - Running matches between any two [`chess_core::Engine`]s
//! - Checking that persona difficulty levels order by strength
//! - Saving results as JSON and rendering text reports
//!
//! # Usage
//!
//! ```bash
//! # Pit a persona against the random mover
//! cargo run -p persona_chess -- match --persona Professor --games 20
//! ```

mod error;
mod match_runner;
mod results;

pub use error::{Result, TournamentError};
pub use match_runner::*;
pub use results::*;
