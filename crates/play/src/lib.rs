//! Terminal front end for persona chess.
//!
//! The binary in `main.rs` only parses arguments and sets up logging; the
//! game loop, board diagram and calibration runs live here so they can be
//! driven from tests.

pub mod board;
pub mod calibrate;
pub mod game;

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Log filter for the binary: `RUST_LOG` when set, `info` otherwise.
pub fn log_filter() -> EnvFilter {
    log_filter_from(std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref())
}

/// Builds the filter from `RUST_LOG`-style directives. An absent or empty
/// string falls back to `info`; anything given replaces that default.
pub fn log_filter_from(directives: Option<&str>) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(Level::INFO.into())
        .parse_lossy(directives.unwrap_or_default())
}

#[cfg(test)]
mod lib_tests;
