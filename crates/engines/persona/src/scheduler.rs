//! Per-move skill coin flip.
//!
//! A persona of difficulty `d` plays its best move with probability `d/10`
//! and a uniformly random legal move otherwise.

use rand::Rng;

/// Upper bound (exclusive) of the roll compared against the difficulty.
pub const ROLL_SCALE: f64 = 10.0;

/// Returns `true` when this move should be the evaluator's best move.
pub fn decide<R: Rng + ?Sized>(difficulty: u8, rng: &mut R) -> bool {
    let roll = rng.gen_range(0.0..ROLL_SCALE);
    plays_best(difficulty, roll)
}

/// The comparison behind [`decide`] for a given roll in `[0, 10)`.
pub fn plays_best(difficulty: u8, roll: f64) -> bool {
    roll < f64::from(difficulty)
}

#[cfg(test)]
#[path = "scheduler_tests.rs"]
mod scheduler_tests;
