//! Random Move Chess Engine
//!
//! Selects moves uniformly at random from all legal moves. It is the
//! weakest possible opponent and the yardstick personas are calibrated
//! against: a difficulty 10 persona should beat it nearly every game.

use chess_core::{CandidateMove, Engine, Position};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

#[cfg(test)]
mod lib_tests;

/// A chess engine that plays random legal moves.
#[derive(Debug, Clone)]
pub struct RandomEngine<R: Rng = StdRng> {
    rng: R,
    moves_played: u64,
}

impl RandomEngine<StdRng> {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for RandomEngine<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> RandomEngine<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng,
            moves_played: 0,
        }
    }

    /// Moves chosen since the last `new_game`.
    pub fn moves_played(&self) -> u64 {
        self.moves_played
    }
}

impl<R: Rng + Send> Engine for RandomEngine<R> {
    fn choose_move(&mut self, pos: &Position) -> Option<CandidateMove> {
        let moves = pos.legal_moves();
        let mv = moves.choose(&mut self.rng).cloned();
        if mv.is_some() {
            self.moves_played += 1;
        }
        mv
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }

    fn new_game(&mut self) {
        self.moves_played = 0;
    }
}
