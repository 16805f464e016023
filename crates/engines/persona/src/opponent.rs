//! The persona-driven opponent.
//!
//! [`PersonaOpponent`] ties the pieces together: the skill coin flip picks
//! between the evaluator's best move and a random legal move, and the
//! commentary selector supplies what the persona says about it. All three
//! random draws come from the one RNG the opponent owns.

use std::sync::Arc;

use chess_core::{CandidateMove, Color, Engine, Position};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, warn};

use crate::catalog::{Category, Persona};
use crate::commentary::{self, CommentContext, RecentMessages};
use crate::error::{EngineError, Result};
use crate::evaluator;
use crate::scheduler;

/// Personas always take the black pieces.
pub const ENGINE_COLOR: Color = Color::Black;

/// Per-game state of one opponent.
#[derive(Clone, Debug)]
pub struct EngineState {
    pub persona: Arc<Persona>,
    /// Copied from the persona when the game starts.
    pub difficulty: u8,
    pub recent: RecentMessages,
}

impl EngineState {
    pub fn new(persona: Arc<Persona>) -> Self {
        Self {
            difficulty: persona.difficulty(),
            persona,
            recent: RecentMessages::new(),
        }
    }
}

/// A move together with what the persona says while playing it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Decision {
    pub mv: CandidateMove,
    pub comment: String,
    pub category: Category,
    /// The coin flip sent this move through the evaluator.
    pub played_best: bool,
}

pub struct PersonaOpponent<R: Rng = StdRng> {
    state: EngineState,
    rng: R,
}

impl PersonaOpponent<StdRng> {
    pub fn new(persona: Arc<Persona>) -> Self {
        Self::with_rng(persona, StdRng::from_entropy())
    }

    /// Deterministic opponent for tests and reproducible matches.
    pub fn seeded(persona: Arc<Persona>, seed: u64) -> Self {
        Self::with_rng(persona, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> PersonaOpponent<R> {
    pub fn with_rng(persona: Arc<Persona>, rng: R) -> Self {
        Self {
            state: EngineState::new(persona),
            rng,
        }
    }

    pub fn persona(&self) -> &Persona {
        &self.state.persona
    }

    pub fn difficulty(&self) -> u8 {
        self.state.difficulty
    }

    pub fn state(&self) -> &EngineState {
        &self.state
    }

    /// Forgets the remarks made so far, as at the start of a new game.
    pub fn reset(&mut self) {
        self.state.recent = RecentMessages::new();
    }

    /// Chooses a move for the side to move plus a remark to go with it.
    ///
    /// The remark is decided from the position before the move is made.
    pub fn decide_move(&mut self, pos: &Position) -> Result<Decision> {
        let moves = pos.legal_moves();
        if moves.is_empty() {
            return Err(EngineError::NoLegalMoves);
        }

        let difficulty = self.state.difficulty;
        let flip = scheduler::decide(difficulty, &mut self.rng);
        let played_best = flip && difficulty > 0;

        let chosen = if played_best {
            evaluator::select_best(pos, &moves, &mut self.rng)?.map(|(mv, _)| mv)
        } else {
            moves.choose(&mut self.rng)
        };
        let mv = chosen.cloned().ok_or(EngineError::NoLegalMoves)?;

        let ctx = CommentContext::from_position(pos, ENGINE_COLOR, None);
        let category = commentary::category_for(&ctx, &mut self.rng);
        let comment = self.say(category);

        debug!(
            persona = self.state.persona.name(),
            san = %mv.san,
            played_best,
            %category,
            "decided move"
        );

        Ok(Decision {
            mv,
            comment,
            category,
            played_best,
        })
    }

    /// One remark about a move the other side just played. `pos` is the
    /// position after that move; `notation` is its SAN.
    pub fn react_to_move(&mut self, pos: &Position, notation: &str) -> String {
        let ctx = CommentContext::from_position(pos, ENGINE_COLOR, Some(notation));
        let category = commentary::category_for(&ctx, &mut self.rng);
        self.say(category)
    }

    /// A remark from `category` that goes through the no-repeat filter.
    pub fn say(&mut self, category: Category) -> String {
        commentary::pick(
            &self.state.persona,
            category,
            &mut self.state.recent,
            &mut self.rng,
        )
    }
}

impl<R: Rng + Send> Engine for PersonaOpponent<R> {
    fn choose_move(&mut self, pos: &Position) -> Option<CandidateMove> {
        match self.decide_move(pos) {
            Ok(decision) => Some(decision.mv),
            Err(EngineError::NoLegalMoves) => None,
            Err(e) => {
                warn!(persona = self.state.persona.name(), error = %e, "decision failed");
                None
            }
        }
    }

    fn name(&self) -> &str {
        self.state.persona.display_name()
    }

    fn new_game(&mut self) {
        self.reset();
    }
}

#[cfg(test)]
#[path = "opponent_tests.rs"]
mod opponent_tests;
