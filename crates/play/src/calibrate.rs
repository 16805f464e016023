//! Persona-versus-random calibration matches.

use std::sync::Arc;

use chess_core::Engine;
use persona_engine::{Persona, PersonaOpponent};
use random_engine::RandomEngine;
use tournament::{MatchConfig, MatchRunner, TournamentResults};
use tracing::info;

/// Plays `config.num_games` games with the persona on Black against the
/// random mover. The report is from the persona's side.
pub fn run(persona: Arc<Persona>, config: MatchConfig, seed: u64) -> TournamentResults {
    let mut random = RandomEngine::seeded(seed);
    let mut opponent = PersonaOpponent::seeded(persona, seed.wrapping_add(1));

    let persona_name = opponent.name().to_string();
    let random_name = random.name().to_string();
    info!(persona = %persona_name, seed, "calibration match");

    let runner = MatchRunner::new(config.clone());
    let result = runner.run_match(&mut random, &mut opponent).flipped();

    let mut results = TournamentResults::new(
        &format!("Calibration: {persona_name}"),
        vec![persona_name.clone(), random_name.clone()],
        config,
    );
    results.add_match(&persona_name, &random_name, result);
    results
}
