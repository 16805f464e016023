//! Match runner for playing games between engines

use std::fmt;
use std::path::Path;

use chess_core::{Color, DrawReason, Engine, GameStatus, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::Result;

/// Configuration for a match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Number of games to play
    pub num_games: u32,
    /// Maximum plies per game before declaring draw
    pub max_moves: u32,
    /// Whether to alternate colors each game. Off by default: personas
    /// score positions from Black's side, so engine2 keeps Black.
    pub alternate_colors: bool,
    /// Keep the SAN of every game in the result
    pub record_moves: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            num_games: 10,
            max_moves: 200,
            alternate_colors: false,
            record_moves: false,
        }
    }
}

impl MatchConfig {
    /// Load a config from TOML. Missing keys keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }
}

/// Result of a single game
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameResult {
    Win,
    Loss,
    Draw,
}

impl GameResult {
    pub fn flipped(self) -> Self {
        match self {
            GameResult::Win => GameResult::Loss,
            GameResult::Loss => GameResult::Win,
            GameResult::Draw => GameResult::Draw,
        }
    }
}

/// Why a game stopped
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Termination {
    Checkmate,
    Stalemate,
    FiftyMoveRule,
    ThreefoldRepetition,
    InsufficientMaterial,
    MoveLimit,
    /// An engine returned no move in a position that still had one
    Forfeit,
}

impl From<DrawReason> for Termination {
    fn from(reason: DrawReason) -> Self {
        match reason {
            DrawReason::Stalemate => Termination::Stalemate,
            DrawReason::FiftyMoveRule => Termination::FiftyMoveRule,
            DrawReason::ThreefoldRepetition => Termination::ThreefoldRepetition,
            DrawReason::InsufficientMaterial => Termination::InsufficientMaterial,
        }
    }
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Termination::Checkmate => "checkmate",
            Termination::Stalemate => "stalemate",
            Termination::FiftyMoveRule => "fifty-move rule",
            Termination::ThreefoldRepetition => "threefold repetition",
            Termination::InsufficientMaterial => "insufficient material",
            Termination::MoveLimit => "move limit",
            Termination::Forfeit => "forfeit",
        };
        f.write_str(s)
    }
}

/// One finished game, from engine1's perspective
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameRecord {
    pub engine1_white: bool,
    pub result: GameResult,
    pub termination: Termination,
    pub plies: u32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub moves: Vec<String>,
}

/// Result of a match (multiple games)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchResult {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    #[serde(default)]
    pub games: Vec<GameRecord>,
}

impl MatchResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total_games(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// Score from engine1's perspective (1 for win, 0.5 for draw, 0 for loss)
    pub fn score(&self) -> f64 {
        let total = self.total_games() as f64;
        if total == 0.0 {
            return 0.5;
        }
        (self.wins as f64 + 0.5 * self.draws as f64) / total
    }

    /// The same match seen from engine2's side
    pub fn flipped(&self) -> Self {
        Self {
            wins: self.losses,
            losses: self.wins,
            draws: self.draws,
            games: self
                .games
                .iter()
                .map(|g| GameRecord {
                    engine1_white: !g.engine1_white,
                    result: g.result.flipped(),
                    ..g.clone()
                })
                .collect(),
        }
    }

    fn record(&mut self, game: GameRecord) {
        match game.result {
            GameResult::Win => self.wins += 1,
            GameResult::Loss => self.losses += 1,
            GameResult::Draw => self.draws += 1,
        }
        self.games.push(game);
    }
}

/// Runs matches between two engines
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Run a match between two engines
    ///
    /// Returns the result from engine1's perspective
    pub fn run_match(&self, engine1: &mut dyn Engine, engine2: &mut dyn Engine) -> MatchResult {
        let mut result = MatchResult::new();
        info!(
            engine1 = engine1.name(),
            engine2 = engine2.name(),
            games = self.config.num_games,
            "match started"
        );

        for game_num in 0..self.config.num_games {
            // Alternate colors if configured
            let engine1_white = !self.config.alternate_colors || game_num % 2 == 0;

            let mut game = if engine1_white {
                self.play_game(engine1, engine2)
            } else {
                self.play_game(engine2, engine1)
            };
            game.engine1_white = engine1_white;
            if !engine1_white {
                // Flip result since engine1 is black
                game.result = game.result.flipped();
            }

            let color = if engine1_white { "W" } else { "B" };
            let outcome = match game.result {
                GameResult::Win => "1-0",
                GameResult::Loss => "0-1",
                GameResult::Draw => "1/2",
            };
            info!(
                "Game {}/{}: {} ({}, {}) - Score: {}-{}-{}",
                game_num + 1,
                self.config.num_games,
                outcome,
                color,
                game.termination,
                result.wins + u32::from(game.result == GameResult::Win),
                result.losses + u32::from(game.result == GameResult::Loss),
                result.draws + u32::from(game.result == GameResult::Draw)
            );

            result.record(game);
        }

        result
    }

    /// Play a single game, returns result from white's perspective
    pub fn play_game(&self, white: &mut dyn Engine, black: &mut dyn Engine) -> GameRecord {
        let mut pos = Position::startpos();
        white.new_game();
        black.new_game();

        let finish = |pos: &Position, result: GameResult, termination: Termination| {
            debug!(plies = pos.ply_count(), %termination, "game finished");
            GameRecord {
                engine1_white: true,
                result,
                termination,
                plies: pos.ply_count() as u32,
                moves: if self.config.record_moves {
                    pos.history().to_vec()
                } else {
                    Vec::new()
                },
            }
        };

        for _ply in 0..self.config.max_moves {
            match pos.status() {
                GameStatus::Checkmate { winner } => {
                    let result = if winner == Color::White {
                        GameResult::Win
                    } else {
                        GameResult::Loss
                    };
                    return finish(&pos, result, Termination::Checkmate);
                }
                GameStatus::Draw(reason) => {
                    return finish(&pos, GameResult::Draw, reason.into());
                }
                GameStatus::Ongoing => {}
            }

            let side = pos.side_to_move();
            let mv = if side == Color::White {
                white.choose_move(&pos)
            } else {
                black.choose_move(&pos)
            };

            let played = match mv {
                Some(mv) => pos.play(&mv).is_ok(),
                None => false,
            };
            if !played {
                // The side that failed to move loses
                let result = if side == Color::White {
                    GameResult::Loss
                } else {
                    GameResult::Win
                };
                return finish(&pos, result, Termination::Forfeit);
            }
        }

        // The last move may have ended the game
        match pos.status() {
            GameStatus::Checkmate { winner } if winner == Color::White => {
                finish(&pos, GameResult::Win, Termination::Checkmate)
            }
            GameStatus::Checkmate { .. } => finish(&pos, GameResult::Loss, Termination::Checkmate),
            GameStatus::Draw(reason) => finish(&pos, GameResult::Draw, reason.into()),
            GameStatus::Ongoing => finish(&pos, GameResult::Draw, Termination::MoveLimit),
        }
    }
}

/// Quick utility to run a single match
pub fn quick_match(
    engine1: &mut dyn Engine,
    engine2: &mut dyn Engine,
    num_games: u32,
) -> MatchResult {
    let config = MatchConfig {
        num_games,
        ..Default::default()
    };
    let runner = MatchRunner::new(config);
    runner.run_match(engine1, engine2)
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;
