//! Calibration run storage and the text report

use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::path::Path;

use crate::error::Result;
use crate::match_runner::{MatchConfig, MatchResult, Termination};

/// Every match of one calibration run, with the settings it was played under
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TournamentResults {
    pub name: String,
    /// Display names of the engines involved
    pub participants: Vec<String>,
    pub matches: Vec<MatchEntry>,
    pub config: MatchConfig,
}

/// One pairing; `result` is from `engine1`'s side
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchEntry {
    pub engine1: String,
    pub engine2: String,
    pub result: MatchResult,
}

impl MatchEntry {
    /// How the recorded games ended, in order of first occurrence.
    pub fn terminations(&self) -> Vec<(Termination, u32)> {
        let mut counts: Vec<(Termination, u32)> = Vec::new();
        for game in &self.result.games {
            match counts.iter_mut().find(|(t, _)| *t == game.termination) {
                Some((_, n)) => *n += 1,
                None => counts.push((game.termination, 1)),
            }
        }
        counts
    }

    /// Mean game length in plies, if any games were recorded.
    pub fn average_plies(&self) -> Option<f64> {
        let games = &self.result.games;
        if games.is_empty() {
            return None;
        }
        let total: u32 = games.iter().map(|g| g.plies).sum();
        Some(f64::from(total) / games.len() as f64)
    }
}

impl TournamentResults {
    pub fn new(name: &str, participants: Vec<String>, config: MatchConfig) -> Self {
        Self {
            name: name.to_string(),
            participants,
            matches: Vec::new(),
            config,
        }
    }

    pub fn add_match(&mut self, engine1: &str, engine2: &str, result: MatchResult) {
        self.matches.push(MatchEntry {
            engine1: engine1.to_string(),
            engine2: engine2.to_string(),
            result,
        });
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }

    /// Header, one W-L-D line per match, then how each match's games ended.
    pub fn generate_report(&self) -> String {
        let colors = if self.config.alternate_colors {
            "alternating"
        } else {
            "fixed"
        };

        // Writing into a String cannot fail
        let mut out = String::new();
        let _ = writeln!(out, "=== {} ===\n", self.name);
        let _ = writeln!(out, "Participants: {}", self.participants.join(", "));
        let _ = writeln!(
            out,
            "Config: {} games/match, {} plies max, colors {}\n",
            self.config.num_games, self.config.max_moves, colors
        );

        let _ = writeln!(out, "Results:");
        let _ = writeln!(
            out,
            "{:<20} vs {:<20} {:>5}-{:<5}-{:<5} {:>6}",
            "Engine 1", "Engine 2", "W", "L", "D", "Score"
        );
        let _ = writeln!(out, "{}", "-".repeat(67));
        for m in &self.matches {
            let _ = writeln!(
                out,
                "{:<20} vs {:<20} {:>5}-{:<5}-{:<5} {:>5.1}%",
                m.engine1,
                m.engine2,
                m.result.wins,
                m.result.losses,
                m.result.draws,
                m.result.score() * 100.0
            );
        }

        for m in self.matches.iter().filter(|m| !m.result.games.is_empty()) {
            let endings: Vec<String> = m
                .terminations()
                .iter()
                .map(|(t, n)| format!("{t} x{n}"))
                .collect();
            let _ = writeln!(out, "\n{} vs {}: {}", m.engine1, m.engine2, endings.join(", "));
            if let Some(avg) = m.average_plies() {
                let _ = writeln!(out, "  average length {avg:.1} plies");
            }
        }

        out
    }
}

#[cfg(test)]
#[path = "results_tests.rs"]
mod results_tests;
