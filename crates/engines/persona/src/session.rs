//! A human-versus-persona game.
//!
//! The human plays White, the persona plays Black. Every move is followed by
//! a line of chat from the persona; the transcript keeps those lines in the
//! order they were said.

use chess_core::{CandidateMove, Color, GameStatus, Position};
use rand::rngs::StdRng;
use rand::Rng;
use tracing::{debug, info};

use crate::error::{EngineError, Result};
use crate::opponent::{Decision, PersonaOpponent, ENGINE_COLOR};

pub const GREETING: &str = "Let's play! You're White, I'm Black.";
pub const ENGINE_WINS_REMARK: &str = "Good game! Better luck next time!";
pub const PLAYER_WINS_REMARK: &str = "Well played! You got me!";

const PLAYER_COLOR: Color = Color::White;

pub struct GameSession<R: Rng = StdRng> {
    opponent: PersonaOpponent<R>,
    position: Position,
    /// Chat lines, each prefixed with the speaker
    transcript: Vec<String>,
    /// Last move (for highlighting)
    last_move: Option<(u8, u8)>,
    status: GameStatus,
}

impl<R: Rng> GameSession<R> {
    /// A game from the standard start position.
    pub fn new(opponent: PersonaOpponent<R>) -> Self {
        Self::with_position(opponent, Position::startpos())
    }

    /// A game continuing from `position`.
    pub fn with_position(opponent: PersonaOpponent<R>, position: Position) -> Self {
        let mut session = Self {
            status: position.status(),
            opponent,
            position,
            transcript: Vec::new(),
            last_move: None,
        };
        session.chat(GREETING);
        info!(persona = session.opponent.persona().name(), "game started");
        session
    }

    pub fn opponent(&self) -> &PersonaOpponent<R> {
        &self.opponent
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    pub fn last_move(&self) -> Option<(u8, u8)> {
        self.last_move
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// Whose turn it is, from the human's point of view.
    pub fn is_players_turn(&self) -> bool {
        !self.is_over() && self.position.side_to_move() == PLAYER_COLOR
    }

    /// Plays the human's move (SAN or UCI) and records the persona's
    /// reaction to it.
    pub fn player_move(&mut self, notation: &str) -> Result<CandidateMove> {
        if self.is_over() {
            return Err(EngineError::GameOver);
        }
        if self.position.side_to_move() != PLAYER_COLOR {
            return Err(EngineError::NotPlayersTurn);
        }

        let mv = self.position.play_notation(notation)?;
        self.after_move(&mv);

        let reaction = self.opponent.react_to_move(&self.position, &mv.san);
        self.chat(&reaction);
        self.announce_result();
        Ok(mv)
    }

    /// Lets the persona play its move and records its comment.
    pub fn engine_move(&mut self) -> Result<Decision> {
        if self.is_over() {
            return Err(EngineError::GameOver);
        }
        if self.position.side_to_move() != ENGINE_COLOR {
            return Err(EngineError::NotEnginesTurn);
        }

        let decision = self.opponent.decide_move(&self.position)?;
        self.position.play(&decision.mv)?;
        self.after_move(&decision.mv);

        self.chat(&decision.comment);
        self.announce_result();
        Ok(decision)
    }

    /// Takes back moves until it is the player's turn again: the persona's
    /// reply and the player's move before it, or just the player's move when
    /// the persona has not answered. Returns the SAN taken back, most recent
    /// first. The transcript is left as it was.
    pub fn undo(&mut self) -> Result<Vec<String>> {
        if self.position.ply_count() == 0 {
            return Err(EngineError::NothingToUndo);
        }

        let mut taken = Vec::new();
        while let Some(san) = self.position.undo() {
            taken.push(san);
            if self.position.side_to_move() == PLAYER_COLOR {
                break;
            }
        }
        self.last_move = self.position.last_move();
        self.status = self.position.status();
        debug!(moves = ?taken, "took back");
        Ok(taken)
    }

    /// Starts over from the standard position with a fresh greeting. The
    /// persona forgets which remarks it already made.
    pub fn restart(&mut self) {
        self.opponent.reset();
        self.position = Position::startpos();
        self.last_move = None;
        self.status = self.position.status();
        self.transcript.clear();
        self.chat(GREETING);
        info!(persona = self.opponent.persona().name(), "game restarted");
    }

    /// `Checkmate! <winner> wins!`, `Draw!`, `Check!` or empty.
    pub fn status_line(&self) -> String {
        match self.status {
            GameStatus::Checkmate { winner } => format!("Checkmate! {winner} wins!"),
            GameStatus::Draw(_) => "Draw!".to_string(),
            GameStatus::Ongoing if self.position.is_check() => "Check!".to_string(),
            GameStatus::Ongoing => String::new(),
        }
    }

    fn after_move(&mut self, mv: &CandidateMove) {
        self.last_move = Some((mv.from, mv.to));
        self.status = self.position.status();
    }

    fn announce_result(&mut self) {
        if let GameStatus::Checkmate { winner } = self.status {
            let remark = if winner == ENGINE_COLOR {
                ENGINE_WINS_REMARK
            } else {
                PLAYER_WINS_REMARK
            };
            self.chat(remark);
        }
        if self.is_over() {
            info!(
                persona = self.opponent.persona().name(),
                result = %self.status_line(),
                plies = self.position.ply_count(),
                "game over"
            );
        }
    }

    fn chat(&mut self, text: &str) {
        let line = format!("{}: {}", self.opponent.persona().display_name(), text);
        self.transcript.push(line);
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
