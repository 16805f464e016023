//! Interactive game loop on any line-based input and output.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use persona_engine::{EngineError, GameSession};
use rand::Rng;
use tracing::debug;

use crate::board;

const HELP: &str = "\
Enter moves in SAN (e4, Nf3, O-O, exd5, e8=Q) or coordinates (e2e4).
Commands: moves, fen, board, undo, new, help, quit";

/// Runs the game loop until the player quits or input runs out. A finished
/// game stays open for `undo` and `new`.
pub fn run<R: Rng, I: BufRead, O: Write>(
    session: &mut GameSession<R>,
    input: I,
    out: &mut O,
) -> Result<()> {
    let mut lines = input.lines();
    let mut shown = 0;

    writeln!(out, "{HELP}\n")?;
    show(session, out, &mut shown)?;

    loop {
        if !session.is_over() && !session.is_players_turn() {
            session.engine_move().context("persona failed to move")?;
            show(session, out, &mut shown)?;
            continue;
        }

        write!(out, "> ")?;
        out.flush()?;
        let Some(line) = lines.next() else {
            debug!("input closed");
            return Ok(());
        };
        let line = line.context("failed to read input")?;

        match line.trim() {
            "" => {}
            "quit" | "exit" | "resign" => {
                writeln!(out, "Bye!")?;
                return Ok(());
            }
            "help" => writeln!(out, "{HELP}")?,
            "undo" => match session.undo() {
                Ok(taken) => {
                    writeln!(out, "Took back {}", taken.join(", "))?;
                    show(session, out, &mut shown)?;
                }
                Err(e @ EngineError::NothingToUndo) => writeln!(out, "{e}")?,
                Err(e) => return Err(e.into()),
            },
            "new" => {
                session.restart();
                shown = 0;
                show(session, out, &mut shown)?;
            }
            "fen" => writeln!(out, "{}", session.position().fen())?,
            "board" => write!(
                out,
                "{}",
                board::render(session.position(), session.last_move())
            )?,
            "moves" => {
                let sans: Vec<String> = session
                    .position()
                    .legal_moves()
                    .into_iter()
                    .map(|m| m.san)
                    .collect();
                writeln!(out, "{}", sans.join(" "))?;
            }
            notation => match session.player_move(notation) {
                Ok(_) => show(session, out, &mut shown)?,
                Err(e @ (EngineError::Rules(_) | EngineError::GameOver)) => writeln!(out, "{e}")?,
                Err(e) => return Err(e.into()),
            },
        }
    }
}

/// Prints the board, chat lines not shown yet and the status line.
fn show<R: Rng, O: Write>(
    session: &GameSession<R>,
    out: &mut O,
    shown: &mut usize,
) -> Result<()> {
    if let Some(last) = session.last_move() {
        let san = session.position().history().last().cloned().unwrap_or_default();
        writeln!(out, "\n{} ({})", san, board::describe_move(last))?;
    }
    write!(
        out,
        "{}",
        board::render(session.position(), session.last_move())
    )?;

    for line in &session.transcript()[*shown..] {
        writeln!(out, "{line}")?;
    }
    *shown = session.transcript().len();

    let status = session.status_line();
    if !status.is_empty() {
        writeln!(out, "{status}")?;
    }
    if session.is_over() {
        writeln!(out, "Game over. Type undo, new or quit.")?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
