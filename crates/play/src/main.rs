//! Persona Chess CLI
//!
//! Play against one of the personas, list them, or measure how a persona
//! fares against the random mover.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use persona_chess::{calibrate, game, log_filter};
use persona_engine::{GameSession, PersonaCatalog, PersonaOpponent};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tournament::MatchConfig;
use tracing::info;

/// Chess against opponents with a personality
#[derive(Parser, Debug)]
#[command(name = "persona_chess")]
#[command(about = "Play chess against a chatty persona, or calibrate one")]
struct Args {
    /// Persona catalog to use instead of the built-in one (TOML)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the available personas
    Personas,

    /// Play a game as White against a persona
    Play {
        /// Persona name or display name
        #[arg(long, short = 'p')]
        persona: String,

        /// Random seed for a reproducible opponent
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Play a persona against the random mover
    Match {
        /// Persona name or display name
        #[arg(long, short = 'p')]
        persona: String,

        /// Number of games (overrides the config file)
        #[arg(long, short = 'g')]
        games: Option<u32>,

        /// Ply limit per game (overrides the config file)
        #[arg(long)]
        max_moves: Option<u32>,

        /// Random seed for deterministic runs
        #[arg(long)]
        seed: Option<u64>,

        /// Match settings (TOML)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Print results as JSON instead of a text report
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let catalog = match &args.catalog {
        Some(path) => PersonaCatalog::load(path)
            .with_context(|| format!("loading persona catalog {}", path.display()))?,
        None => PersonaCatalog::builtin().context("loading built-in personas")?,
    };

    match args.command {
        Command::Personas => {
            println!("{:<12} {:<20} {:>5}  {}", "Name", "Display name", "Level", "Description");
            println!("{}", "-".repeat(72));
            for p in catalog.list() {
                println!(
                    "{:<12} {:<20} {:>5}  {}",
                    p.name(),
                    p.display_name(),
                    p.difficulty(),
                    p.description()
                );
            }
        }

        Command::Play { persona, seed } => {
            let persona = catalog.by_name(&persona)?;
            let seed = seed.unwrap_or_else(rand::random);
            info!(persona = persona.name(), seed, "starting game");

            let opponent = PersonaOpponent::with_rng(persona, StdRng::seed_from_u64(seed));
            let mut session = GameSession::new(opponent);
            let stdin = io::stdin();
            game::run(&mut session, stdin.lock(), &mut io::stdout())?;
        }

        Command::Match {
            persona,
            games,
            max_moves,
            seed,
            config,
            json,
        } => {
            let persona = catalog.by_name(&persona)?;
            let mut match_config = match &config {
                Some(path) => MatchConfig::load(path)
                    .with_context(|| format!("loading match config {}", path.display()))?,
                None => MatchConfig::default(),
            };
            if let Some(n) = games {
                match_config.num_games = n;
            }
            if let Some(n) = max_moves {
                match_config.max_moves = n;
            }
            let seed = seed.unwrap_or_else(rand::random);

            let results = calibrate::run(persona, match_config, seed);
            if json {
                println!("{}", results.to_json()?);
            } else {
                println!("{}", results.generate_report());
            }
        }
    }

    Ok(())
}
