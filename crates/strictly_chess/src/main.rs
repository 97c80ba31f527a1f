//! Strictly Chess - CLI driver
//!
//! Replays scripted games and lists legal moves using the rules engine.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::path::{Path, PathBuf};
use strictly_chess::{Coordinate, Game, ReplayScript};
use tracing::{info, instrument, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Replay { script } => run_replay(&script),
        Command::Legal { row, col, script } => run_legal(row, col, script),
    }
}

/// Plays every scripted move, printing the position after each.
#[instrument(fields(script = %path.display()))]
fn run_replay(path: &Path) -> Result<()> {
    let script = ReplayScript::from_file(path)?;
    let mut game = script.build_game();

    println!("{}\n", game.board());
    for (ply, mv) in script.moves().iter().enumerate() {
        let mover = game.team_turn();
        game.make_move(*mv)
            .with_context(|| format!("Move {} ({mover}) rejected", ply + 1))?;
        let snapshot = game.snapshot();
        info!(ply = ply + 1, %mv, "Move played");
        println!("{}. {mover}: {mv}", ply + 1);
        println!("{}", snapshot.board);
        println!("{}\n", snapshot.status_string());
    }
    Ok(())
}

/// Prints the legal moves of the piece on (row, col).
#[instrument]
fn run_legal(row: i32, col: i32, script: Option<PathBuf>) -> Result<()> {
    let mut game = match script {
        Some(path) => replayed(&path)?,
        None => Game::new(),
    };

    let coord = Coordinate::new(row, col);
    if !coord.is_valid() {
        warn!(row, col, "Square is off the board");
    }

    match game.legal_moves(coord) {
        None => println!("No piece at {coord}"),
        Some(moves) if moves.is_empty() => println!("No legal moves from {coord}"),
        Some(moves) => {
            for mv in moves {
                println!("{mv}");
            }
        }
    }
    Ok(())
}

/// Builds the script's game and plays all its moves.
fn replayed(path: &Path) -> Result<Game> {
    let script = ReplayScript::from_file(path)?;
    let mut game = script.build_game();
    for mv in script.moves() {
        game.make_move(*mv)
            .with_context(|| format!("Scripted move {mv} rejected"))?;
    }
    Ok(game)
}
