//! Command-line interface for strictly_chess.

use clap::{Parser, Subcommand};

/// Strictly Chess - replay and inspect games with the rules engine
#[derive(Parser, Debug)]
#[command(name = "strictly_chess")]
#[command(about = "Chess rules engine driver", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play the moves of a replay script, printing the board after each
    Replay {
        /// Path to the TOML replay script
        #[arg(short, long)]
        script: std::path::PathBuf,
    },

    /// List legal moves for the piece on a square
    Legal {
        /// Row, 1 (White's back rank) to 8
        #[arg(long)]
        row: i32,

        /// Column, 1 (a-file) to 8
        #[arg(long)]
        col: i32,

        /// Replay script whose final position is used instead of the start
        #[arg(short, long)]
        script: Option<std::path::PathBuf>,
    },
}
