//! Command-line interface for strictly_marks.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Marks - play a 3x3 marking game in the terminal
#[derive(Parser, Debug)]
#[command(name = "strictly_marks")]
#[command(about = "Terminal front end for the strictly_marks rules engine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML settings file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Apply a fixed list of moves and print every notification
    Replay {
        /// Moves as `row,col` pairs or board indices (0-8)
        #[arg(required = true)]
        moves: Vec<String>,

        /// Abort on the first rejected move instead of skipping it
        #[arg(long)]
        strict: bool,
    },

    /// Play interactively, reading `row col` lines from stdin
    Play,
}
