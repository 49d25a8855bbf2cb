//! Strictly Marks - terminal front end.

use anyhow::Result;
use clap::Parser;
use strictly_marks::GameEngine;
use strictly_marks_cli::{Cli, Command, DisplaySettings, Settings, TerminalView, play, replay};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = Settings::load(cli.config.as_deref())?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(settings.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut engine = GameEngine::new();
    engine.attach(TerminalView::new(
        settings.display().clone(),
        std::io::stdout(),
    ));

    match cli.command {
        Command::Replay { moves, strict } => run_replay(&mut engine, &moves, strict),
        Command::Play => run_play(&mut engine, settings.display()),
    }
}

/// Replays moves from the command line.
#[instrument(skip(engine, moves))]
fn run_replay(engine: &mut GameEngine, moves: &[String], strict: bool) -> Result<()> {
    let summary = replay(engine, moves, strict)?;
    for rejected in &summary.rejected {
        println!("Skipped {}", rejected);
    }
    if summary.result.is_none() {
        println!("Game in progress after {} moves", summary.applied);
    }
    info!(applied = summary.applied, rejected = summary.rejected.len(), "Replay finished");
    Ok(())
}

/// Plays interactively on stdin/stdout.
#[instrument(skip_all)]
fn run_play(engine: &mut GameEngine, display: &DisplaySettings) -> Result<()> {
    info!("Starting interactive game");
    let stdin = std::io::stdin();
    play(engine, display, stdin.lock(), std::io::stdout())
}
