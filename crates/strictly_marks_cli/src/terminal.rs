//! Terminal presentation layer.
//!
//! [`TerminalView`] subscribes to engine notifications and prints them;
//! [`replay`] and [`play`] translate text into engine calls. Neither touches
//! engine state except through `apply_at` and `reset`.

use crate::config::DisplaySettings;
use anyhow::{Result, bail};
use std::io::{BufRead, Write};
use strictly_marks::{GameEngine, GameObserver, GameResult, GameState, MoveOutcome, Position};
use tracing::{debug, instrument, warn};

/// Observer that writes notifications as text.
pub struct TerminalView<W> {
    display: DisplaySettings,
    out: W,
}

impl<W: Write + Send> TerminalView<W> {
    /// Creates a view writing to `out`.
    pub fn new(display: DisplaySettings, out: W) -> Self {
        Self { display, out }
    }

    fn write_line(&mut self, line: &str) {
        if let Err(e) = writeln!(self.out, "{}", line) {
            warn!(error = %e, "Failed to write to terminal");
        }
    }
}

impl<W: Write + Send> GameObserver for TerminalView<W> {
    fn on_move_made(&mut self, state: &GameState, position: Position) {
        let line = format!(
            "{} marked {} ({})",
            self.display.symbol(state.board().get(position)),
            position,
            position.label()
        );
        self.write_line(&line);
        if *self.display.show_board() {
            let board = self.display.render(state.board());
            self.write_line(&board);
        }
    }

    fn on_game_ended(&mut self, _state: &GameState, result: &GameResult) {
        let line = match result.win_info() {
            Some(win) => format!("{} wins on the {}", self.display.symbol(result.winner()), win),
            None => "Draw".to_string(),
        };
        self.write_line(&line);
    }

    fn on_game_restarted(&mut self, state: &GameState) {
        let line = format!("New game, {} to move", self.display.symbol(state.current_turn()));
        self.write_line(&line);
    }
}

/// Tally of a replay run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    /// Moves the engine accepted.
    pub applied: usize,
    /// Inputs that were skipped, with the reason.
    pub rejected: Vec<String>,
    /// Final result if the game ended.
    pub result: Option<GameResult>,
}

/// Applies `moves` in order.
///
/// Unparseable or illegal moves are skipped and recorded, unless `strict`
/// is set, in which case the first one aborts the replay.
#[instrument(skip(engine, moves), fields(count = moves.len()))]
pub fn replay(engine: &mut GameEngine, moves: &[String], strict: bool) -> Result<ReplaySummary> {
    let mut summary = ReplaySummary::default();

    for input in moves {
        let attempt = match Position::parse(input) {
            Some(pos) => engine.apply_at(pos).map_err(|e| e.to_string()),
            None => Err(format!("'{}' is not a cell", input)),
        };

        match attempt {
            Ok(outcome) => {
                summary.applied += 1;
                if let MoveOutcome::Ended(result) = outcome {
                    summary.result = Some(result);
                }
            }
            Err(reason) if strict => bail!("Move '{}' rejected: {}", input, reason),
            Err(reason) => {
                debug!(%input, %reason, "Skipping move");
                summary.rejected.push(format!("{}: {}", input, reason));
            }
        }
    }

    Ok(summary)
}

/// Reads commands from `input` until `quit` or end of input.
///
/// Each line is a cell (`row col`, `row,col` or an index 0-8), `reset`,
/// `board` or `quit`. Prompts and rejections go to `out`, drawn with
/// `display`; notifications go wherever the engine's observers write.
#[instrument(skip_all)]
pub fn play<R: BufRead, W: Write>(
    engine: &mut GameEngine,
    display: &DisplaySettings,
    input: R,
    mut out: W,
) -> Result<()> {
    writeln!(out, "{} to move", display.symbol(engine.current_turn()))?;

    for line in input.lines() {
        let line = line?;
        let command = line.trim();

        match command {
            "" => continue,
            "quit" | "q" => break,
            "reset" => engine.reset(),
            "board" => writeln!(out, "{}", display.render(&engine.board()))?,
            cell => match Position::parse(cell) {
                Some(pos) => match engine.apply_at(pos) {
                    Ok(MoveOutcome::Continued { next }) => {
                        writeln!(out, "{} to move", display.symbol(next))?
                    }
                    Ok(MoveOutcome::Ended(_)) => {
                        writeln!(out, "Type 'reset' to play again or 'quit' to leave")?
                    }
                    Err(e) => writeln!(out, "{}", e)?,
                },
                None => writeln!(out, "Unknown command '{}'", cell)?,
            },
        }
    }

    Ok(())
}
