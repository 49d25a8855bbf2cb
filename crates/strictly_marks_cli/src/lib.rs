//! Terminal front end for the strictly_marks rules engine.
//!
//! The binary wires a [`TerminalView`] to a [`strictly_marks::GameEngine`]
//! and drives it from command-line arguments or stdin.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod terminal;

pub use cli::{Cli, Command};
pub use config::{ConfigError, DisplaySettings, Settings};
pub use terminal::{ReplaySummary, TerminalView, play, replay};
