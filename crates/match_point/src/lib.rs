//! Match Point - terminal tic-tac-toe with match scoring.
//!
//! The game rules live in [`match_point_tictactoe`]. This crate adds the
//! command line, configuration, logging and the terminal UI.
//!
//! # Architecture
//!
//! - **CLI**: [`Cli`] parses flags and resolves a [`MatchConfig`]
//! - **Config**: TOML file plus command-line overrides
//! - **TUI**: [`App`] turns keys and mouse clicks into session actions,
//!   [`draw`] renders the board, status and score

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod tui;

pub use cli::{Cli, Command};
pub use config::{ConfigError, MatchConfig};
pub use tui::{App, AppAction, BoardLayout, draw, init_tracing, run_tui};
