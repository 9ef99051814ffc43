//! Command-line interface for match_point.

use crate::config::{ConfigError, MatchConfig};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::instrument;

/// Match Point - tic-tac-toe where the first to three round wins is champion
#[derive(Parser, Debug)]
#[command(name = "match_point")]
#[command(about = "Terminal tic-tac-toe with first-to-three match scoring", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults are used if it doesn't exist)
    #[arg(short, long, default_value = "match_point.toml", global = true)]
    pub config: PathBuf,

    /// Round wins needed to become champion
    #[arg(long, global = true)]
    pub target_wins: Option<u32>,

    /// File to write logs to
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Command {
    /// Play a match in the terminal UI
    #[default]
    Play,

    /// Print the effective configuration as TOML
    Config,
}

impl Cli {
    /// Loads the config file and applies the command-line overrides.
    #[instrument(skip(self), fields(config_path = %self.config.display()))]
    pub fn resolve_config(&self) -> Result<MatchConfig, ConfigError> {
        MatchConfig::load(&self.config)?
            .with_overrides(self.target_wins, self.log_file.clone())
    }
}
