//! Match Point - unified CLI.

use anyhow::Result;
use clap::Parser;
use match_point::{Cli, Command, init_tracing, run_tui};

fn main() -> Result<()> {
    // Load .env file so RUST_LOG can live there
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = cli.resolve_config()?;

    match cli.command.unwrap_or_default() {
        Command::Play => {
            init_tracing(&config)?;
            run_tui(&config)
        }
        Command::Config => {
            print!("{}", config.to_toml()?);
            Ok(())
        }
    }
}
