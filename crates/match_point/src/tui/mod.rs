//! Terminal UI for a match.

mod app;
mod ui;

pub use app::{App, AppAction};
pub use ui::{BoardLayout, draw};

use anyhow::{Context, Result};
use crossterm::{
    cursor,
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Duration;
use tracing::{error, info, instrument};

use crate::config::MatchConfig;

/// Installs a tracing subscriber writing to the configured log file.
///
/// The terminal UI owns stdout, so logs go to a file without ANSI colours.
/// `RUST_LOG` takes precedence over the configured filter.
pub fn init_tracing(config: &MatchConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file()).with_context(|| {
        format!("Failed to create log file {}", config.log_file().display())
    })?;
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
        .context("Failed to install tracing subscriber")
}

/// Puts the terminal back the way it was found when dropped.
///
/// Created right after raw mode is enabled, so every later failure or panic
/// still leaves the alternate screen and disables raw mode.
struct TerminalGuard {
    restored: bool,
}

impl TerminalGuard {
    /// Enables raw mode, the alternate screen and mouse capture.
    fn enter() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let guard = Self { restored: false };
        execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)
            .context("Failed to enter alternate screen")?;
        Ok(guard)
    }

    /// Runs every restore step, even after one fails, and reports the first
    /// failure.
    fn restore(&mut self) -> io::Result<()> {
        if self.restored {
            return Ok(());
        }
        self.restored = true;
        first_error([
            disable_raw_mode(),
            execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture),
            execute!(io::stdout(), cursor::Show),
        ])
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(err) = self.restore() {
            error!(error = %err, "Failed to restore terminal");
        }
    }
}

fn first_error<const N: usize>(steps: [io::Result<()>; N]) -> io::Result<()> {
    steps.into_iter().find(Result::is_err).unwrap_or(Ok(()))
}

/// Combines the game loop result with the restore result; a loop error wins.
fn finish(res: Result<()>, restored: io::Result<()>) -> Result<()> {
    match (res, restored) {
        (Err(err), restored) => {
            error!(error = ?err, "Game loop error");
            if let Err(restore_err) = restored {
                error!(error = %restore_err, "Failed to restore terminal");
            }
            Err(err)
        }
        (Ok(()), restored) => restored.context("Failed to restore terminal"),
    }
}

/// Runs the terminal UI until the player quits.
#[instrument(skip(config), fields(target_wins = *config.target_wins()))]
pub fn run_tui(config: &MatchConfig) -> Result<()> {
    info!("Starting Match Point TUI");

    let mut guard = TerminalGuard::enter()?;
    let res = Terminal::new(CrosstermBackend::new(io::stdout()))
        .context("Failed to create terminal")
        .and_then(|mut terminal| run_app(&mut terminal, App::new(*config.target_wins())));
    let restored = guard.restore();

    finish(res, restored)
}

/// Draw, then handle one input to completion, until the player quits.
fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, mut app: App) -> Result<()> {
    loop {
        let mut layout = None;
        terminal.draw(|f| layout = Some(ui::draw(f, &app)))?;
        if let Some(layout) = layout {
            app.set_layout(layout);
        }

        if event::poll(Duration::from_millis(100))? {
            let action = match event::read()? {
                Event::Key(key) => app.handle_key(key),
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                _ => AppAction::Continue,
            };
            if action == AppAction::Quit {
                return Ok(());
            }
        }
    }
}
