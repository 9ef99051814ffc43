//! Application state and input handling.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use match_point_tictactoe::{Direction, GameSession, MoveOutcome, Position};
use tracing::{debug, info, instrument};

use super::ui::BoardLayout;

/// What the event loop should do after handling an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Keep running.
    Continue,
    /// Leave the UI.
    Quit,
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    session: GameSession,
    cursor: Position,
    layout: BoardLayout,
}

impl App {
    /// Creates a new application for a match to `target_wins` round wins.
    #[instrument]
    pub fn new(target_wins: u32) -> Self {
        Self {
            session: GameSession::with_target_wins(target_wins),
            cursor: Position::Center,
            layout: BoardLayout::default(),
        }
    }

    /// Gets the match session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Gets the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Records where the cells were drawn, for mouse hit-testing.
    pub fn set_layout(&mut self, layout: BoardLayout) {
        self.layout = layout;
    }

    /// Handles a key press.
    #[instrument(skip(self, key), fields(code = ?key.code))]
    pub fn handle_key(&mut self, key: KeyEvent) -> AppAction {
        // Crossterm reports releases on some platforms; act on presses only.
        if key.kind == KeyEventKind::Release {
            return AppAction::Continue;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                info!("User quit");
                return AppAction::Quit;
            }
            KeyCode::Char(c @ '1'..='9') => {
                if let Some(pos) = c
                    .to_digit(10)
                    .and_then(|d| Position::from_index(d as usize - 1))
                {
                    self.cursor = pos;
                    self.click(pos);
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.click(self.cursor),
            KeyCode::Up => self.cursor = self.cursor.step(Direction::Up),
            KeyCode::Down => self.cursor = self.cursor.step(Direction::Down),
            KeyCode::Left => self.cursor = self.cursor.step(Direction::Left),
            KeyCode::Right => self.cursor = self.cursor.step(Direction::Right),
            KeyCode::Char('n') | KeyCode::Char('N') => self.session.restart_board(),
            KeyCode::Char('r') | KeyCode::Char('R') => self.session.reset_match(),
            _ => {}
        }
        AppAction::Continue
    }

    /// Handles a mouse event; a left click on a cell plays it.
    #[instrument(skip(self, mouse), fields(column = mouse.column, row = mouse.row))]
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> AppAction {
        if mouse.kind == MouseEventKind::Down(MouseButton::Left)
            && let Some(pos) = self.layout.cell_at(mouse.column, mouse.row)
        {
            self.cursor = pos;
            self.click(pos);
        }
        AppAction::Continue
    }

    fn click(&mut self, pos: Position) {
        match self.session.click(pos) {
            MoveOutcome::Placed {
                player,
                position,
                event,
            } => {
                debug!(%player, %position, "Move applied to UI state");
                if let Some(event) = event {
                    info!(%event, "Round finished");
                }
            }
            MoveOutcome::Ignored(reason) => debug!(%reason, "Click had no effect"),
        }
    }
}
