//! Stateless UI rendering for a match.

use match_point_tictactoe::{GameSession, Player, Position, Square, Status};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use super::app::App;

const CELL_WIDTH: u16 = 9;
const CELL_HEIGHT: u16 = 3;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;
const HELP: &str = "1-9 / arrows+Enter / click: Move | N: Next round | R: Reset match | Q: Quit";

/// Screen areas of the nine cells from the last render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoardLayout {
    cells: [Rect; 9],
}

impl BoardLayout {
    /// Builds a layout from cell areas in row-major order.
    pub fn from_cells(cells: [Rect; 9]) -> Self {
        Self { cells }
    }

    /// Returns the cell under a terminal coordinate, if any.
    pub fn cell_at(&self, column: u16, row: u16) -> Option<Position> {
        self.cells
            .iter()
            .position(|r| {
                column >= r.x && column < r.x + r.width && row >= r.y && row < r.y + r.height
            })
            .and_then(Position::from_index)
    }

    /// Returns the area of a cell.
    pub fn cell(&self, pos: Position) -> Rect {
        self.cells[pos.to_index()]
    }
}

/// Draws the whole screen and returns where the cells ended up.
pub fn draw(frame: &mut Frame, app: &App) -> BoardLayout {
    let session = app.session();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(3), // Status
            Constraint::Length(3), // Score
            Constraint::Min(BOARD_HEIGHT), // Board
            Constraint::Length(3), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Match Point - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    let status = session.status();
    let status_widget = Paragraph::new(status.to_string())
        .style(status_style(status))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status_widget, chunks[1]);

    draw_score(frame, chunks[2], session);

    let layout = draw_board(frame, chunks[3], session, app.cursor());

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, chunks[4]);

    layout
}

fn status_style(status: Status) -> Style {
    match status {
        Status::Champion(_) => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        Status::RoundWon(_) => Style::default().fg(Color::Green),
        Status::Draw => Style::default().fg(Color::Magenta),
        Status::NextTurn(_) => Style::default().fg(Color::Yellow),
    }
}

fn draw_score(frame: &mut Frame, area: Rect, session: &GameSession) {
    let scores = session.scores();
    let text = format!(
        "X: {}    O: {}    (first to {})",
        scores.wins(Player::X),
        scores.wins(Player::O),
        session.target_wins()
    );
    let score = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Score"));
    frame.render_widget(score, area);
}

fn draw_board(
    frame: &mut Frame,
    area: Rect,
    session: &GameSession,
    cursor: Position,
) -> BoardLayout {
    let board_area = center_rect(area, BOARD_WIDTH, BOARD_HEIGHT);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
        ])
        .split(board_area);

    let win = session.round_win();
    let mut cells = [Rect::default(); 9];
    for row in 0..3 {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(CELL_WIDTH),
                Constraint::Length(1),
                Constraint::Length(CELL_WIDTH),
                Constraint::Length(1),
                Constraint::Length(CELL_WIDTH),
            ])
            .split(rows[row * 2]);

        for col in 0..3 {
            let Some(pos) = Position::from_row_col(row, col) else {
                continue;
            };
            let area = cols[col * 2];
            cells[pos.to_index()] = area;
            let highlighted = win.is_some_and(|win| win.contains(pos));
            draw_cell(frame, area, session.board().get(pos), pos == cursor, highlighted);
            if col < 2 {
                draw_separator_vertical(frame, cols[col * 2 + 1]);
            }
        }
        if row < 2 {
            draw_separator(frame, rows[row * 2 + 1]);
        }
    }
    BoardLayout::from_cells(cells)
}

fn draw_cell(frame: &mut Frame, area: Rect, square: Square, is_cursor: bool, highlighted: bool) {
    let (symbol, base_style) = match square {
        Square::Empty => (" ", Style::default().fg(Color::DarkGray)),
        Square::Occupied(Player::X) => (
            "X",
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            "O",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let style = if highlighted {
        base_style.bg(Color::LightYellow)
    } else {
        base_style
    };
    let style = if is_cursor {
        style.add_modifier(Modifier::REVERSED)
    } else {
        style
    };

    let lines = vec![Line::from(""), Line::from(symbol), Line::from("")];
    let paragraph = Paragraph::new(lines).style(style).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"); area.height as usize])
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
