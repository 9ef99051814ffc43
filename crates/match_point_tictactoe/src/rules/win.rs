//! Win detection logic for tic-tac-toe.

use crate::{Board, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Three positions forming a row, column or diagonal.
pub type WinLine = [Position; 3];

/// Every winning line, in the order they are checked.
///
/// Rows first, then columns, then the two diagonals. When one move completes
/// two lines at once, the earlier line here is the one reported.
pub const LINES: [WinLine; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// A completed line and the player who owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Win {
    /// The player with three in a row.
    pub winner: Player,
    /// The line they completed.
    pub line: WinLine,
}

impl Win {
    /// Returns true if `pos` is part of the winning line.
    pub fn contains(&self, pos: Position) -> bool {
        self.line.contains(&pos)
    }
}

/// Checks if there is a winner on the board.
///
/// Returns the first line of [`LINES`] whose three squares hold the same
/// player, or `None` if no line is complete.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Win> {
    LINES.into_iter().find_map(|line| {
        let [a, b, c] = line;
        let winner = board.get(a).player()?;
        (board.get(b).player() == Some(winner) && board.get(c).player() == Some(winner))
            .then_some(Win { winner, line })
    })
}
