//! Pure tic-tac-toe game logic with match scoring.
//!
//! A match is a sequence of rounds. Each round is played on a fresh board,
//! and the first player to win the target number of rounds (3 by default)
//! becomes champion.
//!
//! # Architecture
//!
//! - **Types**: [`Player`], [`Square`], [`Board`] and [`Position`]
//! - **Rules**: pure win and draw detection over a board
//! - **Score**: per-player round wins in a [`ScoreTally`]
//! - **Session**: [`GameSession`], the move handler, round-completion
//!   reaction and reset actions
//!
//! # Example
//!
//! ```
//! use match_point_tictactoe::{GameSession, Player, Status};
//!
//! let mut session = GameSession::new();
//! for pos in [0, 3, 1, 4, 2] {
//!     session.click_index(pos);
//! }
//! assert_eq!(session.status(), Status::RoundWon(Player::X));
//! assert_eq!(session.scores().wins(Player::X), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod position;
pub mod rules;
mod score;
mod session;
mod types;

pub use position::{Direction, Position, PositionError};
pub use rules::{Win, WinLine, check_winner, is_draw, is_full};
pub use score::ScoreTally;
pub use session::{
    DEFAULT_TARGET_WINS, GameSession, Ignored, MoveOutcome, RoundEvent, Status,
};
pub use types::{Board, Player, Square};
