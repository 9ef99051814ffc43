//! Round-win tally for a match.

use crate::Player;
use serde::{Deserialize, Serialize};

/// Rounds won by each player in the current match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScoreTally {
    x: u32,
    o: u32,
}

impl ScoreTally {
    /// A tally with no rounds won.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rounds won by `player`.
    pub fn wins(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x,
            Player::O => self.o,
        }
    }

    /// Records one more round won by `player` and returns their new count.
    pub fn record_win(&mut self, player: Player) -> u32 {
        let slot = match player {
            Player::X => &mut self.x,
            Player::O => &mut self.o,
        };
        *slot = slot.saturating_add(1);
        *slot
    }
}

impl std::fmt::Display for ScoreTally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "X: {} | O: {}", self.x, self.o)
    }
}
