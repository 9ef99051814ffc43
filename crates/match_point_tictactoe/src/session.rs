//! Match session: the board, turn, score and champion of one match.
//!
//! The session owns only authoritative state. Winner, winning line and
//! status are derived from the board on every call and never stored, with
//! one exception: the last winner the round-completion reaction saw, which
//! is what makes the reaction fire once per round instead of once per call.

use crate::rules::{Win, WinLine, check_winner, is_full};
use crate::{Board, Player, Position, ScoreTally};
use derive_more::Display;
use tracing::{debug, info, instrument};

/// Round wins needed to become champion unless configured otherwise.
pub const DEFAULT_TARGET_WINS: u32 = 3;

/// Why a click left the session unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Ignored {
    /// The match already has a champion.
    #[display("{_0} is already champion")]
    ChampionDecided(Player),
    /// The current round already has a winner.
    #[display("round already won by {_0}")]
    RoundOver(Player),
    /// The target square holds a mark.
    #[display("{_0} is already occupied")]
    SquareOccupied(Position),
    /// The index does not name a square.
    #[display("no square at index {_0}")]
    OutOfBounds(usize),
}

/// Score change produced by the round-completion reaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum RoundEvent {
    /// A round was won; `wins` is the winner's new total.
    #[display("{winner} wins the round ({wins} total)")]
    RoundWon {
        /// Round winner.
        winner: Player,
        /// Rounds won so far in this match.
        wins: u32,
    },
    /// A round win took the player to the target and ended the match.
    #[display("{champion} is champion with {wins} wins")]
    ChampionCrowned {
        /// The new champion.
        champion: Player,
        /// Rounds won in this match.
        wins: u32,
    },
}

/// What a click did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// A mark was placed.
    Placed {
        /// Who placed it.
        player: Player,
        /// Where.
        position: Position,
        /// Score change caused by this move, if it won the round.
        event: Option<RoundEvent>,
    },
    /// Nothing changed.
    Ignored(Ignored),
}

/// Status line, derived in priority order champion > round winner > draw >
/// next turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Status {
    /// A player reached the target number of round wins.
    #[display("Champion: {_0}!")]
    Champion(Player),
    /// The current round has a winner.
    #[display("Round won by {_0}")]
    RoundWon(Player),
    /// The board is full with no winner.
    #[display("Draw!")]
    Draw,
    /// The round is in progress.
    #[display("Next: {_0}")]
    NextTurn(Player),
}

/// One match of first-to-N tic-tac-toe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    board: Board,
    to_move: Player,
    scores: ScoreTally,
    champion: Option<Player>,
    observed_winner: Option<Player>,
    target_wins: u32,
}

impl GameSession {
    /// Creates a session where the first to [`DEFAULT_TARGET_WINS`] rounds
    /// is champion.
    #[instrument]
    pub fn new() -> Self {
        Self::with_target_wins(DEFAULT_TARGET_WINS)
    }

    /// Creates a session with a custom number of round wins for champion.
    ///
    /// A target of zero is treated as one.
    #[instrument]
    pub fn with_target_wins(target_wins: u32) -> Self {
        Self {
            board: Board::new(),
            to_move: Player::X,
            scores: ScoreTally::new(),
            champion: None,
            observed_winner: None,
            target_wins: target_wins.max(1),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the match score.
    pub fn scores(&self) -> &ScoreTally {
        &self.scores
    }

    /// Returns the champion, once decided.
    pub fn champion(&self) -> Option<Player> {
        self.champion
    }

    /// Round wins needed to become champion.
    pub fn target_wins(&self) -> u32 {
        self.target_wins
    }

    /// Winner of the current round and their line, if any.
    pub fn round_win(&self) -> Option<Win> {
        check_winner(&self.board)
    }

    /// Winner of the current round, if any.
    pub fn winner(&self) -> Option<Player> {
        self.round_win().map(|win| win.winner)
    }

    /// Line to highlight, if the round is won.
    pub fn winning_line(&self) -> Option<WinLine> {
        self.round_win().map(|win| win.line)
    }

    /// Derives the status line from the current state.
    pub fn status(&self) -> Status {
        if let Some(champion) = self.champion {
            Status::Champion(champion)
        } else if let Some(winner) = self.winner() {
            Status::RoundWon(winner)
        } else if is_full(&self.board) {
            Status::Draw
        } else {
            Status::NextTurn(self.to_move)
        }
    }

    /// Handles a click on a square.
    ///
    /// Clicks after a champion is decided, after the round is won, or on an
    /// occupied square change nothing. Otherwise the current player's mark
    /// is placed, the turn passes, and the round-completion reaction runs.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn click(&mut self, position: Position) -> MoveOutcome {
        if let Some(champion) = self.champion {
            return self.ignore(Ignored::ChampionDecided(champion));
        }
        if let Some(winner) = self.winner() {
            return self.ignore(Ignored::RoundOver(winner));
        }
        if !self.board.is_empty(position) {
            return self.ignore(Ignored::SquareOccupied(position));
        }

        let player = self.to_move;
        self.board = self.board.with(position, player);
        self.to_move = player.opponent();
        debug!(%player, %position, "Mark placed");

        let event = self.react();
        MoveOutcome::Placed {
            player,
            position,
            event,
        }
    }

    /// Handles a click on a square given by raw index (0-8).
    #[instrument(skip(self))]
    pub fn click_index(&mut self, index: usize) -> MoveOutcome {
        match Position::try_from(index) {
            Ok(position) => self.click(position),
            Err(_) => self.ignore(Ignored::OutOfBounds(index)),
        }
    }

    /// Round-completion reaction.
    ///
    /// Scores the round when the derived winner changes to a player since
    /// the previous call, and crowns the champion when the target is reached.
    /// Calling it again without a new winner does nothing.
    #[instrument(skip(self))]
    pub fn react(&mut self) -> Option<RoundEvent> {
        let current = self.winner();
        let previous = std::mem::replace(&mut self.observed_winner, current);
        let winner = current.filter(|w| previous != Some(*w))?;
        if self.champion.is_some() {
            return None;
        }

        let wins = self.scores.record_win(winner);
        let event = if wins >= self.target_wins {
            self.champion = Some(winner);
            RoundEvent::ChampionCrowned {
                champion: winner,
                wins,
            }
        } else {
            RoundEvent::RoundWon { winner, wins }
        };
        info!(%event, scores = %self.scores, "Round completed");
        Some(event)
    }

    /// Starts the next round: empty board, X to move. Score and champion are
    /// kept.
    #[instrument(skip(self))]
    pub fn restart_board(&mut self) {
        self.board = Board::new();
        self.to_move = Player::X;
        self.observed_winner = None;
        debug!("Board restarted");
    }

    /// Starts a new match: everything [`restart_board`](Self::restart_board)
    /// does, plus zero scores and no champion.
    #[instrument(skip(self))]
    pub fn reset_match(&mut self) {
        self.restart_board();
        self.scores = ScoreTally::new();
        self.champion = None;
        info!("Match reset");
    }

    fn ignore(&self, reason: Ignored) -> MoveOutcome {
        debug!(%reason, "Click ignored");
        MoveOutcome::Ignored(reason)
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(session: &mut GameSession, moves: &[usize]) {
        for &idx in moves {
            session.click_index(idx);
        }
    }

    #[test]
    fn test_react_is_edge_triggered() {
        let mut session = GameSession::new();
        play(&mut session, &[0, 3, 1, 4, 2]);
        assert_eq!(session.scores().wins(Player::X), 1);

        // Re-running the reaction, as a renderer might, never scores twice.
        for _ in 0..5 {
            assert_eq!(session.react(), None);
        }
        assert_eq!(session.scores().wins(Player::X), 1);
    }

    #[test]
    fn test_winning_click_reports_event() {
        let mut session = GameSession::new();
        play(&mut session, &[0, 3, 1, 4]);
        let outcome = session.click(Position::TopRight);
        assert_eq!(
            outcome,
            MoveOutcome::Placed {
                player: Player::X,
                position: Position::TopRight,
                event: Some(RoundEvent::RoundWon {
                    winner: Player::X,
                    wins: 1
                }),
            }
        );
    }

    #[test]
    fn test_click_after_round_won_is_ignored() {
        let mut session = GameSession::new();
        play(&mut session, &[0, 3, 1, 4, 2]);
        let before = session.clone();
        assert_eq!(
            session.click(Position::BottomRight),
            MoveOutcome::Ignored(Ignored::RoundOver(Player::X))
        );
        assert_eq!(session, before);
    }

    #[test]
    fn test_out_of_bounds_index_is_ignored() {
        let mut session = GameSession::new();
        assert_eq!(
            session.click_index(9),
            MoveOutcome::Ignored(Ignored::OutOfBounds(9))
        );
        assert_eq!(session, GameSession::new());
    }

    #[test]
    fn test_target_of_one_crowns_first_winner() {
        let mut session = GameSession::with_target_wins(1);
        play(&mut session, &[3, 0, 4, 1, 8, 2]);
        assert_eq!(session.champion(), Some(Player::O));
        assert_eq!(session.status(), Status::Champion(Player::O));
    }

    #[test]
    fn test_zero_target_treated_as_one() {
        assert_eq!(GameSession::with_target_wins(0).target_wins(), 1);
    }

    #[test]
    fn test_status_progression() {
        let mut session = GameSession::new();
        assert_eq!(session.status(), Status::NextTurn(Player::X));
        session.click(Position::Center);
        assert_eq!(session.status(), Status::NextTurn(Player::O));
        assert_eq!(session.status().to_string(), "Next: O");
    }

    #[test]
    fn test_o_can_win_a_round() {
        let mut session = GameSession::new();
        play(&mut session, &[0, 3, 1, 4, 8, 5]);
        assert_eq!(session.winner(), Some(Player::O));
        assert_eq!(session.scores().wins(Player::O), 1);
        assert_eq!(session.scores().wins(Player::X), 0);
    }
}
