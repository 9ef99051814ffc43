//! Match scenarios played through the public session API.

use match_point_tictactoe::{
    Board, GameSession, Ignored, MoveOutcome, Player, Position, RoundEvent, ScoreTally, Status,
};

fn play(session: &mut GameSession, moves: &[usize]) {
    for &idx in moves {
        session.click_index(idx);
    }
}

const X_TOP_ROW: [usize; 5] = [0, 3, 1, 4, 2];

#[test]
fn test_top_row_win_scores_once() {
    let mut session = GameSession::new();
    play(&mut session, &X_TOP_ROW);

    assert_eq!(session.winner(), Some(Player::X));
    assert_eq!(
        session.winning_line(),
        Some([Position::TopLeft, Position::TopCenter, Position::TopRight])
    );
    assert_eq!(session.scores().wins(Player::X), 1);
    assert_eq!(session.scores().wins(Player::O), 0);
    assert_eq!(session.champion(), None);
    assert_eq!(session.status(), Status::RoundWon(Player::X));
}

#[test]
fn test_three_round_wins_crown_champion() {
    let mut session = GameSession::new();
    for round in 1..=3 {
        play(&mut session, &X_TOP_ROW);
        assert_eq!(session.scores().wins(Player::X), round);
        if round < 3 {
            assert_eq!(session.champion(), None);
            session.restart_board();
        }
    }

    assert_eq!(session.champion(), Some(Player::X));
    assert_eq!(session.status(), Status::Champion(Player::X));
    assert_eq!(session.status().to_string(), "Champion: X!");

    let before = session.clone();
    for idx in 0..9 {
        assert_eq!(
            session.click_index(idx),
            MoveOutcome::Ignored(Ignored::ChampionDecided(Player::X))
        );
    }
    assert_eq!(session, before);
}

#[test]
fn test_champion_blocks_moves_after_restart_board() {
    let mut session = GameSession::with_target_wins(1);
    play(&mut session, &X_TOP_ROW);
    session.restart_board();

    let before = session.clone();
    assert_eq!(
        session.click(Position::Center),
        MoveOutcome::Ignored(Ignored::ChampionDecided(Player::X))
    );
    assert_eq!(session, before);
    assert_eq!(*session.board(), Board::new());
    assert_eq!(session.champion(), Some(Player::X));
}

#[test]
fn test_crowning_move_reports_champion_event() {
    let mut session = GameSession::with_target_wins(2);
    play(&mut session, &X_TOP_ROW);
    session.restart_board();
    play(&mut session, &X_TOP_ROW[..4]);

    let outcome = session.click(Position::TopRight);
    let MoveOutcome::Placed { event, .. } = outcome else {
        panic!("winning move should be placed");
    };
    assert_eq!(
        event,
        Some(RoundEvent::ChampionCrowned {
            champion: Player::X,
            wins: 2
        })
    );
}

#[test]
fn test_draw_leaves_score_untouched() {
    let mut session = GameSession::new();
    // X:0,1,5,6,8  O:2,3,4,7 in alternating order.
    play(&mut session, &[0, 2, 1, 3, 5, 4, 6, 7, 8]);

    assert_eq!(session.board().occupied(), 9);
    assert_eq!(session.winner(), None);
    assert_eq!(session.winning_line(), None);
    assert_eq!(session.status(), Status::Draw);
    assert_eq!(session.status().to_string(), "Draw!");
    assert_eq!(*session.scores(), ScoreTally::new());
    assert_eq!(session.champion(), None);
}

#[test]
fn test_occupied_square_click_changes_nothing() {
    let mut session = GameSession::new();
    session.click(Position::Center);
    let before = session.clone();

    assert_eq!(
        session.click(Position::Center),
        MoveOutcome::Ignored(Ignored::SquareOccupied(Position::Center))
    );
    assert_eq!(session, before);
    assert_eq!(session.to_move(), Player::O);
}

#[test]
fn test_restart_board_keeps_score() {
    let mut session = GameSession::new();
    play(&mut session, &X_TOP_ROW);
    session.restart_board();

    assert_eq!(*session.board(), Board::new());
    assert_eq!(session.to_move(), Player::X);
    assert_eq!(session.scores().wins(Player::X), 1);
    assert_eq!(session.champion(), None);
    assert_eq!(session.status(), Status::NextTurn(Player::X));
}

#[test]
fn test_restart_board_mid_round_resets_turn() {
    let mut session = GameSession::new();
    session.click(Position::Center);
    session.restart_board();
    assert_eq!(session.to_move(), Player::X);
    assert_eq!(session.board().occupied(), 0);

    // Idempotent.
    let once = session.clone();
    session.restart_board();
    assert_eq!(session, once);
}

#[test]
fn test_reset_match_clears_everything() {
    let mut session = GameSession::new();
    for _ in 0..3 {
        play(&mut session, &X_TOP_ROW);
        session.restart_board();
    }
    play(&mut session, &[4]);
    session.reset_match();

    assert_eq!(*session.scores(), ScoreTally::new());
    assert_eq!(session.champion(), None);
    assert_eq!(*session.board(), Board::new());
    assert_eq!(session.to_move(), Player::X);
    assert_eq!(session, GameSession::new());

    session.reset_match();
    assert_eq!(session, GameSession::new());
}

#[test]
fn test_new_match_scores_again_after_reset() {
    let mut session = GameSession::new();
    play(&mut session, &X_TOP_ROW);
    session.reset_match();
    play(&mut session, &X_TOP_ROW);
    assert_eq!(session.scores().wins(Player::X), 1);
}

#[test]
fn test_turns_alternate_from_x() {
    let mut session = GameSession::new();
    let players: Vec<Player> = [4, 0, 8, 2]
        .iter()
        .filter_map(|&idx| match session.click_index(idx) {
            MoveOutcome::Placed { player, .. } => Some(player),
            MoveOutcome::Ignored(_) => None,
        })
        .collect();
    assert_eq!(players, vec![Player::X, Player::O, Player::X, Player::O]);
}
