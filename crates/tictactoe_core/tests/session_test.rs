//! Tests for the session lifecycle, outcome evaluation and scoring.

use tictactoe_core::{Board, GameSession, Line, Outcome, Phase, Player, Position, evaluate};

/// X wins along the top row.
const TOP_ROW_WIN: [(usize, usize); 5] = [(0, 0), (1, 1), (0, 1), (1, 0), (0, 2)];

/// Nine moves, no completed line: X X O / O O X / X O X.
const DRAW: [(usize, usize); 9] = [
    (0, 0),
    (1, 1),
    (2, 2),
    (0, 2),
    (2, 0),
    (1, 0),
    (1, 2),
    (2, 1),
    (0, 1),
];

fn play(session: &mut GameSession, moves: &[(usize, usize)]) -> Vec<Option<Outcome>> {
    moves
        .iter()
        .map(|&(row, col)| session.attempt_move(row, col, &mut ()))
        .collect()
}

#[test]
fn test_every_line_wins_for_either_player() {
    for player in Player::BOTH {
        for line in Line::ALL {
            let mut board = Board::new();
            for pos in line.cells() {
                board.place(pos, player);
            }
            assert_eq!(evaluate(&board), Outcome::Win { player, line }, "{line} for {player}");
        }
    }
}

#[test]
fn test_winning_cells_are_reported_exactly() {
    assert_eq!(
        Line::AntiDiagonal.cells(),
        [Position::TopRight, Position::Center, Position::BottomLeft]
    );
    let coords: Vec<_> = Line::TopRow.cells().iter().map(|p| p.coords()).collect();
    assert_eq!(coords, vec![(0, 0), (0, 1), (0, 2)]);
}

#[test]
fn test_top_row_scenario() {
    let mut session = GameSession::new();
    session.start();

    let outcomes = play(&mut session, &TOP_ROW_WIN);

    assert!(outcomes[..4].iter().all(|o| *o == Some(Outcome::Ongoing)));
    assert_eq!(
        outcomes[4],
        Some(Outcome::Win {
            player: Player::X,
            line: Line::TopRow
        })
    );
    assert_eq!(session.score().wins(Player::X), 1);
    assert_eq!(session.score().wins(Player::O), 0);
    assert_eq!(session.phase(), Phase::NotStarted);
    assert_eq!(session.board(), &Board::new());
    assert_eq!(session.to_move(), Player::X);
}

#[test]
fn test_draw_scenario() {
    let mut session = GameSession::new();
    session.start();

    let outcomes = play(&mut session, &DRAW);

    assert!(outcomes[..8].iter().all(|o| *o == Some(Outcome::Ongoing)));
    assert_eq!(outcomes[8], Some(Outcome::Draw));
    assert_eq!(session.score().wins(Player::X), 0);
    assert_eq!(session.score().wins(Player::O), 0);
    assert_eq!(session.phase(), Phase::NotStarted);
    assert_eq!(session.board(), &Board::new());
}

#[test]
fn test_move_before_start_is_ignored() {
    let mut session = GameSession::new();

    assert_eq!(session.attempt_move(1, 1, &mut ()), None);
    assert_eq!(session.board(), &Board::new());
    assert_eq!(session.to_move(), Player::X);
    assert_eq!(session.phase(), Phase::NotStarted);
}

#[test]
fn test_move_after_reset_is_ignored() {
    let mut session = GameSession::new();
    session.start();
    session.reset();

    assert_eq!(session.attempt_move(0, 0, &mut ()), None);
    assert_eq!(session.board(), &Board::new());
}

#[test]
fn test_occupied_square_changes_nothing() {
    let mut session = GameSession::new();
    session.start();
    session.attempt_move(1, 1, &mut ());

    let board_before = session.board().clone();
    let turn_before = session.to_move();

    assert_eq!(session.attempt_move(1, 1, &mut ()), None);
    assert_eq!(session.board(), &board_before);
    assert_eq!(session.to_move(), turn_before);
    assert!(session.is_active());
}

#[test]
fn test_out_of_range_coordinates_are_ignored() {
    let mut session = GameSession::new();
    session.start();

    assert_eq!(session.attempt_move(3, 0, &mut ()), None);
    assert_eq!(session.attempt_move(0, 3, &mut ()), None);
    assert_eq!(session.attempt_move(usize::MAX, 1, &mut ()), None);
    assert_eq!(session.board(), &Board::new());
    assert_eq!(session.to_move(), Player::X);
}

#[test]
fn test_turns_alternate_and_restart_with_x() {
    let mut session = GameSession::new();
    session.start();

    let mut expected = Player::X;
    for &(row, col) in &DRAW[..8] {
        assert_eq!(session.to_move(), expected);
        session.attempt_move(row, col, &mut ());
        expected = expected.opponent();
    }
    assert_eq!(session.to_move(), Player::X);

    session.start();
    session.attempt_move(2, 1, &mut ());
    assert_eq!(session.to_move(), Player::O);
    session.start();
    assert_eq!(session.to_move(), Player::X);

    session.attempt_move(2, 1, &mut ());
    session.reset();
    assert_eq!(session.to_move(), Player::X);
}

#[test]
fn test_start_mid_round_clears_board() {
    let mut session = GameSession::new();
    session.start();
    play(&mut session, &[(0, 0), (1, 1)]);

    session.start();

    assert!(session.is_active());
    assert_eq!(session.board(), &Board::new());
}

#[test]
fn test_score_survives_rounds_resets_and_draws() {
    let mut session = GameSession::new();

    session.start();
    play(&mut session, &TOP_ROW_WIN);
    session.start();
    play(&mut session, &DRAW);
    session.reset();
    session.start();
    play(&mut session, &TOP_ROW_WIN);

    assert_eq!(session.score().wins(Player::X), 2);
    assert_eq!(session.score().wins(Player::O), 0);
}

#[test]
fn test_o_can_win() {
    let mut session = GameSession::new();
    session.start();

    // O takes the right column while X scatters.
    let outcomes = play(&mut session, &[(0, 0), (0, 2), (1, 0), (1, 2), (2, 1), (2, 2)]);

    assert_eq!(
        outcomes.last().copied().flatten(),
        Some(Outcome::Win {
            player: Player::O,
            line: Line::RightColumn
        })
    );
    assert_eq!(session.score().wins(Player::O), 1);
}

#[test]
fn test_session_ignores_moves_after_terminal_outcome() {
    let mut session = GameSession::new();
    session.start();
    play(&mut session, &TOP_ROW_WIN);

    assert_eq!(session.attempt_move(2, 2, &mut ()), None);
    assert_eq!(session.score().wins(Player::X), 1);
}
