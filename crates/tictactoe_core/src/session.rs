//! Round lifecycle: turns, outcome handling and score keeping.
//!
//! A [`GameSession`] is owned by whoever drives the UI and is mutated
//! only through its methods. Moves enter through a single
//! [`GameSession::attempt_move`] entry point keyed by grid coordinates.

use super::rules::{Outcome, evaluate};
use super::{Board, Line, Player, Position, Scoreboard};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Whether a round is being played.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for a start command. Moves are ignored.
    #[default]
    #[display("Not started")]
    NotStarted,
    /// Round in progress. Moves are accepted.
    #[display("Active")]
    Active,
}

/// Receives the side effects of accepted moves.
///
/// Every method has a no-op default so listeners implement only what
/// they care about.
pub trait SessionListener {
    /// A mark was placed. Called once per accepted move, before the
    /// board is evaluated.
    fn move_made(&mut self, _player: Player, _position: Position) {}

    /// `player` completed `line`. `board` is the final board of the
    /// round; the session resets right after this call.
    fn game_won(&mut self, _player: Player, _line: Line, _board: &Board) {}

    /// The board filled up without a winner. The session resets right
    /// after this call.
    fn game_drawn(&mut self, _board: &Board) {}
}

impl SessionListener for () {}

/// A single game session with its running score.
#[derive(Debug, Clone, Default)]
pub struct GameSession {
    board: Board,
    to_move: Player,
    phase: Phase,
    score: Scoreboard,
}

impl GameSession {
    /// Creates a session that has not started yet, with no score.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose turn it is.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns true while a round is in progress.
    pub fn is_active(&self) -> bool {
        self.phase == Phase::Active
    }

    /// Returns the running score.
    pub fn score(&self) -> &Scoreboard {
        &self.score
    }

    /// Starts a fresh round with X to move. Allowed from any phase.
    #[instrument(skip(self))]
    pub fn start(&mut self) {
        self.clear();
        self.phase = Phase::Active;
        info!("Round started");
    }

    /// Clears the board and returns to [`Phase::NotStarted`].
    ///
    /// The score is kept.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.clear();
        self.phase = Phase::NotStarted;
        debug!("Session reset");
    }

    /// Tries to place the current player's mark at `(row, col)`.
    ///
    /// Returns `None` without touching anything when no round is active,
    /// the coordinates are off the board, or the square is taken.
    /// Otherwise reports the move to `listener`, evaluates the board and
    /// returns the outcome. A win credits the winner; after a win or a
    /// draw the listener is notified and the session resets.
    #[instrument(skip(self, listener), fields(player = %self.to_move))]
    pub fn attempt_move<L>(&mut self, row: usize, col: usize, listener: &mut L) -> Option<Outcome>
    where
        L: SessionListener + ?Sized,
    {
        if !self.is_active() {
            return None;
        }
        let position = Position::from_coords(row, col)?;
        let player = self.to_move;
        if !self.board.place(position, player) {
            return None;
        }

        listener.move_made(player, position);

        let outcome = evaluate(&self.board);
        match outcome {
            Outcome::Win { player, line } => {
                self.score.record_win(player);
                info!(%player, %line, score = %self.score, "Round won");
                listener.game_won(player, line, &self.board);
                self.reset();
            }
            Outcome::Draw => {
                info!(score = %self.score, "Round drawn");
                listener.game_drawn(&self.board);
                self.reset();
            }
            Outcome::Ongoing => {
                self.to_move = player.opponent();
                self.check_invariants();
            }
        }

        Some(outcome)
    }

    fn clear(&mut self) {
        self.board = Board::new();
        self.to_move = Player::X;
    }

    #[cfg(debug_assertions)]
    fn check_invariants(&self) {
        use super::invariants::{BoardInvariants, InvariantSet, TurnState};

        let state = TurnState {
            board: &self.board,
            to_move: self.to_move,
        };
        if let Err(violations) = BoardInvariants::check_all(&state) {
            panic!("Session invariants violated: {violations:?}");
        }
    }

    #[cfg(not(debug_assertions))]
    fn check_invariants(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        moves: Vec<(Player, Position)>,
        wins: Vec<(Player, Line, Board)>,
        draws: Vec<Board>,
    }

    impl SessionListener for Recorder {
        fn move_made(&mut self, player: Player, position: Position) {
            self.moves.push((player, position));
        }

        fn game_won(&mut self, player: Player, line: Line, board: &Board) {
            self.wins.push((player, line, board.clone()));
        }

        fn game_drawn(&mut self, board: &Board) {
            self.draws.push(board.clone());
        }
    }

    #[test]
    fn test_new_session_is_idle() {
        let session = GameSession::new();
        assert_eq!(session.phase(), Phase::NotStarted);
        assert_eq!(session.to_move(), Player::X);
        assert_eq!(session.board(), &Board::new());
    }

    #[test]
    fn test_listener_sees_each_move_once() {
        let mut session = GameSession::new();
        let mut recorder = Recorder::default();
        session.start();

        session.attempt_move(1, 1, &mut recorder);
        session.attempt_move(1, 1, &mut recorder);
        session.attempt_move(0, 0, &mut recorder);

        assert_eq!(
            recorder.moves,
            vec![(Player::X, Position::Center), (Player::O, Position::TopLeft)]
        );
    }

    #[test]
    fn test_listener_receives_final_board_on_win() {
        let mut session = GameSession::new();
        let mut recorder = Recorder::default();
        session.start();

        for (row, col) in [(0, 0), (1, 0), (1, 1), (2, 0), (2, 2)] {
            session.attempt_move(row, col, &mut recorder);
        }

        let (player, line, board) = &recorder.wins[0];
        assert_eq!(*player, Player::X);
        assert_eq!(*line, Line::MainDiagonal);
        assert_eq!(board.mark_count(Player::X), 3);
        assert_eq!(session.board(), &Board::new());
        assert!(recorder.draws.is_empty());
    }

    #[test]
    fn test_unit_listener() {
        let mut session = GameSession::new();
        session.start();
        assert_eq!(session.attempt_move(2, 2, &mut ()), Some(Outcome::Ongoing));
        assert_eq!(session.to_move(), Player::O);
    }
}
