//! Application state and logic.

use derive_new::new;
use tictactoe_core::{Board, GameSession, Line, Outcome, Player, Position, SessionListener};
use tracing::{debug, info, instrument};

use crate::audio::Chime;

/// Status shown before the first round.
pub const WELCOME_MESSAGE: &str = "Welcome to Tic Tac Toe!\nPlayer X starts the game.";

/// Status shown whenever no round is running after a reset or result.
pub const RESET_MESSAGE: &str = "Game Reset. Click 'Start Game' to play.";

/// Cursor direction for keyboard navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards row 0.
    Up,
    /// Towards row 2.
    Down,
    /// Towards column 0.
    Left,
    /// Towards column 2.
    Right,
}

/// A user command, already decoded from terminal input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Play the cell at `(row, col)`.
    Play {
        /// Board row.
        row: usize,
        /// Board column.
        col: usize,
    },
    /// Play the cell under the cursor.
    PlayCursor,
    /// Move the cursor one cell.
    MoveCursor(Direction),
    /// Start a new round.
    Start,
    /// Abandon the round.
    Reset,
    /// Leave the program.
    Exit,
    /// Any other key or click; only meaningful while a result is shown.
    Acknowledge,
}

/// A finished round waiting to be acknowledged.
///
/// Holds a copy of the final board because the session has already
/// been reset by the time this is shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    /// A player completed a line.
    Won {
        /// The winner.
        player: Player,
        /// The completed line.
        line: Line,
        /// Final board of the round.
        board: Board,
    },
    /// Board filled without a winner.
    Drawn {
        /// Final board of the round.
        board: Board,
    },
}

impl Notification {
    /// Popup title.
    pub fn title(&self) -> &'static str {
        "Game Over"
    }

    /// Popup message.
    pub fn message(&self) -> String {
        match self {
            Notification::Won { player, .. } => format!("Player {player} wins!"),
            Notification::Drawn { .. } => "It's a draw!".to_string(),
        }
    }

    /// Final board of the round.
    pub fn board(&self) -> &Board {
        match self {
            Notification::Won { board, .. } | Notification::Drawn { board } => board,
        }
    }

    /// Whether `pos` belongs to the winning line.
    pub fn highlights(&self, pos: Position) -> bool {
        match self {
            Notification::Won { line, .. } => line.contains(pos),
            Notification::Drawn { .. } => false,
        }
    }
}

/// Session listener that rings the chime and captures results.
#[derive(new)]
struct Feedback<'a> {
    chime: &'a mut dyn Chime,
    notification: &'a mut Option<Notification>,
}

impl SessionListener for Feedback<'_> {
    fn move_made(&mut self, player: Player, position: Position) {
        debug!(%player, %position, "Move made");
        if let Err(e) = self.chime.play() {
            debug!(error = %e, "Move chime failed");
        }
    }

    fn game_won(&mut self, player: Player, line: Line, board: &Board) {
        *self.notification = Some(Notification::Won {
            player,
            line,
            board: board.clone(),
        });
    }

    fn game_drawn(&mut self, board: &Board) {
        *self.notification = Some(Notification::Drawn {
            board: board.clone(),
        });
    }
}

/// Main application state.
pub struct App {
    session: GameSession,
    chime: Box<dyn Chime>,
    cursor: Position,
    status_message: String,
    notification: Option<Notification>,
    should_quit: bool,
}

impl App {
    /// Creates a new application.
    pub fn new(chime: Box<dyn Chime>) -> Self {
        Self {
            session: GameSession::new(),
            chime,
            cursor: Position::Center,
            status_message: WELCOME_MESSAGE.to_string(),
            notification: None,
            should_quit: false,
        }
    }

    /// Gets the game session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Gets the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Gets the result waiting to be acknowledged, if any.
    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    /// Returns true once the user asked to exit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Applies a user action.
    ///
    /// While a result is shown every action only dismisses it.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, action: Action) {
        if self.notification.take().is_some() {
            debug!("Result dismissed");
            return;
        }

        match action {
            Action::Play { row, col } => self.play(row, col),
            Action::PlayCursor => {
                let (row, col) = self.cursor.coords();
                self.play(row, col);
            }
            Action::MoveCursor(direction) => self.cursor = move_cursor(self.cursor, direction),
            Action::Start => {
                self.session.start();
                self.status_message = turn_message(self.session.to_move());
            }
            Action::Reset => {
                self.session.reset();
                self.status_message = RESET_MESSAGE.to_string();
            }
            Action::Exit => {
                info!("Exit requested");
                self.should_quit = true;
            }
            Action::Acknowledge => {}
        }
    }

    fn play(&mut self, row: usize, col: usize) {
        if let Some(pos) = Position::from_coords(row, col) {
            self.cursor = pos;
        }

        let mut feedback = Feedback::new(self.chime.as_mut(), &mut self.notification);
        match self.session.attempt_move(row, col, &mut feedback) {
            Some(Outcome::Ongoing) => {
                self.status_message = turn_message(self.session.to_move());
            }
            Some(Outcome::Win { .. } | Outcome::Draw) => {
                self.status_message = RESET_MESSAGE.to_string();
            }
            None => {}
        }
    }
}

fn turn_message(player: Player) -> String {
    format!("Player {player}'s turn.")
}

/// Moves the cursor one cell, stopping at the board edge.
pub fn move_cursor(cursor: Position, direction: Direction) -> Position {
    let (row, col) = cursor.coords();
    let (row, col) = match direction {
        Direction::Up => (row.saturating_sub(1), col),
        Direction::Down => (row + 1, col),
        Direction::Left => (row, col.saturating_sub(1)),
        Direction::Right => (row, col + 1),
    };
    Position::from_coords(row, col).unwrap_or(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_moves_within_board() {
        assert_eq!(move_cursor(Position::Center, Direction::Up), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, Direction::Left), Position::MiddleLeft);
        assert_eq!(move_cursor(Position::TopLeft, Direction::Down), Position::MiddleLeft);
        assert_eq!(move_cursor(Position::TopLeft, Direction::Right), Position::TopCenter);
    }

    #[test]
    fn test_cursor_stops_at_edges() {
        assert_eq!(move_cursor(Position::TopLeft, Direction::Up), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopLeft, Direction::Left), Position::TopLeft);
        assert_eq!(move_cursor(Position::BottomRight, Direction::Down), Position::BottomRight);
        assert_eq!(move_cursor(Position::BottomRight, Direction::Right), Position::BottomRight);
    }

    #[test]
    fn test_notification_text() {
        let won = Notification::Won {
            player: Player::O,
            line: Line::LeftColumn,
            board: Board::new(),
        };
        assert_eq!(won.message(), "Player O wins!");
        assert!(won.highlights(Position::BottomLeft));
        assert!(!won.highlights(Position::Center));

        let drawn = Notification::Drawn { board: Board::new() };
        assert_eq!(drawn.message(), "It's a draw!");
        assert!(!drawn.highlights(Position::Center));
    }
}
