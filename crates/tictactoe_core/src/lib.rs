//! Pure tic-tac-toe game logic.
//!
//! No I/O lives here: the crate models the board, evaluates outcomes,
//! runs the round lifecycle and keeps the score. Front ends drive a
//! [`GameSession`] and observe it through a [`SessionListener`].
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{GameSession, Line, Outcome, Player};
//!
//! let mut session = GameSession::new();
//! session.start();
//! for (row, col) in [(0, 0), (1, 1), (0, 1), (1, 0)] {
//!     session.attempt_move(row, col, &mut ());
//! }
//! let outcome = session.attempt_move(0, 2, &mut ());
//! assert_eq!(
//!     outcome,
//!     Some(Outcome::Win { player: Player::X, line: Line::TopRow })
//! );
//! assert_eq!(session.score().wins(Player::X), 1);
//! assert!(!session.is_active());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod invariants;
mod line;
mod position;
pub mod rules;
mod score;
mod session;
mod types;

pub use line::Line;
pub use position::Position;
pub use rules::{Outcome, evaluate};
pub use score::Scoreboard;
pub use session::{GameSession, Phase, SessionListener};
pub use types::{Board, Player, Square};
