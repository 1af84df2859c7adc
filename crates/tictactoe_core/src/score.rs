//! Running win tally across rounds.

use super::Player;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Win counts per player.
///
/// Only ever incremented. Lives as long as the process; starting or
/// resetting a round leaves it alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Getters, Serialize, Deserialize)]
pub struct Scoreboard {
    /// Rounds won by X.
    x: u32,
    /// Rounds won by O.
    o: u32,
}

impl Scoreboard {
    /// Creates a scoreboard with no wins.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of rounds `player` has won.
    pub fn wins(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x,
            Player::O => self.o,
        }
    }

    /// Credits `player` with one win.
    #[instrument(skip(self))]
    pub fn record_win(&mut self, player: Player) {
        let slot = match player {
            Player::X => &mut self.x,
            Player::O => &mut self.o,
        };
        *slot = slot.saturating_add(1);
        debug!(x = self.x, o = self.o, "Score updated");
    }
}

impl std::fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player X: {}  Player O: {}", self.x, self.o)
    }
}
