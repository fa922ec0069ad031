//! Game configuration options.

use crate::card::DECK_SIZE;
use crate::error::ConfigError;
use crate::player::HAND_SIZE;

/// Smallest number of players a game accepts.
pub const MIN_PLAYERS: usize = 2;

/// Largest number of players a single deck can deal in and still seed the
/// discard pile.
pub const MAX_PLAYERS: usize = (DECK_SIZE - 1) / HAND_SIZE;

/// Configuration options for a game.
///
/// ```
/// use tricard::GameOptions;
///
/// let options = GameOptions::default().with_players(4);
/// assert_eq!(options.players, 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameOptions {
    /// Number of players seated at the table.
    pub players: usize,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            players: MIN_PLAYERS,
        }
    }
}

impl GameOptions {
    /// Sets the number of players.
    #[must_use]
    pub const fn with_players(mut self, players: usize) -> Self {
        self.players = players;
        self
    }

    /// Checks that the options describe a playable game.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::TooFewPlayers`] for fewer than two players and
    /// [`ConfigError::TooManyPlayers`] when the deck cannot cover every hand.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.players < MIN_PLAYERS {
            return Err(ConfigError::TooFewPlayers(self.players));
        }
        if self.players > MAX_PLAYERS {
            return Err(ConfigError::TooManyPlayers(self.players));
        }
        Ok(())
    }
}
