//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur when building a card from an identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Identifier is not in `0..52`.
    #[error("card identifier {0} is out of range")]
    OutOfRange(u8),
}

/// Errors that can occur when parsing a card's display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardParseError {
    /// Input is not of the form `<Rank> of <Suit>`.
    #[error("expected '<rank> of <suit>'")]
    Format,
    /// Rank is not 2-10, Jack, Queen, King, or Ace.
    #[error("invalid rank")]
    Rank,
    /// Suit is not Hearts, Diamonds, Clubs, or Spades.
    #[error("invalid suit")]
    Suit,
}

/// Errors that can occur when configuring a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Fewer than two players were requested.
    #[error("game requires at least 2 players, got {0}")]
    TooFewPlayers(usize),
    /// More players were requested than one deck can deal to.
    #[error("a single deck supports at most 17 players, got {0}")]
    TooManyPlayers(usize),
    /// Dealing the opening hands failed.
    #[error("dealing failed: {0}")]
    Deal(#[from] HandError),
}

/// Errors that can occur when mutating a player's hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HandError {
    /// Hand already holds three cards.
    #[error("cannot add more than 3 cards to hand")]
    HandFull,
    /// A pickup card is already pending.
    #[error("already have a pickup card")]
    PickupPending,
    /// No pickup card is pending.
    #[error("no pickup card to discard")]
    NoPickup,
    /// Index is not 0, 1, or 2.
    #[error("index must be 0, 1, or 2")]
    InvalidIndex(usize),
    /// Index is valid but the hand holds fewer cards.
    #[error("no card at index {0}")]
    NoCardAtIndex(usize),
}

impl HandError {
    /// Returns whether this is a range error that a caller may retry with a
    /// different index.
    #[must_use]
    pub const fn is_range(&self) -> bool {
        matches!(self, Self::InvalidIndex(_) | Self::NoCardAtIndex(_))
    }
}

/// Errors that can occur when drawing from the deck or discard pile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    /// Deck is empty and the discard pile cannot be recycled.
    #[error("no cards available to draw")]
    Exhausted,
    /// Discard pile is empty.
    #[error("discard pile is empty")]
    EmptyDiscard,
}

/// Errors that can occur during turn actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Action does not belong to the current turn phase.
    #[error("action not allowed in this phase of the turn")]
    InvalidPhase,
    /// Drawing failed.
    #[error(transparent)]
    Draw(#[from] DrawError),
    /// Hand mutation failed.
    #[error(transparent)]
    Hand(#[from] HandError),
}

impl ActionError {
    /// Returns whether the turn can continue by retrying the discard.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        match self {
            Self::Hand(err) => err.is_range(),
            _ => false,
        }
    }
}

/// Errors that can occur when parsing a menu choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    /// Draw choice is not `t` or `d`.
    #[error("Invalid choice. Please enter 't' or 'd'")]
    DrawChoice,
    /// Discard choice is not `0`, `1`, `2`, or `p`.
    #[error("Invalid choice. Please enter '0', '1', '2', or 'p'")]
    DiscardChoice,
}

/// Errors that end an interactive session.
#[cfg(feature = "std")]
#[derive(Debug, Error)]
pub enum DriverError {
    /// Reading input or writing output failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    /// A turn action failed in a way the turn cannot recover from.
    #[error(transparent)]
    Action(#[from] ActionError),
}
