//! Turn state types.

/// Phase of the current player's turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TurnPhase {
    /// Waiting for the player to draw.
    #[default]
    Draw,
    /// Player holds a pickup and must discard.
    Discard,
}

/// Where a player draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawSource {
    /// Top of the deck.
    Deck,
    /// Top of the discard pile.
    DiscardPile,
}

/// Which card a player discards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscardChoice {
    /// Hand card at this sorted position; the pickup takes its place.
    Hand(usize),
    /// The pickup card itself.
    Pickup,
}

/// Outcome of a completed turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnRecord {
    /// Index of the player who took the turn.
    pub player_index: usize,
    /// Card discarded to end the turn.
    pub discarded: crate::card::Card,
}
