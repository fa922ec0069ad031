//! Player hand and pending pickup.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use crate::card::{Card, Suit};
use crate::error::HandError;

/// Maximum number of cards a hand holds.
pub const HAND_SIZE: usize = 3;

/// Highest same-suit sum across `cards`, or 0 for no cards.
fn best_suit_sum(cards: &[Card]) -> u32 {
    let mut sums = [0u32; Suit::ALL.len()];
    for card in cards {
        sums[card.suit().index()] += u32::from(card.game_value());
    }
    sums.into_iter().max().unwrap_or(0)
}

/// A player's hand plus the card drawn this turn, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Player {
    /// Cards in the hand, kept in ascending identifier order.
    hand: Vec<Card>,
    /// Card drawn this turn and not yet resolved.
    pickup: Option<Card>,
}

impl Player {
    /// Creates a player with an empty hand and no pickup.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            hand: Vec::new(),
            pickup: None,
        }
    }

    /// Adds a card to the hand and re-sorts it.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::HandFull`] if the hand already holds three cards.
    pub fn add_card(&mut self, card: Card) -> Result<(), HandError> {
        if self.hand.len() >= HAND_SIZE {
            return Err(HandError::HandFull);
        }
        self.hand.push(card);
        self.hand.sort_unstable();
        Ok(())
    }

    /// Holds `card` as this turn's pickup.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::PickupPending`] if a pickup is already held.
    pub const fn pickup(&mut self, card: Card) -> Result<(), HandError> {
        if self.pickup.is_some() {
            return Err(HandError::PickupPending);
        }
        self.pickup = Some(card);
        Ok(())
    }

    /// Removes and returns the hand card at `index`.
    ///
    /// A pending pickup then takes its place in the hand.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::InvalidIndex`] if `index` is not 0, 1, or 2, and
    /// [`HandError::NoCardAtIndex`] if the hand holds fewer cards than that.
    pub fn discard(&mut self, index: usize) -> Result<Card, HandError> {
        if index >= HAND_SIZE {
            return Err(HandError::InvalidIndex(index));
        }
        if index >= self.hand.len() {
            return Err(HandError::NoCardAtIndex(index));
        }

        let discarded = self.hand.remove(index);
        if let Some(card) = self.pickup.take() {
            self.add_card(card)?;
        }
        Ok(discarded)
    }

    /// Returns and clears the pending pickup, leaving the hand untouched.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::NoPickup`] if there is nothing to discard.
    pub const fn discard_pickup(&mut self) -> Result<Card, HandError> {
        match self.pickup.take() {
            Some(card) => Ok(card),
            None => Err(HandError::NoPickup),
        }
    }

    /// Highest sum of game values among cards sharing a suit.
    ///
    /// ```
    /// use tricard::{Card, Player};
    ///
    /// let mut player = Player::new();
    /// for id in [0, 1, 37] {
    ///     player.add_card(Card::new(id).unwrap()).unwrap();
    /// }
    /// // 2 + 3 of Hearts against the King of Clubs.
    /// assert_eq!(player.hand_value(), 10);
    /// ```
    #[must_use]
    pub fn hand_value(&self) -> u32 {
        best_suit_sum(&self.hand)
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    /// Returns the pending pickup card.
    #[must_use]
    pub const fn pickup_card(&self) -> Option<Card> {
        self.pickup
    }

    /// Returns whether a pickup is pending.
    #[must_use]
    pub const fn has_pickup(&self) -> bool {
        self.pickup.is_some()
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.hand.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hand.is_empty()
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.hand.is_empty() {
            return f.write_str("Empty hand");
        }

        f.write_str("Hand: ")?;
        for card in &self.hand {
            write!(f, "[{card}] ")?;
        }
        if let Some(card) = self.pickup {
            write!(f, "\nPickup: [{card}]")?;
        }
        write!(f, "\n(Value: {})", self.hand_value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(id: u8) -> Card {
        Card::new(id).unwrap()
    }

    fn player_with(ids: &[u8]) -> Player {
        let mut player = Player::new();
        for &id in ids {
            player.add_card(card(id)).unwrap();
        }
        player
    }

    #[test]
    fn hand_stays_sorted() {
        let player = player_with(&[40, 3, 17]);
        assert_eq!(player.hand(), &[card(3), card(17), card(40)]);
    }

    #[test]
    fn fourth_card_is_rejected() {
        let mut player = player_with(&[0, 1, 2]);
        assert_eq!(player.add_card(card(3)), Err(HandError::HandFull));
        assert_eq!(player.len(), 3);
    }

    #[test]
    fn empty_hand_is_worth_nothing() {
        assert_eq!(Player::new().hand_value(), 0);
    }

    #[test]
    fn display_shows_pickup_and_value() {
        let mut player = player_with(&[0, 1, 34]);
        player.pickup(card(12)).unwrap();
        assert_eq!(
            player.to_string(),
            "Hand: [2 of Hearts] [3 of Hearts] [10 of Clubs] \nPickup: [Ace of Hearts]\n(Value: 10)"
        );
        assert_eq!(Player::new().to_string(), "Empty hand");
    }
}
