//! Game engine and pile management.

use alloc::vec::Vec;
use core::fmt;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE};
use crate::error::{ConfigError, DrawError, HandError};
use crate::options::GameOptions;
use crate::player::{HAND_SIZE, Player};

mod actions;
pub mod state;

pub use state::{DiscardChoice, DrawSource, TurnPhase, TurnRecord};

/// A draw-and-discard game: the deck, the discard pile, and the seated players.
///
/// Every card identifier lives in exactly one place at a time: the deck, the
/// discard pile, a hand, or a pending pickup.
#[derive(Debug, Clone)]
pub struct Game {
    /// Cards in the deck; the last element is the top.
    deck: Vec<Card>,
    /// Played cards; the last element is the top.
    discard_pile: Vec<Card>,
    /// Seated players in turn order.
    players: Vec<Player>,
    /// Index of the player whose turn it is.
    current_player: usize,
    /// Phase of the current turn.
    phase: TurnPhase,
    /// Game options.
    options: GameOptions,
    /// Random number generator used for every shuffle.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// # Errors
    ///
    /// Returns an error if the options request an unplayable number of players.
    ///
    /// # Example
    ///
    /// ```
    /// use tricard::{Game, GameOptions};
    ///
    /// let game = Game::new(GameOptions::default(), 42).unwrap();
    /// assert_eq!(game.cards_remaining(), 45);
    /// assert_eq!(game.discard_pile().len(), 1);
    /// ```
    pub fn new(options: GameOptions, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(options, ChaCha8Rng::seed_from_u64(seed))
    }

    /// Creates a new game that shuffles with `rng`.
    ///
    /// # Errors
    ///
    /// Returns an error if the options request an unplayable number of players.
    pub fn with_rng(options: GameOptions, mut rng: ChaCha8Rng) -> Result<Self, ConfigError> {
        options.validate()?;

        let mut deck: Vec<Card> = Card::full_deck().collect();
        deck.shuffle(&mut rng);

        let mut game = Self {
            deck,
            discard_pile: Vec::with_capacity(DECK_SIZE),
            players: (0..options.players).map(|_| Player::new()).collect(),
            current_player: 0,
            phase: TurnPhase::Draw,
            options,
            rng,
        };
        game.deal_initial_hands()?;

        Ok(game)
    }

    /// Deals one card per player per round, then seeds the discard pile.
    ///
    /// Validated options leave enough cards for every hand plus the seed, and
    /// hands start empty, so this only fails if that invariant is broken.
    fn deal_initial_hands(&mut self) -> Result<(), ConfigError> {
        let short = ConfigError::TooManyPlayers(self.players.len());
        for _ in 0..HAND_SIZE {
            for player in &mut self.players {
                let card = self.deck.pop().ok_or(short)?;
                player.add_card(card)?;
            }
        }
        let first = self.deck.pop().ok_or(short)?;
        self.discard_pile.push(first);
        Ok(())
    }

    /// Returns the top of the discard pile without removing it.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::EmptyDiscard`] if the pile is empty.
    pub fn top_discard(&self) -> Result<Card, DrawError> {
        self.discard_pile
            .last()
            .copied()
            .ok_or(DrawError::EmptyDiscard)
    }

    /// Draws the top card of the deck.
    ///
    /// An empty deck is rebuilt from the discard pile, keeping only its top
    /// card behind, and shuffled before drawing.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::Exhausted`] if the deck is empty and the discard
    /// pile holds fewer than two cards.
    pub fn draw_from_deck(&mut self) -> Result<Card, DrawError> {
        if self.deck.is_empty() {
            self.recycle_discard_pile()?;
        }
        self.deck.pop().ok_or(DrawError::Exhausted)
    }

    fn recycle_discard_pile(&mut self) -> Result<(), DrawError> {
        if self.discard_pile.len() <= 1 {
            return Err(DrawError::Exhausted);
        }
        let top = self.discard_pile.pop().ok_or(DrawError::Exhausted)?;
        self.deck.append(&mut self.discard_pile);
        self.deck.shuffle(&mut self.rng);
        self.discard_pile.push(top);
        Ok(())
    }

    /// Draws the top card of the discard pile.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::EmptyDiscard`] if the pile is empty.
    pub fn draw_from_discard(&mut self) -> Result<Card, DrawError> {
        self.discard_pile.pop().ok_or(DrawError::EmptyDiscard)
    }

    /// Pushes `card` onto the discard pile.
    ///
    /// The card is not checked against the other piles; the caller must not
    /// hand over a card that is still held elsewhere.
    pub fn add_to_discard(&mut self, card: Card) {
        self.discard_pile.push(card);
    }

    /// Returns the deck, bottom first.
    #[must_use]
    pub fn deck(&self) -> &[Card] {
        &self.deck
    }

    /// Returns the discard pile, bottom first.
    #[must_use]
    pub fn discard_pile(&self) -> &[Card] {
        &self.discard_pile
    }

    /// Returns the number of cards left in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns the players in turn order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns the player at `index`.
    #[must_use]
    pub fn player(&self, index: usize) -> Option<&Player> {
        self.players.get(index)
    }

    /// Returns the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Returns the index of the player whose turn it is.
    #[must_use]
    pub const fn current_player(&self) -> usize {
        self.current_player
    }

    /// Returns the phase of the current turn.
    #[must_use]
    pub const fn phase(&self) -> TurnPhase {
        self.phase
    }

    /// Returns the options this game was created with.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Replaces the deck; the last element becomes the top.
    ///
    /// Intended for setting up scenarios. The caller keeps every card in
    /// exactly one place.
    pub fn set_deck(&mut self, cards: Vec<Card>) {
        self.deck = cards;
    }

    /// Replaces the discard pile; the last element becomes the top.
    ///
    /// Intended for setting up scenarios. The caller keeps every card in
    /// exactly one place.
    pub fn set_discard_pile(&mut self, cards: Vec<Card>) {
        self.discard_pile = cards;
    }

    /// Replaces the hand of the player at `index`; an unknown index is ignored.
    ///
    /// Intended for setting up scenarios. The caller keeps every card in
    /// exactly one place.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::HandFull`] if `cards` holds more than three cards.
    pub fn set_hand(&mut self, index: usize, cards: &[Card]) -> Result<(), HandError> {
        let mut player = Player::new();
        for &card in cards {
            player.add_card(card)?;
        }
        if let Some(seat) = self.players.get_mut(index) {
            *seat = player;
        }
        Ok(())
    }

    /// Every card currently held anywhere in the game.
    pub fn all_cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.deck
            .iter()
            .chain(&self.discard_pile)
            .copied()
            .chain(self.players.iter().flat_map(|player| {
                player
                    .hand()
                    .iter()
                    .copied()
                    .chain(player.pickup_card())
            }))
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Game State:")?;
        writeln!(f, "Cards in deck: {}", self.deck.len())?;
        match self.top_discard() {
            Ok(card) => writeln!(f, "Top discard: {card}")?,
            Err(_) => writeln!(f, "Top discard: (none)")?,
        }
        for (index, player) in self.players.iter().enumerate() {
            writeln!(f, "Player {}: {player}", index + 1)?;
        }
        Ok(())
    }
}
