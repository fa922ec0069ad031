//! A three-card draw-and-discard card game engine with optional `no_std` support.
//!
//! Cards are identifiers in `0..52`. Each player holds three cards; on their
//! turn they draw one card from the deck or the discard pile, then discard
//! either a hand card or the card they just drew. A hand scores the highest
//! sum of card values within a single suit.
//!
//! The crate provides a [`Game`] type that owns the deck, the discard pile,
//! and the players, and, with the `std` feature, a [`TurnDriver`] that plays
//! the game interactively over any line-oriented console.
//!
//! # Example
//!
//! ```
//! use tricard::{DiscardChoice, DrawSource, Game, GameOptions};
//!
//! let mut game = Game::new(GameOptions::default().with_players(3), 42).unwrap();
//! game.draw(DrawSource::Deck).unwrap();
//! let turn = game.discard(DiscardChoice::Pickup).unwrap();
//! assert_eq!(game.top_discard(), Ok(turn.discarded));
//! assert_eq!(game.current_player(), 1);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub mod driver;
pub mod error;
pub mod game;
pub mod input;
pub mod options;
pub mod player;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit, display_name, game_value, suit_of};
#[cfg(feature = "std")]
pub use driver::{Console, IoConsole, TurnDriver};
#[cfg(feature = "std")]
pub use error::DriverError;
pub use error::{
    ActionError, CardError, CardParseError, ConfigError, DrawError, HandError, InputError,
};
pub use game::{DiscardChoice, DrawSource, Game, TurnPhase, TurnRecord};
pub use options::{GameOptions, MAX_PLAYERS, MIN_PLAYERS};
pub use player::{HAND_SIZE, Player};
