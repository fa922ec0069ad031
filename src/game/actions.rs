use crate::card::Card;
use crate::error::ActionError;

use super::{DiscardChoice, DrawSource, Game, TurnPhase, TurnRecord};

impl Game {
    fn ensure_phase(&self, phase: TurnPhase) -> Result<(), ActionError> {
        if self.phase != phase {
            return Err(ActionError::InvalidPhase);
        }
        Ok(())
    }

    /// Current player action: draw a card into the pickup slot.
    ///
    /// Returns the drawn card.
    ///
    /// # Errors
    ///
    /// Returns an error if the player has already drawn this turn or the
    /// chosen source has no card to give.
    pub fn draw(&mut self, source: DrawSource) -> Result<Card, ActionError> {
        self.ensure_phase(TurnPhase::Draw)?;

        let card = match source {
            DrawSource::Deck => self.draw_from_deck()?,
            DrawSource::DiscardPile => self.draw_from_discard()?,
        };

        let index = self.current_player;
        if let Err(err) = self.players[index].pickup(card) {
            // Put the card back so it is not lost.
            match source {
                DrawSource::Deck => self.deck.push(card),
                DrawSource::DiscardPile => self.discard_pile.push(card),
            }
            return Err(err.into());
        }

        self.phase = TurnPhase::Discard;
        Ok(card)
    }

    /// Current player action: discard a card and end the turn.
    ///
    /// The discarded card goes on top of the discard pile and play passes to
    /// the next player.
    ///
    /// # Errors
    ///
    /// Returns an error if the player has not drawn yet or the choice does not
    /// name a card. The turn stays in the discard phase so the player can
    /// choose again.
    pub fn discard(&mut self, choice: DiscardChoice) -> Result<TurnRecord, ActionError> {
        self.ensure_phase(TurnPhase::Discard)?;

        let index = self.current_player;
        let player = &mut self.players[index];
        let discarded = match choice {
            DiscardChoice::Hand(slot) => player.discard(slot)?,
            DiscardChoice::Pickup => player.discard_pickup()?,
        };

        self.add_to_discard(discarded);
        self.advance_turn();

        Ok(TurnRecord {
            player_index: index,
            discarded,
        })
    }

    fn advance_turn(&mut self) {
        self.current_player = (self.current_player + 1) % self.players.len();
        self.phase = TurnPhase::Draw;
    }
}
