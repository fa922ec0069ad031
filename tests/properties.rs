//! Property tests for the card codec and the card-partition invariant.

use proptest::prelude::*;
use tricard::{
    Card, DECK_SIZE, DiscardChoice, DrawSource, Game, GameOptions, Player, Suit, display_name,
    game_value, suit_of,
};

#[test]
fn suits_partition_the_deck_into_thirteens() {
    for suit in Suit::ALL {
        let members = Card::full_deck().filter(|&c| suit_of(c) == suit).count();
        assert_eq!(members, 13);
    }
    assert_eq!(Card::full_deck().count(), DECK_SIZE);
}

fn any_card() -> impl Strategy<Value = Card> {
    (0u8..52).prop_map(|id| Card::new(id).unwrap())
}

proptest! {
    #[test]
    fn game_value_follows_face_value(card in any_card()) {
        let face = card.face_value();
        prop_assert!((2..=14).contains(&face));
        match face {
            14 => prop_assert_eq!(game_value(card), 11),
            11..=13 => prop_assert_eq!(game_value(card), 10),
            _ => prop_assert_eq!(game_value(card), face),
        }
    }

    #[test]
    fn display_name_parses_back(card in any_card()) {
        let name = display_name(card);
        let parsed: Card = name.parse().unwrap();
        prop_assert_eq!(parsed, card);
        prop_assert_eq!(parsed.suit(), card.suit());
        prop_assert_eq!(parsed.face_value(), card.face_value());
    }

    #[test]
    fn hand_value_is_best_suit_total(ids in prop::sample::subsequence((0u8..52).collect::<Vec<_>>(), 0..=3)) {
        let mut player = Player::new();
        for &id in &ids {
            player.add_card(Card::new(id).unwrap()).unwrap();
        }

        let best = Suit::ALL
            .into_iter()
            .map(|suit| {
                ids.iter()
                    .map(|&id| Card::new(id).unwrap())
                    .filter(|c| c.suit() == suit)
                    .map(|c| u32::from(c.game_value()))
                    .sum::<u32>()
            })
            .max()
            .unwrap_or(0);
        prop_assert_eq!(player.hand_value(), best);
    }

    #[test]
    fn every_card_stays_in_exactly_one_place(
        seed in any::<u64>(),
        players in 2usize..=6,
        turns in prop::collection::vec((any::<bool>(), 0usize..4), 0..150),
    ) {
        let mut game = Game::new(GameOptions::default().with_players(players), seed).unwrap();
        let full: Vec<Card> = Card::full_deck().collect();

        for (from_deck, slot) in turns {
            let source = if from_deck { DrawSource::Deck } else { DrawSource::DiscardPile };
            game.draw(source).unwrap();

            let mut held: Vec<Card> = game.all_cards().collect();
            held.sort_unstable();
            prop_assert_eq!(&held, &full);

            let had_pickup = game.player(game.current_player()).unwrap().has_pickup();
            let choice = if slot == 3 { DiscardChoice::Pickup } else { DiscardChoice::Hand(slot) };
            let record = game.discard(choice).unwrap();
            let hand_len = game.player(record.player_index).unwrap().len();
            prop_assert_eq!(hand_len == 3, had_pickup);

            let mut held: Vec<Card> = game.all_cards().collect();
            held.sort_unstable();
            prop_assert_eq!(&held, &full);
        }
    }
}
