//! Interactive driver tests over in-memory input and output.

use std::io::Cursor;

use tricard::{
    ActionError, Card, DrawError, DriverError, Game, GameOptions, IoConsole, TurnDriver,
    TurnPhase,
};

type MemoryConsole = IoConsole<Cursor<Vec<u8>>, Vec<u8>>;

fn driver(seed: u64, input: &str) -> TurnDriver<MemoryConsole> {
    let game = Game::new(GameOptions::default(), seed).unwrap();
    let console = IoConsole::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
    TurnDriver::new(game, console)
}

fn output(driver: &TurnDriver<MemoryConsole>) -> String {
    String::from_utf8(driver.console().writer().clone()).unwrap()
}

fn assert_partition(game: &Game) {
    let mut all: Vec<Card> = game.all_cards().collect();
    all.sort_unstable();
    assert_eq!(all, Card::full_deck().collect::<Vec<_>>());
}

#[test]
fn one_turn_discarding_the_pickup() {
    let mut driver = driver(1, "t\np\n");
    let top_before = driver.game().top_discard().unwrap();

    let record = driver.play_turn().unwrap().unwrap();

    let game = driver.game();
    assert_eq!(record.player_index, 0);
    assert_eq!(game.top_discard(), Ok(record.discarded));
    assert_eq!(game.discard_pile().len(), 2);
    assert_eq!(game.current_player(), 1);

    let text = output(&driver);
    assert!(text.contains("Player 1's turn"));
    assert!(text.contains(&format!("Top of discard pile: {top_before}")));
    assert!(text.contains(&format!("Drew {}", record.discarded)));
    assert!(text.contains(&format!("Pickup: [{}]", record.discarded)));
    assert!(text.contains(&format!("Discarded: {}", record.discarded)));
}

#[test]
fn drawing_from_discard_pile_takes_the_shown_card() {
    let mut driver = driver(2, "d\n0\n");
    let top_before = driver.game().top_discard().unwrap();
    let lowest = driver.game().player(0).unwrap().hand()[0];

    let record = driver.play_turn().unwrap().unwrap();

    assert_eq!(record.discarded, lowest);
    assert!(driver.game().player(0).unwrap().hand().contains(&top_before));
    assert_eq!(driver.game().discard_pile(), &[lowest]);
    assert!(output(&driver).contains(&format!("Drew {top_before}")));
}

#[test]
fn invalid_answers_are_reprompted() {
    let mut driver = driver(3, "x\ntop\nT\n7\nq\n2\n");

    driver.play_turn().unwrap().unwrap();

    let text = output(&driver);
    assert_eq!(text.matches("Invalid choice. Please enter 't' or 'd'").count(), 2);
    assert_eq!(
        text.matches("Invalid choice. Please enter '0', '1', '2', or 'p'")
            .count(),
        2
    );
    assert_eq!(text.matches("Pick up from (t)op of deck").count(), 3);
    assert_eq!(driver.game().current_player(), 1);
}

#[test]
fn closed_input_ends_the_turn_early() {
    let mut driver = driver(4, "t\n");

    assert!(driver.play_turn().unwrap().is_none());
    assert_eq!(driver.game().phase(), TurnPhase::Discard);
    assert_eq!(driver.game().current_player(), 0);
    assert_partition(driver.game());
}

#[test]
fn run_plays_until_input_closes() {
    let mut driver = driver(5, "t\np\nd\n1\nt\n0\nt\n2\nd\n");

    driver.run().unwrap();

    let game = driver.game();
    assert_eq!(game.current_player(), 0);
    assert_eq!(game.phase(), TurnPhase::Discard);
    assert_partition(game);

    let text = output(&driver);
    assert_eq!(text.matches("Player 1's turn").count(), 3);
    assert_eq!(text.matches("Player 2's turn").count(), 2);
}

#[test]
fn exhausted_draw_ends_the_session() {
    let (mut game, console) = driver(6, "t\n").into_parts();
    game.set_deck(Vec::new());
    let mut driver = TurnDriver::new(game, console);

    let err = driver.run().unwrap_err();
    assert!(matches!(
        err,
        DriverError::Action(ActionError::Draw(DrawError::Exhausted))
    ));
}

#[test]
fn undecodable_input_is_reprompted() {
    let game = Game::new(GameOptions::default(), 8).unwrap();
    let input = vec![0xff, b'\n', b't', b'\n', b'p', b'\n'];
    let console = IoConsole::new(Cursor::new(input), Vec::new());
    let mut driver = TurnDriver::new(game, console);

    let record = driver.play_turn().unwrap().unwrap();

    assert_eq!(record.player_index, 0);
    let text = output(&driver);
    assert_eq!(text.matches("Invalid choice. Please enter 't' or 'd'").count(), 1);
    assert_eq!(text.matches("Pick up from (t)op of deck").count(), 2);
}

#[test]
fn missing_hand_card_reprompts_discard_without_redrawing() {
    let (mut game, console) = driver(9, "t\n2\n0\n").into_parts();
    let short_hand = game.player(0).unwrap().hand()[..2].to_vec();
    game.set_hand(0, &short_hand).unwrap();
    let deck_before = game.cards_remaining();
    let mut driver = TurnDriver::new(game, console);

    let record = driver.play_turn().unwrap().unwrap();

    assert_eq!(record.discarded, short_hand[0]);
    let game = driver.game();
    assert_eq!(game.cards_remaining(), deck_before - 1);
    assert_eq!(game.player(0).unwrap().len(), 2);
    assert!(!game.player(0).unwrap().has_pickup());
    assert_eq!(game.current_player(), 1);

    let text = output(&driver);
    assert_eq!(text.matches("Error: no card at index 2").count(), 1);
    assert_eq!(text.matches("Pick up from").count(), 1);
    assert_eq!(text.matches("Discard which card?").count(), 2);
}
