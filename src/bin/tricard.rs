//! Interactive command-line game.

use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use tricard::{Game, GameOptions, IoConsole, TurnDriver};

/// Three-card draw-and-discard game for players sharing one terminal
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Number of players at the table
    #[arg(short, long, default_value_t = tricard::MIN_PLAYERS)]
    players: usize,

    /// Shuffle seed, for replaying a game
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });

    let options = GameOptions::default().with_players(args.players);
    let game = match Game::new(options, seed) {
        Ok(game) => game,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    println!("Seed: {seed}");
    println!("Initial game state:");
    print!("{game}");

    let mut driver = TurnDriver::new(game, IoConsole::stdio());
    match driver.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
