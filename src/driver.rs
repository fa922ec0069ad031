//! Interactive turn loop over a line-oriented console.
//!
//! Each turn shows the active player's hand and the top of the discard pile,
//! asks where to draw from (`t` or `d`), then asks what to discard (`0`-`2`
//! or `p`). Unrecognised answers and bad hand indices re-prompt; anything
//! else ends the session with an error.

use std::io::{self, BufRead, Write};

use crate::error::{ActionError, DriverError};
use crate::game::{DiscardChoice, DrawSource, Game, TurnRecord};

/// A source of typed answers and a sink for game output.
pub trait Console {
    /// Shows `message` and reads one line of input.
    ///
    /// Returns `None` once the input is closed.
    ///
    /// # Errors
    ///
    /// Returns an error if writing the prompt or reading the answer fails.
    fn prompt(&mut self, message: &str) -> io::Result<Option<String>>;

    /// Writes one line of output.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn say(&mut self, line: &str) -> io::Result<()>;
}

/// A [`Console`] over any buffered reader and writer.
#[derive(Debug)]
pub struct IoConsole<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> IoConsole<R, W> {
    /// Creates a console reading from `reader` and writing to `writer`.
    pub const fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Returns the writer.
    pub const fn writer(&self) -> &W {
        &self.writer
    }

    /// Consumes the console, returning the reader and writer.
    pub fn into_parts(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

impl IoConsole<io::StdinLock<'static>, io::Stdout> {
    /// Creates a console over the process's stdin and stdout.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console for IoConsole<R, W> {
    fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        write!(self.writer, "{message}")?;
        self.writer.flush()?;

        // Invalid UTF-8 is kept as replacement characters so it fails to
        // parse and re-prompts instead of ending the session.
        let mut line = Vec::new();
        if self.reader.read_until(b'\n', &mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&line).trim().to_string()))
    }

    fn say(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.writer, "{line}")
    }
}

const DRAW_PROMPT: &str = "Pick up from (t)op of deck or (d)iscard pile? ";
const DISCARD_PROMPT: &str = "Discard which card? (0-2 for hand, p for pickup): ";

/// Drives a [`Game`] turn by turn through a [`Console`].
#[derive(Debug)]
pub struct TurnDriver<C> {
    game: Game,
    console: C,
}

impl<C: Console> TurnDriver<C> {
    /// Creates a driver for `game` talking through `console`.
    pub const fn new(game: Game, console: C) -> Self {
        Self { game, console }
    }

    /// Returns the game being played.
    pub const fn game(&self) -> &Game {
        &self.game
    }

    /// Returns the console.
    pub const fn console(&self) -> &C {
        &self.console
    }

    /// Consumes the driver, returning the game and console.
    pub fn into_parts(self) -> (Game, C) {
        (self.game, self.console)
    }

    /// Plays turns until the input is closed.
    ///
    /// # Errors
    ///
    /// Returns an error if the console fails or a turn hits an unrecoverable
    /// game error, such as running out of cards to draw.
    pub fn run(&mut self) -> Result<(), DriverError> {
        while self.play_turn()?.is_some() {}
        Ok(())
    }

    /// Plays one turn for the current player.
    ///
    /// Returns `None` if the input closed before the turn finished.
    ///
    /// # Errors
    ///
    /// Returns an error if the console fails or the turn hits an
    /// unrecoverable game error.
    pub fn play_turn(&mut self) -> Result<Option<TurnRecord>, DriverError> {
        let index = self.game.current_player();
        self.console.say("")?;
        self.console.say(&format!("Player {}'s turn", index + 1))?;
        self.show_player(index)?;
        let top = self.game.top_discard().map_err(ActionError::from)?;
        self.console.say(&format!("Top of discard pile: {top}"))?;

        let Some(source) = self.ask::<DrawSource>(DRAW_PROMPT)? else {
            return Ok(None);
        };
        let card = self.game.draw(source)?;
        self.console.say(&format!("Drew {card}"))?;
        self.show_player(index)?;

        let record = loop {
            let Some(choice) = self.ask::<DiscardChoice>(DISCARD_PROMPT)? else {
                return Ok(None);
            };
            match self.game.discard(choice) {
                Ok(record) => break record,
                Err(err) if err.is_recoverable() => {
                    self.console.say(&format!("Error: {err}"))?;
                }
                Err(err) => return Err(err.into()),
            }
        };

        self.console
            .say(&format!("Discarded: {}", record.discarded))?;
        self.show_player(index)?;
        Ok(Some(record))
    }

    fn show_player(&mut self, index: usize) -> io::Result<()> {
        match self.game.player(index) {
            Some(player) => self.console.say(&player.to_string()),
            None => Ok(()),
        }
    }

    /// Prompts until the answer parses, or returns `None` on closed input.
    fn ask<T>(&mut self, message: &str) -> io::Result<Option<T>>
    where
        T: core::str::FromStr,
        T::Err: core::fmt::Display,
    {
        loop {
            let Some(line) = self.console.prompt(message)? else {
                return Ok(None);
            };
            match line.parse::<T>() {
                Ok(value) => return Ok(Some(value)),
                Err(err) => self.console.say(&err.to_string())?,
            }
        }
    }
}
