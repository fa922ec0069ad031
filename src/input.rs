//! Parsing of the single-character menu choices typed at each prompt.

use core::str::FromStr;

use crate::error::InputError;
use crate::game::{DiscardChoice, DrawSource};

/// Reads a one-character token, ignoring surrounding whitespace and case.
fn single_char(s: &str) -> Option<char> {
    let mut chars = s.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c.to_ascii_lowercase()),
        _ => None,
    }
}

impl FromStr for DrawSource {
    type Err = InputError;

    /// `t` draws from the top of the deck, `d` from the discard pile.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match single_char(s) {
            Some('t') => Ok(Self::Deck),
            Some('d') => Ok(Self::DiscardPile),
            _ => Err(InputError::DrawChoice),
        }
    }
}

impl FromStr for DiscardChoice {
    type Err = InputError;

    /// `0`, `1`, or `2` discards that hand card, `p` discards the pickup.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match single_char(s) {
            Some('p') => Ok(Self::Pickup),
            Some(c @ '0'..='2') => Ok(Self::Hand(usize::from(c as u8 - b'0'))),
            _ => Err(InputError::DiscardChoice),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draw_choices() {
        assert_eq!("t".parse(), Ok(DrawSource::Deck));
        assert_eq!(" D\n".parse(), Ok(DrawSource::DiscardPile));
        assert_eq!("top".parse::<DrawSource>(), Err(InputError::DrawChoice));
        assert_eq!("".parse::<DrawSource>(), Err(InputError::DrawChoice));
    }

    #[test]
    fn discard_choices() {
        assert_eq!("0".parse(), Ok(DiscardChoice::Hand(0)));
        assert_eq!("2".parse(), Ok(DiscardChoice::Hand(2)));
        assert_eq!("P".parse(), Ok(DiscardChoice::Pickup));
        assert_eq!("3".parse::<DiscardChoice>(), Err(InputError::DiscardChoice));
        assert_eq!("10".parse::<DiscardChoice>(), Err(InputError::DiscardChoice));
    }
}
