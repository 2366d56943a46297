//! Construction of `BigUint` from hexadecimal text
//!
//! Text is consumed from the least significant end in groups of eight hex
//! characters, one group per 32-bit digit. The most significant group may
//! be shorter. Parsing is case-insensitive and accepts no prefix, sign or
//! whitespace.

use std::str::FromStr;

use super::core::{BigUint, Digit};
use crate::error::ParseError;

/// Number of hexadecimal characters encoding one digit.
const HEX_CHARS_PER_DIGIT: usize = 8;

impl BigUint {
    /// Parses a hexadecimal string such as `"e035c6cf"` or `"7D7DEAB2"`.
    ///
    /// # Errors
    ///
    /// - [`ParseError::Empty`] if `text` is empty
    /// - [`ParseError::InvalidDigit`] for the first character that is not
    ///   an ASCII hex digit
    pub fn from_hex(text: &str) -> Result<Self, ParseError> {
        if text.is_empty() {
            return Err(ParseError::Empty);
        }

        if let Some((index, character)) = text.char_indices().find(|(_, c)| !c.is_ascii_hexdigit())
        {
            return Err(ParseError::InvalidDigit { index, character });
        }

        let mut digits: Vec<Digit> = text
            .as_bytes()
            .rchunks(HEX_CHARS_PER_DIGIT)
            .map(|chunk| chunk.iter().fold(0, |acc, &c| (acc << 4) | hex_value(c)))
            .collect();
        digits.reverse();

        Ok(BigUint::normalized(digits))
    }
}

/// Value of an ASCII hex digit already known to be valid.
fn hex_value(c: u8) -> Digit {
    let value = match c {
        b'0'..=b'9' => c - b'0',
        b'a'..=b'f' => c - b'a' + 10,
        _ => c - b'A' + 10,
    };

    value as Digit
}

impl FromStr for BigUint {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BigUint::from_hex(s)
    }
}
