//! Digits and key events
//!
//! A [`Digit`] is the logical identity of a key, independent of where the
//! key was drawn on screen. Range checking happens once, at construction,
//! so every downstream operation can take a `Digit` without validating it.

use crate::{Error, Result};
use std::fmt;

/// Number of distinct digit keys on the keypad
pub const DIGIT_COUNT: usize = 10;

/// A decimal digit in `0..=9`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Digit(u8);

impl Digit {
    /// All digits in ascending order
    pub const ALL: [Digit; DIGIT_COUNT] = [
        Digit(0),
        Digit(1),
        Digit(2),
        Digit(3),
        Digit(4),
        Digit(5),
        Digit(6),
        Digit(7),
        Digit(8),
        Digit(9),
    ];

    /// Create a digit, rejecting values above 9
    pub fn new(value: u8) -> Result<Self> {
        if usize::from(value) >= DIGIT_COUNT {
            return Err(Error::InvalidDigit(format!(
                "{} is outside the range 0-9",
                value
            )));
        }
        Ok(Self(value))
    }

    /// Parse a single ASCII digit character
    pub fn from_char(c: char) -> Result<Self> {
        c.to_digit(10)
            .map(|v| Self(v as u8))
            .ok_or_else(|| Error::InvalidDigit(format!("'{}' is not a decimal digit", c)))
    }

    /// Numeric value
    pub fn value(self) -> u8 {
        self.0
    }

    /// ASCII character for this digit
    pub fn as_char(self) -> char {
        char::from(b'0' + self.0)
    }
}

impl TryFrom<u8> for Digit {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> u8 {
        digit.0
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Abstract keypad input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyEvent {
    /// A digit key was pressed
    Digit(Digit),
    /// Clear the whole buffer
    Clear,
    /// Finish entry and hand the buffer to the host
    Done,
}

impl KeyEvent {
    /// Build a digit event from a raw value, rejecting values above 9
    pub fn digit(value: u8) -> Result<Self> {
        Digit::new(value).map(KeyEvent::Digit)
    }

    /// Event kind for logging (never includes the digit value)
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Digit(_) => "digit",
            Self::Clear => "clear",
            Self::Done => "done",
        }
    }
}

impl From<Digit> for KeyEvent {
    fn from(digit: Digit) -> Self {
        KeyEvent::Digit(digit)
    }
}
