//! PIN buffer
//!
//! Holds the logical digits entered so far. Storage is wiped on drop and on
//! clear, and `Debug` only ever reveals the length so a buffer can be logged
//! or inspected without exposing the PIN.

use crate::digit::Digit;
use std::fmt;
use zeroize::{Zeroize, Zeroizing};

/// Initial storage reserved for a buffer, enough for any common PIN
pub const INITIAL_CAPACITY: usize = 16;

/// Ordered sequence of entered digits
#[derive(Clone, PartialEq, Eq)]
pub struct PinBuffer {
    digits: Zeroizing<Vec<u8>>,
}

impl Default for PinBuffer {
    fn default() -> Self {
        Self {
            digits: Zeroizing::new(Vec::with_capacity(INITIAL_CAPACITY)),
        }
    }
}

impl PinBuffer {
    /// Empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Buffer holding `digits` in order
    pub fn from_digits(digits: &[Digit]) -> Self {
        let mut values = Vec::with_capacity(digits.len().max(INITIAL_CAPACITY));
        values.extend(digits.iter().map(|d| d.value()));
        Self {
            digits: Zeroizing::new(values),
        }
    }

    /// Append a digit to the end
    pub fn push(&mut self, digit: Digit) {
        if self.digits.len() == self.digits.capacity() {
            self.grow();
        }
        self.digits.push(digit.value());
    }

    /// Move into a larger allocation, wiping the old one
    ///
    /// `Vec::push` would reallocate and free the old storage without zeroing it.
    fn grow(&mut self) {
        let capacity = (self.digits.capacity() * 2).max(INITIAL_CAPACITY);
        let mut larger = Vec::with_capacity(capacity);
        larger.extend_from_slice(&self.digits);
        // Dropping the previous `Zeroizing` wipes its whole allocation.
        self.digits = Zeroizing::new(larger);
    }

    /// Reserved storage, in digits
    pub fn capacity(&self) -> usize {
        self.digits.capacity()
    }

    /// Empty the buffer, wiping previous contents
    pub fn clear(&mut self) {
        self.digits.zeroize();
    }

    /// Number of digits entered
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// Whether nothing has been entered
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Digit values in entry order
    pub fn as_values(&self) -> &[u8] {
        &self.digits
    }

    /// Digits in entry order
    pub fn digits(&self) -> impl Iterator<Item = Digit> + '_ {
        self.digits
            .iter()
            .filter_map(|&v| Digit::new(v).ok())
    }

    /// PIN as a string, for hosts that submit it
    pub fn to_pin_string(&self) -> Zeroizing<String> {
        Zeroizing::new(self.digits().map(Digit::as_char).collect())
    }

    /// One mask character per entered digit
    pub fn masked(&self, mask: char) -> String {
        std::iter::repeat(mask).take(self.len()).collect()
    }
}

impl fmt::Debug for PinBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PinBuffer")
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}
