//! Randomized keypad layouts
//!
//! A [`Layout`] assigns the ten digits to the ten digit-button positions for
//! one keypad display. A fresh layout is generated every time the keypad is
//! shown; layouts are never mutated after creation.
//!
//! Shuffling uses `SliceRandom::shuffle` (Fisher-Yates), which makes each of
//! the 10! orderings equally likely. The randomness does not need to be
//! cryptographic: it protects the on-screen position of a key, not the
//! digit itself.

use crate::digit::{Digit, KeyEvent, DIGIT_COUNT};
use crate::{Error, Result};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{RngCore, SeedableRng};
use std::fmt;

/// Permutation of the ten digits over the keypad button positions
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Layout {
    keys: [Digit; DIGIT_COUNT],
}

impl Layout {
    /// Identity layout (`0123456789`), the unshuffled order
    pub fn ordered() -> Self {
        Self { keys: Digit::ALL }
    }

    /// Build a layout from explicit values
    ///
    /// Fails unless `values` contains each digit 0-9 exactly once.
    pub fn from_values(values: &[u8]) -> Result<Self> {
        if values.len() != DIGIT_COUNT {
            return Err(Error::InvalidLayout(format!(
                "expected {} keys, got {}",
                DIGIT_COUNT,
                values.len()
            )));
        }

        let mut seen = [false; DIGIT_COUNT];
        let mut keys = Digit::ALL;
        for (slot, &value) in keys.iter_mut().zip(values) {
            let digit = Digit::new(value).map_err(|e| Error::InvalidLayout(e.to_string()))?;
            let idx = usize::from(digit.value());
            if seen[idx] {
                return Err(Error::InvalidLayout(format!("digit {} appears twice", digit)));
            }
            seen[idx] = true;
            *slot = digit;
        }

        Ok(Self { keys })
    }

    /// Digit drawn at screen position `position`
    pub fn digit_at(&self, position: usize) -> Option<Digit> {
        self.keys.get(position).copied()
    }

    /// Key event a tap on `position` produces
    ///
    /// The label on the button is the digit, so translating a tap back to a
    /// logical digit is a plain lookup.
    pub fn event_at(&self, position: usize) -> Option<KeyEvent> {
        self.digit_at(position).map(KeyEvent::Digit)
    }

    /// Screen position of `digit`
    pub fn position_of(&self, digit: Digit) -> usize {
        // Every digit is present exactly once.
        self.keys
            .iter()
            .position(|d| *d == digit)
            .unwrap_or_default()
    }

    /// Keys in screen order
    pub fn keys(&self) -> &[Digit; DIGIT_COUNT] {
        &self.keys
    }

    /// Iterate keys in screen order
    pub fn iter(&self) -> impl Iterator<Item = Digit> + '_ {
        self.keys.iter().copied()
    }

    /// Check the permutation invariant
    pub fn is_permutation(&self) -> bool {
        let mut seen = [false; DIGIT_COUNT];
        for d in &self.keys {
            let idx = usize::from(d.value());
            if seen[idx] {
                return false;
            }
            seen[idx] = true;
        }
        seen.iter().all(|s| *s)
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for d in &self.keys {
            write!(f, "{}", d)?;
        }
        Ok(())
    }
}

/// Produces a fresh shuffled [`Layout`] on every keypad show
///
/// Each generator owns its RNG. Two keypads on screen at the same time should
/// each hold their own generator; nothing is shared between instances and no
/// history of past layouts is kept.
pub struct LayoutGenerator<R: RngCore = StdRng> {
    rng: R,
}

impl LayoutGenerator<StdRng> {
    /// Generator seeded from OS entropy
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic generator for tests and demos
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for LayoutGenerator<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RngCore> LayoutGenerator<R> {
    /// Generator over a caller-provided RNG
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Generate a new uniformly random layout
    pub fn generate(&mut self) -> Layout {
        let mut keys = Digit::ALL;
        keys.shuffle(&mut self.rng);
        tracing::debug!("keypad layout generated");
        Layout { keys }
    }
}

impl<R: RngCore> fmt::Debug for LayoutGenerator<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LayoutGenerator").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_layout_is_permutation() {
        let mut generator = LayoutGenerator::new();
        for _ in 0..1_000 {
            let layout = generator.generate();
            assert!(layout.is_permutation());

            let mut values: Vec<u8> = layout.iter().map(Digit::value).collect();
            values.sort_unstable();
            assert_eq!(values, (0..10).collect::<Vec<u8>>());
        }
    }

    #[test]
    fn test_generate_does_not_touch_previous_layout() {
        let mut generator = LayoutGenerator::seeded(7);
        let first = generator.generate();
        let snapshot = first.clone();
        let _second = generator.generate();
        assert_eq!(first, snapshot);
    }

    #[test]
    fn test_seeded_generators_are_reproducible() {
        let mut a = LayoutGenerator::seeded(42);
        let mut b = LayoutGenerator::seeded(42);
        for _ in 0..10 {
            assert_eq!(a.generate(), b.generate());
        }
    }

    #[test]
    fn test_layouts_vary() {
        let mut generator = LayoutGenerator::seeded(1);
        let first = generator.generate();
        let differs = (0..20).any(|_| generator.generate() != first);
        assert!(differs);
    }

    #[test]
    fn test_from_values_validation() {
        assert!(Layout::from_values(&[4, 0, 7, 2, 9, 1, 3, 6, 8, 5]).is_ok());
        // Too short
        assert!(Layout::from_values(&[0, 1, 2]).is_err());
        // Duplicate
        assert!(Layout::from_values(&[0, 0, 2, 3, 4, 5, 6, 7, 8, 9]).is_err());
        // Out of range
        assert!(Layout::from_values(&[10, 1, 2, 3, 4, 5, 6, 7, 8, 9]).is_err());
    }

    #[test]
    fn test_position_lookup() {
        let layout = Layout::from_values(&[4, 0, 7, 2, 9, 1, 3, 6, 8, 5]).unwrap();
        assert_eq!(layout.digit_at(0).unwrap().value(), 4);
        assert_eq!(layout.digit_at(5).unwrap().value(), 1);
        assert_eq!(layout.digit_at(10), None);
        assert_eq!(layout.position_of(Digit::new(5).unwrap()), 9);
        assert_eq!(
            layout.event_at(2),
            Some(KeyEvent::Digit(Digit::new(7).unwrap()))
        );
        assert_eq!(layout.to_string(), "4072913685");
    }

    #[test]
    fn test_ordered_layout() {
        let layout = Layout::ordered();
        assert!(layout.is_permutation());
        assert_eq!(layout.to_string(), "0123456789");
    }
}
