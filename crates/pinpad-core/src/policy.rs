//! Host-configurable entry policy
//!
//! The core never imposes a PIN length. Hosts that want bounds opt in with a
//! [`LengthPolicy`], usually loaded as part of a [`KeypadConfig`].

use crate::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// Default mask character shown per entered digit
pub const DEFAULT_MASK_CHAR: char = '•';

/// Optional bounds on PIN length
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LengthPolicy {
    /// Done only finalizes once this many digits are entered
    pub min_len: usize,
    /// Digits beyond this length are ignored (`None` = unbounded)
    pub max_len: Option<usize>,
}

impl LengthPolicy {
    /// No bounds at all
    pub const UNBOUNDED: Self = Self {
        min_len: 0,
        max_len: None,
    };

    /// Validated policy
    pub fn new(min_len: usize, max_len: Option<usize>) -> Result<Self> {
        let policy = Self { min_len, max_len };
        policy.validate()?;
        Ok(policy)
    }

    /// Check bounds are consistent
    pub fn validate(&self) -> Result<()> {
        if let Some(max) = self.max_len {
            if max == 0 {
                return Err(Error::InvalidPolicy(
                    "max_len must be at least 1".to_string(),
                ));
            }
            if self.min_len > max {
                return Err(Error::InvalidPolicy(format!(
                    "min_len {} exceeds max_len {}",
                    self.min_len, max
                )));
            }
        }
        Ok(())
    }

    /// Whether another digit may be appended to a buffer of length `len`
    pub fn accepts_more(&self, len: usize) -> bool {
        self.max_len.map_or(true, |max| len < max)
    }

    /// Whether a buffer of length `len` may be finalized
    pub fn is_satisfied_by(&self, len: usize) -> bool {
        len >= self.min_len && self.max_len.map_or(true, |max| len <= max)
    }
}

/// Keypad configuration as loaded by a host
///
/// Every field is optional in JSON; missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct KeypadConfig {
    /// Minimum PIN length before Done finalizes
    pub min_len: usize,
    /// Maximum PIN length
    pub max_len: Option<usize>,
    /// Fixed RNG seed (deterministic layouts, demos and tests only)
    pub seed: Option<u64>,
    /// Character drawn per entered digit
    pub mask_char: char,
    /// Regenerate the layout after Clear
    pub reshuffle_on_clear: bool,
}

impl Default for KeypadConfig {
    fn default() -> Self {
        Self {
            min_len: 0,
            max_len: None,
            seed: None,
            mask_char: DEFAULT_MASK_CHAR,
            reshuffle_on_clear: false,
        }
    }
}

impl KeypadConfig {
    /// Parse from JSON text and validate
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.length_policy()?;
        Ok(config)
    }

    /// Load from a JSON file and validate
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_json_str(&json)
    }

    /// Length policy described by this config
    pub fn length_policy(&self) -> Result<LengthPolicy> {
        LengthPolicy::new(self.min_len, self.max_len)
    }
}
