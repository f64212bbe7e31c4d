//! Shuffled PIN keypad core
//!
//! Platform-independent logic shared by every keypad front end:
//! generating a fresh random digit layout each time the keypad is shown,
//! and assembling the PIN from key events regardless of where each key was
//! drawn. Rendering, secure-window flags and masking are left to the host.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod assembler;
pub mod buffer;
pub mod digit;
pub mod error;
pub mod layout;
pub mod policy;

pub use assembler::{apply, apply_with, AssemblerOutcome, InputAssembler};
pub use buffer::{PinBuffer, INITIAL_CAPACITY};
pub use digit::{Digit, KeyEvent, DIGIT_COUNT};
pub use error::{Error, Result};
pub use layout::{Layout, LayoutGenerator};
pub use policy::{KeypadConfig, LengthPolicy, DEFAULT_MASK_CHAR};
