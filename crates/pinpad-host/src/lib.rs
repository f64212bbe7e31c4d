//! Host-side glue for shuffled PIN keypads
//!
//! Everything a thin rendering layer needs on top of `pinpad-core`: a
//! per-keypad session that maps screen positions to digits, plain-text
//! rendering of the grid and the masked PIN, and input command parsing.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod command;
pub mod error;
pub mod render;
pub mod session;

pub use command::{parse_line, Command};
pub use error::{Error, Result};
pub use render::{render_keypad, render_mask, slot_position, SLOT_KEYS};
pub use session::KeypadSession;
