//! Keypad session
//!
//! One session is one keypad on screen: its own layout generator, the layout
//! currently shown, and its own assembler. Screen positions are translated to
//! logical digits here, before anything reaches the assembler.

use crate::{Error, Result};
use pinpad_core::{
    AssemblerOutcome, InputAssembler, KeyEvent, KeypadConfig, Layout, LayoutGenerator,
    PinBuffer,
};

/// A single keypad instance
#[derive(Debug)]
pub struct KeypadSession {
    generator: LayoutGenerator,
    layout: Option<Layout>,
    assembler: InputAssembler,
    config: KeypadConfig,
}

impl KeypadSession {
    /// Create a hidden keypad from a validated config
    pub fn new(config: KeypadConfig) -> Result<Self> {
        let policy = config.length_policy()?;
        let generator = match config.seed {
            Some(seed) => LayoutGenerator::seeded(seed),
            None => LayoutGenerator::new(),
        };

        Ok(Self {
            generator,
            layout: None,
            assembler: InputAssembler::with_policy(policy),
            config,
        })
    }

    /// Show the keypad with a freshly shuffled layout
    pub fn show(&mut self) -> &Layout {
        tracing::debug!(buffer_len = self.assembler.buffer().len(), "keypad shown");
        self.layout.insert(self.generator.generate())
    }

    /// Hide the keypad; the entered digits are kept
    pub fn hide(&mut self) {
        self.layout = None;
        tracing::debug!("keypad hidden");
    }

    /// Whether a layout is on screen
    pub fn is_visible(&self) -> bool {
        self.layout.is_some()
    }

    /// Layout on screen
    pub fn layout(&self) -> Option<&Layout> {
        self.layout.as_ref()
    }

    /// Tap the digit button at screen `position`
    pub fn tap(&mut self, position: usize) -> Result<AssemblerOutcome> {
        let layout = self.layout.as_ref().ok_or(Error::KeypadHidden)?;
        let event = layout
            .event_at(position)
            .ok_or(Error::InvalidPosition(position))?;
        Ok(self.assembler.process(event))
    }

    /// Tap the Clear button
    pub fn clear(&mut self) -> Result<AssemblerOutcome> {
        if !self.is_visible() {
            return Err(Error::KeypadHidden);
        }
        let outcome = self.assembler.process(KeyEvent::Clear);
        if self.config.reshuffle_on_clear {
            self.show();
        }
        Ok(outcome)
    }

    /// Tap the Done button
    pub fn done(&mut self) -> Result<AssemblerOutcome> {
        if !self.is_visible() {
            return Err(Error::KeypadHidden);
        }
        Ok(self.assembler.process(KeyEvent::Done))
    }

    /// Current buffer
    pub fn buffer(&self) -> &PinBuffer {
        self.assembler.buffer()
    }

    /// Masked buffer for display
    pub fn masked(&self) -> String {
        self.buffer().masked(self.config.mask_char)
    }

    /// Take the PIN finalized by the last Done
    pub fn take_pin(&mut self) -> Option<PinBuffer> {
        self.assembler.take_finalized()
    }

    /// Forget everything entered and hide the keypad
    pub fn reset(&mut self) {
        self.assembler.reset();
        self.hide();
    }

    /// Session configuration
    pub fn config(&self) -> &KeypadConfig {
        &self.config
    }
}
