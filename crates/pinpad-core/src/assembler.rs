//! PIN input assembly
//!
//! Turns a stream of [`KeyEvent`]s into a [`PinBuffer`]:
//!
//! | Event      | Effect                                    |
//! |------------|-------------------------------------------|
//! | `Digit(d)` | append `d`                                |
//! | `Clear`    | empty the buffer                          |
//! | `Done`     | buffer unchanged, snapshot handed to host |
//!
//! Every event is valid in every state. The buffer only ever holds logical
//! digits; where a key was drawn on screen is irrelevant here.

use crate::buffer::PinBuffer;
use crate::digit::KeyEvent;
use crate::policy::LengthPolicy;

/// Pure transition with no length policy
pub fn apply(event: KeyEvent, buffer: PinBuffer) -> PinBuffer {
    apply_with(&LengthPolicy::UNBOUNDED, event, buffer)
}

/// Pure transition honoring `policy.max_len`
pub fn apply_with(policy: &LengthPolicy, event: KeyEvent, mut buffer: PinBuffer) -> PinBuffer {
    match event {
        KeyEvent::Digit(digit) => {
            if policy.accepts_more(buffer.len()) {
                buffer.push(digit);
            }
        }
        KeyEvent::Clear => buffer.clear(),
        KeyEvent::Done => {}
    }
    buffer
}

/// What handling an event did, for the host to react to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssemblerOutcome {
    /// Buffer changed; re-render the mask
    Updated {
        /// New buffer length
        len: usize,
    },
    /// Digit dropped because `max_len` was reached
    Ignored {
        /// Unchanged buffer length
        len: usize,
    },
    /// Done with a buffer that satisfies the policy
    Finalized(PinBuffer),
    /// Done before `min_len` digits were entered; buffer unchanged
    Incomplete {
        /// Current buffer length
        len: usize,
        /// Required length
        min_len: usize,
    },
}

/// Stateful assembler owning one keypad's buffer
///
/// Each keypad instance owns its own assembler; nothing is shared.
#[derive(Debug, Clone, Default)]
pub struct InputAssembler {
    buffer: PinBuffer,
    policy: LengthPolicy,
    finalized: Option<PinBuffer>,
}

impl InputAssembler {
    /// Unbounded assembler
    pub fn new() -> Self {
        Self::default()
    }

    /// Assembler with a host length policy
    pub fn with_policy(policy: LengthPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    /// Active policy
    pub fn policy(&self) -> &LengthPolicy {
        &self.policy
    }

    /// Handle one event and return the current buffer
    pub fn handle(&mut self, event: KeyEvent) -> &PinBuffer {
        self.process(event);
        &self.buffer
    }

    /// Handle one event and report what happened
    pub fn process(&mut self, event: KeyEvent) -> AssemblerOutcome {
        let outcome = match event {
            KeyEvent::Digit(digit) => {
                if self.policy.accepts_more(self.buffer.len()) {
                    self.buffer.push(digit);
                    AssemblerOutcome::Updated {
                        len: self.buffer.len(),
                    }
                } else {
                    AssemblerOutcome::Ignored {
                        len: self.buffer.len(),
                    }
                }
            }
            KeyEvent::Clear => {
                self.buffer.clear();
                self.finalized = None;
                AssemblerOutcome::Updated { len: 0 }
            }
            KeyEvent::Done => {
                let len = self.buffer.len();
                if self.policy.is_satisfied_by(len) {
                    let snapshot = self.buffer.clone();
                    self.finalized = Some(snapshot.clone());
                    AssemblerOutcome::Finalized(snapshot)
                } else {
                    AssemblerOutcome::Incomplete {
                        len,
                        min_len: self.policy.min_len,
                    }
                }
            }
        };

        tracing::trace!(event = event.kind(), len = self.buffer.len(), "key event handled");
        outcome
    }

    /// Current buffer
    pub fn buffer(&self) -> &PinBuffer {
        &self.buffer
    }

    /// Snapshot from the last successful Done, if any
    pub fn finalized(&self) -> Option<&PinBuffer> {
        self.finalized.as_ref()
    }

    /// Take the last finalized snapshot
    pub fn take_finalized(&mut self) -> Option<PinBuffer> {
        self.finalized.take()
    }

    /// Drop the buffer and any finalized snapshot
    pub fn reset(&mut self) {
        self.buffer.clear();
        self.finalized = None;
    }
}
