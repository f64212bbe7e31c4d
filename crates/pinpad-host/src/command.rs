//! Input line parsing for terminal hosts

use crate::render::slot_position;
use crate::{Error, Result};

/// Host command parsed from user input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Tap the digit button at a screen position
    Tap(usize),
    /// Tap Clear
    Clear,
    /// Tap Done
    Done,
    /// Show the keypad with a new layout
    Show,
    /// Hide the keypad
    Hide,
    /// Leave the host
    Quit,
}

fn parse_word(word: &str, out: &mut Vec<Command>) -> Result<()> {
    let command = match word.to_ascii_lowercase().as_str() {
        "clear" | "x" => Command::Clear,
        "done" | "ok" => Command::Done,
        "show" | "shuffle" => Command::Show,
        "hide" => Command::Hide,
        "quit" | "exit" | "q" => Command::Quit,
        _ => {
            // A run of slot letters taps each slot in turn
            let taps = word
                .chars()
                .map(slot_position)
                .collect::<Option<Vec<_>>>()
                .ok_or_else(|| Error::UnknownCommand(word.to_string()))?;
            out.extend(taps.into_iter().map(Command::Tap));
            return Ok(());
        }
    };
    out.push(command);
    Ok(())
}

/// Parse one line into the commands it contains, in order
pub fn parse_line(line: &str) -> Result<Vec<Command>> {
    let words = shlex::split(line).ok_or_else(|| Error::UnknownCommand(line.to_string()))?;
    let mut commands = Vec::new();
    for word in &words {
        parse_word(word, &mut commands)?;
    }
    Ok(commands)
}
