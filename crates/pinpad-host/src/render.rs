//! Text rendering for terminal hosts
//!
//! Buttons are drawn phone-style, three per row, with Clear and Done either
//! side of the last digit. Each digit button carries a fixed slot letter so a
//! keyboard user can "tap" a screen position without typing the digit.

use pinpad_core::{Layout, DIGIT_COUNT};

/// Slot letters for screen positions 0-9
pub const SLOT_KEYS: [char; DIGIT_COUNT] = ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j'];

/// Screen position for a slot letter
pub fn slot_position(key: char) -> Option<usize> {
    SLOT_KEYS
        .iter()
        .position(|k| *k == key.to_ascii_lowercase())
}

fn digit_cell(layout: &Layout, position: usize) -> String {
    match layout.digit_at(position) {
        Some(digit) => format!(" {}:{} ", SLOT_KEYS[position], digit),
        None => "     ".to_string(),
    }
}

/// Render the keypad grid for `layout`
pub fn render_keypad(layout: &Layout) -> String {
    let border = "+-----+-----+-----+";
    let mut out = String::new();
    out.push_str(border);
    out.push('\n');

    for row in 0..3 {
        out.push('|');
        for col in 0..3 {
            out.push_str(&digit_cell(layout, row * 3 + col));
            out.push('|');
        }
        out.push('\n');
        out.push_str(border);
        out.push('\n');
    }

    out.push_str(&format!("|  C  |{}| OK  |\n", digit_cell(layout, 9)));
    out.push_str(border);
    out
}

/// Render the masked PIN line
pub fn render_mask(masked: &str) -> String {
    if masked.is_empty() {
        "PIN: _".to_string()
    } else {
        format!("PIN: {}", masked)
    }
}
