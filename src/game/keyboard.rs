//! On-screen keyboard layout and key normalization.
//!
//! The keyboard defines the guessable alphabet: a character is guessable iff it
//! has a button. Physical key presses and button clicks both pass through
//! [`key_from_event`] / [`normalize`] before reaching the session.

/// Letters section, rendered first.
pub const LETTERS: [char; 26] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S',
    'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// Digits and punctuation, rendered after a divider.
pub const OTHERS: [char; 16] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', '\'', '-', '&', '.', '!', '?',
];

/// Keyboard sections in display order.
pub const SECTIONS: [&[char]; 2] = [&LETTERS, &OTHERS];

/// Every key on the keyboard, in display order.
pub fn all_keys() -> impl Iterator<Item = char> {
    SECTIONS.iter().flat_map(|section| section.iter().copied())
}

/// Uppercase `c` and return it if it has a key.
pub fn normalize(c: char) -> Option<char> {
    let upper = c.to_ascii_uppercase();
    all_keys().any(|k| k == upper).then_some(upper)
}

/// Map a DOM `KeyboardEvent.key` value (or a button label) to a guessable key.
/// Multi-character names like "Shift" or "F5" map to `None`.
pub fn key_from_event(key: &str) -> Option<char> {
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => normalize(c),
        _ => None,
    }
}

/// Visual state of a key button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyMark {
    Available,
    Correct,
    Wrong,
}

impl KeyMark {
    /// CSS class added to the button, if any.
    pub fn class_name(self) -> Option<&'static str> {
        match self {
            KeyMark::Available => None,
            KeyMark::Correct => Some("correct"),
            KeyMark::Wrong => Some("wrong"),
        }
    }
}
