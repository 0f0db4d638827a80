//! Vertical whitespace normalization stage
//!
//! Itineraries written by hand often carry escaped line breaks (`\n` typed as
//! two characters) or stray control characters. All of them become a plain
//! `\n` so the written output shows a real line break.
//!
//! Replaced:
//! - the escape sequences `\n`, `\r`, `\v`, `\f` (backslash + letter)
//! - the raw characters vertical tab (U+000B), form feed (U+000C) and
//!   carriage return (U+000D)

use crate::itinerary::transforms::Runnable;

const ESCAPE_SEQUENCES: [&str; 4] = ["\\n", "\\r", "\\v", "\\f"];
const CONTROL_CHARACTERS: [char; 3] = ['\u{000B}', '\u{000C}', '\r'];

/// Replace every vertical-whitespace spelling with `\n`
pub fn normalize(line: &str) -> String {
    let unescaped = ESCAPE_SEQUENCES
        .iter()
        .fold(line.to_string(), |acc, escape| acc.replace(escape, "\n"));
    unescaped.replace(&CONTROL_CHARACTERS[..], "\n")
}

/// Vertical whitespace normalization stage
pub struct NormalizeVerticalWhitespace;

impl NormalizeVerticalWhitespace {
    pub fn new() -> Self {
        NormalizeVerticalWhitespace
    }
}

impl Default for NormalizeVerticalWhitespace {
    fn default() -> Self {
        Self::new()
    }
}

impl Runnable<String, String> for NormalizeVerticalWhitespace {
    fn run(&self, input: String) -> String {
        normalize(&input)
    }
}
