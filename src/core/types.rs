// src/core/types.rs
use serde::Serialize;

pub const DOT: char = '.';
pub const DASH: char = '-';

/// Separator between the codes of one word.
pub const LETTER_GAP: &str = " ";
/// Separator between words in a Morse transcript.
pub const WORD_GAP: &str = "   ";

/// Which way a conversion went.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Plain text was encoded into Morse.
    ToMorse,
    /// Morse was decoded into uppercase text.
    ToText,
}

/// The outcome of a single successful conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Conversion {
    pub direction: Direction,
    pub output: String,
}
