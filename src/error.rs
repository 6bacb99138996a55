//! Error types for text/Morse conversion.

use thiserror::Error;

/// Why a conversion call failed. Every variant is terminal for the call:
/// no partial output is ever produced.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConversionError {
    /// Nothing left after trimming surrounding whitespace.
    #[error("input is empty")]
    EmptyInput,

    /// The input has no letters or digits, yet is not made of dots, dashes
    /// and whitespace either.
    #[error("input is ambiguous: not plain text or valid Morse code")]
    Ambiguous,

    /// The text contains a character the symbol table cannot encode.
    #[error("character {0:?} has no Morse code")]
    UnknownCharacter(char),

    /// A dot/dash group does not correspond to any character.
    #[error("Morse code {0:?} does not map to a character")]
    UnknownMorseCode(String),

    /// Non-empty input produced no output.
    ///
    /// The classifier and the symbol table disagree when this happens.
    #[error("conversion of non-empty input produced no output")]
    EmptyOutput,
}

impl ConversionError {
    /// Stable kind label for logs and API error bodies.
    pub fn code(&self) -> &'static str {
        match self {
            ConversionError::EmptyInput => "EMPTY_INPUT",
            ConversionError::Ambiguous => "AMBIGUOUS",
            ConversionError::UnknownCharacter(_) => "UNKNOWN_CHARACTER",
            ConversionError::UnknownMorseCode(_) => "UNKNOWN_MORSE_CODE",
            ConversionError::EmptyOutput => "EMPTY_OUTPUT",
        }
    }
}

/// A specialized `Result` type for conversion operations.
pub type Result<T> = std::result::Result<T, ConversionError>;
