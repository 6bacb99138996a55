use crate::core::classifier::{classify, Classification};
use crate::core::converter::MorseConverter;
use crate::core::types::{Conversion, Direction};
use crate::error::{ConversionError, Result};

/// Auto-detecting front end: classifies the input, then converts it the
/// other way. Holds no mutable state and can be shared freely across threads.
#[derive(Clone, Copy, Default)]
pub struct MorseEngine {
    converter: MorseConverter,
}

impl MorseEngine {
    pub fn new() -> Self {
        Self { converter: MorseConverter::new() }
    }

    pub fn convert(&self, raw_input: &str) -> Result<String> {
        self.convert_detailed(raw_input).map(|conversion| conversion.output)
    }

    pub fn convert_detailed(&self, raw_input: &str) -> Result<Conversion> {
        let (direction, output) = match classify(raw_input) {
            Classification::Text(text) => (Direction::ToMorse, self.converter.to_morse(text)?),
            Classification::Morse(morse) => (Direction::ToText, self.converter.to_text(morse)?),
            Classification::Rejected(reason) => return Err(reason.into()),
        };

        // Classified input is never empty, so neither may the result be.
        if output.is_empty() {
            return Err(ConversionError::EmptyOutput);
        }

        Ok(Conversion { direction, output })
    }
}

/// Converts `raw_input` with the standard symbol table.
pub fn convert(raw_input: &str) -> Result<String> {
    MorseEngine::new().convert(raw_input)
}
