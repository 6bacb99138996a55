use crate::core::table::SymbolTable;
use crate::core::types::{LETTER_GAP, WORD_GAP};
use crate::error::{ConversionError, Result};

/// Text <-> Morse transcription over a symbol table.
#[derive(Clone, Copy)]
pub struct MorseConverter {
    table: &'static SymbolTable,
}

impl Default for MorseConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl MorseConverter {
    pub fn new() -> Self {
        Self::with_table(SymbolTable::standard())
    }

    pub fn with_table(table: &'static SymbolTable) -> Self {
        Self { table }
    }

    /// Encodes whitespace-separated words. Codes within a word are joined by
    /// `LETTER_GAP`, words by `WORD_GAP`.
    pub fn to_morse(&self, text: &str) -> Result<String> {
        let mut result = String::with_capacity(text.len() * 4);

        for (i, word) in text.split_whitespace().enumerate() {
            if i > 0 {
                result.push_str(WORD_GAP);
            }
            for (j, c) in word.chars().enumerate() {
                let code = self
                    .table
                    .encode(c)
                    .ok_or(ConversionError::UnknownCharacter(c))?;
                if j > 0 {
                    result.push_str(LETTER_GAP);
                }
                result.push_str(code);
            }
        }

        Ok(result)
    }

    /// Decodes a Morse transcript into uppercase words joined by single spaces.
    ///
    /// A word gap is a run of three or more spaces or a line break; anything
    /// shorter separates letters.
    pub fn to_text(&self, morse: &str) -> Result<String> {
        let mut words = Vec::new();

        for word in morse_words(morse) {
            let decoded = word
                .split_whitespace()
                .map(|code| {
                    self.table
                        .decode(code)
                        .ok_or_else(|| ConversionError::UnknownMorseCode(code.to_string()))
                })
                .collect::<Result<String>>()?;
            words.push(decoded);
        }

        Ok(words.join(" "))
    }
}

fn morse_words(morse: &str) -> impl Iterator<Item = &str> {
    morse
        .lines()
        .flat_map(|line| line.split(WORD_GAP))
        .filter(|word| !word.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_letters_and_words() {
        let converter = MorseConverter::new();
        assert_eq!(converter.to_morse("SOS").unwrap(), "... --- ...");
        assert_eq!(converter.to_morse("sos").unwrap(), "... --- ...");
        assert_eq!(
            converter.to_morse("hi  there\nyou").unwrap(),
            ".... ..   - .... . .-. .   -.-- --- ..-"
        );
    }

    #[test]
    fn encodes_punctuation_from_the_table() {
        let converter = MorseConverter::new();
        assert_eq!(
            converter.to_morse("SOS ...").unwrap(),
            "... --- ...   .-.-.- .-.-.- .-.-.-"
        );
        assert_eq!(converter.to_morse("A-1").unwrap(), ".- -....- .----");
    }

    #[test]
    fn unknown_character_fails_whole_call() {
        let converter = MorseConverter::new();
        assert_eq!(
            converter.to_morse("hello #world"),
            Err(ConversionError::UnknownCharacter('#'))
        );
        assert_eq!(
            converter.to_morse("café"),
            Err(ConversionError::UnknownCharacter('é'))
        );
    }

    #[test]
    fn decodes_letters_and_words() {
        let converter = MorseConverter::new();
        assert_eq!(converter.to_text("... --- ...").unwrap(), "SOS");
        assert_eq!(
            converter.to_text(".... ..   - .... . .-. .").unwrap(),
            "HI THERE"
        );
    }

    #[test]
    fn tolerates_irregular_gaps() {
        let converter = MorseConverter::new();
        assert_eq!(converter.to_text("...  ---\t...").unwrap(), "SOS");
        assert_eq!(converter.to_text("....     ..").unwrap(), "H I");
        assert_eq!(converter.to_text("....      ..").unwrap(), "H I");
        assert_eq!(converter.to_text(".... ..\r\n.- -").unwrap(), "HI AT");
        assert_eq!(converter.to_text(".... ..\n\n\n.- -").unwrap(), "HI AT");
    }

    #[test]
    fn unknown_code_fails_whole_call() {
        let converter = MorseConverter::new();
        assert_eq!(
            converter.to_text("... ........ ..."),
            Err(ConversionError::UnknownMorseCode("........".into()))
        );
    }

    #[test]
    fn symmetric_word_gap() {
        let converter = MorseConverter::new();
        let morse = converter.to_morse("the quick brown fox 1.5").unwrap();
        assert_eq!(converter.to_text(&morse).unwrap(), "THE QUICK BROWN FOX 1.5");
    }
}
