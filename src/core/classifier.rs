// File: src/core/classifier.rs
use crate::core::types::{DASH, DOT};
use crate::error::ConversionError;
use unicode_general_category::{get_general_category, GeneralCategory};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    Empty,
    Ambiguous,
}

impl From<RejectReason> for ConversionError {
    fn from(reason: RejectReason) -> Self {
        match reason {
            RejectReason::Empty => ConversionError::EmptyInput,
            RejectReason::Ambiguous => ConversionError::Ambiguous,
        }
    }
}

/// What a piece of input is. Text and Morse carry the trimmed input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification<'a> {
    Text(&'a str),
    Morse(&'a str),
    Rejected(RejectReason),
}

/// Letters (any `L*` category) and decimal digits (`Nd`). Marks, fractions,
/// superscripts and letter-like numerals such as `Ⅻ` do not count.
pub fn is_letter_or_digit(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
            | GeneralCategory::DecimalNumber
    )
}

/// True when `s` holds at least one letter or decimal digit, in any script.
pub fn has_letter_or_digit(s: &str) -> bool {
    s.chars().any(is_letter_or_digit)
}

/// True when `s` holds only dots, dashes and whitespace.
pub fn is_morse_symbols(s: &str) -> bool {
    s.chars().all(|c| c == DOT || c == DASH || c.is_whitespace())
}

/// Decides which way `input` should be converted.
///
/// Any letter or decimal digit means text, whatever else surrounds it. Only
/// input built purely from dots, dashes and whitespace is read as Morse.
pub fn classify(input: &str) -> Classification<'_> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        Classification::Rejected(RejectReason::Empty)
    } else if has_letter_or_digit(trimmed) {
        Classification::Text(trimmed)
    } else if is_morse_symbols(trimmed) {
        Classification::Morse(trimmed)
    } else {
        Classification::Rejected(RejectReason::Ambiguous)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predicates() {
        assert!(has_letter_or_digit("...a"));
        assert!(has_letter_or_digit("٣"));
        assert!(has_letter_or_digit("ж"));
        assert!(has_letter_or_digit("中"));
        assert!(has_letter_or_digit("ǅ"));
        assert!(!has_letter_or_digit("... --- ..."));
        assert!(is_morse_symbols("... ---\n..."));
        assert!(is_morse_symbols("\t.-"));
        assert!(!is_morse_symbols(".-/"));
    }

    #[test]
    fn letters_mean_text() {
        assert_eq!(classify("SOS"), Classification::Text("SOS"));
        assert_eq!(classify("  hi there \n"), Classification::Text("hi there"));
        assert_eq!(classify("SOS ..."), Classification::Text("SOS ..."));
        assert_eq!(classify("#1"), Classification::Text("#1"));
    }

    #[test]
    fn dots_and_dashes_mean_morse() {
        assert_eq!(classify(" ... --- ... "), Classification::Morse("... --- ..."));
        assert_eq!(classify("-"), Classification::Morse("-"));
        assert_eq!(classify(".-\n-..."), Classification::Morse(".-\n-..."));
    }

    #[test]
    fn everything_else_is_rejected() {
        assert_eq!(classify(""), Classification::Rejected(RejectReason::Empty));
        assert_eq!(classify(" \t\n "), Classification::Rejected(RejectReason::Empty));
        assert_eq!(classify("#$%"), Classification::Rejected(RejectReason::Ambiguous));
        assert_eq!(classify("... / ---"), Classification::Rejected(RejectReason::Ambiguous));
    }

    #[test]
    fn number_forms_and_marks_are_not_letters_or_digits() {
        for c in ['½', '²', 'Ⅻ', '\u{093E}', '\u{0301}', '€'] {
            assert!(!is_letter_or_digit(c), "{c:?}");
            assert_eq!(
                classify(&c.to_string()),
                Classification::Rejected(RejectReason::Ambiguous),
                "{c:?}"
            );
        }
        assert_eq!(classify("½ ..."), Classification::Rejected(RejectReason::Ambiguous));
        assert_eq!(classify("½ a"), Classification::Text("½ a"));
    }

    #[test]
    fn reasons_map_to_errors() {
        assert_eq!(ConversionError::from(RejectReason::Empty), ConversionError::EmptyInput);
        assert_eq!(ConversionError::from(RejectReason::Ambiguous), ConversionError::Ambiguous);
    }
}
