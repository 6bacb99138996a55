// --- File: src/core/table.rs
use crate::core::types::{DASH, DOT};
use std::collections::HashMap;
use std::sync::OnceLock;
use thiserror::Error;

/// International Morse code: letters, digits and the ITU punctuation set.
#[rustfmt::skip]
const ALPHABET: &[(char, &str)] = &[
    ('A', ".-"), ('B', "-..."), ('C', "-.-."), ('D', "-.."), ('E', "."),
    ('F', "..-."), ('G', "--."), ('H', "...."), ('I', ".."), ('J', ".---"),
    ('K', "-.-"), ('L', ".-.."), ('M', "--"), ('N', "-."), ('O', "---"),
    ('P', ".--."), ('Q', "--.-"), ('R', ".-."), ('S', "..."), ('T', "-"),
    ('U', "..-"), ('V', "...-"), ('W', ".--"), ('X', "-..-"), ('Y', "-.--"),
    ('Z', "--.."),
    ('0', "-----"), ('1', ".----"), ('2', "..---"), ('3', "...--"), ('4', "....-"),
    ('5', "....."), ('6', "-...."), ('7', "--..."), ('8', "---.."), ('9', "----."),
    ('.', ".-.-.-"), (',', "--..--"), ('?', "..--.."), ('\'', ".----."),
    ('!', "-.-.--"), ('/', "-..-."), ('(', "-.--."), (')', "-.--.-"),
    ('&', ".-..."), (':', "---..."), (';', "-.-.-."), ('=', "-...-"),
    ('+', ".-.-."), ('-', "-....-"), ('_', "..--.-"), ('"', ".-..-."),
    ('$', "...-..-"), ('@', ".--.-."),
];

/// Reasons a set of entries cannot form a symbol table.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error("character {0:?} appears more than once")]
    DuplicateCharacter(char),
    #[error("Morse sequence {0:?} is assigned to more than one character")]
    DuplicateSequence(String),
    #[error("entry {0:?} must pair an uppercase character with a non-empty dot/dash sequence")]
    InvalidSequence(String),
}

// --- Decode side: a binary trie, one edge per symbol ---

#[derive(Clone, Default)]
struct SymbolNode {
    /// Child reached by `.` (index 0) or `-` (index 1).
    children: [Option<usize>; 2],
    symbol: Option<char>,
}

fn edge(symbol: char) -> Option<usize> {
    match symbol {
        DOT => Some(0),
        DASH => Some(1),
        _ => None,
    }
}

/// Single-character uppercase of `c`; `c` itself when the uppercase form
/// expands to several characters (`ß` -> `SS`).
fn upper(c: char) -> char {
    let mut mapped = c.to_uppercase();
    match (mapped.next(), mapped.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

/// Immutable two-way mapping between characters and Morse sequences.
///
/// Construction rejects any entry set that is not a bijection, so a value of
/// this type always decodes every sequence it encodes back to the same
/// character.
#[derive(Clone)]
pub struct SymbolTable {
    codes: HashMap<char, &'static str>,
    nodes: Vec<SymbolNode>,
}

impl SymbolTable {
    pub fn from_entries(entries: &[(char, &'static str)]) -> Result<Self, TableError> {
        let mut table = Self {
            codes: HashMap::with_capacity(entries.len()),
            nodes: vec![SymbolNode::default()],
        };
        for &(c, code) in entries {
            table.insert(c, code)?;
        }
        Ok(table)
    }

    /// The process-wide standard table, built on first use.
    pub fn standard() -> &'static SymbolTable {
        static STANDARD: OnceLock<SymbolTable> = OnceLock::new();
        STANDARD.get_or_init(|| {
            SymbolTable::from_entries(ALPHABET).expect("built-in Morse alphabet is a bijection")
        })
    }

    /// O(k) in the sequence length.
    fn insert(&mut self, c: char, code: &'static str) -> Result<(), TableError> {
        if code.is_empty() || c.is_lowercase() || c.is_whitespace() {
            return Err(TableError::InvalidSequence(format!("{c} {code}")));
        }
        if self.codes.contains_key(&c) {
            return Err(TableError::DuplicateCharacter(c));
        }

        let mut node_idx = 0;
        for symbol in code.chars() {
            let slot = edge(symbol).ok_or_else(|| TableError::InvalidSequence(code.to_string()))?;
            node_idx = match self.nodes[node_idx].children[slot] {
                Some(next) => next,
                None => {
                    let next = self.nodes.len();
                    self.nodes.push(SymbolNode::default());
                    self.nodes[node_idx].children[slot] = Some(next);
                    next
                }
            };
        }

        if self.nodes[node_idx].symbol.is_some() {
            return Err(TableError::DuplicateSequence(code.to_string()));
        }
        self.nodes[node_idx].symbol = Some(c);
        self.codes.insert(c, code);
        Ok(())
    }

    /// Morse sequence for `c`, looked up by its uppercase form.
    pub fn encode(&self, c: char) -> Option<&'static str> {
        self.codes.get(&upper(c)).copied()
    }

    /// Character for a single dot/dash group. Anything else, including the
    /// empty string, is unknown.
    pub fn decode(&self, code: &str) -> Option<char> {
        let mut node_idx = 0;
        for symbol in code.chars() {
            node_idx = self.nodes[node_idx].children[edge(symbol)?]?;
        }
        self.nodes[node_idx].symbol
    }

    pub fn entries(&self) -> impl Iterator<Item = (char, &'static str)> + '_ {
        self.codes.iter().map(|(&c, &code)| (c, code))
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

/// Encodes one character with the standard table.
pub fn encode(c: char) -> Option<&'static str> {
    SymbolTable::standard().encode(c)
}

/// Decodes one Morse sequence with the standard table.
pub fn decode(code: &str) -> Option<char> {
    SymbolTable::standard().decode(code)
}
