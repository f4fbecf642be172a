use crate::error::{MrResult, RoughnessError};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

pub const LATIN_UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Ordered set of symbols a frequency table is kept over.
///
/// Symbols are stored uppercased, since the column splitter uppercases every
/// letter before it is tallied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<char>,
    lookup: HashMap<char, usize>,
}

impl Alphabet {
    pub fn new(symbols: &str) -> MrResult<Self> {
        let mut ordered = Vec::new();
        let mut lookup = HashMap::new();

        for raw in symbols.chars().filter(|c| !c.is_whitespace()) {
            let mut upper = raw.to_uppercase();
            let c = match (upper.next(), upper.next()) {
                (Some(c), None) => c,
                _ => {
                    return Err(RoughnessError::Config(format!(
                        "Alphabet symbol '{}' does not uppercase to a single character",
                        raw
                    )))
                }
            };

            if !c.is_alphabetic() {
                return Err(RoughnessError::Config(format!(
                    "Alphabet symbol '{}' is not a letter",
                    raw
                )));
            }

            if lookup.insert(c, ordered.len()).is_some() {
                return Err(RoughnessError::Config(format!(
                    "Alphabet contains duplicate symbol '{}'",
                    c
                )));
            }
            ordered.push(c);
        }

        if ordered.is_empty() {
            return Err(RoughnessError::Config("Alphabet is empty".to_string()));
        }

        Ok(Self {
            symbols: ordered,
            lookup,
        })
    }

    /// The 26-letter uppercase Latin alphabet.
    pub fn latin() -> Self {
        let symbols: Vec<char> = LATIN_UPPERCASE.chars().collect();
        let lookup = symbols.iter().enumerate().map(|(i, &c)| (c, i)).collect();
        Self { symbols, lookup }
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn index_of(&self, c: char) -> Option<usize> {
        self.lookup.get(&c).copied()
    }

    pub fn contains(&self, c: char) -> bool {
        self.lookup.contains_key(&c)
    }

    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::latin()
    }
}

impl FromStr for Alphabet {
    type Err = RoughnessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.symbols {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}
