use crate::alphabet::Alphabet;

/// Per-symbol occurrence counts for one column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    pub counts: Vec<u64>,
    pub total: u64,
}

impl FrequencyTable {
    pub fn empty(alphabet: &Alphabet) -> Self {
        Self {
            counts: vec![0; alphabet.len()],
            total: 0,
        }
    }

    /// Tallies `column` against `alphabet`, case-insensitively.
    /// Characters outside the alphabet are skipped.
    pub fn tally(column: &str, alphabet: &Alphabet) -> Self {
        let mut table = Self::empty(alphabet);
        for c in column.chars().flat_map(char::to_uppercase) {
            if let Some(idx) = alphabet.index_of(c) {
                table.counts[idx] += 1;
                table.total += 1;
            }
        }
        table
    }

    pub fn count_of(&self, alphabet: &Alphabet, c: char) -> u64 {
        alphabet.index_of(c).map_or(0, |idx| self.counts[idx])
    }
}
