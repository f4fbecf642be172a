use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyLengthScore {
    pub key_length: usize,
    /// Mean Measure of Roughness across all columns.
    pub average_roughness: f64,
    /// Roughness of each column, in column order.
    pub column_roughness: Vec<f64>,
    /// `|average_roughness - reference|`, set once a reference is known.
    #[serde(default)]
    pub distance: Option<f64>,
}

impl KeyLengthScore {
    pub fn measured_against(mut self, reference: f64) -> Self {
        self.distance = Some(self.distance_from(reference));
        self
    }

    pub fn distance_from(&self, reference: f64) -> f64 {
        (self.average_roughness - reference).abs()
    }

    pub fn min_column(&self) -> f64 {
        self.column_roughness
            .iter()
            .copied()
            .fold(f64::INFINITY, f64::min)
    }

    pub fn max_column(&self) -> f64 {
        self.column_roughness
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyLengthReport {
    pub reference_roughness: f64,
    /// Alphabetic characters in the analysed ciphertext.
    pub letters: usize,
    /// One entry per candidate, in the order candidates were supplied.
    pub scores: Vec<KeyLengthScore>,
    pub best_key_length: usize,
}

impl KeyLengthReport {
    /// The first score entry for the winning key length.
    pub fn best_score(&self) -> Option<&KeyLengthScore> {
        self.scores
            .iter()
            .find(|s| s.key_length == self.best_key_length)
    }
}
