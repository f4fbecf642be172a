use crate::alphabet::{Alphabet, LATIN_UPPERCASE};
use crate::error::{MrResult, RoughnessError};
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Index of coincidence of typical English plaintext.
pub const DEFAULT_REFERENCE_ROUGHNESS: f64 = 0.0686;

#[derive(Args, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Roughness expected from plaintext in the target language
    #[arg(long, default_value_t = DEFAULT_REFERENCE_ROUGHNESS)]
    pub reference_roughness: f64,

    /// Symbols that are tallied when measuring a column
    #[arg(long, default_value = LATIN_UPPERCASE)]
    pub alphabet: String,

    /// Score candidate key lengths on the rayon thread pool
    #[arg(long, default_value_t = false)]
    pub parallel: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            reference_roughness: DEFAULT_REFERENCE_ROUGHNESS,
            alphabet: LATIN_UPPERCASE.to_string(),
            parallel: false,
        }
    }
}

impl AnalysisConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> MrResult<Self> {
        let content = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Values given explicitly on the command line win over values from a file.
    pub fn merge_from_cli(&mut self, cli: &AnalysisConfig, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($field:ident) => {
                if matches.value_source(stringify!($field)) == Some(ValueSource::CommandLine) {
                    self.$field = cli.$field.clone();
                }
            };
        }

        update_if_present!(reference_roughness);
        update_if_present!(alphabet);
        update_if_present!(parallel);
    }

    pub fn build_alphabet(&self) -> MrResult<Alphabet> {
        self.alphabet.parse()
    }

    pub fn validate(&self) -> MrResult<()> {
        if !self.reference_roughness.is_finite() || self.reference_roughness < 0.0 {
            return Err(RoughnessError::Config(format!(
                "reference_roughness must be a finite, non-negative number (got {})",
                self.reference_roughness
            )));
        }
        self.build_alphabet().map(|_| ())
    }
}
