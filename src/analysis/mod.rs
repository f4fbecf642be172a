pub mod columns;
pub mod frequency;
pub mod measure;
pub mod scorer;
pub mod selector;
pub mod sink;
pub mod types;

pub use self::sink::{NullSink, ScoreSink, TracingSink};
pub use self::types::{KeyLengthReport, KeyLengthScore};
use crate::alphabet::Alphabet;
use crate::config::AnalysisConfig;
use crate::error::MrResult;
use tracing::{info, warn};

/// Key-length estimator bound to one configuration.
#[derive(Debug, Clone)]
pub struct Analyzer {
    pub alphabet: Alphabet,
    pub reference_roughness: f64,
    pub parallel: bool,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self {
            alphabet: Alphabet::latin(),
            reference_roughness: crate::config::DEFAULT_REFERENCE_ROUGHNESS,
            parallel: false,
        }
    }
}

impl Analyzer {
    pub fn from_config(config: &AnalysisConfig) -> MrResult<Self> {
        config.validate()?;
        Ok(Self {
            alphabet: config.build_alphabet()?,
            reference_roughness: config.reference_roughness,
            parallel: config.parallel,
        })
    }

    pub fn score(&self, text: &str, key_length: usize) -> MrResult<KeyLengthScore> {
        scorer::score_key_length(text, key_length, &self.alphabet)
            .map(|s| s.measured_against(self.reference_roughness))
    }

    pub fn score_all<S>(
        &self,
        text: &str,
        candidates: &[usize],
        sink: &mut S,
    ) -> MrResult<Vec<KeyLengthScore>>
    where
        S: ScoreSink + ?Sized,
    {
        scorer::score_candidates(
            text,
            candidates,
            &self.alphabet,
            self.reference_roughness,
            self.parallel,
            sink,
        )
    }

    /// Most likely key length among `candidates`.
    pub fn best_key_length(&self, text: &str, candidates: &[usize]) -> MrResult<usize> {
        selector::select_best_by(candidates, self.reference_roughness, |k| {
            scorer::average_roughness(text, k, &self.alphabet)
        })
    }

    /// Scores every candidate and picks the winner.
    pub fn analyze<S>(
        &self,
        text: &str,
        candidates: &[usize],
        sink: &mut S,
    ) -> MrResult<KeyLengthReport>
    where
        S: ScoreSink + ?Sized,
    {
        scorer::validate_candidates(candidates)?;

        let letters = crate::text::letter_count(text);
        if letters == 0 {
            warn!("Ciphertext contains no letters; every candidate will score 0");
        }

        let mut seen = Vec::with_capacity(candidates.len());
        for &k in candidates {
            if seen.contains(&k) {
                warn!("Candidate key length {} is listed more than once", k);
            } else {
                seen.push(k);
            }
        }

        info!(
            "🔍 Scoring {} candidate key lengths over {} letters",
            candidates.len(),
            letters
        );

        let scores = self.score_all(text, candidates, sink)?;
        let best_key_length = selector::select_best(&scores, self.reference_roughness)?;

        info!("🏁 Most likely key length: {}", best_key_length);

        Ok(KeyLengthReport {
            reference_roughness: self.reference_roughness,
            letters,
            scores,
            best_key_length,
        })
    }
}
