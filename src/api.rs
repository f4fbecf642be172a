use crate::analysis::{Analyzer, KeyLengthReport, ScoreSink};
use crate::candidates::parse_key_lengths;
use crate::config::AnalysisConfig;
use crate::error::MrResult;
use crate::text;
use std::path::Path;
use tracing::info;

/// Service: estimate the key length of already-normalized ciphertext.
pub fn analyze_text<S>(
    ciphertext: &str,
    candidates: &[usize],
    config: &AnalysisConfig,
    sink: &mut S,
) -> MrResult<KeyLengthReport>
where
    S: ScoreSink + ?Sized,
{
    let analyzer = Analyzer::from_config(config)?;
    analyzer.analyze(ciphertext, candidates, sink)
}

/// Service: load a ciphertext file, parse the candidate list and run the estimator.
pub fn analyze_file<P, S>(
    path: P,
    key_lengths: &str,
    config: &AnalysisConfig,
    sink: &mut S,
) -> MrResult<KeyLengthReport>
where
    P: AsRef<Path>,
    S: ScoreSink + ?Sized,
{
    let candidates = parse_key_lengths(key_lengths)?;

    info!("📂 Loading ciphertext: {}", path.as_ref().display());
    let ciphertext = text::read_ciphertext(path)?;

    analyze_text(&ciphertext, &candidates, config, sink)
}
