use super::columns::split_columns;
use super::measure::column_roughness;
use super::sink::ScoreSink;
use super::types::KeyLengthScore;
use crate::alphabet::Alphabet;
use crate::error::{MrResult, RoughnessError};
use rayon::prelude::*;
use tracing::debug;

/// Scores one candidate: split into `key_length` columns and average their roughness.
pub fn score_key_length(
    text: &str,
    key_length: usize,
    alphabet: &Alphabet,
) -> MrResult<KeyLengthScore> {
    let columns = split_columns(text, key_length)?;

    let column_roughness: Vec<f64> = columns
        .iter()
        .enumerate()
        .map(|(idx, col)| {
            let mr = column_roughness(col, alphabet);
            debug!(
                key_length,
                column = idx,
                letters = col.chars().count(),
                "Key Length: {}, column {}: MR {:.4}",
                key_length,
                idx,
                mr
            );
            mr
        })
        .collect();

    let total: f64 = column_roughness.iter().sum();

    Ok(KeyLengthScore {
        key_length,
        average_roughness: total / key_length as f64,
        column_roughness,
        distance: None,
    })
}

/// Average Measure of Roughness for a single candidate key length.
pub fn average_roughness(text: &str, key_length: usize, alphabet: &Alphabet) -> MrResult<f64> {
    score_key_length(text, key_length, alphabet).map(|s| s.average_roughness)
}

/// Rejects an empty candidate list or one containing 0.
pub fn validate_candidates(candidates: &[usize]) -> MrResult<()> {
    if candidates.is_empty() {
        return Err(RoughnessError::EmptyCandidateSet);
    }
    if candidates.contains(&0) {
        return Err(RoughnessError::InvalidKeyLength(0));
    }
    Ok(())
}

/// Scores every candidate against `reference`, reporting each to `sink` in
/// candidate order.
///
/// With `parallel` set, candidates are evaluated on the rayon pool first and
/// handed to the sink afterwards, so the sink sees the same order either way.
pub fn score_candidates<S>(
    text: &str,
    candidates: &[usize],
    alphabet: &Alphabet,
    reference: f64,
    parallel: bool,
    sink: &mut S,
) -> MrResult<Vec<KeyLengthScore>>
where
    S: ScoreSink + ?Sized,
{
    validate_candidates(candidates)?;

    let score_one =
        |k: usize| score_key_length(text, k, alphabet).map(|s| s.measured_against(reference));

    if parallel {
        let scores = candidates
            .par_iter()
            .map(|&k| score_one(k))
            .collect::<MrResult<Vec<_>>>()?;

        for score in &scores {
            sink.record(score);
        }
        return Ok(scores);
    }

    let mut scores = Vec::with_capacity(candidates.len());
    for &k in candidates {
        let score = score_one(k)?;
        sink.record(&score);
        scores.push(score);
    }
    Ok(scores)
}
