use super::types::KeyLengthScore;
use crate::error::{MrResult, RoughnessError};

/// Tracks the candidate closest to the reference. Strict `<` keeps the first
/// candidate on ties.
struct Closest {
    reference: f64,
    best: Option<usize>,
    distance: f64,
}

impl Closest {
    fn new(reference: f64) -> Self {
        Self {
            reference,
            best: None,
            distance: f64::INFINITY,
        }
    }

    fn offer(&mut self, key_length: usize, score: f64) {
        let distance = (score - self.reference).abs();
        if distance < self.distance {
            self.distance = distance;
            self.best = Some(key_length);
        }
    }

    fn finish(self) -> MrResult<usize> {
        self.best.ok_or_else(|| {
            RoughnessError::Config(format!(
                "No candidate score is comparable to reference roughness {}",
                self.reference
            ))
        })
    }
}

/// Scans `candidates` in order, scoring each with `score`, and returns the key
/// length whose score lies closest to `reference`.
pub fn select_best_by<F>(candidates: &[usize], reference: f64, mut score: F) -> MrResult<usize>
where
    F: FnMut(usize) -> MrResult<f64>,
{
    if candidates.is_empty() {
        return Err(RoughnessError::EmptyCandidateSet);
    }

    let mut closest = Closest::new(reference);
    for &k in candidates {
        closest.offer(k, score(k)?);
    }
    closest.finish()
}

/// Same scan over scores that were already computed.
pub fn select_best(scores: &[KeyLengthScore], reference: f64) -> MrResult<usize> {
    if scores.is_empty() {
        return Err(RoughnessError::EmptyCandidateSet);
    }

    let mut closest = Closest::new(reference);
    for s in scores {
        closest.offer(s.key_length, s.average_roughness);
    }
    closest.finish()
}
