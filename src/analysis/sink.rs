use super::types::KeyLengthScore;
use tracing::debug;

/// Receives one record per scored candidate, in candidate order.
pub trait ScoreSink {
    fn record(&mut self, score: &KeyLengthScore);
}

impl<F> ScoreSink for F
where
    F: FnMut(&KeyLengthScore),
{
    fn record(&mut self, score: &KeyLengthScore) {
        self(score)
    }
}

/// Discards every record.
pub struct NullSink;

impl ScoreSink for NullSink {
    fn record(&mut self, _score: &KeyLengthScore) {}
}

/// Forwards each record to `tracing` at DEBUG level.
pub struct TracingSink;

impl ScoreSink for TracingSink {
    fn record(&mut self, score: &KeyLengthScore) {
        debug!(
            key_length = score.key_length,
            columns = score.column_roughness.len(),
            "Key Length: {}, Average MR: {:.4}",
            score.key_length,
            score.average_roughness
        );
    }
}
