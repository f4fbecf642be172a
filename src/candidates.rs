use crate::error::{MrResult, RoughnessError};

pub fn validate_key_length(value: i64) -> MrResult<usize> {
    if value <= 0 {
        return Err(RoughnessError::InvalidKeyLength(value));
    }
    usize::try_from(value).map_err(|_| RoughnessError::InvalidKeyLength(value))
}

/// Parses a comma-separated candidate list such as `"1, 2,3"`.
/// Order and duplicates are preserved.
pub fn parse_key_lengths(list: &str) -> MrResult<Vec<usize>> {
    if list.trim().is_empty() {
        return Err(RoughnessError::EmptyCandidateSet);
    }

    list.split(',')
        .map(|token| {
            let token = token.trim();
            let value: i64 = token.parse().map_err(|_| {
                RoughnessError::CandidateParse(format!("'{}' is not an integer", token))
            })?;
            validate_key_length(value)
        })
        .collect()
}
