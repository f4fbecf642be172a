use thiserror::Error;

#[derive(Error, Debug)]
pub enum RoughnessError {
    #[error("Invalid key length: {0} (key lengths must be positive)")]
    InvalidKeyLength(i64),

    #[error("No candidate key lengths supplied")]
    EmptyCandidateSet,

    #[error("Candidate Parsing Error: {0}")]
    CandidateParse(String),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV Error: {0}")]
    Csv(#[from] csv::Error),
}

pub type MrResult<T> = Result<T, RoughnessError>;
