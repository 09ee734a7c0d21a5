use thiserror::Error;

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Data Validation Error: {0}")]
    Validation(String),

    #[error("Negative count for '{entity}': {field} = {value}")]
    NegativeCount {
        entity: String,
        field: &'static str,
        value: i64,
    },

    #[error("'{entity}' does not belong to cohort {expected} (found {found})")]
    CohortMismatch {
        entity: String,
        expected: String,
        found: String,
    },

    #[error("Cohort is empty")]
    EmptyCohort,

    #[error("Invalid weight profile '{profile}': {reason}")]
    InvalidWeights { profile: String, reason: String },

    #[error("Unknown entity: {0}")]
    UnknownEntity(String),
}

pub type StatsResult<T> = Result<T, StatsError>;
