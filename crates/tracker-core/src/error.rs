use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("workspace not initialized: run 'tracker init'")]
    NotInitialized,

    #[error("no progress document for {0}")]
    ProgressNotFound(NaiveDate),

    #[error("invalid importance '{0}': must be critical, high, medium, or low")]
    InvalidImportance(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TrackerError>;
