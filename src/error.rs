//! Error types for the estimator, the record store and the media store

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EstimateError {
    #[error("invalid input: field '{field}' must be a finite number or a known value")]
    InvalidInput { field: &'static str },

    #[error("inputs too large: derived figure '{field}' is not finite")]
    NonFiniteResult { field: &'static str },
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("malformed JSON payload: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{kind} '{id}' not found")]
    NotFound { kind: &'static str, id: String },

    #[error("invalid record: {0}")]
    InvalidRecord(String),

    #[error("invalid quantity {0}: must not be negative")]
    InvalidQuantity(i64),
}

#[derive(Debug, Error)]
pub enum MediaError {
    #[error("I/O error storing media: {0}")]
    Io(#[from] std::io::Error),

    #[error("'{0}' has no file name")]
    MissingFileName(String),

    #[error("invalid media base URL: {0}")]
    BaseUrl(#[from] url::ParseError),

    #[error("media base URL '{0}' cannot take a path")]
    CannotBeABase(String),
}
