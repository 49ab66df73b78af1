//! Unified SDK error types.

use thiserror::Error;

use crate::domain::coin::CoinValidationError;
use crate::domain::price_history::HistoryValidationError;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

/// HTTP-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Server error {status}: {body}")]
    ServerError { status: u16, body: String },

    #[error("Rate limited (retry after {retry_after_ms:?}ms)")]
    RateLimited { retry_after_ms: Option<u64> },

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Timeout")]
    Timeout,

    #[error("Max retries exceeded after {attempts} attempts: {last_error}")]
    MaxRetriesExceeded { attempts: u32, last_error: String },
}

/// Payload validation errors, by domain.
///
/// Carried intact (not stringified) so callers can match on the exact
/// field that failed.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Coin: {0}")]
    Coin(#[from] CoinValidationError),

    #[error("History: {0}")]
    History(#[from] HistoryValidationError),
}

impl From<CoinValidationError> for SdkError {
    fn from(e: CoinValidationError) -> Self {
        SdkError::Validation(ValidationError::Coin(e))
    }
}

impl From<HistoryValidationError> for SdkError {
    fn from(e: HistoryValidationError) -> Self {
        SdkError::Validation(ValidationError::History(e))
    }
}
