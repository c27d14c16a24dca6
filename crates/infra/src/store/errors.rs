//! Record-store-specific error types
//!
//! Transport-level failures keep their original cause text so it survives
//! into the domain `Store` variant unchanged.

use heypage_domain::HeyPageError;
use thiserror::Error;

/// Record store operation errors
#[derive(Debug, Error)]
pub enum StoreApiError {
    #[error("Store configuration error: {0}")]
    Config(String),

    #[error("Request to record store failed: {0}")]
    Transport(String),

    #[error("Record store returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to decode record store response: {0}")]
    Decode(String),

    #[error("Record store returned no representation for an insert")]
    MissingRepresentation,
}

impl From<reqwest::Error> for StoreApiError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

/// Convert a transport error into the domain taxonomy. Everything except
/// setup problems is a `Store` error: the cause is preserved verbatim and
/// surfaced to the caller without local recovery.
impl From<StoreApiError> for HeyPageError {
    fn from(err: StoreApiError) -> Self {
        match err {
            StoreApiError::Config(msg) => Self::Config(msg),
            other => Self::Store(other.to_string()),
        }
    }
}
