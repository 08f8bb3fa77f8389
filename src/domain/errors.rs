//! Error taxonomy for the link store and the shortening workflow.
//!
//! A token conflict is not an error at this level: the store reports it as
//! [`crate::domain::repositories::InsertOutcome::Conflict`] and the service
//! decides whether it becomes [`ShortenError::TokenTaken`] or a retry.

use std::time::Duration;

/// The store could not answer. Never retried by the store itself.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("storage call timed out after {0:?}")]
    Timeout(Duration),

    #[error("storage backend error: {0}")]
    Backend(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        Self::Backend(e.to_string())
    }
}

/// Failures of [`crate::application::services::ShortenService::shorten`].
#[derive(Debug, thiserror::Error)]
pub enum ShortenError {
    #[error("invalid destination: {reason}")]
    InvalidDestination { reason: String },

    #[error("invalid token: {reason}")]
    InvalidToken { reason: String },

    #[error("token '{token}' is already taken")]
    TokenTaken { token: String },

    #[error("no free token found after {attempts} attempts")]
    GenerationExhausted { attempts: usize },

    #[error("link store unavailable: {0}")]
    Unavailable(#[from] StoreError),
}
