//! Link creation with collision handling.

use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::errors::ShortenError;
use crate::domain::repositories::{InsertOutcome, LinkRepository};
use crate::utils::destination::validate_destination;
use crate::utils::token_generator::{TokenGenerator, validate_suggested_token};

/// Default bound on generated-token attempts per request.
pub const DEFAULT_MAX_ATTEMPTS: usize = 5;

/// Creates short links.
///
/// Uniqueness is delegated entirely to
/// [`LinkRepository::insert_if_absent`]: the service never checks for a
/// token before inserting it.
pub struct ShortenService<L: LinkRepository + ?Sized, G: TokenGenerator + ?Sized> {
    link_repository: Arc<L>,
    token_generator: Arc<G>,
    max_attempts: usize,
}

impl<L: LinkRepository + ?Sized, G: TokenGenerator + ?Sized> ShortenService<L, G> {
    /// Creates a new shortening service.
    pub fn new(link_repository: Arc<L>, token_generator: Arc<G>) -> Self {
        Self {
            link_repository,
            token_generator,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Overrides the generated-token attempt bound. Values below 1 are raised to 1.
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Shortens `destination`, optionally under a caller-chosen token.
    ///
    /// # Token Selection
    ///
    /// - A suggested token is validated and tried exactly once
    /// - Otherwise tokens are generated and retried on conflict, up to
    ///   [`Self::max_attempts`] times
    ///
    /// # Errors
    ///
    /// - [`ShortenError::InvalidDestination`] if the destination is not an absolute http(s) URL
    /// - [`ShortenError::InvalidToken`] if the suggested token is malformed
    /// - [`ShortenError::TokenTaken`] if the suggested token already exists
    /// - [`ShortenError::GenerationExhausted`] if every generated token collided
    /// - [`ShortenError::Unavailable`] if the store failed
    pub async fn shorten(
        &self,
        destination: String,
        suggested_token: Option<String>,
    ) -> Result<Link, ShortenError> {
        validate_destination(&destination).map_err(|e| ShortenError::InvalidDestination {
            reason: e.to_string(),
        })?;

        let link = match suggested_token {
            Some(token) => self.insert_suggested(token, destination).await?,
            None => self.insert_generated(destination).await?,
        };

        metrics::counter!("links_created_total").increment(1);
        tracing::info!(token = %link.token, "Short link created");

        Ok(link)
    }

    async fn insert_suggested(
        &self,
        token: String,
        destination: String,
    ) -> Result<Link, ShortenError> {
        validate_suggested_token(&token)?;

        match self
            .link_repository
            .insert_if_absent(NewLink::new(token.clone(), destination))
            .await?
        {
            InsertOutcome::Inserted(link) => Ok(link),
            InsertOutcome::Conflict => Err(ShortenError::TokenTaken { token }),
        }
    }

    async fn insert_generated(&self, destination: String) -> Result<Link, ShortenError> {
        for attempt in 1..=self.max_attempts {
            let token = self.token_generator.generate();

            match self
                .link_repository
                .insert_if_absent(NewLink::new(token.as_str(), destination.as_str()))
                .await?
            {
                InsertOutcome::Inserted(link) => return Ok(link),
                InsertOutcome::Conflict => {
                    metrics::counter!("link_token_collisions_total").increment(1);
                    tracing::debug!(%token, attempt, "Generated token collided");
                }
            }
        }

        tracing::warn!(attempts = self.max_attempts, "Token generation exhausted");

        Err(ShortenError::GenerationExhausted {
            attempts: self.max_attempts,
        })
    }
}
