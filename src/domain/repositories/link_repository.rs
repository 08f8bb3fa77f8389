//! Repository trait for short link data access.

use crate::domain::entities::{Link, NewLink};
use crate::domain::errors::StoreError;
use async_trait::async_trait;

/// Result of a conditional insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertOutcome {
    /// The link was stored under its token.
    Inserted(Link),
    /// Another link already owns the token. Nothing was written.
    Conflict,
}

/// Durable token to destination mapping.
///
/// The store is the only owner of link data. Links can be created and read,
/// never updated or deleted.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::MemoryLinkRepository`] - in-process map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Stores `new_link` only if no link with the same token exists.
    ///
    /// Must be atomic: when several callers race on one token, exactly one
    /// gets [`InsertOutcome::Inserted`] and every other gets
    /// [`InsertOutcome::Conflict`].
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the backend fails or times out.
    async fn insert_if_absent(&self, new_link: NewLink) -> Result<InsertOutcome, StoreError>;

    /// Finds a link by exact, case-sensitive token match.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the backend fails or times out.
    async fn find_by_token(&self, token: &str) -> Result<Option<Link>, StoreError>;

    /// Round-trips to the backend. Used by the health endpoint.
    async fn ping(&self) -> Result<(), StoreError>;
}
