//! Token to destination lookup.

use std::sync::Arc;

use crate::domain::errors::StoreError;
use crate::domain::repositories::LinkRepository;
use crate::utils::token_generator::is_well_formed_token;

/// Outcome of a lookup. Absence is a normal result, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Found { destination: String },
    NotFound,
}

/// Resolves tokens through the link store. Stateless.
pub struct Resolver<L: LinkRepository + ?Sized> {
    link_repository: Arc<L>,
}

impl<L: LinkRepository + ?Sized> Resolver<L> {
    pub fn new(link_repository: Arc<L>) -> Self {
        Self { link_repository }
    }

    /// Looks up `token` and returns its destination unchanged.
    ///
    /// Tokens that could never have been stored resolve to
    /// [`Resolution::NotFound`] without a storage round-trip.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the store cannot answer. Callers must not
    /// treat that as absence.
    pub async fn resolve(&self, token: &str) -> Result<Resolution, StoreError> {
        if !is_well_formed_token(token) {
            return Ok(Resolution::NotFound);
        }

        Ok(match self.link_repository.find_by_token(token).await? {
            Some(link) => Resolution::Found {
                destination: link.destination,
            },
            None => Resolution::NotFound,
        })
    }
}
