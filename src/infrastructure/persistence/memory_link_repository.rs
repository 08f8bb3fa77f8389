//! In-process link repository.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{PoisonError, RwLock};

use crate::domain::entities::{Link, NewLink};
use crate::domain::errors::StoreError;
use crate::domain::repositories::{InsertOutcome, LinkRepository};

/// Link store backed by a `HashMap`.
///
/// The conditional insert runs under a single write guard, which gives the
/// same guarantee as the unique index in PostgreSQL. Guards are never held
/// across an await.
#[derive(Default)]
pub struct MemoryLinkRepository {
    links: RwLock<HashMap<String, Link>>,
    next_id: AtomicI64,
}

impl MemoryLinkRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored links.
    pub fn len(&self) -> usize {
        self.links
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl LinkRepository for MemoryLinkRepository {
    async fn insert_if_absent(&self, new_link: NewLink) -> Result<InsertOutcome, StoreError> {
        let mut links = self.links.write().unwrap_or_else(PoisonError::into_inner);

        match links.entry(new_link.token) {
            Entry::Occupied(_) => Ok(InsertOutcome::Conflict),
            Entry::Vacant(slot) => {
                let id = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
                let link = Link::new(id, slot.key().clone(), new_link.destination, Utc::now());
                slot.insert(link.clone());
                Ok(InsertOutcome::Inserted(link))
            }
        }
    }

    async fn find_by_token(&self, token: &str) -> Result<Option<Link>, StoreError> {
        Ok(self
            .links
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(token)
            .cloned())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_then_find() {
        let repo = MemoryLinkRepository::new();

        let outcome = repo
            .insert_if_absent(NewLink::new("abc12", "https://example.com"))
            .await
            .unwrap();

        let InsertOutcome::Inserted(link) = outcome else {
            panic!("expected insert");
        };
        assert_eq!(link.id, 1);
        assert_eq!(link.token, "abc12");

        let found = repo.find_by_token("abc12").await.unwrap().unwrap();
        assert_eq!(found, link);
    }

    #[tokio::test]
    async fn test_second_insert_conflicts_without_overwrite() {
        let repo = MemoryLinkRepository::new();

        repo.insert_if_absent(NewLink::new("abc12", "https://first.example"))
            .await
            .unwrap();
        let outcome = repo
            .insert_if_absent(NewLink::new("abc12", "https://second.example"))
            .await
            .unwrap();

        assert_eq!(outcome, InsertOutcome::Conflict);
        assert_eq!(repo.len(), 1);
        assert_eq!(
            repo.find_by_token("abc12").await.unwrap().unwrap().destination,
            "https://first.example"
        );
    }

    #[tokio::test]
    async fn test_lookup_is_case_sensitive() {
        let repo = MemoryLinkRepository::new();
        repo.insert_if_absent(NewLink::new("Promo", "https://example.com"))
            .await
            .unwrap();

        assert!(repo.find_by_token("Promo").await.unwrap().is_some());
        assert!(repo.find_by_token("promo").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_empty_repository() {
        let repo = MemoryLinkRepository::new();
        assert!(repo.is_empty());
        assert!(repo.find_by_token("nothing").await.unwrap().is_none());
        assert!(repo.ping().await.is_ok());
    }
}
