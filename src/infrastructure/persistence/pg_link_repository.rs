//! PostgreSQL implementation of link repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::entities::{Link, NewLink};
use crate::domain::errors::StoreError;
use crate::domain::repositories::{InsertOutcome, LinkRepository};

/// Default per-call storage timeout.
pub const DEFAULT_STORE_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(sqlx::FromRow)]
struct LinkRow {
    id: i64,
    token: String,
    destination: String,
    created_at: DateTime<Utc>,
}

impl From<LinkRow> for Link {
    fn from(row: LinkRow) -> Self {
        Link::new(row.id, row.token, row.destination, row.created_at)
    }
}

/// PostgreSQL repository for link storage and retrieval.
///
/// Inserts rely on the `links_token_key` unique constraint through
/// `ON CONFLICT DO NOTHING`, so concurrent writers on one token resolve
/// inside the database. Every call is bounded by a timeout.
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
    timeout: Duration,
}

impl PgLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self::with_timeout(pool, DEFAULT_STORE_TIMEOUT)
    }

    pub fn with_timeout(pool: Arc<PgPool>, timeout: Duration) -> Self {
        Self { pool, timeout }
    }

    async fn bounded<T>(
        &self,
        call: impl Future<Output = Result<T, sqlx::Error>>,
    ) -> Result<T, StoreError> {
        match tokio::time::timeout(self.timeout, call).await {
            Ok(result) => result.map_err(|e| {
                tracing::error!("Link store error: {}", e);
                StoreError::from(e)
            }),
            Err(_) => {
                tracing::error!(timeout = ?self.timeout, "Link store call timed out");
                Err(StoreError::Timeout(self.timeout))
            }
        }
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn insert_if_absent(&self, new_link: NewLink) -> Result<InsertOutcome, StoreError> {
        let row = self
            .bounded(
                sqlx::query_as::<_, LinkRow>(
                    r#"
                    INSERT INTO links (token, destination)
                    VALUES ($1, $2)
                    ON CONFLICT ON CONSTRAINT links_token_key DO NOTHING
                    RETURNING id, token, destination, created_at
                    "#,
                )
                .bind(&new_link.token)
                .bind(&new_link.destination)
                .fetch_optional(self.pool.as_ref()),
            )
            .await?;

        Ok(match row {
            Some(row) => InsertOutcome::Inserted(row.into()),
            None => InsertOutcome::Conflict,
        })
    }

    async fn find_by_token(&self, token: &str) -> Result<Option<Link>, StoreError> {
        let row = self
            .bounded(
                sqlx::query_as::<_, LinkRow>(
                    r#"
                    SELECT id, token, destination, created_at
                    FROM links
                    WHERE token = $1
                    "#,
                )
                .bind(token)
                .fetch_optional(self.pool.as_ref()),
            )
            .await?;

        Ok(row.map(Link::from))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.bounded(sqlx::query("SELECT 1").execute(self.pool.as_ref()))
            .await
            .map(|_| ())
    }
}
