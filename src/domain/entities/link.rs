//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A persisted short link.
///
/// Links are immutable once stored: there is no update or delete path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub id: i64,
    pub token: String,
    pub destination: String,
    pub created_at: DateTime<Utc>,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(id: i64, token: String, destination: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            token,
            destination,
            created_at,
        }
    }
}

/// Input data for creating a new link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLink {
    pub token: String,
    pub destination: String,
}

impl NewLink {
    pub fn new(token: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            destination: destination.into(),
        }
    }
}
