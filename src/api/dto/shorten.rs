//! DTOs for link shortening endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to shorten a URL.
///
/// `url` and `slug` are accepted as aliases for older clients.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The URL the short link should redirect to.
    #[serde(alias = "url")]
    #[validate(length(min = 1))]
    pub destination: String,

    /// Optional caller-chosen token. Never replaced by a generated one.
    #[serde(default, alias = "slug")]
    pub suggested_token: Option<String>,
}

/// A created short link.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub token: String,
    pub destination: String,
    pub short_url: String,
    pub created_at: DateTime<Utc>,
}
