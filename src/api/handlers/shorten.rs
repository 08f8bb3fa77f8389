//! Handler for link shortening endpoint.

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// {
///   "destination": "https://example.com",
///   "suggested_token": "promo"   // optional
/// }
/// ```
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// {
///   "token": "promo",
///   "destination": "https://example.com",
///   "short_url": "https://s.example.com/promo",
///   "created_at": "2025-01-01T00:00:00Z"
/// }
/// ```
///
/// # Errors
///
/// - 400 `invalid_destination`, `invalid_token`, `validation_error`
/// - 409 `token_taken`
/// - 500 `generation_exhausted`
/// - 503 `unavailable`
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    payload.validate()?;

    let link = state
        .shorten_service
        .shorten(payload.destination, payload.suggested_token)
        .await?;

    let short_url = state.short_url(&link.token);

    Ok((
        StatusCode::CREATED,
        Json(ShortenResponse {
            token: link.token,
            destination: link.destination,
            short_url,
            created_at: link.created_at,
        }),
    ))
}
