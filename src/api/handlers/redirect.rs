//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    response::Redirect,
};
use tracing::{debug, error};

use crate::application::services::Resolution;
use crate::state::AppState;

/// Redirects a token to its destination.
///
/// # Endpoint
///
/// `GET /{token}`
///
/// # Behavior
///
/// Always answers with `307 Temporary Redirect`:
///
/// - **Found**: to the stored destination, unchanged
/// - **Not found**: to the configured fallback
/// - **Store unavailable**: to the configured fallback, logged as an error
pub async fn redirect_handler(
    Path(token): Path<String>,
    State(state): State<AppState>,
) -> Redirect {
    match state.resolver.resolve(&token).await {
        Ok(Resolution::Found { destination }) => {
            metrics::counter!("redirects_total", "outcome" => "found").increment(1);
            Redirect::temporary(&destination)
        }
        Ok(Resolution::NotFound) => {
            debug!(%token, "Unknown token, redirecting to fallback");
            metrics::counter!("redirects_total", "outcome" => "not_found").increment(1);
            Redirect::temporary(&state.fallback_url)
        }
        Err(e) => {
            error!(%token, "Lookup failed, redirecting to fallback: {}", e);
            metrics::counter!("redirects_total", "outcome" => "unavailable").increment(1);
            Redirect::temporary(&state.fallback_url)
        }
    }
}
