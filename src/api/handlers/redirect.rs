//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its target URL.
///
/// # Endpoint
///
/// `GET /{code}` (public, no token)
///
/// # Request Flow
///
/// 1. Look up the code
/// 2. Reject expired links without counting a click
/// 3. Atomically increment the click counter
/// 4. Return `302 Found`
///
/// The redirect is temporary and marked `Cache-Control: no-cache`: a link can be
/// deleted or expire, so clients must not remember the mapping.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
/// Returns 410 Gone if the link has expired.
/// Returns 500 Internal Server Error if the stored target cannot be sent as a
/// `Location` header. No click is counted in that case.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let link = state.link_service.resolve(&code).await?;
    let location = link
        .redirect_target()
        .and_then(|target| HeaderValue::try_from(target).ok())
        .ok_or_else(|| {
            tracing::error!(code = %code, "Stored target cannot be used as a Location header");
            AppError::internal("Invalid redirect target", json!({ "code": code }))
        })?;

    tracing::debug!(code = %code, clicks = link.clicks, "Redirecting");

    Ok((
        StatusCode::FOUND,
        [
            (header::LOCATION, location),
            (header::CACHE_CONTROL, HeaderValue::from_static("no-cache")),
        ],
    )
        .into_response())
}
