//! Handlers for link management endpoints (create, inspect, delete).

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use validator::Validate;

use crate::api::dto::link::{DeleteResponse, LinkInfoResponse};
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
///   "url": "https://example.com/very/long/link",
///   "custom": "go123",      // optional
///   "ttl_seconds": 3600     // optional
/// }
/// ```
///
/// `custom` and `ttl_seconds` are either omitted or meaningful: an empty
/// `custom` or a `ttl_seconds` of 0 or less is rejected with 400 rather than
/// treated as "not provided".
///
/// # Response
///
/// ```json
/// {
///   "code": "go123",
///   "short_url": "http://localhost:8080/go123",
///   "url": "https://example.com/very/long/link"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the body or any field is invalid.
/// Returns 409 Conflict if the custom code is taken.
/// Returns 500 Internal Server Error if no free code could be generated.
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<Json<ShortenResponse>, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let link = state.link_service.create_link(payload.into()).await?;
    let short_url = state.link_service.get_short_url(&link.code);

    Ok(Json(ShortenResponse {
        code: link.code,
        short_url,
        url: link.target_url,
    }))
}

/// Returns the stored state of a short link, expired or not.
///
/// # Endpoint
///
/// `GET /api/info/{code}`
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn link_info_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<LinkInfoResponse>, AppError> {
    let link = state.link_service.get_link(&code).await?;
    Ok(Json(link.into()))
}

/// Permanently deletes a short link.
///
/// # Endpoint
///
/// `DELETE /api/{code}`
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn delete_link_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<DeleteResponse>, AppError> {
    state.link_service.delete_link(&code).await?;
    Ok(Json(DeleteResponse { ok: true }))
}
