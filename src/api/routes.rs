//! API route configuration.
//!
//! All API endpoints require Bearer token authentication via
//! [`crate::api::middleware::auth`].

use crate::api::handlers::{delete_link_handler, link_info_handler, shorten_handler};
use crate::state::AppState;
use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{delete, get, post},
};

/// Largest accepted request body for `POST /shorten`.
pub const MAX_BODY_BYTES: usize = 16 * 1024;

/// All API routes, protected by Bearer token authentication.
///
/// # Endpoints
///
/// - `POST   /shorten`      - Create a short link
/// - `GET    /info/{code}`  - Inspect a short link
/// - `DELETE /{code}`       - Delete a short link
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/shorten",
            post(shorten_handler).layer(DefaultBodyLimit::max(MAX_BODY_BYTES)),
        )
        .route("/info/{code}", get(link_info_handler))
        .route("/{code}", delete(delete_link_handler))
}
