//! # Shortlink
//!
//! A small URL shortening service built with Axum and SQLite.
//!
//! ## Architecture
//!
//! The crate is split into layers:
//!
//! - **Domain Layer** ([`domain`]) - Link entity and repository trait
//! - **Application Layer** ([`application`]) - Link and auth services
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite persistence
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - Random 6-character codes or caller-chosen custom codes
//! - Optional time-to-live per link (`410 Gone` once expired)
//! - Atomic click counting on redirect
//! - Static Bearer token on the management API
//!
//! ## Quick Start
//!
//! ```bash
//! export API_TOKEN="change-me"
//! cargo run
//!
//! curl -H "Authorization: Bearer change-me" \
//!      -d '{"url": "https://example.com"}' \
//!      -H 'Content-Type: application/json' \
//!      http://localhost:8080/api/shorten
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{AuthService, CreateLink, LinkService};
    pub use crate::domain::entities::{Link, NewLink};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
