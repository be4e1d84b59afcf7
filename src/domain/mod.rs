//! Domain layer containing business entities and repository contracts.
//!
//! Nothing in here knows about HTTP or SQL.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//!
//! # Link Lifecycle
//!
//! 1. Created by [`crate::application::services::LinkService::create_link`]
//! 2. `clicks` incremented atomically on every successful redirect
//! 3. Either deleted explicitly or left to expire; expiry is derived from
//!    `expires_at`, the row itself is retained

pub mod entities;
pub mod repositories;
