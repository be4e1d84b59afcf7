//! Application layer services implementing business logic.
//!
//! Services consume repository traits and are handed their collaborators
//! explicitly, so handlers and tests decide which store backs them.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Link creation, resolution and deletion
//! - [`services::auth_service::AuthService`] - API token authentication

pub mod services;
