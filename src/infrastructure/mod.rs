//! Infrastructure layer for external integrations.
//!
//! Provides the concrete storage behind the domain repository traits.
//!
//! # Modules
//!
//! - [`persistence`] - SQLite connection setup and repository implementations

pub mod persistence;
