//! SQLite repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx with
//! bound parameters.
//!
//! # Repositories
//!
//! - [`SqliteLinkRepository`] - Link storage and retrieval

pub mod pool;
pub mod sqlite_link_repository;

pub use pool::{connect, run_migrations};
pub use sqlite_link_repository::SqliteLinkRepository;
