//! Repository trait for short link data access.

use crate::domain::entities::{Link, NewLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing short links.
///
/// The storage layer is the authoritative guard against duplicate codes: any
/// implementation must enforce uniqueness of `code` itself rather than rely on
/// callers checking first. All mutations are single atomic statements.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteLinkRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Persists a new short link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the code already exists.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError>;

    /// Finds a link by its short code, expired or not.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError>;

    /// Adds one to the click counter of `code` in a single statement.
    ///
    /// Returns `Ok(false)` if no row matched.
    async fn increment_clicks(&self, code: &str) -> Result<bool, AppError>;

    /// Removes the link with `code` and returns the number of rows affected.
    async fn delete_by_code(&self, code: &str) -> Result<u64, AppError>;

    /// Returns all links ordered by creation time, oldest first.
    async fn list_all(&self) -> Result<Vec<Link>, AppError>;

    /// Counts stored links, expired ones included.
    async fn count(&self) -> Result<i64, AppError>;
}
