//! Link creation, resolution and removal.

use std::sync::Arc;

use chrono::{Duration, Utc};
use serde_json::json;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::generate_code;
use crate::utils::validation::{is_reserved_code, validate_custom_code, validate_target_url};

/// How many random codes are tried before creation gives up.
pub const MAX_GENERATION_ATTEMPTS: usize = 5;

/// Input for [`LinkService::create_link`].
#[derive(Debug, Clone, Default)]
pub struct CreateLink {
    /// Target URL as submitted; surrounding whitespace is trimmed.
    pub url: String,
    /// Caller-chosen code. `None` means one is generated.
    pub custom_code: Option<String>,
    /// Lifetime in seconds. `None` means the link never expires.
    pub ttl_seconds: Option<i64>,
}

/// Service for creating, resolving and deleting short links.
///
/// The repository is injected, so the service holds no global state and can
/// be exercised against a mock store.
pub struct LinkService<L: LinkRepository> {
    link_repository: Arc<L>,
    short_domain: String,
}

impl<L: LinkRepository> LinkService<L> {
    /// Creates a new link service.
    ///
    /// `short_domain` is the public prefix used to build short URLs, e.g.
    /// `https://s.example.com`.
    pub fn new(link_repository: Arc<L>, short_domain: impl Into<String>) -> Self {
        Self {
            link_repository,
            short_domain: short_domain.into(),
        }
    }

    /// Creates a short link.
    ///
    /// # Code Selection
    ///
    /// - If `custom_code` is provided, it is validated and used verbatim
    /// - Otherwise a random 6-character code is generated, retrying up to
    ///   [`MAX_GENERATION_ATTEMPTS`] times while the code is already taken
    ///
    /// The store's unique constraint remains the final guard: a code that
    /// passes the pre-check but loses an insert race surfaces as a conflict.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if:
    /// - URL is empty, too long or not http/https
    /// - Custom code is too long, has forbidden characters or is reserved
    /// - `ttl_seconds` is not positive or out of range
    ///
    /// Returns [`AppError::Conflict`] if the custom code already exists.
    ///
    /// Returns [`AppError::Internal`] if every generated code collided or the
    /// random source failed.
    pub async fn create_link(&self, request: CreateLink) -> Result<Link, AppError> {
        let target_url = request.url.trim().to_string();
        validate_target_url(&target_url)?;

        let created_at = Utc::now();
        let expires_at = match request.ttl_seconds {
            Some(ttl) => Some(expiry_after(created_at, ttl)?),
            None => None,
        };

        let code = if let Some(custom) = request.custom_code {
            validate_custom_code(&custom)?;

            if self.link_repository.find_by_code(&custom).await?.is_some() {
                return Err(AppError::conflict(
                    "Custom code already exists",
                    json!({ "code": custom }),
                ));
            }

            custom
        } else {
            self.generate_unique_code().await?
        };

        let link = self
            .link_repository
            .create(NewLink {
                code,
                target_url,
                created_at,
                expires_at,
            })
            .await?;

        tracing::info!(code = %link.code, expires_at = ?link.expires_at, "Short link created");

        Ok(link)
    }

    /// Resolves a code for redirection and counts the click.
    ///
    /// Expired links are reported as gone and their counter is left untouched.
    /// The counter is also left untouched when the stored target cannot be
    /// turned into a `Location` header, so every counted click is a redirect.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code does not exist (or was deleted
    /// between lookup and increment).
    /// Returns [`AppError::Gone`] if the link has expired.
    /// Returns [`AppError::Internal`] if the stored target is not redirectable.
    pub async fn resolve(&self, code: &str) -> Result<Link, AppError> {
        let mut link = self.get_link(code).await?;

        if link.is_expired() {
            tracing::warn!(code, "Redirect requested for expired link");
            return Err(AppError::gone(
                "Short link has expired",
                json!({ "code": code, "expired_at": link.expires_at }),
            ));
        }

        if link.redirect_target().is_none() {
            tracing::error!(code, "Stored target cannot be used as a redirect location");
            return Err(AppError::internal(
                "Invalid redirect target",
                json!({ "code": code }),
            ));
        }

        if !self.link_repository.increment_clicks(code).await? {
            return Err(link_not_found(code));
        }

        link.clicks += 1;
        Ok(link)
    }

    /// Retrieves a link by its short code, expired or not.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches the code.
    pub async fn get_link(&self, code: &str) -> Result<Link, AppError> {
        tracing::debug!(code, "Looking up short link");

        self.link_repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| link_not_found(code))
    }

    /// Deletes a link by its short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if nothing was deleted.
    pub async fn delete_link(&self, code: &str) -> Result<(), AppError> {
        let deleted = self.link_repository.delete_by_code(code).await?;

        if deleted == 0 {
            return Err(link_not_found(code));
        }

        tracing::info!(code, "Short link deleted");
        Ok(())
    }

    /// Number of stored links. Used by the health check.
    pub async fn count_links(&self) -> Result<i64, AppError> {
        self.link_repository.count().await
    }

    /// Constructs the public short URL for a code.
    pub fn get_short_url(&self, code: &str) -> String {
        format!("{}/{}", self.short_domain.trim_end_matches('/'), code)
    }

    async fn generate_unique_code(&self) -> Result<String, AppError> {
        for attempt in 1..=MAX_GENERATION_ATTEMPTS {
            let code = generate_code().map_err(|e| {
                tracing::error!(error = %e, "Failed to generate short code");
                AppError::internal(
                    "Failed to generate short code",
                    json!({ "reason": e.to_string() }),
                )
            })?;

            if !is_reserved_code(&code)
                && self.link_repository.find_by_code(&code).await?.is_none()
            {
                return Ok(code);
            }

            tracing::warn!(attempt, code = %code, "Generated code collided, retrying");
        }

        Err(AppError::internal(
            "Failed to generate unique code",
            json!({ "reason": "Too many collisions", "attempts": MAX_GENERATION_ATTEMPTS }),
        ))
    }
}

fn expiry_after(
    created_at: chrono::DateTime<Utc>,
    ttl_seconds: i64,
) -> Result<chrono::DateTime<Utc>, AppError> {
    if ttl_seconds <= 0 {
        return Err(AppError::bad_request(
            "ttl_seconds must be greater than 0",
            json!({ "ttl_seconds": ttl_seconds }),
        ));
    }

    Duration::try_seconds(ttl_seconds)
        .and_then(|ttl| created_at.checked_add_signed(ttl))
        .ok_or_else(|| {
            AppError::bad_request(
                "ttl_seconds is out of range",
                json!({ "ttl_seconds": ttl_seconds }),
            )
        })
}

fn link_not_found(code: &str) -> AppError {
    AppError::not_found("Short link not found", json!({ "code": code }))
}
