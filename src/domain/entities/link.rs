//! Link entity representing a short code to target URL mapping.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

/// A stored short link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub id: i64,
    pub code: String,
    pub target_url: String,
    pub clicks: i64,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
}

/// Lifecycle state of a stored link at a given instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkState {
    Active,
    Expired,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(
        id: i64,
        code: String,
        target_url: String,
        clicks: i64,
        created_at: DateTime<Utc>,
        expires_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            code,
            target_url,
            clicks,
            created_at,
            expires_at,
        }
    }

    /// Returns true if the expiry lies strictly before `now`.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|e| e < now)
    }

    /// Returns true if the link has passed its expiry time.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    pub fn state_at(&self, now: DateTime<Utc>) -> LinkState {
        if self.is_expired_at(now) {
            LinkState::Expired
        } else {
            LinkState::Active
        }
    }

    /// Absolute URL to send clients to, usable as a `Location` header value.
    ///
    /// Targets are stored as submitted, so a bare domain such as `example.com`
    /// gets the same `http://` prefix it was validated with. Non-ASCII targets
    /// are serialized through [`Url`] (punycode host, percent-encoded path).
    ///
    /// Returns `None` if the target contains control characters or cannot be
    /// parsed into a header-safe form.
    pub fn redirect_target(&self) -> Option<String> {
        if self.target_url.chars().any(char::is_control) {
            return None;
        }

        let absolute = if self.target_url.contains("://") {
            self.target_url.clone()
        } else {
            format!("http://{}", self.target_url)
        };

        if absolute.bytes().all(|b| b.is_ascii_graphic()) {
            return Some(absolute);
        }

        Url::parse(&absolute).ok().map(String::from)
    }
}

/// Input data for creating a new link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLink {
    pub code: String,
    pub target_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
}
