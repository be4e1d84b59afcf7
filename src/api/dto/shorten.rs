//! DTOs for link shortening endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::application::services::CreateLink;

/// Request to shorten a URL.
///
/// Only the optional fields are bounded here. The URL is trimmed and checked
/// (length, scheme, characters) by [`crate::application::services::LinkService`].
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The URL to shorten. A bare domain is treated as `http://`.
    pub url: String,

    /// Optional custom short code.
    #[validate(length(min = 1, max = 64))]
    pub custom: Option<String>,

    /// Optional lifetime in seconds.
    #[validate(range(min = 1))]
    pub ttl_seconds: Option<i64>,
}

impl From<ShortenRequest> for CreateLink {
    fn from(req: ShortenRequest) -> Self {
        CreateLink {
            url: req.url,
            custom_code: req.custom,
            ttl_seconds: req.ttl_seconds,
        }
    }
}

/// Response for a created short link.
#[derive(Debug, Serialize, Deserialize)]
pub struct ShortenResponse {
    pub code: String,
    pub short_url: String,
    pub url: String,
}
