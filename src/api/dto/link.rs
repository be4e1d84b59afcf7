//! DTOs for link inspection and deletion.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::Link;

/// Stored state of a short link.
///
/// `expired_at` is the configured expiry time (or `null`), `expired` tells
/// whether that moment has passed.
#[derive(Debug, Serialize, Deserialize)]
pub struct LinkInfoResponse {
    pub code: String,
    pub url: String,
    pub clicks: i64,
    pub created_at: DateTime<Utc>,
    pub expired_at: Option<DateTime<Utc>>,
    pub expired: bool,
}

impl From<Link> for LinkInfoResponse {
    fn from(link: Link) -> Self {
        let expired = link.is_expired();
        Self {
            code: link.code,
            url: link.target_url,
            clicks: link.clicks,
            created_at: link.created_at,
            expired_at: link.expires_at,
            expired,
        }
    }
}

/// Acknowledgement of a successful delete.
#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub ok: bool,
}
