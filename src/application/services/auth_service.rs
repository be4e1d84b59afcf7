//! Authentication service for API token validation.

use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256};

use crate::error::AppError;
use serde_json::json;

type HmacSha256 = Hmac<Sha256>;

/// Service for authenticating API requests via a static Bearer token.
///
/// The configured token is never compared byte by byte. Both sides are run
/// through HMAC-SHA256 and compared with [`Mac::verify_slice`], which is
/// constant-time, so response timing does not leak how much of a guess matched.
pub struct AuthService {
    key: [u8; 32],
    expected_tag: Vec<u8>,
}

impl AuthService {
    /// Creates a new authentication service for the configured `api_token`.
    pub fn new(api_token: &str) -> Self {
        let mut key = [0u8; 32];
        key.copy_from_slice(&Sha256::digest(api_token.as_bytes()));
        let expected_tag = Self::mac(&key, api_token).finalize().into_bytes().to_vec();

        Self { key, expected_tag }
    }

    fn mac(key: &[u8], token: &str) -> HmacSha256 {
        let mut mac = HmacSha256::new_from_slice(key).expect("HMAC accepts any key length");
        mac.update(token.as_bytes());
        mac
    }

    /// Authenticates a raw token taken from the `Authorization` header.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the token does not match.
    pub fn authenticate(&self, token: &str) -> Result<(), AppError> {
        Self::mac(&self.key, token)
            .verify_slice(&self.expected_tag)
            .map_err(|_| {
                tracing::warn!("Rejected request with invalid API token");
                AppError::unauthorized("Unauthorized", json!({"reason": "Invalid token"}))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authenticate_success() {
        let service = AuthService::new("valid-token");
        assert!(service.authenticate("valid-token").is_ok());
    }

    #[test]
    fn test_authenticate_invalid_token() {
        let service = AuthService::new("valid-token");

        let result = service.authenticate("wrong-token");

        assert!(matches!(result, Err(AppError::Unauthorized { .. })));
    }

    #[test]
    fn test_authenticate_prefix_is_not_enough() {
        let service = AuthService::new("valid-token");
        assert!(service.authenticate("valid").is_err());
        assert!(service.authenticate("valid-token-extra").is_err());
        assert!(service.authenticate("").is_err());
    }

    #[test]
    fn test_authenticate_is_case_sensitive() {
        let service = AuthService::new("Secret");
        assert!(service.authenticate("secret").is_err());
    }
}
