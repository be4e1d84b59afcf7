//! URL and short code validation rules.
//!
//! The boolean predicates are pure and fail closed. The `validate_*` wrappers turn
//! a failed check into an [`AppError::Validation`] with a message suitable for API
//! clients.

use crate::error::AppError;
use regex::Regex;
use serde_json::json;
use std::sync::LazyLock;
use url::Url;

/// Maximum length of a caller-supplied short code.
pub const MAX_CODE_LENGTH: usize = 64;

/// Maximum length of a target URL.
pub const MAX_URL_LENGTH: usize = 2048;

/// Codes that would be shadowed by fixed routes.
pub const RESERVED_CODES: &[&str] = &["api", "health", "shorten"];

static CODE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_-]+$").expect("short code pattern is a valid regex")
});

/// Returns true if `input` is an `http` or `https` URL.
///
/// Input without `://` is treated as a bare host and checked as `http://<input>`.
/// Control characters anywhere in the input are rejected.
///
/// # Examples
///
/// ```ignore
/// assert!(is_valid_url("https://example.com/a?b=c"));
/// assert!(is_valid_url("example.com"));
/// assert!(!is_valid_url("ftp://example.com"));
/// ```
pub fn is_valid_url(input: &str) -> bool {
    // Url::parse strips tabs and newlines instead of failing on them.
    if input.chars().any(char::is_control) {
        return false;
    }

    let candidate = if input.contains("://") {
        input.to_string()
    } else {
        format!("http://{}", input)
    };

    match Url::parse(&candidate) {
        Ok(url) => matches!(url.scheme(), "http" | "https") && url.host().is_some(),
        Err(_) => false,
    }
}

/// Returns true if `code` is non-empty and made only of `A-Z a-z 0-9 _ -`.
///
/// Length limits are checked separately, see [`validate_custom_code`].
pub fn is_valid_code(code: &str) -> bool {
    CODE_REGEX.is_match(code)
}

/// Returns true if `code` cannot be used because a fixed route owns the path.
pub fn is_reserved_code(code: &str) -> bool {
    RESERVED_CODES.contains(&code)
}

/// Validates a target URL after trimming.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if the URL is empty, longer than
/// [`MAX_URL_LENGTH`], or not an `http`/`https` URL.
pub fn validate_target_url(url: &str) -> Result<(), AppError> {
    if url.is_empty() {
        return Err(AppError::bad_request("url must not be empty", json!({})));
    }

    if url.len() > MAX_URL_LENGTH {
        return Err(AppError::bad_request(
            format!("url must be at most {} bytes", MAX_URL_LENGTH),
            json!({ "provided_length": url.len() }),
        ));
    }

    if !is_valid_url(url) {
        return Err(AppError::bad_request(
            "Invalid URL format",
            json!({ "url": url, "reason": "expected an http or https URL" }),
        ));
    }

    Ok(())
}

/// Validates a caller-supplied short code.
///
/// # Rules
///
/// - Length: 1-64 characters
/// - Allowed characters: ASCII letters, digits, `_` and `-`
/// - Cannot be a reserved route name
///
/// # Errors
///
/// Returns [`AppError::Validation`] if any rule is violated.
pub fn validate_custom_code(code: &str) -> Result<(), AppError> {
    if code.len() > MAX_CODE_LENGTH {
        return Err(AppError::bad_request(
            format!("Custom code must be at most {} characters", MAX_CODE_LENGTH),
            json!({ "provided_length": code.len() }),
        ));
    }

    if !is_valid_code(code) {
        return Err(AppError::bad_request(
            "Custom code can only contain letters, digits, '-' and '_'",
            json!({ "code": code }),
        ));
    }

    if is_reserved_code(code) {
        return Err(AppError::bad_request(
            "This code is reserved",
            json!({ "code": code }),
        ));
    }

    Ok(())
}
