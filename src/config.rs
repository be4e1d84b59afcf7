//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ```bash
//! export API_TOKEN="change-me"
//! export SHORT_DOMAIN="https://s.example.com"
//! export DATABASE_URL="sqlite://shortlink.db"
//! ```
//!
//! ## Required Variables
//!
//! - `API_TOKEN` - Bearer token required on every `/api/*` route
//!
//! ## Optional Variables
//!
//! - `PORT` - Listen port (default: `8080`)
//! - `HOST` - Listen interface (default: `0.0.0.0`)
//! - `SHORT_DOMAIN` - Prefix for generated short URLs (default: `http://localhost:8080`)
//! - `DATABASE_URL` - SQLite database (default: `sqlite://shortlink.db`)
//! - `DB_MAX_CONNECTIONS` - Pool size (default: 5)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::{Context, Result};
use std::env;
use std::fmt;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_SHORT_DOMAIN: &str = "http://localhost:8080";
pub const DEFAULT_DATABASE_URL: &str = "sqlite://shortlink.db";

/// Service configuration loaded from environment variables.
#[derive(Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Bearer token for the API. Never logged.
    pub api_token: String,
    /// Public prefix of short URLs, e.g. `https://s.example.com`.
    pub short_domain: String,
    pub database_url: String,
    pub db_max_connections: u32,
    pub log_level: String,
    pub log_format: String,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("api_token", &"***")
            .field("short_domain", &self.short_domain)
            .field("database_url", &self.database_url)
            .field("db_max_connections", &self.db_max_connections)
            .field("log_level", &self.log_level)
            .field("log_format", &self.log_format)
            .finish()
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `API_TOKEN` is missing or a numeric variable does not parse.
    pub fn from_env() -> Result<Self> {
        let api_token = env::var("API_TOKEN").context("API_TOKEN must be set")?;

        let port = match env::var("PORT") {
            Ok(v) => v
                .parse()
                .with_context(|| format!("PORT must be a valid port number, got '{}'", v))?,
            Err(_) => DEFAULT_PORT,
        };

        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let short_domain =
            env::var("SHORT_DOMAIN").unwrap_or_else(|_| DEFAULT_SHORT_DOMAIN.to_string());

        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

        let db_max_connections = env::var("DB_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5);

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Ok(Self {
            host,
            port,
            api_token,
            short_domain,
            database_url,
            db_max_connections,
            log_level,
            log_format,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `api_token` is empty
    /// - `port` is 0
    /// - `short_domain` is not an http(s) URL
    /// - `database_url` is not a SQLite URL
    /// - `log_format` is not `text` or `json`
    /// - `db_max_connections` is 0
    pub fn validate(&self) -> Result<()> {
        if self.api_token.trim().is_empty() {
            anyhow::bail!("API_TOKEN must not be empty");
        }

        if self.port == 0 {
            anyhow::bail!("PORT must be greater than 0");
        }

        if !self.short_domain.starts_with("http://") && !self.short_domain.starts_with("https://")
        {
            anyhow::bail!(
                "SHORT_DOMAIN must start with 'http://' or 'https://', got '{}'",
                self.short_domain
            );
        }

        if !self.database_url.starts_with("sqlite:") {
            anyhow::bail!(
                "DATABASE_URL must start with 'sqlite:', got '{}'",
                self.database_url
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if self.db_max_connections == 0 {
            anyhow::bail!("DB_MAX_CONNECTIONS must be at least 1");
        }

        Ok(())
    }

    /// Socket address string the server binds to.
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Prints configuration summary (without the API token).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr());
        tracing::info!("  Short domain: {}", self.short_domain);
        tracing::info!("  Database: {}", self.database_url);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
