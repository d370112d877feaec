/// Configuration management for the Venture Platform backend
///
/// Handles server binding, database location, and session lifetime.

use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server configuration
    pub server: ServerConfig,
    /// Database configuration
    pub database: DatabaseConfig,
    /// Authentication configuration
    pub auth: AuthConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server bind address (e.g., "0.0.0.0")
    pub host: String,
    /// Server port number
    pub port: u16,
}

/// Relational store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// SQLite connection URL (default: "sqlite://data/app.db")
    pub url: String,
    /// Insert the built-in competition catalogue at startup (default: true)
    pub seed_competitions: bool,
}

/// Longest accepted session lifetime: one year
pub const MAX_TOKEN_TTL_HOURS: i64 = 24 * 365;

/// Session lifetime used when none (or an out-of-range one) is configured
pub const DEFAULT_TOKEN_TTL_HOURS: i64 = 24;

/// Session token configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Lifetime of a login token in hours, within 1..=MAX_TOKEN_TTL_HOURS
    pub token_ttl_hours: i64,
}

impl Default for Config {
    /// Default configuration with ENV_VAR support for container deployment
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: std::env::var("PLATFORM_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: std::env::var("PLATFORM_PORT")
                    .unwrap_or_else(|_| "8080".to_string())
                    .parse()
                    .unwrap_or(8080),
            },
            database: DatabaseConfig {
                url: std::env::var("DATABASE_URL")
                    .unwrap_or_else(|_| "sqlite://data/app.db".to_string()),
                seed_competitions: std::env::var("PLATFORM_SEED_COMPETITIONS")
                    .map(|v| !matches!(v.trim(), "0" | "false" | "no" | "off"))
                    .unwrap_or(true),
            },
            auth: AuthConfig {
                token_ttl_hours: parse_token_ttl_hours(
                    std::env::var("PLATFORM_TOKEN_TTL_HOURS").ok().as_deref(),
                ),
            },
        }
    }
}

/// Parse a token lifetime in hours, falling back to the default when the
/// value is missing, malformed, or outside 1..=MAX_TOKEN_TTL_HOURS
pub fn parse_token_ttl_hours(raw: Option<&str>) -> i64 {
    match raw.and_then(|v| v.trim().parse::<i64>().ok()) {
        Some(hours) if (1..=MAX_TOKEN_TTL_HOURS).contains(&hours) => hours,
        Some(hours) => {
            tracing::warn!(
                "Ignoring token lifetime of {} hours (allowed 1..={}); using {}",
                hours,
                MAX_TOKEN_TTL_HOURS,
                DEFAULT_TOKEN_TTL_HOURS
            );
            DEFAULT_TOKEN_TTL_HOURS
        }
        None => DEFAULT_TOKEN_TTL_HOURS,
    }
}
