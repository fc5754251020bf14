//! Application settings loaded via OrthoConfig.
//!
//! Values come from `BOOKNEST_*` environment variables, CLI flags, or a
//! config file; unset values fall back to development defaults.

use std::net::SocketAddr;

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_CORS_ORIGIN: &str = "http://localhost:5173";

/// Process-level settings outside the session cookie policy.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "BOOKNEST")]
pub struct AppSettings {
    /// Socket address the HTTP listener binds to.
    pub bind_addr: Option<String>,
    /// PostgreSQL URL; when absent the server keeps state in memory.
    pub database_url: Option<String>,
    /// The single browser origin allowed to make credentialed requests.
    pub cors_origin: Option<String>,
    /// Upper bound on pooled database connections; must be at least one.
    #[ortho_config(default = 10)]
    pub pool_max_size: u32,
}

/// Raised when a setting is present but unusable.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("invalid bind address '{value}': {source}")]
    BindAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
    #[error("pool_max_size must be at least 1, got {value}")]
    PoolMaxSize { value: u32 },
}

impl AppSettings {
    /// Parsed listener address.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let raw = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        raw.parse().map_err(|source| SettingsError::BindAddr {
            value: raw.to_owned(),
            source,
        })
    }

    /// Database URL, ignoring blank values.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// Allowed CORS origin, defaulting to the local development client.
    pub fn cors_origin(&self) -> &str {
        self.cors_origin.as_deref().unwrap_or(DEFAULT_CORS_ORIGIN)
    }

    /// Pool size, rejecting zero before it reaches the pool builder.
    pub fn pool_max_size(&self) -> Result<u32, SettingsError> {
        match self.pool_max_size {
            0 => Err(SettingsError::PoolMaxSize { value: 0 }),
            value => Ok(value),
        }
    }
}
