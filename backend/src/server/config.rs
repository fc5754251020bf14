//! HTTP server configuration object and helpers.

use std::net::SocketAddr;

use booknest::inbound::http::session_config::SessionSettings;
use booknest::outbound::persistence::DbPool;

use super::settings::{AppSettings, SettingsError};

/// Everything [`super::create_server`] needs to build the application.
pub struct ServerConfig {
    pub(crate) session: SessionSettings,
    pub(crate) bind_addr: SocketAddr,
    pub(crate) cors_origin: String,
    pub(crate) db_pool: Option<DbPool>,
}

impl ServerConfig {
    /// Construct a configuration that keeps state in memory.
    #[must_use]
    pub fn new(session: SessionSettings, bind_addr: SocketAddr, cors_origin: String) -> Self {
        Self {
            session,
            bind_addr,
            cors_origin,
            db_pool: None,
        }
    }

    /// Resolve the listener address and CORS origin from loaded settings.
    ///
    /// # Errors
    /// Returns [`SettingsError`] when the bind address does not parse.
    pub fn from_settings(
        settings: &AppSettings,
        session: SessionSettings,
    ) -> Result<Self, SettingsError> {
        Ok(Self::new(
            session,
            settings.bind_addr()?,
            settings.cors_origin().to_owned(),
        ))
    }

    /// Attach a database connection pool; repositories then use PostgreSQL.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
