//! Shared PostgreSQL pool behind the book and account repositories.
//!
//! BookNest keeps one `bb8` pool of `diesel-async` connections for the life
//! of the process. `DieselBookRepository` and `DieselAccountRepository` check
//! out a connection per call and map [`PoolError`] into their `Connection`
//! variant, which the services report as an internal error.

use std::time::Duration;

use diesel_async::AsyncPgConnection;
use diesel_async::pooled_connection::AsyncDieselConnectionManager;
use diesel_async::pooled_connection::bb8::{Pool, PooledConnection};

/// Why the pool could not be built or could not hand out a connection.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PoolError {
    /// No connection became available before the checkout timeout.
    #[error("failed to get connection from pool: {message}")]
    Checkout { message: String },

    /// The pool settings or the initial connections were rejected at startup.
    #[error("failed to build connection pool: {message}")]
    Build { message: String },
}

impl PoolError {
    /// Wrap a checkout failure reported by `bb8`.
    pub fn checkout(message: impl Into<String>) -> Self {
        Self::Checkout {
            message: message.into(),
        }
    }

    /// Wrap a startup failure.
    pub fn build(message: impl Into<String>) -> Self {
        Self::Build {
            message: message.into(),
        }
    }
}

/// Sizing and timeout settings for the BookNest pool.
///
/// `BOOKNEST_POOL_MAX_SIZE` feeds [`PoolConfig::with_max_size`]; the idle
/// floor never exceeds it, so a single-connection pool is valid.
///
/// # Example
///
/// ```
/// use std::time::Duration;
///
/// use booknest::outbound::persistence::PoolConfig;
///
/// let config = PoolConfig::new("postgres://booknest@localhost/booknest")
///     .with_max_size(1)
///     .with_connection_timeout(Duration::from_secs(5));
/// assert_eq!(config.database_url(), "postgres://booknest@localhost/booknest");
/// assert_eq!(config.min_idle(), Some(1));
/// ```
#[derive(Debug, Clone)]
pub struct PoolConfig {
    database_url: String,
    max_size: u32,
    min_idle: Option<u32>,
    connection_timeout: Duration,
}

impl PoolConfig {
    /// Ten connections, two kept idle, 30 second checkout timeout.
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            max_size: 10,
            min_idle: Some(2),
            connection_timeout: Duration::from_secs(30),
        }
    }

    /// Cap the number of open connections.
    pub fn with_max_size(mut self, max_size: u32) -> Self {
        self.max_size = max_size;
        self
    }

    /// Keep at least this many connections open between requests.
    pub fn with_min_idle(mut self, min_idle: Option<u32>) -> Self {
        self.min_idle = min_idle;
        self
    }

    /// How long a repository call waits for a free connection.
    pub fn with_connection_timeout(mut self, timeout: Duration) -> Self {
        self.connection_timeout = timeout;
        self
    }

    /// Connection string handed to the Diesel manager.
    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    /// Idle floor actually applied: the requested value capped at `max_size`.
    pub fn min_idle(&self) -> Option<u32> {
        self.min_idle.map(|idle| idle.min(self.max_size))
    }
}

/// Cloneable handle to the shared connection pool.
#[derive(Clone)]
pub struct DbPool {
    inner: Pool<AsyncPgConnection>,
}

impl DbPool {
    /// Build the pool, opening the idle connections eagerly.
    ///
    /// # Errors
    ///
    /// Returns `PoolError::Build` when `max_size` is zero, the URL is
    /// invalid, or the database is unreachable.
    pub async fn new(config: PoolConfig) -> Result<Self, PoolError> {
        if config.max_size == 0 {
            return Err(PoolError::build("max_size must be at least 1"));
        }
        let manager = AsyncDieselConnectionManager::<AsyncPgConnection>::new(&config.database_url);

        let pool = Pool::builder()
            .max_size(config.max_size)
            .min_idle(config.min_idle())
            .connection_timeout(config.connection_timeout)
            .build(manager)
            .await
            .map_err(|err| PoolError::build(err.to_string()))?;

        Ok(Self { inner: pool })
    }

    /// Check out a connection, waiting up to the configured timeout.
    pub async fn get(&self) -> Result<PooledConnection<'_, AsyncPgConnection>, PoolError> {
        self.inner
            .get()
            .await
            .map_err(|err| PoolError::checkout(err.to_string()))
    }
}
