//! Backend entry-point: loads configuration, prepares storage, and serves the
//! identity and book endpoints.

mod server;

use actix_web::web;
use mockable::DefaultEnv;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use booknest::inbound::http::health::HealthState;
use booknest::inbound::http::session_config::fingerprint::key_fingerprint;
use booknest::inbound::http::session_config::{BuildMode, session_settings_from_env};
use booknest::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};
use server::{AppSettings, ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load_from_iter(std::env::args_os())
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;

    let session = session_settings_from_env(&DefaultEnv::new(), BuildMode::from_debug_assertions())
        .map_err(std::io::Error::other)?;
    info!(
        fingerprint = %key_fingerprint(&session.key),
        cookie_secure = session.cookie_secure,
        same_site = ?session.same_site,
        ttl_secs = session.ttl.as_secs(),
        "session key loaded"
    );

    let mut config =
        ServerConfig::from_settings(&settings, session).map_err(std::io::Error::other)?;
    if let Some(url) = settings.database_url() {
        let max_size = settings.pool_max_size().map_err(std::io::Error::other)?;
        run_pending_migrations(url)
            .await
            .map_err(std::io::Error::other)?;
        let pool = DbPool::new(PoolConfig::new(url).with_max_size(max_size))
            .await
            .map_err(std::io::Error::other)?;
        config = config.with_db_pool(pool);
    }

    info!(
        bind_addr = %config.bind_addr(),
        cors_origin = settings.cors_origin(),
        "starting server"
    );
    let health_state = web::Data::new(HealthState::new());
    create_server(health_state, config)?.await
}
