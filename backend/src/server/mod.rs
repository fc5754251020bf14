//! Server construction and middleware wiring.

mod config;
mod settings;
mod state_builders;

pub use config::ServerConfig;
pub use settings::{AppSettings, SettingsError};

use state_builders::build_http_state;

use actix_cors::Cors;
use actix_session::{
    SessionMiddleware,
    config::{CookieContentSecurity, PersistentSession},
    storage::CookieSessionStore,
};
use actix_web::cookie::time::Duration as CookieDuration;
use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};

use booknest::Trace;
#[cfg(debug_assertions)]
use booknest::doc::ApiDoc;
use booknest::inbound::http::books::{create_book, delete_book, get_book, list_books, update_book};
use booknest::inbound::http::health::{HealthState, live, ready};
use booknest::inbound::http::identity::{account_info, hello, login, register, sign_out};
use booknest::inbound::http::session::SESSION_COOKIE_NAME;
use booknest::inbound::http::session_config::SessionSettings;
use booknest::inbound::http::state::HttpState;
use booknest::inbound::http::validation::json_config;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[derive(Clone)]
struct AppDependencies {
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
    session: SessionPolicy,
    cors_origin: String,
}

/// Cloneable subset of [`SessionSettings`] used per worker.
#[derive(Clone)]
struct SessionPolicy {
    key: actix_web::cookie::Key,
    cookie_secure: bool,
    same_site: actix_web::cookie::SameSite,
    ttl: CookieDuration,
}

impl AppDependencies {
    /// Resolve repositories and the session policy once; workers clone the
    /// result.
    fn from_config(health_state: web::Data<HealthState>, config: ServerConfig) -> Self {
        let http_state = build_http_state(config.db_pool.as_ref());
        let ServerConfig {
            session,
            cors_origin,
            ..
        } = config;
        Self {
            health_state,
            http_state,
            session: SessionPolicy::from_settings(&session),
            cors_origin,
        }
    }
}

impl SessionPolicy {
    fn from_settings(settings: &SessionSettings) -> Self {
        let ttl_secs = i64::try_from(settings.ttl.as_secs()).unwrap_or(i64::MAX);
        Self {
            key: settings.key.clone(),
            cookie_secure: settings.cookie_secure,
            same_site: settings.same_site,
            ttl: CookieDuration::seconds(ttl_secs),
        }
    }

    fn middleware(self) -> SessionMiddleware<CookieSessionStore> {
        SessionMiddleware::builder(CookieSessionStore::default(), self.key)
            .cookie_name(SESSION_COOKIE_NAME.to_owned())
            .cookie_path("/".into())
            .cookie_secure(self.cookie_secure)
            .cookie_http_only(true)
            .cookie_content_security(CookieContentSecurity::Private)
            .cookie_same_site(self.same_site)
            .session_lifecycle(PersistentSession::default().session_ttl(self.ttl))
            .build()
    }
}

fn cors_for(origin: &str) -> Cors {
    Cors::default()
        .allowed_origin(origin)
        .allow_any_header()
        .allow_any_method()
        .supports_credentials()
}

fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<
            actix_web::body::EitherBody<actix_web::body::BoxBody>,
        >,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
        session,
        cors_origin,
    } = deps;

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .app_data(json_config())
        .wrap(session.middleware())
        .wrap(cors_for(&cors_origin))
        .wrap(Trace)
        .service(register)
        .service(login)
        .service(sign_out)
        .service(account_info)
        .service(hello)
        .service(create_book)
        .service(list_books)
        .service(get_book)
        .service(update_book)
        .service(delete_book)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(
        SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    );

    app
}

/// Construct an Actix HTTP server using the provided health state and configuration.
///
/// The returned [`Server`] must be awaited to drive the listener. Readiness is
/// flagged once the socket is bound.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let bind_addr = config.bind_addr();
    let deps = AppDependencies::from_config(health_state.clone(), config);

    let server = HttpServer::new(move || build_app(deps.clone()))
        .bind(bind_addr)?
        .run();

    health_state.mark_ready();
    Ok(server)
}
