//! Session helpers to keep HTTP handlers free of framework-specific logic.
//!
//! Provides a thin wrapper around Actix sessions so handlers only deal with
//! domain-friendly operations: persisting the signed-in identity, reading it
//! back, and signing out.

use actix_session::Session;
use actix_web::{FromRequest, HttpRequest, dev::Payload};
use futures_util::future::LocalBoxFuture;

use crate::domain::{Error, IdentityName};

/// Name of the session cookie.
pub const SESSION_COOKIE_NAME: &str = "session";

pub(crate) const IDENTITY_NAME_KEY: &str = "identity_name";

/// Newtype wrapper that exposes higher-level session operations.
#[derive(Clone)]
pub struct SessionContext(Session);

impl SessionContext {
    /// Construct a new wrapper from the underlying Actix session.
    pub fn new(session: Session) -> Self {
        Self(session)
    }

    /// Persist the authenticated identity in the session cookie.
    ///
    /// The session is renewed first so a pre-login cookie never carries over
    /// into the authenticated session.
    pub fn persist_identity(&self, name: &IdentityName) -> Result<(), Error> {
        self.0.renew();
        self.0
            .insert(IDENTITY_NAME_KEY, name.as_ref())
            .map_err(|error| Error::internal(format!("failed to persist session: {error}")))
    }

    /// Fetch the current identity from the session, if present.
    ///
    /// A stored value that no longer validates is treated as absent.
    pub fn identity_name(&self) -> Result<Option<IdentityName>, Error> {
        let raw = self
            .0
            .get::<String>(IDENTITY_NAME_KEY)
            .map_err(|error| Error::internal(format!("failed to read session: {error}")))?;
        match raw {
            Some(raw) => match IdentityName::new(raw) {
                Ok(name) => Ok(Some(name)),
                Err(error) => {
                    tracing::warn!("invalid identity name in session cookie: {error}");
                    Ok(None)
                }
            },
            None => Ok(None),
        }
    }

    /// Require an authenticated identity or return `401 Unauthorized`.
    pub fn require_identity(&self) -> Result<IdentityName, Error> {
        self.identity_name()?
            .ok_or_else(|| Error::unauthorized("login required"))
    }

    /// Drop all session state; the middleware expires the cookie.
    pub fn sign_out(&self) {
        self.0.purge();
    }
}

impl FromRequest for SessionContext {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let fut = Session::from_request(req, payload);
        Box::pin(async move { fut.await.map(SessionContext::new) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inbound::http::test_utils::{session_cookie, test_session_middleware};
    use actix_session::Session;
    use actix_web::http::StatusCode;
    use actix_web::{App, HttpResponse, test, web};

    fn session_test_app() -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .wrap(test_session_middleware())
            .route(
                "/set",
                web::get().to(|session: SessionContext| async move {
                    let name = IdentityName::new("alice@example.com").expect("fixture name");
                    session.persist_identity(&name)?;
                    Ok::<_, Error>(HttpResponse::Ok())
                }),
            )
            .route(
                "/get",
                web::get().to(|session: SessionContext| async move {
                    let name = session.require_identity()?;
                    Ok::<_, Error>(HttpResponse::Ok().body(name.to_string()))
                }),
            )
            .route(
                "/out",
                web::get().to(|session: SessionContext| async move {
                    session.sign_out();
                    HttpResponse::Ok()
                }),
            )
    }

    #[actix_web::test]
    async fn round_trips_identity_name() {
        let app = test::init_service(session_test_app()).await;

        let set_res =
            test::call_service(&app, test::TestRequest::get().uri("/set").to_request()).await;
        assert_eq!(set_res.status(), StatusCode::OK);
        let cookie = session_cookie(&set_res).expect("session cookie set");

        let get_res = test::call_service(
            &app,
            test::TestRequest::get().uri("/get").cookie(cookie).to_request(),
        )
        .await;
        assert_eq!(get_res.status(), StatusCode::OK);
        let body = test::read_body(get_res).await;
        assert_eq!(body, "alice@example.com");
    }

    #[actix_web::test]
    async fn missing_identity_is_unauthorised() {
        let app = test::init_service(session_test_app()).await;

        let res = test::call_service(&app, test::TestRequest::get().uri("/get").to_request()).await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn sign_out_expires_cookie() {
        let app = test::init_service(session_test_app()).await;

        let set_res =
            test::call_service(&app, test::TestRequest::get().uri("/set").to_request()).await;
        let cookie = session_cookie(&set_res).expect("session cookie set");

        let out_res = test::call_service(
            &app,
            test::TestRequest::get().uri("/out").cookie(cookie).to_request(),
        )
        .await;
        let removal = session_cookie(&out_res).expect("removal cookie sent");
        assert_eq!(removal.value(), "");
    }

    #[actix_web::test]
    async fn tampered_identity_is_unauthorised() {
        let app = test::init_service(session_test_app().route(
            "/set-invalid",
            web::get().to(|session: Session| async move {
                session
                    .insert(IDENTITY_NAME_KEY, "   ")
                    .expect("set invalid identity");
                HttpResponse::Ok()
            }),
        ))
        .await;

        let set_res = test::call_service(
            &app,
            test::TestRequest::get().uri("/set-invalid").to_request(),
        )
        .await;
        let cookie = session_cookie(&set_res).expect("session cookie set");

        let res = test::call_service(
            &app,
            test::TestRequest::get().uri("/get").cookie(cookie).to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }
}
