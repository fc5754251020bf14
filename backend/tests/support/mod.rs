//! Shared helpers for backend integration tests.
//!
//! The application is assembled from the library's handlers over in-memory
//! repositories and driven in-process with `actix_web::test`.

use std::sync::Arc;

use actix_session::SessionMiddleware;
use actix_session::config::{CookieContentSecurity, PersistentSession};
use actix_session::storage::CookieSessionStore;
use actix_web::body::MessageBody;
use actix_web::cookie::{Cookie, Key, SameSite, time::Duration as CookieDuration};
use actix_web::dev::{Service, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::http::header::HeaderMap;
use actix_web::{App, test as actix_test, web};
use booknest::Trace;
use booknest::domain::{AccountService, BookService};
use booknest::inbound::http::books::{
    create_book, delete_book, get_book, list_books, update_book,
};
use booknest::inbound::http::identity::{account_info, hello, login, register, sign_out};
use booknest::inbound::http::session::SESSION_COOKIE_NAME;
use booknest::inbound::http::state::HttpState;
use booknest::inbound::http::validation::json_config;
use booknest::outbound::memory::{InMemoryAccountRepository, InMemoryBookRepository};
use serde_json::{Value, json};

pub const PASSWORD: &str = "Passw0rd!";

fn session_middleware() -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_name(SESSION_COOKIE_NAME.to_owned())
        .cookie_secure(false)
        .cookie_http_only(true)
        .cookie_content_security(CookieContentSecurity::Private)
        .cookie_same_site(SameSite::Lax)
        .session_lifecycle(PersistentSession::default().session_ttl(CookieDuration::hours(1)))
        .build()
}

fn in_memory_state() -> web::Data<HttpState> {
    let identity = Arc::new(AccountService::new(Arc::new(InMemoryAccountRepository::new())));
    let books = Arc::new(BookService::new(Arc::new(InMemoryBookRepository::new())));
    web::Data::new(HttpState::new(identity, books.clone(), books))
}

/// Every identity and book route over fresh in-memory storage.
pub fn booknest_app() -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(in_memory_state())
        .app_data(json_config())
        .wrap(session_middleware())
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
}

/// Status, headers, and body of a completed call.
pub struct Reply {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

/// Send `request`, attaching `cookie` when given, and decode any JSON body.
pub async fn send<S, B>(
    app: &S,
    request: actix_test::TestRequest,
    cookie: Option<&Cookie<'static>>,
) -> Reply
where
    S: Service<actix_http::Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let request = match cookie {
        Some(cookie) => request.cookie(cookie.clone()),
        None => request,
    };
    let response = actix_test::call_service(app, request.to_request()).await;
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = actix_test::read_body(response).await;
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };
    Reply {
        status,
        headers,
        body,
    }
}

/// Register `email` and sign in, returning the session cookie.
pub async fn sign_up<S, B>(app: &S, email: &str) -> Cookie<'static>
where
    S: Service<actix_http::Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let credentials = json!({"email": email, "password": PASSWORD});
    let registered = actix_test::call_service(
        app,
        actix_test::TestRequest::post()
            .uri("/register")
            .set_json(&credentials)
            .to_request(),
    )
    .await;
    assert_eq!(registered.status(), StatusCode::OK, "register {email}");
    sign_in(app, email, PASSWORD)
        .await
        .expect("login after registration")
}

/// Sign in, returning the session cookie or the failing status.
pub async fn sign_in<S, B>(app: &S, email: &str, password: &str) -> Result<Cookie<'static>, StatusCode>
where
    S: Service<actix_http::Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let response = actix_test::call_service(
        app,
        actix_test::TestRequest::post()
            .uri("/login")
            .set_json(json!({"email": email, "password": password}))
            .to_request(),
    )
    .await;
    if response.status() != StatusCode::OK {
        return Err(response.status());
    }
    response
        .response()
        .cookies()
        .find(|cookie| cookie.name() == SESSION_COOKIE_NAME)
        .map(Cookie::into_owned)
        .ok_or(response.status())
}
