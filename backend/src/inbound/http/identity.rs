//! Identity HTTP handlers.
//!
//! ```text
//! POST /register {"email":"alice@example.com","password":"Passw0rd!"}
//! POST /login {"email":"alice@example.com","password":"Passw0rd!"}
//! POST /api/account/signout
//! GET /manage/info
//! GET /hello
//! ```

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;
use utoipa::ToSchema;

use crate::domain::{
    Error, IdentityValidationError, LoginCredentials, LoginValidationError, Registration,
    RegistrationValidationError,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, field_error, missing_field_error};

const EMAIL: FieldName = FieldName::new("email");
const PASSWORD: FieldName = FieldName::new("password");

/// Credentials body shared by `POST /register` and `POST /login`.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CredentialsRequest {
    #[schema(example = "alice@example.com")]
    pub email: Option<String>,
    #[schema(example = "Passw0rd!")]
    pub password: Option<String>,
}

impl CredentialsRequest {
    fn into_parts(self) -> Result<(String, String), Error> {
        let email = self.email.ok_or_else(|| missing_field_error(EMAIL))?;
        let password = self.password.ok_or_else(|| missing_field_error(PASSWORD))?;
        Ok((email, password))
    }
}

/// Response body for `GET /manage/info`.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AccountInfoResponse {
    pub email: String,
    pub is_email_confirmed: bool,
}

fn map_registration_error(err: RegistrationValidationError) -> Error {
    match err {
        RegistrationValidationError::Email(IdentityValidationError::EmptyName) => {
            field_error(EMAIL, "empty_email", "email must not be empty")
        }
        RegistrationValidationError::Email(IdentityValidationError::NameTooLong { max }) => {
            field_error(
                EMAIL,
                "email_too_long",
                format!("email must be at most {max} characters"),
            )
        }
        RegistrationValidationError::Email(other) => {
            field_error(EMAIL, "invalid_email", other.to_string())
        }
        RegistrationValidationError::Password(violations) => {
            let codes: Vec<&str> = violations.iter().map(|v| v.code()).collect();
            let messages: Vec<String> = violations.iter().map(ToString::to_string).collect();
            Error::invalid_request(messages.join("; ")).with_details(json!({
                "field": PASSWORD.as_str(),
                "code": codes.first().copied().unwrap_or("invalid_password"),
                "violations": codes,
            }))
        }
    }
}

fn map_login_validation_error(err: LoginValidationError) -> Error {
    match err {
        LoginValidationError::EmptyEmail => {
            field_error(EMAIL, "empty_email", "email must not be empty")
        }
        LoginValidationError::EmptyPassword => {
            field_error(PASSWORD, "empty_password", "password must not be empty")
        }
    }
}

/// Register a new account.
#[utoipa::path(
    post,
    path = "/register",
    request_body = CredentialsRequest,
    responses(
        (status = 200, description = "Account created"),
        (status = 400, description = "Invalid email, weak password, or taken user name", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["identity"],
    operation_id = "register",
    security([])
)]
#[post("/register")]
pub async fn register(
    state: web::Data<HttpState>,
    payload: web::Json<CredentialsRequest>,
) -> ApiResult<HttpResponse> {
    let (email, password) = payload.into_inner().into_parts()?;
    let registration =
        Registration::try_from_parts(&email, &password).map_err(map_registration_error)?;
    let name = state.identity.register(&registration).await?;
    info!(identity = %name, "account registered");
    Ok(HttpResponse::Ok().finish())
}

/// Authenticate and establish a cookie session.
#[utoipa::path(
    post,
    path = "/login",
    request_body = CredentialsRequest,
    responses(
        (status = 200, description = "Login success", headers(("Set-Cookie" = String, description = "Session cookie"))),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 401, description = "Invalid credentials", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["identity"],
    operation_id = "login",
    security([])
)]
#[post("/login")]
pub async fn login(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<CredentialsRequest>,
) -> ApiResult<HttpResponse> {
    let (email, password) = payload.into_inner().into_parts()?;
    let credentials =
        LoginCredentials::try_from_parts(&email, &password).map_err(map_login_validation_error)?;
    let name = state.identity.authenticate(&credentials).await?;
    session.persist_identity(&name)?;
    Ok(HttpResponse::Ok().finish())
}

/// End the current session.
///
/// Succeeds with or without a session so clients can always clear state.
#[utoipa::path(
    post,
    path = "/api/account/signout",
    responses((status = 200, description = "Session cleared")),
    tags = ["identity"],
    operation_id = "signOut",
    security([])
)]
#[post("/api/account/signout")]
pub async fn sign_out(session: SessionContext) -> HttpResponse {
    session.sign_out();
    HttpResponse::Ok().finish()
}

/// Describe the signed-in account.
#[utoipa::path(
    get,
    path = "/manage/info",
    responses(
        (status = 200, description = "Account details", body = AccountInfoResponse),
        (status = 401, description = "Unauthorised", body = ErrorSchema)
    ),
    tags = ["identity"],
    operation_id = "accountInfo"
)]
#[get("/manage/info")]
pub async fn account_info(session: SessionContext) -> ApiResult<web::Json<AccountInfoResponse>> {
    let name = session.require_identity()?;
    Ok(web::Json(AccountInfoResponse {
        email: name.into(),
        is_email_confirmed: false,
    }))
}

/// Echo the caller's identity name as plain text.
#[utoipa::path(
    get,
    path = "/hello",
    responses(
        (status = 200, description = "Identity name", body = String, content_type = "text/plain"),
        (status = 401, description = "Unauthorised", body = ErrorSchema)
    ),
    tags = ["identity"],
    operation_id = "hello"
)]
#[get("/hello")]
pub async fn hello(session: SessionContext) -> ApiResult<HttpResponse> {
    let name = session.require_identity()?;
    Ok(HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(String::from(name)))
}

#[cfg(test)]
#[path = "identity_tests.rs"]
mod tests;
