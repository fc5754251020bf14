//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every HTTP endpoint, the DTO and error schemas, and
//! the session cookie security scheme. Swagger UI serves it in debug builds
//! and `cargo run --bin openapi-dump` prints it for tooling.

use crate::inbound::http::books::{BookRequest, BookResponse};
use crate::inbound::http::identity::{AccountInfoResponse, CredentialsRequest};
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

/// Enrich the generated document with the session cookie security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "SessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                "session",
                "Encrypted session cookie issued by POST /login.",
            ))),
        );
    }
}

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "BookNest backend API",
        description = "Per-user book catalogue behind cookie-session authentication."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("SessionCookie" = [])),
    paths(
        crate::inbound::http::identity::register,
        crate::inbound::http::identity::login,
        crate::inbound::http::identity::sign_out,
        crate::inbound::http::identity::account_info,
        crate::inbound::http::identity::hello,
        crate::inbound::http::books::create_book,
        crate::inbound::http::books::list_books,
        crate::inbound::http::books::get_book,
        crate::inbound::http::books::update_book,
        crate::inbound::http::books::delete_book,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        BookRequest,
        BookResponse,
        CredentialsRequest,
        AccountInfoResponse,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "identity", description = "Registration, login, and session management"),
        (name = "books", description = "The signed-in user's books"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
