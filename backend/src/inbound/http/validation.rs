//! Shared validation helpers for inbound HTTP adapters.
//!
//! Every helper produces an `invalid_request` error whose details carry the
//! offending `field` and a stable snake-case `code`.

use actix_web::{HttpRequest, error::JsonPayloadError, web};
use serde::de::DeserializeOwned;
use serde_json::json;

use crate::domain::{BookId, Error};

/// Request field names surfaced in error details.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub(crate) fn as_str(self) -> &'static str {
        self.0
    }
}

/// Build an `invalid_request` error tied to a single field.
pub(crate) fn field_error(field: FieldName, code: &str, message: impl Into<String>) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field.as_str(),
        "code": code,
    }))
}

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    field_error(
        field,
        "missing_field",
        format!("{} is required", field.as_str()),
    )
}

/// Parse a `{id}` path segment into a [`BookId`].
pub(crate) fn parse_book_id(raw: &str) -> Result<BookId, Error> {
    raw.parse::<BookId>().map_err(|_| {
        Error::invalid_request("book id must be an integer").with_details(json!({
            "field": "id",
            "value": raw,
            "code": "invalid_book_id",
        }))
    })
}

/// Decode a raw JSON body once the caller has been authorised.
///
/// Handlers that must answer 401 before touching the body take it as
/// `web::Bytes` and call this instead of using the `Json` extractor.
pub(crate) fn decode_json_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, Error> {
    serde_json::from_slice(body).map_err(|err| {
        Error::invalid_request(format!("invalid request body: {err}"))
            .with_details(json!({ "code": "invalid_json" }))
    })
}

/// JSON extractor configuration that reports body errors in the shared error
/// format instead of actix's plain-text default.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(json_error_handler)
}

fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let code = match &err {
        JsonPayloadError::ContentType => "unsupported_content_type",
        JsonPayloadError::OverflowKnownLength { .. } | JsonPayloadError::Overflow { .. } => {
            "payload_too_large"
        }
        _ => "invalid_json",
    };
    Error::invalid_request(format!("invalid request body: {err}"))
        .with_details(json!({ "code": code }))
        .into()
}
