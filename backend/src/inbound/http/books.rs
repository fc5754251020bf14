//! Book HTTP handlers.
//!
//! ```text
//! POST /api/books {"title":"Dune","author":"Frank Herbert","description":""}
//! GET /api/books
//! GET /api/books/{id}
//! PUT /api/books/{id}
//! DELETE /api/books/{id}
//! ```
//!
//! Every handler resolves the caller from the session before touching the
//! request path, the body, or the store, so anonymous callers always see 401.
//! Bodies therefore arrive as raw bytes and are decoded after that check.

use actix_web::http::header;
use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Book, BookDraft, BookValidationError, Error};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, decode_json_body, field_error, missing_field_error, parse_book_id,
};

/// Request payload for creating or replacing a book.
///
/// Only the editable fields are declared; `id` and `createdBy` sent by a
/// client are dropped during deserialisation.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookRequest {
    #[schema(example = "Dune")]
    pub title: Option<String>,
    #[schema(example = "Frank Herbert")]
    pub author: Option<String>,
    #[schema(example = "")]
    pub description: Option<String>,
}

/// Wire representation of a stored book.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookResponse {
    #[schema(example = 1)]
    pub id: i32,
    pub title: String,
    pub author: String,
    pub description: String,
    #[schema(example = "alice@example.com")]
    pub created_by: String,
}

impl From<Book> for BookResponse {
    fn from(value: Book) -> Self {
        Self {
            id: value.id.get(),
            title: value.title,
            author: value.author,
            description: value.description,
            created_by: value.created_by.into(),
        }
    }
}

fn map_book_validation_error(err: BookValidationError) -> Error {
    let field = match err {
        BookValidationError::EmptyTitle => FieldName::new("title"),
        BookValidationError::EmptyAuthor => FieldName::new("author"),
    };
    field_error(field, err.code(), err.to_string())
}

fn parse_book_request(body: &[u8]) -> Result<BookDraft, Error> {
    let payload: BookRequest = decode_json_body(body)?;
    let title = payload
        .title
        .ok_or_else(|| missing_field_error(FieldName::new("title")))?;
    let author = payload
        .author
        .ok_or_else(|| missing_field_error(FieldName::new("author")))?;
    BookDraft::new(title, author, payload.description).map_err(map_book_validation_error)
}

/// Create a book owned by the caller.
#[utoipa::path(
    post,
    path = "/api/books",
    request_body = BookRequest,
    responses(
        (
            status = 201,
            description = "Book created",
            headers(("Location" = String, description = "URL of the new book")),
            body = BookResponse
        ),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["books"],
    operation_id = "createBook"
)]
#[post("/api/books")]
pub async fn create_book(
    state: web::Data<HttpState>,
    session: SessionContext,
    body: web::Bytes,
) -> ApiResult<HttpResponse> {
    let caller = session.require_identity()?;
    let draft = parse_book_request(&body)?;
    let book = state.books.create(&caller, draft).await?;
    let location = format!("/api/books/{}", book.id);
    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, location))
        .json(BookResponse::from(book)))
}

/// List the caller's books in ascending id order.
#[utoipa::path(
    get,
    path = "/api/books",
    responses(
        (status = 200, description = "Caller's books", body = [BookResponse]),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["books"],
    operation_id = "listBooks"
)]
#[get("/api/books")]
pub async fn list_books(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<Vec<BookResponse>>> {
    let caller = session.require_identity()?;
    let books = state.books_query.list(&caller).await?;
    Ok(web::Json(books.into_iter().map(BookResponse::from).collect()))
}

/// Fetch one of the caller's books.
#[utoipa::path(
    get,
    path = "/api/books/{id}",
    params(("id" = i32, Path, description = "Book identifier")),
    responses(
        (status = 200, description = "Book", body = BookResponse),
        (status = 400, description = "Malformed id", body = ErrorSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 404, description = "Missing or owned by someone else", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["books"],
    operation_id = "getBook"
)]
#[get("/api/books/{id}")]
pub async fn get_book(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
) -> ApiResult<web::Json<BookResponse>> {
    let caller = session.require_identity()?;
    let id = parse_book_id(&path)?;
    let book = state.books_query.get(&caller, id).await?;
    Ok(web::Json(BookResponse::from(book)))
}

/// Replace title, author, and description of one of the caller's books.
#[utoipa::path(
    put,
    path = "/api/books/{id}",
    params(("id" = i32, Path, description = "Book identifier")),
    request_body = BookRequest,
    responses(
        (status = 204, description = "Book updated"),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 404, description = "Missing or owned by someone else", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["books"],
    operation_id = "updateBook"
)]
#[put("/api/books/{id}")]
pub async fn update_book(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
    body: web::Bytes,
) -> ApiResult<HttpResponse> {
    let caller = session.require_identity()?;
    let id = parse_book_id(&path)?;
    let draft = parse_book_request(&body)?;
    state.books.update(&caller, id, draft).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Delete one of the caller's books.
#[utoipa::path(
    delete,
    path = "/api/books/{id}",
    params(("id" = i32, Path, description = "Book identifier")),
    responses(
        (status = 204, description = "Book deleted"),
        (status = 400, description = "Malformed id", body = ErrorSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 404, description = "Missing or owned by someone else", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["books"],
    operation_id = "deleteBook"
)]
#[delete("/api/books/{id}")]
pub async fn delete_book(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let caller = session.require_identity()?;
    let id = parse_book_id(&path)?;
    state.books.delete(&caller, id).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
#[path = "books_tests.rs"]
mod tests;
