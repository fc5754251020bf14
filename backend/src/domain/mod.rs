//! Domain primitives, services, and ports.
//!
//! Purpose: define strongly typed entities used by the HTTP and persistence
//! adapters, plus the services that enforce book ownership and account
//! rules. Nothing here depends on actix-web or Diesel.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic error payload.
//! - IdentityName: the authenticated user's name and book ownership key.
//! - Book / BookDraft / BookId / NewBook: the book aggregate.
//! - LoginCredentials / Registration: validated identity inputs.
//! - BookService / AccountService: implementations of the driving ports.

pub mod account;
pub mod account_service;
pub mod auth;
pub mod book;
pub mod book_service;
pub mod error;
pub mod identity;
pub mod password;
pub mod ports;
pub mod trace_id;

pub use self::account::{Account, NewAccount};
pub use self::account_service::AccountService;
pub use self::auth::{
    LoginCredentials, LoginValidationError, Registration, RegistrationValidationError,
};
pub use self::book::{
    Book, BookDraft, BookId, BookIdParseError, BookValidationError, NewBook,
};
pub use self::book_service::BookService;
pub use self::error::{Error, ErrorCode};
pub use self::identity::{IdentityName, IdentityValidationError, normalize};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
