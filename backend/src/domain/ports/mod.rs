//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports (repositories) expose strongly typed errors so adapters map
//! their failures into predictable variants. Driving ports (commands, queries,
//! identity) return the domain [`crate::domain::Error`] directly.

mod macros;
pub(crate) use macros::define_port_error;

mod account_repository;
mod book_command;
mod book_query;
mod book_repository;
mod identity_service;

#[cfg(test)]
pub use account_repository::MockAccountRepository;
pub use account_repository::{
    AccountRepository, AccountRepositoryError, FixtureAccountRepository,
};
#[cfg(test)]
pub use book_command::MockBookCommand;
pub use book_command::BookCommand;
#[cfg(test)]
pub use book_query::MockBookQuery;
pub use book_query::BookQuery;
#[cfg(test)]
pub use book_repository::MockBookRepository;
pub use book_repository::{BookRepository, BookRepositoryError, FixtureBookRepository};
#[cfg(test)]
pub use identity_service::MockIdentityService;
pub use identity_service::{
    FIXTURE_EMAIL, FIXTURE_PASSWORD, FixtureIdentityService, IdentityService,
};
