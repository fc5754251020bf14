//! Process-local adapters used when no database is configured and by the
//! integration tests.
//!
//! State lives behind `RwLock`s and disappears with the process. A poisoned
//! lock surfaces as the port's `Query` error.

mod account_repository;
mod book_repository;

pub use account_repository::InMemoryAccountRepository;
pub use book_repository::InMemoryBookRepository;
