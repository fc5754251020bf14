//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Repositories translate between Diesel rows (`models.rs`, `schema.rs`) and
//! domain types; neither rows nor schema leave this module. Connections come
//! from a `bb8` pool through `diesel-async`.
//!
//! # Example
//!
//! ```no_run
//! use booknest::outbound::persistence::{
//!     DbPool, DieselBookRepository, PoolConfig, run_pending_migrations,
//! };
//!
//! # async fn wire() -> Result<(), Box<dyn std::error::Error>> {
//! let url = "postgres://booknest@localhost/booknest";
//! run_pending_migrations(url).await?;
//! let pool = DbPool::new(PoolConfig::new(url)).await?;
//! let _books = DieselBookRepository::new(pool);
//! # Ok(())
//! # }
//! ```

mod diesel_account_repository;
mod diesel_basic_error_mapping;
mod diesel_book_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_account_repository::DieselAccountRepository;
pub use diesel_book_repository::DieselBookRepository;
pub use migrations::{MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
