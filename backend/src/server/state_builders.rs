//! Builders wiring repository adapters into the HTTP state.

use std::sync::Arc;

use actix_web::web;
use tracing::warn;

use booknest::domain::ports::{AccountRepository, BookRepository};
use booknest::domain::{AccountService, BookService};
use booknest::inbound::http::state::HttpState;
use booknest::outbound::memory::{InMemoryAccountRepository, InMemoryBookRepository};
use booknest::outbound::persistence::{DbPool, DieselAccountRepository, DieselBookRepository};

/// Build services over the given repositories.
fn build_from_repositories<A, B>(accounts: A, books: B) -> HttpState
where
    A: AccountRepository + 'static,
    B: BookRepository + 'static,
{
    let identity = Arc::new(AccountService::new(Arc::new(accounts)));
    let books = Arc::new(BookService::new(Arc::new(books)));
    HttpState::new(identity, books.clone(), books)
}

/// Use PostgreSQL repositories when a pool is available, otherwise in-memory
/// ones that lose every account and book on restart.
pub(super) fn build_http_state(db_pool: Option<&DbPool>) -> web::Data<HttpState> {
    let state = match db_pool {
        Some(pool) => build_from_repositories(
            DieselAccountRepository::new(pool.clone()),
            DieselBookRepository::new(pool.clone()),
        ),
        None => {
            warn!("no database configured; accounts and books are kept in memory");
            build_from_repositories(
                InMemoryAccountRepository::new(),
                InMemoryBookRepository::new(),
            )
        }
    };
    web::Data::new(state)
}
