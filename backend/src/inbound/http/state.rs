//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{BookCommand, BookQuery, IdentityService};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub identity: Arc<dyn IdentityService>,
    pub books: Arc<dyn BookCommand>,
    pub books_query: Arc<dyn BookQuery>,
}

impl HttpState {
    /// Construct state from port implementations.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use booknest::domain::BookService;
    /// use booknest::domain::ports::{FixtureBookRepository, FixtureIdentityService};
    /// use booknest::inbound::http::state::HttpState;
    ///
    /// let books = Arc::new(BookService::new(Arc::new(FixtureBookRepository)));
    /// let state = HttpState::new(Arc::new(FixtureIdentityService), books.clone(), books);
    /// let _identity = state.identity.clone();
    /// ```
    pub fn new(
        identity: Arc<dyn IdentityService>,
        books: Arc<dyn BookCommand>,
        books_query: Arc<dyn BookQuery>,
    ) -> Self {
        Self {
            identity,
            books,
            books_query,
        }
    }
}
