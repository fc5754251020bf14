//! Port for book persistence.
//!
//! The repository is ownership agnostic: it stores and returns rows by id and
//! filters lists by owner. Deciding whether a caller may see a row is the
//! service's job.

use async_trait::async_trait;

use crate::domain::{Book, BookId, IdentityName, NewBook};

use super::define_port_error;

define_port_error! {
    /// Errors raised by book repository adapters.
    pub enum BookRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "book repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "book repository query failed: {message}",
    }
}

/// Port for book storage and retrieval.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Insert a book and return it with its assigned id.
    async fn insert(&self, book: &NewBook) -> Result<Book, BookRepositoryError>;

    /// Books created by `owner`, in ascending id order.
    async fn list_by_owner(&self, owner: &IdentityName) -> Result<Vec<Book>, BookRepositoryError>;

    /// Fetch a book by id regardless of owner.
    async fn find_by_id(&self, id: BookId) -> Result<Option<Book>, BookRepositoryError>;

    /// Overwrite title, author, and description of an existing row.
    ///
    /// Returns `false` when no row with `book.id` exists.
    async fn update(&self, book: &Book) -> Result<bool, BookRepositoryError>;

    /// Hard-delete a row. Returns `false` when nothing was deleted.
    async fn delete(&self, id: BookId) -> Result<bool, BookRepositoryError>;
}

/// Fixture repository that stores nothing.
///
/// Inserts echo the draft back with id `1`; every lookup misses.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureBookRepository;

#[async_trait]
impl BookRepository for FixtureBookRepository {
    async fn insert(&self, book: &NewBook) -> Result<Book, BookRepositoryError> {
        Ok(Book {
            id: BookId::new(1),
            title: book.title.clone(),
            author: book.author.clone(),
            description: book.description.clone(),
            created_by: book.created_by.clone(),
        })
    }

    async fn list_by_owner(&self, _owner: &IdentityName) -> Result<Vec<Book>, BookRepositoryError> {
        Ok(Vec::new())
    }

    async fn find_by_id(&self, _id: BookId) -> Result<Option<Book>, BookRepositoryError> {
        Ok(None)
    }

    async fn update(&self, _book: &Book) -> Result<bool, BookRepositoryError> {
        Ok(false)
    }

    async fn delete(&self, _id: BookId) -> Result<bool, BookRepositoryError> {
        Ok(false)
    }
}
