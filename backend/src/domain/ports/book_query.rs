//! Driving port for book reads.

use async_trait::async_trait;

use crate::domain::{Book, BookId, Error, IdentityName};

/// Domain use-case port for reading the caller's books.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookQuery: Send + Sync {
    /// Every book `caller` created, ascending by id.
    async fn list(&self, caller: &IdentityName) -> Result<Vec<Book>, Error>;

    /// A single book, visible only to its creator.
    async fn get(&self, caller: &IdentityName, id: BookId) -> Result<Book, Error>;
}
