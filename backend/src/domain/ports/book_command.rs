//! Driving port for book mutations.
//!
//! Inbound adapters call this port with the caller's identity already
//! resolved from the session. Ownership failures surface as
//! [`crate::domain::ErrorCode::NotFound`].

use async_trait::async_trait;

use crate::domain::{Book, BookDraft, BookId, Error, IdentityName};

/// Domain use-case port for creating, replacing, and deleting books.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookCommand: Send + Sync {
    /// Create a book owned by `caller`.
    async fn create(&self, caller: &IdentityName, draft: BookDraft) -> Result<Book, Error>;

    /// Replace the editable fields of a book `caller` owns.
    async fn update(&self, caller: &IdentityName, id: BookId, draft: BookDraft)
    -> Result<(), Error>;

    /// Delete a book `caller` owns.
    async fn delete(&self, caller: &IdentityName, id: BookId) -> Result<(), Error>;
}
