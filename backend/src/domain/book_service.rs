//! Book domain service.
//!
//! Implements the book driving ports on top of a [`BookRepository`]. Every
//! read or write of an existing row checks ownership first; a row owned by
//! someone else is indistinguishable from a missing row.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{BookCommand, BookQuery, BookRepository, BookRepositoryError};
use crate::domain::{Book, BookDraft, BookId, Error, IdentityName, NewBook};

/// Book service implementing [`BookCommand`] and [`BookQuery`].
#[derive(Clone)]
pub struct BookService<R> {
    repo: Arc<R>,
}

impl<R> BookService<R> {
    /// Create a new service over `repo`.
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

fn map_repository_error(error: BookRepositoryError) -> Error {
    match error {
        BookRepositoryError::Connection { message } => {
            Error::internal(format!("book repository unavailable: {message}"))
        }
        BookRepositoryError::Query { message } => {
            Error::internal(format!("book repository error: {message}"))
        }
    }
}

fn book_not_found(id: BookId) -> Error {
    Error::not_found(format!("book {id} not found"))
}

impl<R> BookService<R>
where
    R: BookRepository,
{
    async fn find_owned(&self, caller: &IdentityName, id: BookId) -> Result<Book, Error> {
        self.repo
            .find_by_id(id)
            .await
            .map_err(map_repository_error)?
            .filter(|book| book.is_owned_by(caller))
            .ok_or_else(|| book_not_found(id))
    }
}

#[async_trait]
impl<R> BookCommand for BookService<R>
where
    R: BookRepository,
{
    async fn create(&self, caller: &IdentityName, draft: BookDraft) -> Result<Book, Error> {
        let new_book = NewBook::from_draft(draft, caller.clone());
        self.repo
            .insert(&new_book)
            .await
            .map_err(map_repository_error)
    }

    async fn update(
        &self,
        caller: &IdentityName,
        id: BookId,
        draft: BookDraft,
    ) -> Result<(), Error> {
        let mut book = self.find_owned(caller, id).await?;
        draft.apply_to(&mut book);
        let updated = self
            .repo
            .update(&book)
            .await
            .map_err(map_repository_error)?;
        if updated {
            Ok(())
        } else {
            Err(book_not_found(id))
        }
    }

    async fn delete(&self, caller: &IdentityName, id: BookId) -> Result<(), Error> {
        self.find_owned(caller, id).await?;
        let deleted = self.repo.delete(id).await.map_err(map_repository_error)?;
        if deleted {
            Ok(())
        } else {
            Err(book_not_found(id))
        }
    }
}

#[async_trait]
impl<R> BookQuery for BookService<R>
where
    R: BookRepository,
{
    async fn list(&self, caller: &IdentityName) -> Result<Vec<Book>, Error> {
        self.repo
            .list_by_owner(caller)
            .await
            .map_err(map_repository_error)
    }

    async fn get(&self, caller: &IdentityName, id: BookId) -> Result<Book, Error> {
        self.find_owned(caller, id).await
    }
}

#[cfg(test)]
#[path = "book_service_tests.rs"]
mod tests;
