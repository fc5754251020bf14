//! PostgreSQL-backed `BookRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{BookRepository, BookRepositoryError};
use crate::domain::{Book, BookId, IdentityName, NewBook};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{BookRow, BookUpdate, NewBookRow};
use super::pool::{DbPool, PoolError};
use super::schema::books;

/// Diesel-backed implementation of the book repository port.
#[derive(Clone)]
pub struct DieselBookRepository {
    pool: DbPool,
}

impl DieselBookRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> BookRepositoryError {
    map_basic_pool_error(error, BookRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> BookRepositoryError {
    map_basic_diesel_error(
        error,
        BookRepositoryError::query,
        BookRepositoryError::connection,
    )
}

/// Convert a database row into a domain book.
///
/// Owner names were validated on the way in, so a failure here means the
/// table was edited out of band.
fn row_to_book(row: BookRow) -> Result<Book, BookRepositoryError> {
    let BookRow {
        id,
        title,
        author,
        description,
        created_by,
        created_at: _,
    } = row;
    let created_by = IdentityName::new(created_by).map_err(|err| {
        BookRepositoryError::query(format!("book {id} has an invalid owner: {err}"))
    })?;
    Ok(Book {
        id: BookId::new(id),
        title,
        author,
        description,
        created_by,
    })
}

#[async_trait]
impl BookRepository for DieselBookRepository {
    async fn insert(&self, book: &NewBook) -> Result<Book, BookRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let new_row = NewBookRow {
            title: &book.title,
            author: &book.author,
            description: &book.description,
            created_by: book.created_by.as_ref(),
        };

        let row = diesel::insert_into(books::table)
            .values(&new_row)
            .returning(BookRow::as_returning())
            .get_result::<BookRow>(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        row_to_book(row)
    }

    async fn list_by_owner(&self, owner: &IdentityName) -> Result<Vec<Book>, BookRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<BookRow> = books::table
            .filter(books::created_by.eq(owner.as_ref()))
            .order(books::id.asc())
            .select(BookRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(row_to_book).collect()
    }

    async fn find_by_id(&self, id: BookId) -> Result<Option<Book>, BookRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = books::table
            .filter(books::id.eq(id.get()))
            .select(BookRow::as_select())
            .first::<BookRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_book).transpose()
    }

    async fn update(&self, book: &Book) -> Result<bool, BookRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let changes = BookUpdate {
            title: &book.title,
            author: &book.author,
            description: &book.description,
        };

        let affected = diesel::update(books::table.filter(books::id.eq(book.id.get())))
            .set(&changes)
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(affected > 0)
    }

    async fn delete(&self, id: BookId) -> Result<bool, BookRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let affected = diesel::delete(books::table.filter(books::id.eq(id.get())))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(affected > 0)
    }
}
