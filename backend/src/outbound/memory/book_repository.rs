//! In-memory `BookRepository`.

use std::collections::BTreeMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::ports::{BookRepository, BookRepositoryError};
use crate::domain::{Book, BookId, IdentityName, NewBook};

#[derive(Debug, Default)]
struct BookTable {
    next_id: i32,
    rows: BTreeMap<BookId, Book>,
}

/// Book store keyed by id; ids start at 1 and are never reused.
#[derive(Debug, Default)]
pub struct InMemoryBookRepository {
    table: RwLock<BookTable>,
}

impl InMemoryBookRepository {
    /// Empty store whose first book gets id 1.
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned() -> BookRepositoryError {
    BookRepositoryError::query("book table lock poisoned")
}

#[async_trait]
impl BookRepository for InMemoryBookRepository {
    async fn insert(&self, book: &NewBook) -> Result<Book, BookRepositoryError> {
        let mut table = self.table.write().map_err(|_| poisoned())?;
        table.next_id = table
            .next_id
            .checked_add(1)
            .ok_or_else(|| BookRepositoryError::query("book id space exhausted"))?;
        let stored = Book {
            id: BookId::new(table.next_id),
            title: book.title.clone(),
            author: book.author.clone(),
            description: book.description.clone(),
            created_by: book.created_by.clone(),
        };
        table.rows.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn list_by_owner(&self, owner: &IdentityName) -> Result<Vec<Book>, BookRepositoryError> {
        let table = self.table.read().map_err(|_| poisoned())?;
        Ok(table
            .rows
            .values()
            .filter(|book| book.is_owned_by(owner))
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: BookId) -> Result<Option<Book>, BookRepositoryError> {
        let table = self.table.read().map_err(|_| poisoned())?;
        Ok(table.rows.get(&id).cloned())
    }

    async fn update(&self, book: &Book) -> Result<bool, BookRepositoryError> {
        let mut table = self.table.write().map_err(|_| poisoned())?;
        let Some(existing) = table.rows.get_mut(&book.id) else {
            return Ok(false);
        };
        existing.title.clone_from(&book.title);
        existing.author.clone_from(&book.author);
        existing.description.clone_from(&book.description);
        Ok(true)
    }

    async fn delete(&self, id: BookId) -> Result<bool, BookRepositoryError> {
        let mut table = self.table.write().map_err(|_| poisoned())?;
        Ok(table.rows.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    fn owner(name: &str) -> IdentityName {
        IdentityName::new(name).expect("valid owner")
    }

    fn new_book(title: &str, created_by: &str) -> NewBook {
        NewBook {
            title: title.into(),
            author: "Someone".into(),
            description: String::new(),
            created_by: owner(created_by),
        }
    }

    #[fixture]
    fn repo() -> InMemoryBookRepository {
        InMemoryBookRepository::new()
    }

    #[rstest]
    #[tokio::test]
    async fn ids_increase_and_are_not_reused(repo: InMemoryBookRepository) {
        let first = repo.insert(&new_book("A", "alice@example.com")).await.expect("insert");
        assert!(repo.delete(first.id).await.expect("delete"));
        let second = repo.insert(&new_book("B", "alice@example.com")).await.expect("insert");
        assert_eq!(first.id, BookId::new(1));
        assert_eq!(second.id, BookId::new(2));
    }

    #[rstest]
    #[tokio::test]
    async fn list_filters_by_owner_in_id_order(repo: InMemoryBookRepository) {
        for (title, who) in [
            ("A", "alice@example.com"),
            ("B", "bob@example.com"),
            ("C", "alice@example.com"),
        ] {
            repo.insert(&new_book(title, who)).await.expect("insert");
        }

        let titles: Vec<String> = repo
            .list_by_owner(&owner("alice@example.com"))
            .await
            .expect("list")
            .into_iter()
            .map(|book| book.title)
            .collect();
        assert_eq!(titles, vec!["A", "C"]);
    }

    #[rstest]
    #[tokio::test]
    async fn update_keeps_owner_and_reports_missing_rows(repo: InMemoryBookRepository) {
        let mut book = repo.insert(&new_book("A", "alice@example.com")).await.expect("insert");
        book.title = "A2".into();
        book.created_by = owner("bob@example.com");
        assert!(repo.update(&book).await.expect("update"));

        let stored = repo.find_by_id(book.id).await.expect("find").expect("present");
        assert_eq!(stored.title, "A2");
        assert_eq!(stored.created_by, owner("alice@example.com"));

        book.id = BookId::new(99);
        assert!(!repo.update(&book).await.expect("update"));
    }

    #[rstest]
    #[tokio::test]
    async fn delete_of_missing_row_returns_false(repo: InMemoryBookRepository) {
        assert!(!repo.delete(BookId::new(5)).await.expect("delete"));
    }
}
