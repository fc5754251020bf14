//! Tests for the book service.

use std::sync::Arc;

use super::*;
use crate::domain::ErrorCode;
use crate::domain::ports::MockBookRepository;
use rstest::{fixture, rstest};

#[fixture]
fn alice() -> IdentityName {
    IdentityName::new("alice@example.com").expect("valid identity")
}

#[fixture]
fn bob() -> IdentityName {
    IdentityName::new("bob@example.com").expect("valid identity")
}

fn stored_book(id: i32, owner: &IdentityName) -> Book {
    Book {
        id: BookId::new(id),
        title: "A".into(),
        author: "B".into(),
        description: String::new(),
        created_by: owner.clone(),
    }
}

fn draft(title: &str) -> BookDraft {
    BookDraft::new(title, "Author", Some("notes".into())).expect("valid draft")
}

fn make_service(repo: MockBookRepository) -> BookService<MockBookRepository> {
    BookService::new(Arc::new(repo))
}

#[rstest]
#[tokio::test]
async fn create_stamps_caller_as_owner(alice: IdentityName) {
    let mut repo = MockBookRepository::new();
    let expected_owner = alice.clone();
    repo.expect_insert()
        .withf(move |book| book.created_by == expected_owner && book.title == "Dune")
        .times(1)
        .returning(|book| {
            Ok(Book {
                id: BookId::new(9),
                title: book.title.clone(),
                author: book.author.clone(),
                description: book.description.clone(),
                created_by: book.created_by.clone(),
            })
        });

    let book = make_service(repo)
        .create(&alice, draft("Dune"))
        .await
        .expect("create succeeds");

    assert_eq!(book.id, BookId::new(9));
    assert_eq!(book.created_by, alice);
    assert_eq!(book.description, "notes");
}

#[rstest]
#[tokio::test]
async fn list_delegates_owner_filter(alice: IdentityName) {
    let mut repo = MockBookRepository::new();
    let owned = vec![stored_book(1, &alice), stored_book(3, &alice)];
    let expected_owner = alice.clone();
    repo.expect_list_by_owner()
        .withf(move |owner| owner == &expected_owner)
        .times(1)
        .return_once(move |_| Ok(owned));

    let books = make_service(repo).list(&alice).await.expect("list succeeds");
    let ids: Vec<i32> = books.iter().map(|book| book.id.get()).collect();
    assert_eq!(ids, vec![1, 3]);
}

#[rstest]
#[tokio::test]
async fn get_returns_owned_book(alice: IdentityName) {
    let mut repo = MockBookRepository::new();
    let book = stored_book(5, &alice);
    repo.expect_find_by_id()
        .times(1)
        .return_once(move |_| Ok(Some(book)));

    let found = make_service(repo)
        .get(&alice, BookId::new(5))
        .await
        .expect("owner can read");
    assert_eq!(found.id, BookId::new(5));
}

#[rstest]
#[case::missing(None)]
#[case::foreign(Some("bob@example.com"))]
#[tokio::test]
async fn get_hides_missing_and_foreign_books(alice: IdentityName, #[case] owner: Option<&str>) {
    let mut repo = MockBookRepository::new();
    let stored = owner.map(|name| {
        stored_book(5, &IdentityName::new(name).expect("valid identity"))
    });
    repo.expect_find_by_id()
        .times(1)
        .return_once(move |_| Ok(stored));

    let err = make_service(repo)
        .get(&alice, BookId::new(5))
        .await
        .expect_err("must be hidden");
    assert_eq!(err.code(), ErrorCode::NotFound);
}

#[rstest]
#[tokio::test]
async fn update_copies_only_editable_fields(alice: IdentityName) {
    let mut repo = MockBookRepository::new();
    let stored = stored_book(2, &alice);
    repo.expect_find_by_id()
        .times(1)
        .return_once(move |_| Ok(Some(stored)));
    let expected_owner = alice.clone();
    repo.expect_update()
        .withf(move |book| {
            book.id == BookId::new(2)
                && book.created_by == expected_owner
                && book.title == "Renamed"
                && book.description == "notes"
        })
        .times(1)
        .returning(|_| Ok(true));

    make_service(repo)
        .update(&alice, BookId::new(2), draft("Renamed"))
        .await
        .expect("update succeeds");
}

#[rstest]
#[tokio::test]
async fn update_of_foreign_book_never_writes(alice: IdentityName, bob: IdentityName) {
    let mut repo = MockBookRepository::new();
    let stored = stored_book(2, &alice);
    repo.expect_find_by_id()
        .times(1)
        .return_once(move |_| Ok(Some(stored)));
    repo.expect_update().never();

    let err = make_service(repo)
        .update(&bob, BookId::new(2), draft("Stolen"))
        .await
        .expect_err("foreign update rejected");
    assert_eq!(err.code(), ErrorCode::NotFound);
}

#[rstest]
#[tokio::test]
async fn update_reports_row_deleted_concurrently(alice: IdentityName) {
    let mut repo = MockBookRepository::new();
    let stored = stored_book(2, &alice);
    repo.expect_find_by_id()
        .return_once(move |_| Ok(Some(stored)));
    repo.expect_update().returning(|_| Ok(false));

    let err = make_service(repo)
        .update(&alice, BookId::new(2), draft("Late"))
        .await
        .expect_err("row vanished");
    assert_eq!(err.code(), ErrorCode::NotFound);
}

#[rstest]
#[tokio::test]
async fn delete_removes_owned_book(alice: IdentityName) {
    let mut repo = MockBookRepository::new();
    let stored = stored_book(4, &alice);
    repo.expect_find_by_id()
        .return_once(move |_| Ok(Some(stored)));
    repo.expect_delete()
        .withf(|id| *id == BookId::new(4))
        .times(1)
        .returning(|_| Ok(true));

    make_service(repo)
        .delete(&alice, BookId::new(4))
        .await
        .expect("delete succeeds");
}

#[rstest]
#[tokio::test]
async fn delete_of_foreign_book_never_writes(alice: IdentityName, bob: IdentityName) {
    let mut repo = MockBookRepository::new();
    let stored = stored_book(4, &alice);
    repo.expect_find_by_id()
        .return_once(move |_| Ok(Some(stored)));
    repo.expect_delete().never();

    let err = make_service(repo)
        .delete(&bob, BookId::new(4))
        .await
        .expect_err("foreign delete rejected");
    assert_eq!(err.code(), ErrorCode::NotFound);
}

#[rstest]
#[case::connection(BookRepositoryError::connection("pool timed out"))]
#[case::query(BookRepositoryError::query("relation missing"))]
#[tokio::test]
async fn store_failures_map_to_internal(alice: IdentityName, #[case] failure: BookRepositoryError) {
    let mut repo = MockBookRepository::new();
    repo.expect_list_by_owner()
        .return_once(move |_| Err(failure));

    let err = make_service(repo)
        .list(&alice)
        .await
        .expect_err("store failure surfaces");
    assert_eq!(err.code(), ErrorCode::InternalError);
}
