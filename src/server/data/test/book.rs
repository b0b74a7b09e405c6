use super::*;
use sea_orm::EntityTrait;

use crate::server::{
    data::book::BookRepository,
    model::book::{BookQuery, BookSort, UpdateBookParams},
};
use test_utils::factory::book::BookFactory;

/// Tests that soft-deleted books are invisible to every read.
///
/// Expected: listing and lookup skip the deleted book
#[tokio::test]
async fn hides_soft_deleted_books() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_book_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let live = factory::create_book(db).await?;
    let deleted = BookFactory::new(db).deleted().build().await?;

    let repo = BookRepository::new(db);
    let books = repo.get_all(BookQuery::default()).await?;

    assert_eq!(books.len(), 1);
    assert_eq!(books[0].id, live.id);
    assert!(repo.find_by_id(deleted.id).await?.is_none());

    Ok(())
}

/// Tests sorting by cost and filtering by title.
///
/// Expected: asc and desc orderings by cost; title filter matches substrings
#[tokio::test]
async fn sorts_and_filters_books() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_book_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    BookFactory::new(db).title("Rust in Action").cost(40).build().await?;
    BookFactory::new(db).title("Go Basics").cost(15).build().await?;
    BookFactory::new(db).title("Programming Rust").cost(30).build().await?;

    let repo = BookRepository::new(db);
    let costs = |books: Vec<crate::server::model::book::Book>| {
        books.into_iter().map(|b| b.cost).collect::<Vec<_>>()
    };

    let asc = repo
        .get_all(BookQuery {
            title: None,
            sort: Some(BookSort::CostAsc),
        })
        .await?;
    assert_eq!(costs(asc), vec![15, 30, 40]);

    let desc = repo
        .get_all(BookQuery {
            title: None,
            sort: Some(BookSort::CostDesc),
        })
        .await?;
    assert_eq!(costs(desc), vec![40, 30, 15]);

    let rust = repo
        .get_all(BookQuery {
            title: Some("Rust".to_string()),
            sort: None,
        })
        .await?;
    assert_eq!(costs(rust), vec![40, 30]);

    Ok(())
}

/// Tests that wildcard characters in a title filter are matched literally.
///
/// Expected: `_` and `%` match only titles containing them
#[tokio::test]
async fn title_filter_treats_wildcards_literally() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_book_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let snake = BookFactory::new(db).title("snake_case Style").build().await?;
    let percent = BookFactory::new(db).title("100% Rust").build().await?;
    BookFactory::new(db).title("Plain Title").build().await?;

    let repo = BookRepository::new(db);
    let titled = |title: &str| BookQuery {
        title: Some(title.to_string()),
        sort: None,
    };

    let books = repo.get_all(titled("_")).await?;
    assert_eq!(books.len(), 1);
    assert_eq!(books[0].id, snake.id);

    let books = repo.get_all(titled("%")).await?;
    assert_eq!(books.len(), 1);
    assert_eq!(books[0].id, percent.id);

    Ok(())
}

/// Tests a partial update.
///
/// Expected: only the provided fields change and updated_at moves forward
#[tokio::test]
async fn updates_provided_fields_only() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_book_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let book = BookFactory::new(db)
        .title("Old Title")
        .author("Jane")
        .cost(10)
        .build()
        .await?;

    let updated = BookRepository::new(db)
        .update(
            book.id,
            UpdateBookParams {
                cost: Some(12),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.cost, 12);
    assert_eq!(updated.title, "Old Title");
    assert_eq!(updated.author, "Jane");
    assert!(updated.updated_at >= book.updated_at);

    Ok(())
}

/// Tests that a book can be soft-deleted once.
///
/// Expected: first delete succeeds, second finds nothing, later updates find nothing
#[tokio::test]
async fn soft_deletes_once() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_book_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let book = factory::create_book(db).await?;
    let repo = BookRepository::new(db);

    assert!(repo.soft_delete(book.id).await?);
    assert!(!repo.soft_delete(book.id).await?);
    assert!(repo
        .update(book.id, UpdateBookParams::default())
        .await?
        .is_none());

    let row = entity::prelude::Book::find_by_id(book.id)
        .one(db)
        .await?
        .unwrap();
    assert!(row.deleted_at.is_some());

    Ok(())
}
