use sea_orm::DatabaseConnection;

use crate::server::{
    data::book::BookRepository,
    error::AppError,
    model::book::{Book, BookQuery, CreateBookParams, UpdateBookParams},
};

const RECORD_NOT_FOUND: &str = "Record not found!";

pub struct BookService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self, query: BookQuery) -> Result<Vec<Book>, AppError> {
        Ok(BookRepository::new(self.db).get_all(query).await?)
    }

    pub async fn get(&self, id: i32) -> Result<Book, AppError> {
        BookRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(not_found)
    }

    pub async fn create(&self, params: CreateBookParams) -> Result<Book, AppError> {
        let book = BookRepository::new(self.db).create(params).await?;

        tracing::info!(book_id = book.id, "Created book");

        Ok(book)
    }

    pub async fn update(&self, id: i32, params: UpdateBookParams) -> Result<Book, AppError> {
        BookRepository::new(self.db)
            .update(id, params)
            .await?
            .ok_or_else(not_found)
    }

    /// Soft-deletes a book; it disappears from every later read.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !BookRepository::new(self.db).soft_delete(id).await? {
            return Err(not_found());
        }

        tracing::info!(book_id = id, "Deleted book");

        Ok(())
    }
}

fn not_found() -> AppError {
    AppError::NotFound(RECORD_NOT_FOUND.to_string())
}
