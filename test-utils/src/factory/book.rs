//! Book factory for bookstore tests.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test books with customizable fields.
pub struct BookFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    author: String,
    description: String,
    cost: i64,
    deleted: bool,
}

impl<'a> BookFactory<'a> {
    /// Creates a new BookFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Book {id}"`
    /// - author: `"Author {id}"`
    /// - description: `""`
    /// - cost: `20`
    /// - not deleted
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            title: format!("Book {}", id),
            author: format!("Author {}", id),
            description: String::new(),
            cost: 20,
            deleted: false,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn cost(mut self, cost: i64) -> Self {
        self.cost = cost;
        self
    }

    /// Marks the book as soft-deleted.
    pub fn deleted(mut self) -> Self {
        self.deleted = true;
        self
    }

    /// Builds and inserts the book entity into the database.
    pub async fn build(self) -> Result<entity::book::Model, DbErr> {
        let now = Utc::now();
        entity::book::ActiveModel {
            title: ActiveValue::Set(self.title),
            author: ActiveValue::Set(self.author),
            description: ActiveValue::Set(self.description),
            cost: ActiveValue::Set(self.cost),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(self.deleted.then_some(now)),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a book with default values.
pub async fn create_book(db: &DatabaseConnection) -> Result<entity::book::Model, DbErr> {
    BookFactory::new(db).build().await
}
