//! Book data repository. Soft-deleted rows are excluded from every query.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::server::{
    model::book::{Book, BookQuery, BookSort, CreateBookParams, UpdateBookParams},
    util::query::contains_pattern,
};

pub struct BookRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets live books matching `query`.
    ///
    /// Titles match by literal substring. Sorted by cost when a sort is given, else by id.
    pub async fn get_all(&self, query: BookQuery) -> Result<Vec<Book>, DbErr> {
        let mut select = entity::prelude::Book::find()
            .filter(entity::book::Column::DeletedAt.is_null());

        if let Some(title) = query.title.as_deref().filter(|t| !t.is_empty()) {
            select = select.filter(entity::book::Column::Title.like(contains_pattern(title)));
        }

        select = match query.sort {
            Some(BookSort::CostAsc) => select.order_by_asc(entity::book::Column::Cost),
            Some(BookSort::CostDesc) => select.order_by_desc(entity::book::Column::Cost),
            None => select,
        };

        let books = select
            .order_by_asc(entity::book::Column::Id)
            .all(self.db)
            .await?;

        Ok(books.into_iter().map(Book::from_entity).collect())
    }

    /// Finds a live book by id.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Book>, DbErr> {
        Ok(self.find_live(id).await?.map(Book::from_entity))
    }

    pub async fn create(&self, params: CreateBookParams) -> Result<Book, DbErr> {
        let now = Utc::now();
        let entity = entity::book::ActiveModel {
            title: ActiveValue::Set(params.title),
            author: ActiveValue::Set(params.author),
            description: ActiveValue::Set(params.description),
            cost: ActiveValue::Set(params.cost),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Book::from_entity(entity))
    }

    /// Applies the provided fields to a live book and refreshes `updated_at`.
    ///
    /// # Returns
    /// - `Ok(Some(Book))` - Updated book
    /// - `Ok(None)` - No live book with this id
    /// - `Err(DbErr)` - Database error during query or update
    pub async fn update(&self, id: i32, params: UpdateBookParams) -> Result<Option<Book>, DbErr> {
        let Some(existing) = self.find_live(id).await? else {
            return Ok(None);
        };

        let mut active = existing.into_active_model();
        if let Some(title) = params.title {
            active.title = ActiveValue::Set(title);
        }
        if let Some(author) = params.author {
            active.author = ActiveValue::Set(author);
        }
        if let Some(description) = params.description {
            active.description = ActiveValue::Set(description);
        }
        if let Some(cost) = params.cost {
            active.cost = ActiveValue::Set(cost);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let updated = active.update(self.db).await?;

        Ok(Some(Book::from_entity(updated)))
    }

    /// Soft-deletes a live book.
    ///
    /// # Returns
    /// - `Ok(true)` - Book marked deleted
    /// - `Ok(false)` - No live book with this id
    /// - `Err(DbErr)` - Database error during query or update
    pub async fn soft_delete(&self, id: i32) -> Result<bool, DbErr> {
        let Some(existing) = self.find_live(id).await? else {
            return Ok(false);
        };

        let mut active = existing.into_active_model();
        active.deleted_at = ActiveValue::Set(Some(Utc::now()));
        active.update(self.db).await?;

        Ok(true)
    }

    async fn find_live(&self, id: i32) -> Result<Option<entity::book::Model>, DbErr> {
        entity::prelude::Book::find_by_id(id)
            .filter(entity::book::Column::DeletedAt.is_null())
            .one(self.db)
            .await
    }
}
