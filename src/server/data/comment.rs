use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

use crate::server::model::product::{Comment, CreateCommentParams};

pub struct CommentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Appends a comment to a product. The product must exist.
    pub async fn create(&self, params: CreateCommentParams) -> Result<Comment, DbErr> {
        let entity = entity::comment::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            product_id: ActiveValue::Set(params.product_id),
            comment: ActiveValue::Set(params.comment),
            rating: ActiveValue::Set(params.rating),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(Comment::from_entity(entity))
    }
}
