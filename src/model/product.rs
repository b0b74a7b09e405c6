use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct ProductDto {
    pub id: Uuid,
    pub product_name: String,
    pub price: i64,
    pub rating: Option<i32>,
    pub image: Option<String>,
    pub comments: Vec<CommentDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreateProductDto {
    pub product_name: String,
    pub price: i64,
    pub rating: Option<i32>,
    pub image: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CommentDto {
    pub id: Uuid,
    pub comment: String,
    pub rating: Option<i32>,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreateCommentDto {
    pub comment: String,
    pub rating: Option<i32>,
}
