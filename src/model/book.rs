use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct BookDto {
    pub id: i32,
    pub title: String,
    pub author: String,
    pub description: String,
    pub cost: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreateBookDto {
    pub title: String,
    pub author: String,
    #[serde(default)]
    pub description: String,
    pub cost: i64,
}

/// Partial update; absent fields keep their stored value.
#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct UpdateBookDto {
    pub title: Option<String>,
    pub author: Option<String>,
    pub description: Option<String>,
    pub cost: Option<i64>,
}
