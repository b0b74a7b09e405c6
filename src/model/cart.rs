use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A product as captured in a cart or an order snapshot.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct LineItemDto {
    pub product_id: Uuid,
    pub product_name: String,
    pub price: i64,
    pub rating: Option<i32>,
    pub image: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CartDto {
    pub total: i64,
    pub items: Vec<LineItemDto>,
}
