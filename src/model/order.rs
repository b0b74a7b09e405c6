use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::model::cart::LineItemDto;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct PaymentDto {
    pub digital: bool,
    pub cod: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct OrderDto {
    pub id: Uuid,
    pub ordered_at: DateTime<Utc>,
    pub price: i64,
    pub payment: PaymentDto,
    pub items: Vec<LineItemDto>,
}
