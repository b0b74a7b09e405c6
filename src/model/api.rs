use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of every error response.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// Body of responses that only confirm an action.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct MessageDto {
    pub message: String,
}

/// Wrapper used by the bookstore for every successful response.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct DataDto<T> {
    pub data: T,
}
