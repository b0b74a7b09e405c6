use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct AddressDto {
    pub id: Uuid,
    pub house_name: String,
    pub street_name: String,
    pub city_name: String,
    pub pin_code: String,
}

/// Body for adding or overwriting an address.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct AddressInputDto {
    pub house_name: String,
    pub street_name: String,
    pub city_name: String,
    pub pin_code: String,
}
