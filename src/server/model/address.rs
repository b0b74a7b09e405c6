//! Address domain model and slots.

use uuid::Uuid;

use crate::{
    model::address::{AddressDto, AddressInputDto},
    server::error::AppError,
};

/// Maximum number of addresses a user may hold.
pub const MAX_ADDRESSES: u64 = 2;

/// Which of the two address positions an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressSlot {
    Home,
    Work,
}

impl AddressSlot {
    pub fn index(self) -> i32 {
        match self {
            Self::Home => 0,
            Self::Work => 1,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Work => "work",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Address {
    pub id: Uuid,
    pub slot: i32,
    pub house_name: String,
    pub street_name: String,
    pub city_name: String,
    pub pin_code: String,
}

impl Address {
    pub fn from_entity(entity: entity::address::Model) -> Self {
        Self {
            id: entity.id,
            slot: entity.slot,
            house_name: entity.house_name,
            street_name: entity.street_name,
            city_name: entity.city_name,
            pin_code: entity.pin_code,
        }
    }

    pub fn into_dto(self) -> AddressDto {
        AddressDto {
            id: self.id,
            house_name: self.house_name,
            street_name: self.street_name,
            city_name: self.city_name,
            pin_code: self.pin_code,
        }
    }
}

/// Address fields for creating or overwriting an address.
#[derive(Debug, Clone)]
pub struct AddressParams {
    pub house_name: String,
    pub street_name: String,
    pub city_name: String,
    pub pin_code: String,
}

impl AddressParams {
    /// Validates that every field is non-empty after trimming.
    pub fn from_dto(dto: AddressInputDto) -> Result<Self, AppError> {
        Ok(Self {
            house_name: required("house_name", dto.house_name)?,
            street_name: required("street_name", dto.street_name)?,
            city_name: required("city_name", dto.city_name)?,
            pin_code: required("pin_code", dto.pin_code)?,
        })
    }
}

fn required(field: &str, value: String) -> Result<String, AppError> {
    let value = value.trim().to_string();
    if value.is_empty() {
        return Err(AppError::BadRequest(format!("{} is required", field)));
    }
    Ok(value)
}
