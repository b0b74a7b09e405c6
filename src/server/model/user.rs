//! User domain models and signup validation.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{
    model::user::{LoginDto, SignupDto, UserDto},
    server::error::AppError,
};

const NAME_MIN_LEN: usize = 2;
const NAME_MAX_LEN: usize = 30;
const PASSWORD_MIN_LEN: usize = 6;

/// A registered customer. The password hash stays in the data layer.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            first_name: entity.first_name,
            last_name: entity.last_name,
            email: entity.email,
            phone: entity.phone,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone: self.phone,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Validated signup request with a plaintext password.
#[derive(Debug, Clone)]
pub struct SignupParams {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
}

impl SignupParams {
    /// Validates a signup DTO.
    ///
    /// Names are trimmed and must be 2 to 30 characters, the email must contain `@`, the
    /// phone must be non-empty and the password at least 6 characters.
    ///
    /// # Returns
    /// - `Ok(SignupParams)` - All fields valid
    /// - `Err(AppError::BadRequest)` - Message naming the first invalid field
    pub fn from_dto(dto: SignupDto) -> Result<Self, AppError> {
        let first_name = dto.first_name.trim().to_string();
        let last_name = dto.last_name.trim().to_string();
        let email = dto.email.trim().to_string();
        let phone = dto.phone.trim().to_string();

        validate_name("first_name", &first_name)?;
        validate_name("last_name", &last_name)?;

        if !email.contains('@') {
            return Err(AppError::BadRequest("email is not valid".to_string()));
        }
        if phone.is_empty() {
            return Err(AppError::BadRequest("phone is required".to_string()));
        }
        if dto.password.chars().count() < PASSWORD_MIN_LEN {
            return Err(AppError::BadRequest(format!(
                "password must be at least {} characters",
                PASSWORD_MIN_LEN
            )));
        }

        Ok(Self {
            first_name,
            last_name,
            email,
            phone,
            password: dto.password,
        })
    }
}

fn validate_name(field: &str, value: &str) -> Result<(), AppError> {
    let len = value.chars().count();
    if !(NAME_MIN_LEN..=NAME_MAX_LEN).contains(&len) {
        return Err(AppError::BadRequest(format!(
            "{} must be between {} and {} characters",
            field, NAME_MIN_LEN, NAME_MAX_LEN
        )));
    }
    Ok(())
}

/// Parameters for inserting a user once the password has been hashed.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub password_hash: String,
}

#[derive(Debug, Clone)]
pub struct LoginParams {
    pub email: String,
    pub password: String,
}

impl LoginParams {
    pub fn from_dto(dto: LoginDto) -> Self {
        Self {
            email: dto.email.trim().to_string(),
            password: dto.password,
        }
    }
}
