//! Bookstore domain models.

use chrono::{DateTime, Utc};
use std::str::FromStr;

use crate::{
    model::book::{BookDto, CreateBookDto, UpdateBookDto},
    server::error::AppError,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub author: String,
    pub description: String,
    pub cost: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Book {
    pub fn from_entity(entity: entity::book::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            author: entity.author,
            description: entity.description,
            cost: entity.cost,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> BookDto {
        BookDto {
            id: self.id,
            title: self.title,
            author: self.author,
            description: self.description,
            cost: self.cost,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Ordering of book listings by cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookSort {
    CostAsc,
    CostDesc,
}

impl FromStr for BookSort {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(Self::CostAsc),
            "desc" => Ok(Self::CostDesc),
            other => Err(AppError::BadRequest(format!(
                "Unknown sort '{}', expected asc or desc",
                other
            ))),
        }
    }
}

/// Listing filters. Without a sort, books are ordered by id.
#[derive(Debug, Clone, Default)]
pub struct BookQuery {
    pub title: Option<String>,
    pub sort: Option<BookSort>,
}

#[derive(Debug, Clone)]
pub struct CreateBookParams {
    pub title: String,
    pub author: String,
    pub description: String,
    pub cost: i64,
}

impl CreateBookParams {
    pub fn from_dto(dto: CreateBookDto) -> Result<Self, AppError> {
        let title = required("title", dto.title)?;
        let author = required("author", dto.author)?;
        validate_cost(dto.cost)?;

        Ok(Self {
            title,
            author,
            description: dto.description,
            cost: dto.cost,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateBookParams {
    pub title: Option<String>,
    pub author: Option<String>,
    pub description: Option<String>,
    pub cost: Option<i64>,
}

impl UpdateBookParams {
    /// Validates the provided fields; absent fields are left untouched.
    pub fn from_dto(dto: UpdateBookDto) -> Result<Self, AppError> {
        let title = dto.title.map(|t| required("title", t)).transpose()?;
        let author = dto.author.map(|a| required("author", a)).transpose()?;
        if let Some(cost) = dto.cost {
            validate_cost(cost)?;
        }

        Ok(Self {
            title,
            author,
            description: dto.description,
            cost: dto.cost,
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

fn validate_cost(cost: i64) -> Result<(), AppError> {
    if cost < 0 {
        return Err(AppError::BadRequest("cost must not be negative".to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests that only asc and desc are accepted as sort values.
    ///
    /// Expected: asc/desc parse, others BadRequest
    #[test]
    fn parses_sort() {
        assert_eq!("asc".parse::<BookSort>().unwrap(), BookSort::CostAsc);
        assert_eq!("desc".parse::<BookSort>().unwrap(), BookSort::CostDesc);
        assert!("cost".parse::<BookSort>().is_err());
    }

    /// Tests that a blank title in an update is rejected.
    ///
    /// Expected: Err(BadRequest)
    #[test]
    fn rejects_blank_title_update() {
        let dto = UpdateBookDto {
            title: Some("  ".to_string()),
            ..Default::default()
        };

        assert!(matches!(
            UpdateBookParams::from_dto(dto),
            Err(AppError::BadRequest(_))
        ));
    }
}
