//! Product and comment domain models.

use chrono::{DateTime, Utc};
use std::str::FromStr;
use uuid::Uuid;

use crate::{
    model::product::{CommentDto, CreateCommentDto, CreateProductDto, ProductDto},
    server::error::AppError,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub price: i64,
    pub rating: Option<i32>,
    pub image: Option<String>,
    pub comments: Vec<Comment>,
}

impl Product {
    /// Converts a product row and its comment rows to a domain model.
    pub fn from_entity(
        entity: entity::product::Model,
        comments: Vec<entity::comment::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            price: entity.price,
            rating: entity.rating,
            image: entity.image,
            comments: comments.into_iter().map(Comment::from_entity).collect(),
        }
    }

    pub fn into_dto(self) -> ProductDto {
        ProductDto {
            id: self.id,
            product_name: self.name,
            price: self.price,
            rating: self.rating,
            image: self.image,
            comments: self.comments.into_iter().map(Comment::into_dto).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub id: Uuid,
    pub comment: String,
    pub rating: Option<i32>,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    pub fn from_entity(entity: entity::comment::Model) -> Self {
        Self {
            id: entity.id,
            comment: entity.comment,
            rating: entity.rating,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> CommentDto {
        CommentDto {
            id: self.id,
            comment: self.comment,
            rating: self.rating,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateProductParams {
    pub name: String,
    pub price: i64,
    pub rating: Option<i32>,
    pub image: Option<String>,
}

impl CreateProductParams {
    /// Validates a product DTO: the name must be non-empty and the price non-negative.
    pub fn from_dto(dto: CreateProductDto) -> Result<Self, AppError> {
        let name = dto.product_name.trim().to_string();
        if name.is_empty() {
            return Err(AppError::BadRequest("product_name is required".to_string()));
        }
        if dto.price < 0 {
            return Err(AppError::BadRequest(
                "price must not be negative".to_string(),
            ));
        }

        Ok(Self {
            name,
            price: dto.price,
            rating: dto.rating,
            image: dto.image,
        })
    }
}

#[derive(Debug, Clone)]
pub struct CreateCommentParams {
    pub product_id: Uuid,
    pub comment: String,
    pub rating: Option<i32>,
}

impl CreateCommentParams {
    pub fn from_dto(product_id: Uuid, dto: CreateCommentDto) -> Result<Self, AppError> {
        let comment = dto.comment.trim().to_string();
        if comment.is_empty() {
            return Err(AppError::BadRequest("comment is required".to_string()));
        }

        Ok(Self {
            product_id,
            comment,
            rating: dto.rating,
        })
    }
}

/// Comparison applied by the price filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceFilter {
    Eq,
    Gte,
    Lte,
}

impl FromStr for PriceFilter {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "eq" => Ok(Self::Eq),
            "gte" => Ok(Self::Gte),
            "lte" => Ok(Self::Lte),
            other => Err(AppError::BadRequest(format!(
                "Unknown price filter '{}', expected eq, gte or lte",
                other
            ))),
        }
    }
}
