//! Request and response shapes shared by the HTTP layer.
//!
//! DTOs are serialized with serde and described with utoipa schemas for the generated
//! OpenAPI document. Server-side domain models convert into these at the controller boundary.

pub mod address;
pub mod api;
pub mod book;
pub mod cart;
pub mod order;
pub mod product;
pub mod user;
