//! HTTP request handlers.
//!
//! Handlers check the session with `AuthGuard` where required, convert DTOs to parameters,
//! call a service and convert the result back into a DTO.

pub mod address;
pub mod book;
pub mod cart;
pub mod product;
pub mod user;
