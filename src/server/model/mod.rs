//! Domain models and operation parameters.
//!
//! Repositories convert entity models into these types at the data boundary and services
//! pass them up to controllers, which convert them into DTOs with `into_dto()`.

pub mod address;
pub mod book;
pub mod cart;
pub mod order;
pub mod product;
pub mod user;
