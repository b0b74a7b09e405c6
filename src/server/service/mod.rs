//! Business logic between controllers and repositories.
//!
//! Services validate domain rules, orchestrate repository calls and translate missing
//! records into `AppError` variants. `checkout` holds the order placement flow and the store
//! interfaces it runs against.

pub mod address;
pub mod book;
pub mod cart;
pub mod checkout;
pub mod product;
pub mod user;
