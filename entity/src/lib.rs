//! SeaORM entity definitions for the shop and bookstore databases.

pub mod prelude;

pub mod address;
pub mod book;
pub mod cart_item;
pub mod comment;
pub mod order;
pub mod order_item;
pub mod product;
pub mod user;
