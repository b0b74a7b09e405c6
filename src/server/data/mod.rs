//! Database repository layer for all domain entities.
//!
//! Repositories wrap SeaORM queries for one domain each and return domain models from
//! `server::model`. Repositories used by checkout are generic over `ConnectionTrait` so the
//! same queries run on a pooled connection or inside a `DatabaseTransaction`.

pub mod address;
pub mod book;
pub mod cart;
pub mod checkout;
pub mod comment;
pub mod order;
pub mod product;
pub mod user;

#[cfg(test)]
mod test;
