//! Shopfront Test Utils
//!
//! Shared testing utilities for the shop and bookstore servers. Tests build an in-memory
//! SQLite database with only the tables they need and seed it through factories.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment holding the database connection and session
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Builders for seeding entities with sensible defaults
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn lists_cart() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_shop_tables().build().await?;
//!     let db = test.db.as_ref().unwrap();
//!
//!     let (user, products) = factory::helpers::create_user_with_cart(db, &[10, 25]).await?;
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
