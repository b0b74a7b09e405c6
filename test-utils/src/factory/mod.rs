//! Factory methods for creating test data.
//!
//! Each entity has a `Factory` builder for customization and a `create_*` function for quick
//! default creation. Factories that need a parent row take its id as an argument.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::create_user(&db).await?;
//! let product = factory::product::ProductFactory::new(&db)
//!     .name("Desk Lamp")
//!     .price(25)
//!     .build()
//!     .await?;
//! factory::create_cart_item(&db, user.id, &product).await?;
//! ```

pub mod address;
pub mod book;
pub mod cart_item;
pub mod helpers;
pub mod product;
pub mod user;

pub use address::create_address;
pub use book::create_book;
pub use cart_item::create_cart_item;
pub use product::create_product;
pub use user::create_user;
