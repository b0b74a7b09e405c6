pub use sea_orm_migration::prelude::*;

mod m20240301_000001_create_user_table;
mod m20240301_000002_create_product_table;
mod m20240301_000003_create_comment_table;
mod m20240301_000004_create_cart_item_table;
mod m20240301_000005_create_order_table;
mod m20240301_000006_create_order_item_table;
mod m20240301_000007_create_address_table;
mod m20240302_000001_create_book_table;

/// Migrations for the shop database.
pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240301_000001_create_user_table::Migration),
            Box::new(m20240301_000002_create_product_table::Migration),
            Box::new(m20240301_000003_create_comment_table::Migration),
            Box::new(m20240301_000004_create_cart_item_table::Migration),
            Box::new(m20240301_000005_create_order_table::Migration),
            Box::new(m20240301_000006_create_order_item_table::Migration),
            Box::new(m20240301_000007_create_address_table::Migration),
        ]
    }
}

/// Migrations for the bookstore database, which shares no tables with the shop.
pub struct BookstoreMigrator;

#[async_trait::async_trait]
impl MigratorTrait for BookstoreMigrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20240302_000001_create_book_table::Migration)]
    }
}
