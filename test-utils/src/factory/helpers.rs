//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values across factories.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a user whose cart holds one product per entry in `prices`.
///
/// Products are created with the given prices in order and added to the cart in the same
/// order.
///
/// # Arguments
/// - `db` - Database connection
/// - `prices` - Price of each product to create and add to the cart
///
/// # Returns
/// - `Ok((user, products))` - The user and the products now in their cart
/// - `Err(DbErr)` - Database error during creation
pub async fn create_user_with_cart(
    db: &DatabaseConnection,
    prices: &[i64],
) -> Result<(entity::user::Model, Vec<entity::product::Model>), DbErr> {
    let user = crate::factory::user::create_user(db).await?;

    let mut products = Vec::with_capacity(prices.len());
    for price in prices {
        let product = crate::factory::product::ProductFactory::new(db)
            .price(*price)
            .build()
            .await?;
        crate::factory::cart_item::create_cart_item(db, user.id, &product).await?;
        products.push(product);
    }

    Ok((user, products))
}
