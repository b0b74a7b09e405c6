//! Cart item factory.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Adds a snapshot of `product` to the cart of `user_id`.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - Owner of the cart
/// - `product` - Product whose current fields are copied into the cart entry
///
/// # Returns
/// - `Ok(Model)` - The created cart entry
/// - `Err(DbErr)` - Database error during insertion
pub async fn create_cart_item(
    db: &DatabaseConnection,
    user_id: Uuid,
    product: &entity::product::Model,
) -> Result<entity::cart_item::Model, DbErr> {
    entity::cart_item::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        product_id: ActiveValue::Set(product.id),
        name: ActiveValue::Set(product.name.clone()),
        price: ActiveValue::Set(product.price),
        rating: ActiveValue::Set(product.rating),
        image: ActiveValue::Set(product.image.clone()),
        ..Default::default()
    }
    .insert(db)
    .await
}
