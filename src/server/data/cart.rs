//! Cart data repository.
//!
//! Cart rows are ordered by their auto-increment id, which is the order they were added in.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};
use uuid::Uuid;

use crate::server::model::cart::LineItem;

pub struct CartRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CartRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets the user's cart in insertion order.
    pub async fn get_items(&self, user_id: Uuid) -> Result<Vec<LineItem>, DbErr> {
        let items = entity::prelude::CartItem::find()
            .filter(entity::cart_item::Column::UserId.eq(user_id))
            .order_by_asc(entity::cart_item::Column::Id)
            .all(self.db)
            .await?;

        Ok(items.into_iter().map(LineItem::from_cart_entity).collect())
    }

    /// Appends one line item to the end of the user's cart.
    pub async fn add_item(&self, user_id: Uuid, item: &LineItem) -> Result<(), DbErr> {
        entity::cart_item::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            product_id: ActiveValue::Set(item.product_id),
            name: ActiveValue::Set(item.name.clone()),
            price: ActiveValue::Set(item.price),
            rating: ActiveValue::Set(item.rating),
            image: ActiveValue::Set(item.image.clone()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    /// Removes every cart entry for `product_id`.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of entries removed, zero when the product was not in the cart
    /// - `Err(DbErr)` - Database error during delete
    pub async fn remove_product(&self, user_id: Uuid, product_id: Uuid) -> Result<u64, DbErr> {
        let result = entity::prelude::CartItem::delete_many()
            .filter(entity::cart_item::Column::UserId.eq(user_id))
            .filter(entity::cart_item::Column::ProductId.eq(product_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Replaces the user's whole cart with `items`, kept in the given order.
    pub async fn replace(&self, user_id: Uuid, items: &[LineItem]) -> Result<(), DbErr> {
        entity::prelude::CartItem::delete_many()
            .filter(entity::cart_item::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        for item in items {
            self.add_item(user_id, item).await?;
        }

        Ok(())
    }
}
