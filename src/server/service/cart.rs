//! Cart contents and order history.
//!
//! Placing orders goes through `CheckoutService`; this service only edits and reads carts
//! and reads the order ledger.

use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::{
        cart::CartRepository, order::OrderRepository, product::ProductRepository,
        user::UserRepository,
    },
    error::AppError,
    model::{
        cart::{Cart, LineItem},
        order::Order,
    },
};

pub struct CartService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CartService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Appends a snapshot of the product to the end of the user's cart.
    ///
    /// # Returns
    /// - `Ok(())` - Item added
    /// - `Err(AppError::NotFound)` - No product with this id
    /// - `Err(AppError::BadRequest)` - No user with this id
    pub async fn add_item(&self, user_id: Uuid, product_id: Uuid) -> Result<(), AppError> {
        self.require_user(user_id).await?;

        let product = ProductRepository::new(self.db)
            .find_by_id(product_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Product not found".to_string()))?;

        CartRepository::new(self.db)
            .add_item(user_id, &LineItem::from_product(product))
            .await?;

        Ok(())
    }

    /// Removes every entry of the product from the user's cart.
    ///
    /// Removing a product that is not in the cart is not an error.
    pub async fn remove_item(&self, user_id: Uuid, product_id: Uuid) -> Result<u64, AppError> {
        self.require_user(user_id).await?;

        Ok(CartRepository::new(self.db)
            .remove_product(user_id, product_id)
            .await?)
    }

    pub async fn get_cart(&self, user_id: Uuid) -> Result<Cart, AppError> {
        self.require_user(user_id).await?;

        let items = CartRepository::new(self.db).get_items(user_id).await?;

        Ok(Cart { items })
    }

    /// Gets the user's orders, oldest first.
    pub async fn get_orders(&self, user_id: Uuid) -> Result<Vec<Order>, AppError> {
        self.require_user(user_id).await?;

        Ok(OrderRepository::new(self.db).get_by_user(user_id).await?)
    }

    async fn require_user(&self, user_id: Uuid) -> Result<(), AppError> {
        UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .map(|_| ())
            .ok_or_else(|| AppError::BadRequest("Invalid userID".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{builder::TestBuilder, factory};

    /// Tests adding the same product twice and removing it.
    ///
    /// Expected: two entries after adding, none after one removal, total follows
    #[tokio::test]
    async fn adds_and_removes_items() -> Result<(), AppError> {
        let test = TestBuilder::new().with_shop_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let user = factory::create_user(db).await?;
        let product = factory::create_product(db).await?;
        let service = CartService::new(db);

        service.add_item(user.id, product.id).await?;
        service.add_item(user.id, product.id).await?;

        let cart = service.get_cart(user.id).await?;
        assert_eq!(cart.items.len(), 2);
        assert_eq!(cart.total(), Some(product.price * 2));

        assert_eq!(service.remove_item(user.id, product.id).await?, 2);
        assert!(service.get_cart(user.id).await?.items.is_empty());

        Ok(())
    }

    /// Tests the errors for unknown users and products.
    ///
    /// Expected: BadRequest for the user, NotFound for the product
    #[tokio::test]
    async fn rejects_unknown_user_and_product() -> Result<(), AppError> {
        let test = TestBuilder::new().with_shop_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let user = factory::create_user(db).await?;
        let product = factory::create_product(db).await?;
        let service = CartService::new(db);

        let result = service.add_item(Uuid::new_v4(), product.id).await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));

        let result = service.add_item(user.id, Uuid::new_v4()).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));

        Ok(())
    }
}
