//! SeaORM checkout backend.
//!
//! Each checkout session is one `DatabaseTransaction`. Committing the session commits the
//! transaction; dropping it rolls the transaction back.

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};
use uuid::Uuid;

use crate::server::{
    data::{cart::CartRepository, order::OrderRepository, product::ProductRepository, user::UserRepository},
    error::checkout::StoreError,
    model::{
        cart::{Customer, LineItem},
        order::Order,
    },
    service::checkout::store::{CheckoutBackend, ProductStore, UnitOfWork, UserStore},
};

#[derive(Clone)]
pub struct DatabaseCheckoutBackend {
    db: DatabaseConnection,
}

impl DatabaseCheckoutBackend {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CheckoutBackend for DatabaseCheckoutBackend {
    type Session = CheckoutTransaction;

    async fn begin(&self) -> Result<CheckoutTransaction, StoreError> {
        let txn = self.db.begin().await?;

        Ok(CheckoutTransaction { txn })
    }
}

/// A checkout session backed by an open database transaction.
pub struct CheckoutTransaction {
    txn: DatabaseTransaction,
}

#[async_trait]
impl UserStore for CheckoutTransaction {
    async fn find_user(&mut self, user_id: Uuid) -> Result<Option<Customer>, StoreError> {
        let Some(user) = UserRepository::new(&self.txn).find_by_id(user_id).await? else {
            return Ok(None);
        };

        let cart = CartRepository::new(&self.txn).get_items(user.id).await?;

        Ok(Some(Customer { id: user.id, cart }))
    }

    async fn append_order(&mut self, user_id: Uuid, order: &Order) -> Result<(), StoreError> {
        if order.user_id != user_id {
            return Err(StoreError::Rejected(format!(
                "order {} belongs to user {}, not {}",
                order.id, order.user_id, user_id
            )));
        }

        OrderRepository::new(&self.txn).create(order).await?;

        Ok(())
    }

    async fn replace_cart(&mut self, user_id: Uuid, items: &[LineItem]) -> Result<(), StoreError> {
        CartRepository::new(&self.txn).replace(user_id, items).await?;

        Ok(())
    }

    async fn append_order_items(
        &mut self,
        user_id: Uuid,
        order_id: Uuid,
        items: &[LineItem],
    ) -> Result<(), StoreError> {
        let repo = OrderRepository::new(&self.txn);

        match repo.find_by_id(order_id).await? {
            Some(order) if order.user_id == user_id => {}
            _ => {
                return Err(StoreError::Rejected(format!(
                    "order {} not found for user {}",
                    order_id, user_id
                )))
            }
        }

        repo.append_items(order_id, items).await?;

        Ok(())
    }
}

#[async_trait]
impl ProductStore for CheckoutTransaction {
    async fn find_product(&mut self, product_id: Uuid) -> Result<Option<LineItem>, StoreError> {
        let product = ProductRepository::new(&self.txn)
            .find_by_id(product_id)
            .await?;

        Ok(product.map(LineItem::from_product))
    }
}

#[async_trait]
impl UnitOfWork for CheckoutTransaction {
    async fn commit(self) -> Result<(), StoreError> {
        self.txn.commit().await?;

        Ok(())
    }
}
