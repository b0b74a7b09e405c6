//! Checkout orchestration.
//!
//! `CheckoutService` turns a cart, or a single product, into an order. Each attempt holds the
//! user's lock, runs every store step in one backend session bounded by a timeout, and commits
//! only after the last step succeeds. A failure or timeout drops the session, so the cart and
//! the order ledger are left as they were.

pub mod locks;
pub mod store;


use std::{future::Future, time::Duration};
use uuid::Uuid;

use crate::server::{
    error::checkout::{CheckoutError, CheckoutStep, StoreError},
    model::{cart::LineItem, order::Order},
    util::parse::parse_uuid,
};

use self::{
    locks::UserLocks,
    store::{CheckoutBackend, ProductStore, UnitOfWork, UserStore},
};

#[derive(Clone)]
pub struct CheckoutService<B> {
    backend: B,
    locks: UserLocks,
    timeout: Duration,
}

impl<B: CheckoutBackend> CheckoutService<B> {
    /// Creates a checkout service over `backend`.
    ///
    /// # Arguments
    /// - `backend` - Store backend opening one session per attempt
    /// - `timeout` - Upper bound on the store work of a single attempt
    pub fn new(backend: B, timeout: Duration) -> Self {
        Self {
            backend,
            locks: UserLocks::new(),
            timeout,
        }
    }

    /// Converts the user's whole cart into one pay-on-delivery order and empties the cart.
    ///
    /// An empty cart yields an order with total zero and no items.
    ///
    /// # Arguments
    /// - `user_id` - Raw user identifier from the request
    ///
    /// # Returns
    /// - `Ok(Order)` - The committed order with its item snapshot
    /// - `Err(CheckoutError::InvalidUserId)` - Malformed id (no store access) or unknown user
    /// - `Err(CheckoutError::StoreUnavailable)` - Timeout or transport failure
    /// - `Err(CheckoutError::CheckoutFailed)` - A store step failed; nothing was persisted
    pub async fn checkout_cart(&self, user_id: &str) -> Result<Order, CheckoutError> {
        let user_id = parse_uuid(user_id).ok_or(CheckoutError::InvalidUserId)?;

        let _guard = self.locks.acquire(user_id).await;
        let order = self.bounded(self.place_cart_order(user_id)).await?;

        tracing::info!(
            user_id = %user_id,
            order_id = %order.id,
            items = order.items.len(),
            total = order.price,
            "Checked out cart"
        );

        Ok(order)
    }

    /// Buys one product immediately. The cart is left untouched.
    ///
    /// # Arguments
    /// - `user_id` - Raw user identifier from the request
    /// - `product_id` - Raw product identifier from the request
    ///
    /// # Returns
    /// - `Ok(Order)` - The committed order containing exactly the product
    /// - `Err(CheckoutError::InvalidUserId)` / `Err(CheckoutError::InvalidProductId)` -
    ///   Malformed id (no store access), or unknown user
    /// - `Err(CheckoutError::ProductNotFound)` - No such product; no order created
    /// - `Err(CheckoutError::StoreUnavailable)` - Timeout or transport failure
    /// - `Err(CheckoutError::CheckoutFailed)` - A store step failed; nothing was persisted
    pub async fn instant_buy(
        &self,
        user_id: &str,
        product_id: &str,
    ) -> Result<Order, CheckoutError> {
        let user_id = parse_uuid(user_id).ok_or(CheckoutError::InvalidUserId)?;
        let product_id = parse_uuid(product_id).ok_or(CheckoutError::InvalidProductId)?;

        let _guard = self.locks.acquire(user_id).await;
        let order = self
            .bounded(self.place_product_order(user_id, product_id))
            .await?;

        tracing::info!(
            user_id = %user_id,
            order_id = %order.id,
            product_id = %product_id,
            total = order.price,
            "Completed instant buy"
        );

        Ok(order)
    }

    /// Number of users currently holding or waiting on a checkout lock.
    pub fn active_users(&self) -> usize {
        self.locks.len()
    }

    async fn place_cart_order(&self, user_id: Uuid) -> Result<Order, CheckoutError> {
        let mut session = self.backend.begin().await.map_err(at(CheckoutStep::Begin))?;

        let customer = session
            .find_user(user_id)
            .await
            .map_err(at(CheckoutStep::ReadCart))?
            .ok_or(CheckoutError::InvalidUserId)?;

        let order = place(customer.id, customer.cart)?;

        session
            .append_order(user_id, &order)
            .await
            .map_err(at(CheckoutStep::AppendOrder))?;
        session
            .append_order_items(user_id, order.id, &order.items)
            .await
            .map_err(at(CheckoutStep::CopyItems))?;
        session
            .replace_cart(user_id, &[])
            .await
            .map_err(at(CheckoutStep::ClearCart))?;
        session.commit().await.map_err(at(CheckoutStep::Commit))?;

        Ok(order)
    }

    async fn place_product_order(
        &self,
        user_id: Uuid,
        product_id: Uuid,
    ) -> Result<Order, CheckoutError> {
        let mut session = self.backend.begin().await.map_err(at(CheckoutStep::Begin))?;

        let customer = session
            .find_user(user_id)
            .await
            .map_err(at(CheckoutStep::ReadCart))?
            .ok_or(CheckoutError::InvalidUserId)?;

        let item = session
            .find_product(product_id)
            .await
            .map_err(at(CheckoutStep::LookupProduct))?
            .ok_or(CheckoutError::ProductNotFound)?;

        let order = place(customer.id, vec![item])?;

        session
            .append_order(user_id, &order)
            .await
            .map_err(at(CheckoutStep::AppendOrder))?;
        session
            .append_order_items(user_id, order.id, &order.items)
            .await
            .map_err(at(CheckoutStep::CopyItems))?;
        session.commit().await.map_err(at(CheckoutStep::Commit))?;

        Ok(order)
    }

    /// Runs `attempt` under the checkout timeout. On expiry the attempt, and with it the open
    /// session, is dropped.
    async fn bounded<F>(&self, attempt: F) -> Result<Order, CheckoutError>
    where
        F: Future<Output = Result<Order, CheckoutError>>,
    {
        match tokio::time::timeout(self.timeout, attempt).await {
            Ok(result) => {
                if let Err(err) = &result {
                    tracing::warn!("Checkout aborted: {}", err);
                }
                result
            }
            Err(_) => {
                tracing::warn!(timeout = ?self.timeout, "Checkout timed out");
                Err(CheckoutError::StoreUnavailable(StoreError::Timeout))
            }
        }
    }
}

/// Prices `items` into an order before anything is written.
fn place(user_id: Uuid, items: Vec<LineItem>) -> Result<Order, CheckoutError> {
    Order::place(user_id, items).ok_or_else(|| CheckoutError::CheckoutFailed {
        step: CheckoutStep::PriceOrder,
        cause: StoreError::Rejected("order total overflows".to_string()),
    })
}

fn at(step: CheckoutStep) -> impl Fn(StoreError) -> CheckoutError {
    move |cause| CheckoutError::from_store(step, cause)
}
