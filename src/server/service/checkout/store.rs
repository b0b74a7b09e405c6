//! Store interfaces consumed by checkout.
//!
//! A `CheckoutBackend` opens a session per checkout attempt. All reads and writes of the
//! attempt go through that session and become visible only when it is committed; dropping a
//! session without committing discards them.

use async_trait::async_trait;
use uuid::Uuid;

use crate::server::{
    error::checkout::StoreError,
    model::{
        cart::{Customer, LineItem},
        order::Order,
    },
};

/// Per-user cart and order ledger operations.
#[async_trait]
pub trait UserStore: Send {
    /// Loads the user and their cart in cart order, `None` when the user does not exist.
    async fn find_user(&mut self, user_id: Uuid) -> Result<Option<Customer>, StoreError>;

    /// Appends the order header to the user's ledger.
    ///
    /// The order's line items are not stored by this call; see `append_order_items`.
    async fn append_order(&mut self, user_id: Uuid, order: &Order) -> Result<(), StoreError>;

    /// Replaces the user's cart with `items`.
    async fn replace_cart(&mut self, user_id: Uuid, items: &[LineItem]) -> Result<(), StoreError>;

    /// Appends `items` to the line items of the user's order `order_id` and no other order.
    ///
    /// Fails with `StoreError::Rejected` when the order does not belong to the user.
    async fn append_order_items(
        &mut self,
        user_id: Uuid,
        order_id: Uuid,
        items: &[LineItem],
    ) -> Result<(), StoreError>;
}

/// Product catalogue lookups.
#[async_trait]
pub trait ProductStore: Send {
    /// Loads the product as it would be captured in an order, `None` when it does not exist.
    async fn find_product(&mut self, product_id: Uuid) -> Result<Option<LineItem>, StoreError>;
}

/// Makes the writes of a session durable.
#[async_trait]
pub trait UnitOfWork: Send + Sized {
    async fn commit(self) -> Result<(), StoreError>;
}

/// Everything checkout needs from one session.
pub trait CheckoutSession: UserStore + ProductStore + UnitOfWork {}

impl<T: UserStore + ProductStore + UnitOfWork> CheckoutSession for T {}

/// Opens checkout sessions. Implementations are cheap to clone.
#[async_trait]
pub trait CheckoutBackend: Clone + Send + Sync + 'static {
    type Session: CheckoutSession;

    async fn begin(&self) -> Result<Self::Session, StoreError>;
}
