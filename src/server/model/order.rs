//! Order domain model.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{
    model::order::{OrderDto, PaymentDto},
    server::model::cart::{total_price, LineItem},
};

/// How an order is paid for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaymentMethod {
    pub digital: bool,
    pub cash_on_delivery: bool,
}

impl PaymentMethod {
    /// Pay on delivery, the only method checkout records.
    pub const CASH_ON_DELIVERY: Self = Self {
        digital: false,
        cash_on_delivery: true,
    };
}

/// A completed purchase. The snapshot and total never change after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub id: Uuid,
    pub user_id: Uuid,
    pub ordered_at: DateTime<Utc>,
    pub price: i64,
    pub payment: PaymentMethod,
    pub items: Vec<LineItem>,
}

impl Order {
    /// Creates a new pay-on-delivery order for `items` with a fresh id and the current time.
    ///
    /// The price is the sum of the item prices, zero when `items` is empty. Returns `None`
    /// when that sum overflows.
    pub fn place(user_id: Uuid, items: Vec<LineItem>) -> Option<Self> {
        let price = total_price(&items)?;

        Some(Self {
            id: Uuid::new_v4(),
            user_id,
            ordered_at: Utc::now(),
            price,
            payment: PaymentMethod::CASH_ON_DELIVERY,
            items,
        })
    }

    /// Converts an order row and its item rows to a domain model.
    pub fn from_entity(
        entity: entity::order::Model,
        items: Vec<entity::order_item::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            ordered_at: entity.ordered_at,
            price: entity.price,
            payment: PaymentMethod {
                digital: entity.digital,
                cash_on_delivery: entity.cash_on_delivery,
            },
            items: items
                .into_iter()
                .map(LineItem::from_order_item_entity)
                .collect(),
        }
    }

    pub fn into_dto(self) -> OrderDto {
        OrderDto {
            id: self.id,
            ordered_at: self.ordered_at,
            price: self.price,
            payment: PaymentDto {
                digital: self.payment.digital,
                cod: self.payment.cash_on_delivery,
            },
            items: self.items.into_iter().map(LineItem::into_dto).collect(),
        }
    }
}
