//! Cart line items and the customer view used by checkout.

use uuid::Uuid;

use crate::{
    model::cart::{CartDto, LineItemDto},
    server::error::AppError,
};

/// A product captured in a cart or in an order snapshot.
///
/// Repeated purchases of the same product are repeated line items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItem {
    pub product_id: Uuid,
    pub name: String,
    pub price: i64,
    pub rating: Option<i32>,
    pub image: Option<String>,
}

impl LineItem {
    /// Captures the current fields of a product.
    pub fn from_product(entity: entity::product::Model) -> Self {
        Self {
            product_id: entity.id,
            name: entity.name,
            price: entity.price,
            rating: entity.rating,
            image: entity.image,
        }
    }

    pub fn from_cart_entity(entity: entity::cart_item::Model) -> Self {
        Self {
            product_id: entity.product_id,
            name: entity.name,
            price: entity.price,
            rating: entity.rating,
            image: entity.image,
        }
    }

    pub fn from_order_item_entity(entity: entity::order_item::Model) -> Self {
        Self {
            product_id: entity.product_id,
            name: entity.name,
            price: entity.price,
            rating: entity.rating,
            image: entity.image,
        }
    }

    pub fn into_dto(self) -> LineItemDto {
        LineItemDto {
            product_id: self.product_id,
            product_name: self.name,
            price: self.price,
            rating: self.rating,
            image: self.image,
        }
    }
}

/// Sums the prices of `items`; zero for an empty slice.
///
/// Returns `None` when the sum does not fit in an `i64`.
pub fn total_price(items: &[LineItem]) -> Option<i64> {
    items
        .iter()
        .try_fold(0i64, |total, item| total.checked_add(item.price))
}

/// A user's cart in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    pub items: Vec<LineItem>,
}

impl Cart {
    pub fn total(&self) -> Option<i64> {
        total_price(&self.items)
    }

    /// # Returns
    /// - `Ok(CartDto)` - Items with their total
    /// - `Err(AppError::BadRequest)` - The total overflows
    pub fn into_dto(self) -> Result<CartDto, AppError> {
        let total = self
            .total()
            .ok_or_else(|| AppError::BadRequest("Cart total is too large".to_string()))?;

        Ok(CartDto {
            total,
            items: self.items.into_iter().map(LineItem::into_dto).collect(),
        })
    }
}

/// The user record as seen by checkout: its id and current cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    pub id: Uuid,
    pub cart: Vec<LineItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(price: i64) -> LineItem {
        LineItem {
            product_id: Uuid::new_v4(),
            name: format!("Item {}", price),
            price,
            rating: None,
            image: None,
        }
    }

    /// Tests that the cart total is the sum of every line item, repeats included.
    ///
    /// Expected: 10 + 25 + 25 = 60
    #[test]
    fn totals_repeated_items() {
        let repeated = item(25);
        let cart = Cart {
            items: vec![item(10), repeated.clone(), repeated],
        };

        assert_eq!(cart.total(), Some(60));
    }

    /// Tests that an empty cart totals zero.
    ///
    /// Expected: 0
    #[test]
    fn empty_cart_totals_zero() {
        assert_eq!(Cart::default().total(), Some(0));
        assert_eq!(Cart::default().into_dto().unwrap().total, 0);
    }

    /// Tests a cart whose prices sum past `i64::MAX`.
    ///
    /// Expected: no total, and the DTO conversion is a BadRequest
    #[test]
    fn overflowing_total_is_rejected() {
        let cart = Cart {
            items: vec![item(i64::MAX), item(1)],
        };

        assert_eq!(cart.total(), None);
        assert!(matches!(cart.into_dto(), Err(AppError::BadRequest(_))));
    }
}
