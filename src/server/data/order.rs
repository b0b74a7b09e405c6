//! Order data repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};
use std::collections::HashMap;
use uuid::Uuid;

use crate::server::model::{cart::LineItem, order::Order};

pub struct OrderRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> OrderRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts the order header: id, owner, timestamp, price and payment method.
    ///
    /// Line items are stored separately with `append_items`.
    pub async fn create(&self, order: &Order) -> Result<(), DbErr> {
        entity::order::ActiveModel {
            id: ActiveValue::Set(order.id),
            user_id: ActiveValue::Set(order.user_id),
            ordered_at: ActiveValue::Set(order.ordered_at),
            price: ActiveValue::Set(order.price),
            digital: ActiveValue::Set(order.payment.digital),
            cash_on_delivery: ActiveValue::Set(order.payment.cash_on_delivery),
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    /// Finds the order header row by id.
    pub async fn find_by_id(&self, order_id: Uuid) -> Result<Option<entity::order::Model>, DbErr> {
        entity::prelude::Order::find_by_id(order_id).one(self.db).await
    }

    /// Appends `items` in order to the line items of `order_id`.
    pub async fn append_items(&self, order_id: Uuid, items: &[LineItem]) -> Result<(), DbErr> {
        for item in items {
            entity::order_item::ActiveModel {
                order_id: ActiveValue::Set(order_id),
                product_id: ActiveValue::Set(item.product_id),
                name: ActiveValue::Set(item.name.clone()),
                price: ActiveValue::Set(item.price),
                rating: ActiveValue::Set(item.rating),
                image: ActiveValue::Set(item.image.clone()),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
        }

        Ok(())
    }

    /// Gets the user's orders, oldest first, each with its line items in snapshot order.
    ///
    /// Orders placed at the same instant are ordered by id.
    pub async fn get_by_user(&self, user_id: Uuid) -> Result<Vec<Order>, DbErr> {
        let orders = entity::prelude::Order::find()
            .filter(entity::order::Column::UserId.eq(user_id))
            .order_by_asc(entity::order::Column::OrderedAt)
            .order_by_asc(entity::order::Column::Id)
            .all(self.db)
            .await?;
        if orders.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<Uuid> = orders.iter().map(|o| o.id).collect();
        let mut items_by_order: HashMap<Uuid, Vec<entity::order_item::Model>> = HashMap::new();
        for item in entity::prelude::OrderItem::find()
            .filter(entity::order_item::Column::OrderId.is_in(ids))
            .order_by_asc(entity::order_item::Column::Id)
            .all(self.db)
            .await?
        {
            items_by_order.entry(item.order_id).or_default().push(item);
        }

        Ok(orders
            .into_iter()
            .map(|order| {
                let items = items_by_order.remove(&order.id).unwrap_or_default();
                Order::from_entity(order, items)
            })
            .collect())
    }
}
