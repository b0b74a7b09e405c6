use super::*;
use crate::server::{
    data::order::OrderRepository,
    model::{cart::LineItem, order::Order},
};
use chrono::{Duration, Utc};
use uuid::Uuid;

fn item(price: i64) -> LineItem {
    LineItem {
        product_id: Uuid::new_v4(),
        name: format!("Item {}", price),
        price,
        rating: None,
        image: None,
    }
}

/// Tests reading back a user's orders with their snapshots.
///
/// Expected: orders oldest first, items in snapshot order, other users' orders excluded
#[tokio::test]
async fn gets_orders_by_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_shop_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let repo = OrderRepository::new(db);

    let mut older = Order::place(user.id, vec![item(10), item(25)]).unwrap();
    older.ordered_at = Utc::now() - Duration::minutes(5);
    let newer = Order::place(user.id, vec![item(7)]).unwrap();
    let foreign = Order::place(other.id, vec![item(1)]).unwrap();

    for order in [&newer, &older, &foreign] {
        repo.create(order).await?;
        repo.append_items(order.id, &order.items).await?;
    }

    let orders = repo.get_by_user(user.id).await?;

    assert_eq!(orders.len(), 2);
    assert_eq!(orders[0].id, older.id);
    assert_eq!(orders[0].price, 35);
    assert_eq!(orders[0].items, older.items);
    assert_eq!(orders[1].id, newer.id);
    assert_eq!(orders[1].items, newer.items);

    Ok(())
}

/// Tests that appended items target only the given order.
///
/// Expected: the earlier order keeps its snapshot
#[tokio::test]
async fn appends_items_to_one_order_only() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_shop_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let repo = OrderRepository::new(db);

    let mut first = Order::place(user.id, vec![item(10)]).unwrap();
    first.ordered_at = Utc::now() - Duration::minutes(1);
    repo.create(&first).await?;
    repo.append_items(first.id, &first.items).await?;

    let second = Order::place(user.id, vec![item(20), item(30)]).unwrap();
    repo.create(&second).await?;
    repo.append_items(second.id, &second.items).await?;

    let orders = repo.get_by_user(user.id).await?;
    assert_eq!(orders[0].items.len(), 1);
    assert_eq!(orders[1].items.len(), 2);

    Ok(())
}

/// Tests orders sharing one timestamp.
///
/// Expected: same-instant orders come back ordered by id, identically on every read
#[tokio::test]
async fn orders_same_instant_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_shop_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let repo = OrderRepository::new(db);

    let ordered_at = Utc::now();
    let mut placed = Vec::new();
    for price in [3, 1, 2] {
        let mut order = Order::place(user.id, vec![item(price)]).unwrap();
        order.ordered_at = ordered_at;
        repo.create(&order).await?;
        repo.append_items(order.id, &order.items).await?;
        placed.push(order.id);
    }
    placed.sort();

    let first: Vec<Uuid> = repo.get_by_user(user.id).await?.iter().map(|o| o.id).collect();
    let second: Vec<Uuid> = repo.get_by_user(user.id).await?.iter().map(|o| o.id).collect();

    assert_eq!(first, placed);
    assert_eq!(second, placed);

    Ok(())
}
