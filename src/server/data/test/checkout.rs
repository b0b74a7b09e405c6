use super::*;
use crate::server::{
    data::{cart::CartRepository, checkout::DatabaseCheckoutBackend, order::OrderRepository},
    error::{checkout::CheckoutError, AppError},
    model::order::{Order, PaymentMethod},
    service::checkout::{
        store::{CheckoutBackend, UserStore},
        CheckoutService,
    },
};
use std::time::Duration;
use test_utils::factory::{helpers::create_user_with_cart, product::ProductFactory};
use uuid::Uuid;

fn service(db: &sea_orm::DatabaseConnection) -> CheckoutService<DatabaseCheckoutBackend> {
    CheckoutService::new(DatabaseCheckoutBackend::new(db.clone()), Duration::from_secs(5))
}

/// Tests a cart checkout against the database.
///
/// Expected: one committed order totalling 35 with the cart snapshot, and an empty cart
#[tokio::test]
async fn checks_out_cart_in_one_transaction() -> Result<(), AppError> {
    let test = TestBuilder::new().with_shop_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, products) = create_user_with_cart(db, &[10, 25]).await?;

    let order = service(db).checkout_cart(&user.id.to_string()).await?;

    assert_eq!(order.price, 35);
    assert_eq!(order.payment, PaymentMethod::CASH_ON_DELIVERY);

    let orders = OrderRepository::new(db).get_by_user(user.id).await?;
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].id, order.id);
    let snapshot: Vec<_> = orders[0].items.iter().map(|i| i.product_id).collect();
    assert_eq!(snapshot, vec![products[0].id, products[1].id]);
    assert!(CartRepository::new(db).get_items(user.id).await?.is_empty());

    Ok(())
}

/// Tests an instant buy against the database.
///
/// Expected: an order holding only the product, and the cart unchanged
#[tokio::test]
async fn instant_buy_keeps_cart() -> Result<(), AppError> {
    let test = TestBuilder::new().with_shop_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _) = create_user_with_cart(db, &[10, 25]).await?;
    let product = ProductFactory::new(db).price(99).build().await?;

    let order = service(db)
        .instant_buy(&user.id.to_string(), &product.id.to_string())
        .await?;

    assert_eq!(order.price, 99);
    assert_eq!(order.items.len(), 1);
    assert_eq!(order.items[0].product_id, product.id);
    assert_eq!(CartRepository::new(db).get_items(user.id).await?.len(), 2);

    let orders = OrderRepository::new(db).get_by_user(user.id).await?;
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].items.len(), 1);

    Ok(())
}

/// Tests that an unknown product creates no order.
///
/// Expected: Err(ProductNotFound) and no order rows
#[tokio::test]
async fn instant_buy_unknown_product_creates_nothing() -> Result<(), AppError> {
    let test = TestBuilder::new().with_shop_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let result = service(db)
        .instant_buy(&user.id.to_string(), &Uuid::new_v4().to_string())
        .await;

    assert!(matches!(result, Err(CheckoutError::ProductNotFound)));
    assert!(OrderRepository::new(db).get_by_user(user.id).await?.is_empty());

    Ok(())
}

/// Tests that a well-formed id without a user is rejected.
///
/// Expected: Err(InvalidUserId)
#[tokio::test]
async fn unknown_user_is_invalid() -> Result<(), AppError> {
    let test = TestBuilder::new().with_shop_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = service(db).checkout_cart(&Uuid::new_v4().to_string()).await;

    assert!(matches!(result, Err(CheckoutError::InvalidUserId)));

    Ok(())
}

/// Tests that an uncommitted session leaves no trace.
///
/// Expected: after dropping the session the order is absent and the cart intact
#[tokio::test]
async fn dropped_session_rolls_back() -> Result<(), AppError> {
    let test = TestBuilder::new().with_shop_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _) = create_user_with_cart(db, &[10, 25]).await?;
    let order = Order::place(user.id, Vec::new()).unwrap();

    {
        let mut session = DatabaseCheckoutBackend::new(db.clone())
            .begin()
            .await
            .map_err(CheckoutError::StoreUnavailable)?;
        session
            .append_order(user.id, &order)
            .await
            .map_err(CheckoutError::StoreUnavailable)?;
        session
            .replace_cart(user.id, &[])
            .await
            .map_err(CheckoutError::StoreUnavailable)?;
    }

    assert!(OrderRepository::new(db).find_by_id(order.id).await?.is_none());
    assert_eq!(CartRepository::new(db).get_items(user.id).await?.len(), 2);

    Ok(())
}

/// Tests that items cannot be copied into another user's order.
///
/// Expected: append_order_items is rejected for a foreign order
#[tokio::test]
async fn rejects_items_for_foreign_order() -> Result<(), AppError> {
    let test = TestBuilder::new().with_shop_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let intruder = factory::create_user(db).await?;
    let order = Order::place(owner.id, Vec::new()).unwrap();
    OrderRepository::new(db).create(&order).await?;

    let result = {
        let mut session = DatabaseCheckoutBackend::new(db.clone())
            .begin()
            .await
            .map_err(CheckoutError::StoreUnavailable)?;
        session.append_order_items(intruder.id, order.id, &[]).await
    };

    assert!(result.is_err());

    Ok(())
}
