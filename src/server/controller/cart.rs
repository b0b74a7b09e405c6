use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        cart::CartDto,
        order::OrderDto,
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::order::Order,
        service::cart::CartService,
        state::AppState,
        util::parse::require_uuid,
    },
};

/// Tag for grouping cart and order endpoints in OpenAPI documentation
pub static CART_TAG: &str = "cart";

#[derive(Deserialize)]
pub struct CartItemParams {
    pub id: Option<String>,
    #[serde(rename = "userID")]
    pub user_id: Option<String>,
}

#[derive(Deserialize)]
pub struct UserIdParams {
    pub id: Option<String>,
}

#[derive(Deserialize)]
pub struct InstantBuyParams {
    #[serde(rename = "userid")]
    pub user_id: Option<String>,
    #[serde(rename = "pid")]
    pub product_id: Option<String>,
}

/// Add a product to a user's cart.
///
/// Copies the product's current name, price, rating and image into a new line item at the
/// end of the cart. Adding the same product twice creates two entries.
///
/// # Access Control
/// - Logged-in user
///
/// # Returns
/// - `200 OK` - Item added
/// - `400 Bad Request` - Missing or invalid ids, or unknown user
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - Unknown product
#[utoipa::path(
    post,
    path = "/addtocart",
    tag = CART_TAG,
    params(
        ("id" = String, Query, description = "Product id"),
        ("userID" = String, Query, description = "User id")
    ),
    responses(
        (status = 200, description = "Item added to cart", body = MessageDto),
        (status = 400, description = "Invalid product or user id", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_to_cart(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<CartItemParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require().await?;

    let product_id = require_uuid(params.id.as_deref(), "productID")?;
    let user_id = require_uuid(params.user_id.as_deref(), "userID")?;

    CartService::new(&state.db)
        .add_item(user_id, product_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Successfully added to the cart".to_string(),
        }),
    ))
}

/// Remove every entry of a product from a user's cart.
///
/// # Access Control
/// - Logged-in user
#[utoipa::path(
    post,
    path = "/removeitem",
    tag = CART_TAG,
    params(
        ("id" = String, Query, description = "Product id"),
        ("userID" = String, Query, description = "User id")
    ),
    responses(
        (status = 200, description = "Item removed from cart", body = MessageDto),
        (status = 400, description = "Invalid product or user id", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_item(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<CartItemParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require().await?;

    let product_id = require_uuid(params.id.as_deref(), "productID")?;
    let user_id = require_uuid(params.user_id.as_deref(), "userID")?;

    CartService::new(&state.db)
        .remove_item(user_id, product_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Successfully removed from the cart".to_string(),
        }),
    ))
}

/// Get a user's cart and its total.
///
/// # Access Control
/// - Logged-in user
#[utoipa::path(
    get,
    path = "/listcart",
    tag = CART_TAG,
    params(
        ("id" = String, Query, description = "User id")
    ),
    responses(
        (status = 200, description = "Cart contents in insertion order", body = CartDto),
        (status = 400, description = "Invalid user id", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_cart(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<UserIdParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require().await?;

    let user_id = require_uuid(params.id.as_deref(), "userID")?;
    let cart = CartService::new(&state.db).get_cart(user_id).await?;

    Ok((StatusCode::OK, Json(cart.into_dto()?)))
}

/// Check out a user's whole cart.
///
/// Records one order with a snapshot of the cart and empties the cart, atomically.
///
/// # Access Control
/// - Logged-in user
///
/// # Returns
/// - `200 OK` - The created order
/// - `400 Bad Request` - Invalid or unknown user id
/// - `401 Unauthorized` - Not logged in
/// - `500 Internal Server Error` - A checkout step failed; nothing was changed
/// - `503 Service Unavailable` - Store timed out or is unreachable; safe to retry
#[utoipa::path(
    post,
    path = "/cartcheckout",
    tag = CART_TAG,
    params(
        ("id" = String, Query, description = "User id")
    ),
    responses(
        (status = 200, description = "Order placed", body = OrderDto),
        (status = 400, description = "Invalid userID", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Checkout failed", body = ErrorDto),
        (status = 503, description = "Store unavailable", body = ErrorDto)
    ),
)]
pub async fn cart_checkout(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<UserIdParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require().await?;

    let order = state
        .checkout
        .checkout_cart(params.id.as_deref().unwrap_or_default())
        .await?;

    Ok((StatusCode::OK, Json(order.into_dto())))
}

/// Buy a single product without touching the cart.
///
/// # Access Control
/// - Logged-in user
///
/// # Returns
/// - `200 OK` - The created order
/// - `400 Bad Request` - Invalid user or product id
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - Unknown product
/// - `500 Internal Server Error` - A checkout step failed; nothing was changed
/// - `503 Service Unavailable` - Store timed out or is unreachable; safe to retry
#[utoipa::path(
    post,
    path = "/instantbuy",
    tag = CART_TAG,
    params(
        ("userid" = String, Query, description = "User id"),
        ("pid" = String, Query, description = "Product id")
    ),
    responses(
        (status = 200, description = "Order placed", body = OrderDto),
        (status = 400, description = "Invalid userID or productID", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 500, description = "Checkout failed", body = ErrorDto),
        (status = 503, description = "Store unavailable", body = ErrorDto)
    ),
)]
pub async fn instant_buy(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<InstantBuyParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require().await?;

    let order = state
        .checkout
        .instant_buy(
            params.user_id.as_deref().unwrap_or_default(),
            params.product_id.as_deref().unwrap_or_default(),
        )
        .await?;

    Ok((StatusCode::OK, Json(order.into_dto())))
}

/// Get a user's order history, oldest first.
///
/// # Access Control
/// - Logged-in user
#[utoipa::path(
    get,
    path = "/users/orders",
    tag = CART_TAG,
    params(
        ("id" = String, Query, description = "User id")
    ),
    responses(
        (status = 200, description = "Orders with their item snapshots", body = Vec<OrderDto>),
        (status = 400, description = "Invalid user id", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_orders(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<UserIdParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require().await?;

    let user_id = require_uuid(params.id.as_deref(), "userID")?;
    let orders = CartService::new(&state.db).get_orders(user_id).await?;

    Ok((
        StatusCode::OK,
        Json(
            orders
                .into_iter()
                .map(Order::into_dto)
                .collect::<Vec<OrderDto>>(),
        ),
    ))
}
