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
        api::ErrorDto,
        product::{CommentDto, CreateCommentDto, CreateProductDto, ProductDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::product::{CreateCommentParams, CreateProductParams, PriceFilter, Product},
        service::product::ProductService,
        state::AppState,
        util::parse::require_uuid,
    },
};

/// Tag for grouping product endpoints in OpenAPI documentation
pub static PRODUCT_TAG: &str = "product";

#[derive(Deserialize)]
pub struct SearchParams {
    pub name: Option<String>,
}

#[derive(Deserialize)]
pub struct PriceFilterParams {
    pub price: Option<String>,
    pub filter: Option<String>,
}

#[derive(Deserialize)]
pub struct ProductIdParams {
    pub id: Option<String>,
}

fn into_dtos(products: Vec<Product>) -> Vec<ProductDto> {
    products.into_iter().map(Product::into_dto).collect()
}

/// Add a product to the catalogue.
///
/// # Access Control
/// - Logged-in user
///
/// # Returns
/// - `201 Created` - Product added
/// - `400 Bad Request` - Empty name or negative price
/// - `401 Unauthorized` - Not logged in
#[utoipa::path(
    post,
    path = "/admin/addproduct",
    tag = PRODUCT_TAG,
    request_body = CreateProductDto,
    responses(
        (status = 201, description = "Product added", body = ProductDto),
        (status = 400, description = "Invalid product data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_product(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateProductDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require().await?;

    let params = CreateProductParams::from_dto(payload)?;
    let product = ProductService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(product.into_dto())))
}

/// List every product with its comments, ordered by name.
#[utoipa::path(
    get,
    path = "/users/productview",
    tag = PRODUCT_TAG,
    responses(
        (status = 200, description = "All products", body = Vec<ProductDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn product_view(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let products = ProductService::new(&state.db).get_all().await?;

    Ok((StatusCode::OK, Json(into_dtos(products))))
}

/// Search products whose name contains the query.
#[utoipa::path(
    get,
    path = "/users/search",
    tag = PRODUCT_TAG,
    params(
        ("name" = String, Query, description = "Substring to match against product names")
    ),
    responses(
        (status = 200, description = "Matching products", body = Vec<ProductDto>),
        (status = 400, description = "Invalid search index", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<impl IntoResponse, AppError> {
    let products = ProductService::new(&state.db)
        .search(params.name.as_deref().unwrap_or_default())
        .await?;

    Ok((StatusCode::OK, Json(into_dtos(products))))
}

/// Filter products by price.
///
/// `filter` is `eq`, `gte` or `lte`; results are ordered by price.
#[utoipa::path(
    get,
    path = "/users/filterprice",
    tag = PRODUCT_TAG,
    params(
        ("price" = i64, Query, description = "Price to compare against"),
        ("filter" = String, Query, description = "Comparison: eq, gte or lte")
    ),
    responses(
        (status = 200, description = "Matching products", body = Vec<ProductDto>),
        (status = 400, description = "Missing price or unknown filter", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn filter_price(
    State(state): State<AppState>,
    Query(params): Query<PriceFilterParams>,
) -> Result<impl IntoResponse, AppError> {
    let price = params
        .price
        .as_deref()
        .and_then(|p| p.trim().parse::<i64>().ok())
        .ok_or_else(|| AppError::BadRequest("Invalid price".to_string()))?;
    let filter: PriceFilter = params
        .filter
        .as_deref()
        .ok_or_else(|| AppError::BadRequest("Missing price filter".to_string()))?
        .parse()?;

    let products = ProductService::new(&state.db)
        .filter_by_price(price, filter)
        .await?;

    Ok((StatusCode::OK, Json(into_dtos(products))))
}

/// Comment on a product.
///
/// # Access Control
/// - Logged-in user
#[utoipa::path(
    post,
    path = "/users/addcomment",
    tag = PRODUCT_TAG,
    params(
        ("id" = String, Query, description = "Product id")
    ),
    request_body = CreateCommentDto,
    responses(
        (status = 201, description = "Comment added", body = CommentDto),
        (status = 400, description = "Invalid product id or empty comment", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_comment(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<ProductIdParams>,
    Json(payload): Json<CreateCommentDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require().await?;

    let product_id = require_uuid(params.id.as_deref(), "productID")?;
    let params = CreateCommentParams::from_dto(product_id, payload)?;

    let comment = ProductService::new(&state.db).add_comment(params).await?;

    Ok((StatusCode::CREATED, Json(comment.into_dto())))
}
