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
        address::{AddressDto, AddressInputDto},
        api::{ErrorDto, MessageDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::address::{AddressParams, AddressSlot},
        service::address::AddressService,
        state::AppState,
        util::parse::require_uuid,
    },
};

/// Tag for grouping address endpoints in OpenAPI documentation
pub static ADDRESS_TAG: &str = "address";

#[derive(Deserialize)]
pub struct UserIdParams {
    pub id: Option<String>,
}

/// Add an address in the user's first free slot.
///
/// The first address is the home address, the second the work address.
///
/// # Access Control
/// - Logged-in user
///
/// # Returns
/// - `201 Created` - Address stored
/// - `400 Bad Request` - Invalid user id, missing field, or both slots taken
/// - `401 Unauthorized` - Not logged in
#[utoipa::path(
    post,
    path = "/addaddress",
    tag = ADDRESS_TAG,
    params(
        ("id" = String, Query, description = "User id")
    ),
    request_body = AddressInputDto,
    responses(
        (status = 201, description = "Address added", body = AddressDto),
        (status = 400, description = "Invalid address or not allowed", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_address(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<UserIdParams>,
    Json(payload): Json<AddressInputDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require().await?;

    let user_id = require_uuid(query.id.as_deref(), "userID")?;
    let params = AddressParams::from_dto(payload)?;

    let address = AddressService::new(&state.db).add(user_id, params).await?;

    Ok((StatusCode::CREATED, Json(address.into_dto())))
}

/// Overwrite the home address.
///
/// # Access Control
/// - Logged-in user
#[utoipa::path(
    put,
    path = "/edithomeaddress",
    tag = ADDRESS_TAG,
    params(
        ("id" = String, Query, description = "User id")
    ),
    request_body = AddressInputDto,
    responses(
        (status = 200, description = "Home address updated", body = AddressDto),
        (status = 400, description = "Invalid user id or address", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "No home address", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn edit_home_address(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<UserIdParams>,
    Json(payload): Json<AddressInputDto>,
) -> Result<impl IntoResponse, AppError> {
    edit_address(state, session, query, payload, AddressSlot::Home).await
}

/// Overwrite the work address.
///
/// # Access Control
/// - Logged-in user
#[utoipa::path(
    put,
    path = "/editworkaddress",
    tag = ADDRESS_TAG,
    params(
        ("id" = String, Query, description = "User id")
    ),
    request_body = AddressInputDto,
    responses(
        (status = 200, description = "Work address updated", body = AddressDto),
        (status = 400, description = "Invalid user id or address", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "No work address", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn edit_work_address(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<UserIdParams>,
    Json(payload): Json<AddressInputDto>,
) -> Result<impl IntoResponse, AppError> {
    edit_address(state, session, query, payload, AddressSlot::Work).await
}

async fn edit_address(
    state: AppState,
    session: Session,
    query: UserIdParams,
    payload: AddressInputDto,
    slot: AddressSlot,
) -> Result<(StatusCode, Json<AddressDto>), AppError> {
    let _ = AuthGuard::new(&state.db, &session).require().await?;

    let user_id = require_uuid(query.id.as_deref(), "userID")?;
    let params = AddressParams::from_dto(payload)?;

    let address = AddressService::new(&state.db)
        .edit(user_id, slot, params)
        .await?;

    Ok((StatusCode::OK, Json(address.into_dto())))
}

/// Delete both of the user's addresses.
///
/// # Access Control
/// - Logged-in user
#[utoipa::path(
    delete,
    path = "/deleteaddresses",
    tag = ADDRESS_TAG,
    params(
        ("id" = String, Query, description = "User id")
    ),
    responses(
        (status = 200, description = "Addresses deleted", body = MessageDto),
        (status = 400, description = "Invalid user id", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_addresses(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<UserIdParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require().await?;

    let user_id = require_uuid(query.id.as_deref(), "userID")?;
    AddressService::new(&state.db).delete_all(user_id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Successfully deleted".to_string(),
        }),
    ))
}
