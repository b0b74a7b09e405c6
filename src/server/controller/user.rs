use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        user::{LoginDto, SignupDto, UserDto},
    },
    server::{
        error::AppError,
        middleware::session::AuthSession,
        model::user::{LoginParams, SignupParams},
        service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Register a new user.
///
/// # Returns
/// - `201 Created` - User registered
/// - `400 Bad Request` - Invalid field, email already registered or phone already in use
/// - `500 Internal Server Error` - Database or hashing error
#[utoipa::path(
    post,
    path = "/users/signup",
    tag = USER_TAG,
    request_body = SignupDto,
    responses(
        (status = 201, description = "User registered", body = UserDto),
        (status = 400, description = "Invalid signup data or duplicate email/phone", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn signup(
    State(state): State<AppState>,
    Json(payload): Json<SignupDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = SignupParams::from_dto(payload)?;

    let user = UserService::new(&state.db).signup(params).await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// Log in with email and password.
///
/// Stores the user id in the session on success.
///
/// # Returns
/// - `200 OK` - Logged in, returns the user
/// - `401 Unauthorized` - Login or password is incorrect
/// - `500 Internal Server Error` - Database or session error
#[utoipa::path(
    post,
    path = "/users/login",
    tag = USER_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = UserDto),
        (status = 401, description = "Login or password is incorrect", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::new(&state.db)
        .login(LoginParams::from_dto(payload))
        .await?;

    let auth_session = AuthSession::new(&session);
    // New session id on privilege change
    session.cycle_id().await?;
    auth_session.set_user_id(user.id).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Log out and delete the session.
#[utoipa::path(
    post,
    path = "/users/logout",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Logged out", body = MessageDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).flush().await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Logged out".to_string(),
        }),
    ))
}
