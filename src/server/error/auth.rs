use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use uuid::Uuid;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user id is stored in the session.
    #[error("No user in session")]
    UserNotInSession,

    /// The session names a user that no longer exists.
    #[error("User {0} from session not found in database")]
    UserNotInDatabase(Uuid),

    /// Unknown email or wrong password at login.
    #[error("Login or password is incorrect")]
    InvalidCredentials,

    /// Argon2 failed to hash a password.
    #[error("Failed to hash password: {0}")]
    PasswordHash(String),
}

/// Converts authentication errors into HTTP responses.
///
/// - `UserNotInSession` / `UserNotInDatabase` → 401 Unauthorized with "Not logged in"
/// - `InvalidCredentials` → 401 Unauthorized with "Login or password is incorrect"
/// - `PasswordHash` → 500 Internal Server Error with generic message
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => {
                tracing::debug!("{}", self);
                (
                    StatusCode::UNAUTHORIZED,
                    Json(ErrorDto {
                        error: "Not logged in".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: self.to_string(),
                }),
            )
                .into_response(),
            Self::PasswordHash(_) => super::InternalServerError(self).into_response(),
        }
    }
}
