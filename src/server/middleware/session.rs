//! Type-safe session access.
//!
//! `AuthSession` wraps the tower-sessions `Session` so the authentication key and its value
//! format live in one place.

use tower_sessions::Session;
use uuid::Uuid;

use crate::server::{error::AppError, util::parse::parse_uuid};

const SESSION_AUTH_USER_ID: &str = "auth:user";

/// Authentication session management.
pub struct AuthSession<'a> {
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the logged-in user's id.
    ///
    /// # Returns
    /// - `Ok(())` - User ID successfully stored
    /// - `Err(AppError::SessionErr(_))` - Failed to store in session
    pub async fn set_user_id(&self, user_id: Uuid) -> Result<(), AppError> {
        self.session
            .insert(SESSION_AUTH_USER_ID, user_id.to_string())
            .await?;
        Ok(())
    }

    /// Retrieves the logged-in user's id.
    ///
    /// A stored value that is not a UUID is treated as logged out.
    ///
    /// # Returns
    /// - `Ok(Some(user_id))` - User is logged in
    /// - `Ok(None)` - No user in session
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn get_user_id(&self) -> Result<Option<Uuid>, AppError> {
        let Some(user_id) = self.session.get::<String>(SESSION_AUTH_USER_ID).await? else {
            return Ok(None);
        };

        Ok(parse_uuid(&user_id))
    }

    /// Deletes the session and its stored data.
    pub async fn flush(&self) -> Result<(), AppError> {
        self.session.flush().await?;
        Ok(())
    }
}
