use uuid::Uuid;

use crate::server::error::AppError;

/// Parses a UUID from a request value.
///
/// # Returns
/// - `Some(Uuid)` - The value is a well-formed UUID
/// - `None` - The value is empty or malformed
pub fn parse_uuid(value: &str) -> Option<Uuid> {
    Uuid::parse_str(value.trim()).ok()
}

/// Parses a required UUID query parameter.
///
/// # Arguments
/// - `value` - Raw parameter value, `None` when absent
/// - `name` - Parameter name used in the error message
///
/// # Returns
/// - `Ok(Uuid)` - Parsed identifier
/// - `Err(AppError::BadRequest)` - Missing or malformed value
pub fn require_uuid(value: Option<&str>, name: &str) -> Result<Uuid, AppError> {
    value
        .and_then(parse_uuid)
        .ok_or_else(|| AppError::BadRequest(format!("Invalid {}", name)))
}
