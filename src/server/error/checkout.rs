//! Checkout and checkout-store errors.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::DbErr;
use std::fmt;
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Failure reported by a checkout store.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The store could not be reached.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// The store did not answer within the checkout timeout.
    #[error("store operation timed out")]
    Timeout,

    /// The store was reached but refused or failed the operation.
    #[error("store rejected operation: {0}")]
    Rejected(String),
}

impl StoreError {
    /// Whether the failure is a transport problem worth retrying.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Unavailable(_) | Self::Timeout)
    }
}

impl From<DbErr> for StoreError {
    fn from(err: DbErr) -> Self {
        match err {
            DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => Self::Unavailable(err.to_string()),
            other => Self::Rejected(other.to_string()),
        }
    }
}

/// Step of the checkout sequence at which a store failure happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutStep {
    Begin,
    ReadCart,
    LookupProduct,
    PriceOrder,
    AppendOrder,
    CopyItems,
    ClearCart,
    Commit,
}

impl fmt::Display for CheckoutStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let step = match self {
            Self::Begin => "starting transaction",
            Self::ReadCart => "reading cart",
            Self::LookupProduct => "looking up product",
            Self::PriceOrder => "pricing order",
            Self::AppendOrder => "recording order",
            Self::CopyItems => "copying order items",
            Self::ClearCart => "clearing cart",
            Self::Commit => "committing",
        };
        f.write_str(step)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckoutError {
    /// The user id is missing, malformed or names no user.
    #[error("Invalid userID")]
    InvalidUserId,

    /// The product id is missing or malformed.
    #[error("Invalid productID")]
    InvalidProductId,

    /// The product id is well-formed but names no product.
    #[error("Product not found")]
    ProductNotFound,

    /// The store timed out or could not be reached; the request may be retried.
    #[error("Checkout store unavailable: {0}")]
    StoreUnavailable(StoreError),

    /// A store step failed; nothing from this attempt was persisted.
    #[error("Checkout failed while {step}: {cause}")]
    CheckoutFailed {
        step: CheckoutStep,
        #[source]
        cause: StoreError,
    },
}

impl CheckoutError {
    /// Classifies a store failure raised at `step`.
    pub fn from_store(step: CheckoutStep, cause: StoreError) -> Self {
        if cause.is_transient() {
            Self::StoreUnavailable(cause)
        } else {
            Self::CheckoutFailed { step, cause }
        }
    }
}

/// Converts checkout errors into HTTP responses.
///
/// - `InvalidUserId` / `InvalidProductId` → 400 Bad Request
/// - `ProductNotFound` → 404 Not Found
/// - `StoreUnavailable` → 503 Service Unavailable
/// - `CheckoutFailed` → 500 Internal Server Error with generic message
impl IntoResponse for CheckoutError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::InvalidUserId | Self::InvalidProductId => StatusCode::BAD_REQUEST,
            Self::ProductNotFound => StatusCode::NOT_FOUND,
            Self::StoreUnavailable(_) => {
                tracing::warn!("{}", self);
                return (
                    StatusCode::SERVICE_UNAVAILABLE,
                    Json(ErrorDto {
                        error: "Service temporarily unavailable, please retry".to_string(),
                    }),
                )
                    .into_response();
            }
            Self::CheckoutFailed { .. } => return super::InternalServerError(self).into_response(),
        };

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests the status code each checkout error maps to.
    ///
    /// Expected: 400, 400, 404, 503, 500
    #[test]
    fn maps_status_codes() {
        let cases = [
            (CheckoutError::InvalidUserId, StatusCode::BAD_REQUEST),
            (CheckoutError::InvalidProductId, StatusCode::BAD_REQUEST),
            (CheckoutError::ProductNotFound, StatusCode::NOT_FOUND),
            (
                CheckoutError::StoreUnavailable(StoreError::Timeout),
                StatusCode::SERVICE_UNAVAILABLE,
            ),
            (
                CheckoutError::CheckoutFailed {
                    step: CheckoutStep::ClearCart,
                    cause: StoreError::Rejected("constraint".to_string()),
                },
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, status) in cases {
            assert_eq!(err.into_response().status(), status);
        }
    }

    /// Tests that transport failures classify as unavailable regardless of step.
    ///
    /// Expected: StoreUnavailable for Unavailable/Timeout, CheckoutFailed for Rejected
    #[test]
    fn classifies_store_failures() {
        assert!(matches!(
            CheckoutError::from_store(CheckoutStep::Commit, StoreError::Timeout),
            CheckoutError::StoreUnavailable(StoreError::Timeout)
        ));
        assert!(matches!(
            CheckoutError::from_store(
                CheckoutStep::AppendOrder,
                StoreError::Unavailable("refused".to_string())
            ),
            CheckoutError::StoreUnavailable(_)
        ));
        assert!(matches!(
            CheckoutError::from_store(
                CheckoutStep::AppendOrder,
                StoreError::Rejected("bad".to_string())
            ),
            CheckoutError::CheckoutFailed {
                step: CheckoutStep::AppendOrder,
                ..
            }
        ));
    }
}
