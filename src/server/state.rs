//! Shared state handed to request handlers through Axum's state extraction.

use std::time::Duration;

use sea_orm::DatabaseConnection;

use crate::server::{data::checkout::DatabaseCheckoutBackend, service::checkout::CheckoutService};

/// Shop application state.
///
/// Cloned for each request; `DatabaseConnection` is a pool and `CheckoutService` shares its
/// lock registry between clones.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for the shop database.
    pub db: DatabaseConnection,

    /// Order placement, running against the same database.
    pub checkout: CheckoutService<DatabaseCheckoutBackend>,
}

impl AppState {
    /// Creates the shop state.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `store_timeout` - Upper bound on the store work of a single checkout
    pub fn new(db: DatabaseConnection, store_timeout: Duration) -> Self {
        let checkout = CheckoutService::new(DatabaseCheckoutBackend::new(db.clone()), store_timeout);

        Self { db, checkout }
    }
}

/// Bookstore application state.
#[derive(Clone)]
pub struct BookstoreState {
    pub db: DatabaseConnection,
}

impl BookstoreState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
