use migration::{BookstoreMigrator, Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use time::Duration;
use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::server::{
    config::{BookstoreConfig, Config},
    error::AppError,
};

/// Installs the global tracing subscriber.
///
/// Filtering follows `RUST_LOG` when set, otherwise `info,sqlx=warn`.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,sqlx=warn")),
        )
        .init();
}

/// Connects to the shop database and runs pending migrations.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    let db = connect(&config.database_url).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Connects to the bookstore database and runs its migrations.
pub async fn connect_to_bookstore_database(
    config: &BookstoreConfig,
) -> Result<DatabaseConnection, AppError> {
    let db = connect(&config.database_url).await?;

    BookstoreMigrator::up(&db, None).await?;

    Ok(db)
}

async fn connect(url: &str) -> Result<DatabaseConnection, AppError> {
    let mut opt = ConnectOptions::new(url);
    opt.sqlx_logging(false);

    Ok(Database::connect(opt).await?)
}

/// Creates the session layer backed by the shop database.
///
/// Creates the session table if needed. Sessions expire after 7 days of inactivity.
pub async fn connect_to_session(
    db: &DatabaseConnection,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool();
    let session_store = SqliteStore::new(pool.clone());

    session_store.migrate().await?;

    Ok(SessionManagerLayer::new(session_store)
        .with_secure(false)
        .with_expiry(Expiry::OnInactivity(Duration::days(7))))
}

/// Resolves when the process receives Ctrl+C.
pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
