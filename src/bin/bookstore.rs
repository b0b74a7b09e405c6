use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use shopfront::server::{
    config::BookstoreConfig, error::AppError, router, startup, state::BookstoreState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = BookstoreConfig::from_env()?;

    let db = startup::connect_to_bookstore_database(&config).await?;

    let app = router::bookstore_router()
        .with_state(BookstoreState::new(db))
        .layer(TraceLayer::new_for_http());

    let listener = TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Starting bookstore server on {}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(startup::shutdown_signal())
        .await?;

    Ok(())
}
