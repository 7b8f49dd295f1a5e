use std::sync::Arc;

use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use campusboard::server::{config::Config, error::AppError, router, startup, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    let log_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(log_filter).init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let flows = startup::register_flows(&config, Vec::new())?;
    let cors = startup::setup_cors_layer(&config)?;

    let app = router::router()
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(AppState::new(db, Arc::new(flows)));

    let listener = TcpListener::bind(config.bind_address).await?;

    tracing::info!("Listening on {}", config.bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(startup::shutdown_signal())
        .await?;

    tracing::info!("Server stopped");

    Ok(())
}
