//! Binary entrypoint: wires configuration, database, and the HTTP server.

use dotenvy::dotenv;
use expense_tracker::api::{AppState, app_router};
use expense_tracker::config::{self, database};
use expense_tracker::errors::Result;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing as early as possible
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load .env if present; env vars can also be set externally
    dotenv().ok();

    let app_config = config::load_app_configuration()?;
    info!("Configuration loaded, database at {}", app_config.database_url);

    let db = database::create_connection(&app_config.database_url).await?;
    database::create_tables(&db).await?;
    database::seed_default_data(&db).await?;
    info!("Database initialized and seeded");

    let state = Arc::new(AppState { db });
    let app = app_router(state);

    let listener = tokio::net::TcpListener::bind(&app_config.listen_addr).await?;
    info!("Listening on {}", app_config.listen_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
