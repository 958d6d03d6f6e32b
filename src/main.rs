//! PXE Boot Server Registry - Main Entry Point

use std::sync::Arc;

use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pxeboot_registry::infrastructure::driven_adapters::config::{AppConfig, LogFormat};
use pxeboot_registry::infrastructure::driven_adapters::database;
use pxeboot_registry::infrastructure::driven_adapters::server_repository::PostgresServerRepository;
use pxeboot_registry::infrastructure::driving_adapters::api_rest::{build_router, AppState};

fn init_tracing(format: LogFormat) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "pxeboot_registry=debug,tower_http=debug".into());

    match format {
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init(),
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration before tracing so the log format can be chosen
    let config = AppConfig::load()?;
    init_tracing(config.logging.format);
    tracing::info!("Configuration loaded successfully");

    if config.database.run_migrations {
        database::run_migrations(&config.database).await?;
        tracing::info!("Database migrations completed");
    }

    // Repository opens a connection per call; nothing is pooled
    let server_repository = Arc::new(PostgresServerRepository::new(&config.database));
    let app_state = AppState::new(server_repository);

    let app = build_router(app_state).layer(
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
    );

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
