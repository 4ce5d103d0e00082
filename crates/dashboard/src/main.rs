//! Quill Dashboard Server
//!
//! Serves the writing dashboard: session-gated pages and the sidebar API.

use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use quill_dashboard::{
    auth::PgSessionProvider,
    config::{AppConfig, DatabaseConfig},
    db::create_pool,
    kv::{KvStore, MemoryKvStore, RedisKvStore},
    routes::build_router,
    services::PgStoryRepository,
    state::AppState,
    ResultExt,
};

/// Initialize tracing/logging.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,quill_dashboard=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Connect to Redis if configured, otherwise fall back to the in-memory store.
async fn connect_kv(config: &AppConfig) -> anyhow::Result<Arc<dyn KvStore>> {
    match config.redis_url {
        Some(ref url) => {
            let store = RedisKvStore::connect(url)
                .await
                .log("Failed to connect to Redis")?;
            Ok(Arc::new(store))
        }
        None => {
            tracing::warn!("QUILL_REDIS_URL not set, using in-memory key-value store");
            Ok(Arc::new(MemoryKvStore::new()))
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file if present
    dotenvy::dotenv().ok();

    init_tracing();

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "Starting Quill dashboard"
    );

    let app_config = AppConfig::from_env().log("Failed to load app config")?;
    let db_config = DatabaseConfig::from_env().log("Failed to load database config")?;

    tracing::info!(
        host = %app_config.host,
        port = app_config.port,
        debug = app_config.debug,
        server_name = %app_config.server_name,
        "Configuration loaded"
    );

    let db_pool = create_pool(&db_config)
        .await
        .log("Failed to create database pool")?;

    let kv = connect_kv(&app_config).await?;

    let addr: SocketAddr = app_config.bind_address().parse()?;

    let state = AppState::new(
        app_config,
        db_pool.clone(),
        kv,
        Arc::new(PgSessionProvider::new(db_pool.clone())),
        Arc::new(PgStoryRepository::new(db_pool)),
    )?;

    let app = build_router(state);

    let listener = TcpListener::bind(addr).await?;

    tracing::info!(address = %addr, "Server listening");

    // Run the server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
