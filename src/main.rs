//! Trip Pool server binary.
//!
//! Loads configuration, wires the in-memory adapters, and serves the REST
//! API until interrupted.

use std::sync::Arc;
use std::time::Duration;

use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use trip_pool::adapters::http::{api_router, AppState};
use trip_pool::adapters::{
    InMemoryBookingStore, InMemoryJoinRequestStore, InMemoryNotificationBus,
    InMemoryPackageCatalog, InMemorySlotRegistry,
};
use trip_pool::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.server.log_level.clone())),
        )
        .init();

    let state = AppState {
        slot_registry: Arc::new(InMemorySlotRegistry::new()),
        request_store: Arc::new(InMemoryJoinRequestStore::new()),
        booking_store: Arc::new(InMemoryBookingStore::new()),
        package_catalog: Arc::new(InMemoryPackageCatalog::with_demo_packages()),
        dispatcher: Arc::new(InMemoryNotificationBus::new()),
        slots_config: config.slots,
        matching_config: config.matching,
    };

    let cors = if config.server.cors_origins_list().is_empty() {
        CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any)
    } else {
        let origins: Vec<http::HeaderValue> = config
            .server
            .cors_origins_list()
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    };

    let app = api_router()
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(cors);

    let addr = config.server.socket_addr();
    info!(%addr, "trip-pool listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("failed to install Ctrl+C handler");
    info!("shutdown signal received");
}
