//! Warehouse IQ API server

mod error;
mod routes;
mod telemetry;

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::sync::RwLock;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use wiq_app::{Config, WarehouseService};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    telemetry::init_tracing("info");

    let config = Config::load()?;
    let master = wiq_app::repository::load_master(&config)?;

    // A configured master file wins over the saved layout
    let layout = master
        .as_ref()
        .map(|m| m.layout.clone())
        .unwrap_or_else(|| config.layout.clone());

    let repo = wiq_app::repository::open_warehouse_repo(&config)?;
    let service = WarehouseService::with_repo(repo, master)?;

    let state = routes::AppState {
        layout,
        service: Arc::new(RwLock::new(service)),
    };

    let app = routes::api_routes()
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    info!(%addr, "Starting warehouse API");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
