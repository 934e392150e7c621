//! API routes

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use tokio::sync::RwLock;

use wiq_app::{WarehouseReport, WarehouseService};
use wiq_domain::model::{BinStatus, DispatchRequest, StockReceipt, WarehouseConfig};

use crate::error::ApiError;

#[derive(Clone)]
pub struct AppState {
    /// Layout captured from the configuration at startup
    pub layout: WarehouseConfig,
    pub service: Arc<RwLock<WarehouseService>>,
}

pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/api/warehouse/metrics", get(warehouse_metrics))
        .route("/api/stock/status", get(stock_status))
        .route("/api/stock/add", post(add_stock))
        .route("/api/stock/dispatch", post(dispatch_stock))
        .route("/api/bins/status", get(bins_status))
}

#[derive(Debug, Serialize)]
struct IndexResponse {
    status: String,
    message: String,
    available_endpoints: Vec<String>,
}

async fn index() -> Json<IndexResponse> {
    Json(IndexResponse {
        status: "running".to_string(),
        message: "Warehouse API is running".to_string(),
        available_endpoints: vec![
            "/api/warehouse/metrics".to_string(),
            "/api/stock/status".to_string(),
            "/api/stock/add".to_string(),
            "/api/stock/dispatch".to_string(),
            "/api/bins/status".to_string(),
        ],
    })
}

async fn warehouse_metrics(State(state): State<AppState>) -> Json<WarehouseReport> {
    let service = state.service.read().await;
    Json(service.report(&state.layout))
}

async fn stock_status(State(state): State<AppState>) -> Json<BTreeMap<String, u32>> {
    let service = state.service.read().await;
    Json(service.stock_status())
}

#[derive(Debug, Serialize)]
struct AddStockResponse {
    status: String,
    message: String,
    bin_status: Vec<BinStatus>,
}

async fn add_stock(
    State(state): State<AppState>,
    Json(receipt): Json<StockReceipt>,
) -> Result<Json<AddStockResponse>, ApiError> {
    let mut service = state.service.write().await;
    let bin_status = service.receive(&receipt)?;
    tracing::info!(item_id = %receipt.item_id, quantity = receipt.quantity, bin = %receipt.location, "stock added");
    Ok(Json(AddStockResponse {
        status: "success".to_string(),
        message: "Stock added successfully".to_string(),
        bin_status,
    }))
}

#[derive(Debug, Serialize)]
struct DispatchResponse {
    status: String,
    message: String,
    stock_status: BTreeMap<String, u32>,
}

async fn dispatch_stock(
    State(state): State<AppState>,
    Json(request): Json<DispatchRequest>,
) -> Result<Json<DispatchResponse>, ApiError> {
    let mut service = state.service.write().await;
    let outcome = service.dispatch(&request)?;
    tracing::info!(item_id = %request.item_id, quantity = request.quantity, "stock dispatched");
    Ok(Json(DispatchResponse {
        status: "success".to_string(),
        message: format!("Dispatched {} units", outcome.dispatched),
        stock_status: outcome.stock_status,
    }))
}

async fn bins_status(State(state): State<AppState>) -> Json<Vec<BinStatus>> {
    let service = state.service.read().await;
    Json(service.bin_status())
}
