//! Application use cases

mod warehouse_service;

pub use warehouse_service::{DispatchOutcome, WarehouseReport, WarehouseService};
