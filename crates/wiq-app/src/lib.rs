//! Application service layer - configuration, repositories, use cases

pub mod config;
pub mod repository;
pub mod service;

pub use config::Config;
pub use service::{DispatchOutcome, WarehouseReport, WarehouseService};
