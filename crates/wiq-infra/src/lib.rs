//! Infrastructure layer - persistence implementations, loaders

pub mod persistence;
pub mod stock_csv;

pub use persistence::{FileWarehouseMasterRepository, FileWarehouseRepository};
