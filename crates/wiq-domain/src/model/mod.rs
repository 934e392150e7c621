//! Domain model types

pub mod bin;
pub mod layout;
pub mod master;
pub mod stock;
pub mod warehouse;

pub use bin::{Bin, BinItem, BinStatus};
pub use layout::{FieldValue, WarehouseConfig, WarehouseMetrics};
pub use master::{BinSpec, WarehouseMaster};
pub use stock::{DispatchRequest, StockReceipt};
pub use warehouse::Warehouse;
