//! Repository trait definitions for warehouse persistence

use wiq_types::Error;

use crate::model::{Warehouse, WarehouseMaster};

/// Repository for the live warehouse state.
pub trait WarehouseRepository {
    /// Load the warehouse; an absent backing store yields an empty warehouse
    fn load(&self) -> Result<Warehouse, Error>;

    /// Persist the warehouse
    fn save(&self, warehouse: &Warehouse) -> Result<(), Error>;
}

/// Repository for static warehouse master data (layout, declared bins).
pub trait WarehouseMasterRepository {
    /// Load all master data
    fn load_master(&self) -> Result<WarehouseMaster, Error>;
}
