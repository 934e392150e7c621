//! Warehouse master data: static layout and pre-registered bins

use serde::{Deserialize, Serialize};

use crate::model::bin::Bin;
use crate::model::layout::WarehouseConfig;
use crate::model::warehouse::Warehouse;

/// A bin declaration in the master file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinSpec {
    pub id: String,
    pub max_capacity: u32,
}

/// Master data loaded from TOML: the configured layout plus the bins that
/// should exist before any stock arrives.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WarehouseMaster {
    #[serde(default)]
    pub layout: WarehouseConfig,
    #[serde(default)]
    pub bins: Vec<BinSpec>,
}

impl WarehouseMaster {
    /// Build an empty warehouse with the declared bins registered.
    pub fn build_warehouse(&self) -> Warehouse {
        let mut warehouse = Warehouse::new();
        for spec in &self.bins {
            warehouse.add_bin(Bin::new(&spec.id, spec.max_capacity));
        }
        warehouse
    }
}
