//! Warehouse aggregate: the full set of bins and stock-level views

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::bin::{Bin, BinStatus};

/// The warehouse: an ordered collection of bins.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Warehouse {
    #[serde(default)]
    pub bins: Vec<Bin>,
}

impl Warehouse {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_bin(&mut self, bin: Bin) {
        self.bins.push(bin);
    }

    pub fn bin(&self, id: &str) -> Option<&Bin> {
        self.bins.iter().find(|b| b.id == id)
    }

    /// Find a bin by id, creating it with the given capacity if absent.
    pub fn bin_or_create(&mut self, id: &str, max_capacity: u32) -> &mut Bin {
        if let Some(idx) = self.bins.iter().position(|b| b.id == id) {
            return &mut self.bins[idx];
        }
        self.bins.push(Bin::new(id, max_capacity));
        self.bins.last_mut().unwrap()
    }

    /// On-hand units per item aggregated across all bins.
    ///
    /// Sorted by item id so serialized output is stable.
    pub fn stock_status(&self) -> BTreeMap<String, u32> {
        let mut status = BTreeMap::new();
        for bin in &self.bins {
            for item in &bin.items {
                *status.entry(item.item_id.clone()).or_insert(0) += item.qty;
            }
        }
        status
    }

    /// Per-bin occupancy listing.
    pub fn bin_status(&self) -> Vec<BinStatus> {
        self.bins.iter().map(Bin::status).collect()
    }

    /// Sum of `max_capacity` over all registered bins.
    pub fn total_capacity(&self) -> u32 {
        self.bins.iter().map(|b| b.max_capacity).sum()
    }

    /// Sum of occupied units over all registered bins.
    pub fn total_occupied(&self) -> u32 {
        self.bins.iter().map(|b| b.occupied).sum()
    }

    /// Number of bins currently holding at least one lot.
    pub fn active_bins(&self) -> usize {
        self.bins.iter().filter(|b| !b.items.is_empty()).count()
    }
}
