//! Stock operation payloads

use serde::{Deserialize, Serialize};

fn default_bin_id() -> String {
    "B1".to_string()
}

fn default_bin_capacity() -> u32 {
    100
}

/// An incoming stock lot bound for a bin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockReceipt {
    pub item_id: String,
    pub quantity: u32,
    /// Occupancy units per item
    pub height: u32,
    /// Target bin id
    #[serde(default = "default_bin_id", alias = "bin_id")]
    pub location: String,
    /// Capacity used only when the target bin must be created
    #[serde(default = "default_bin_capacity")]
    pub bin_capacity: u32,
    #[serde(default)]
    pub notes: Option<String>,
}

impl StockReceipt {
    pub fn new(item_id: impl Into<String>, quantity: u32, height: u32) -> Self {
        Self {
            item_id: item_id.into(),
            quantity,
            height,
            location: default_bin_id(),
            bin_capacity: default_bin_capacity(),
            notes: None,
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn with_bin_capacity(mut self, bin_capacity: u32) -> Self {
        self.bin_capacity = bin_capacity;
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

/// A request to dispatch stock out of the warehouse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DispatchRequest {
    pub item_id: String,
    pub quantity: u32,
    /// Where the stock is headed; informational only
    #[serde(default)]
    pub destination: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl DispatchRequest {
    pub fn new(item_id: impl Into<String>, quantity: u32) -> Self {
        Self {
            item_id: item_id.into(),
            quantity,
            destination: None,
            notes: None,
        }
    }

    pub fn with_destination(mut self, destination: impl Into<String>) -> Self {
        self.destination = Some(destination.into());
        self
    }
}
