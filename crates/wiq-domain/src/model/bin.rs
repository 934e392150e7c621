//! Storage bins and the lots stored in them

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use wiq_types::{Error, Result};

/// One stored lot of an item inside a bin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinItem {
    pub item_id: String,
    pub qty: u32,
    /// Occupancy units consumed per unit of this item
    pub height: u32,
    /// When the lot entered the bin; drives first-in-first-out dispatch
    pub day: DateTime<Utc>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// A discrete storage slot within a rack position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bin {
    pub id: String,
    pub max_capacity: u32,
    #[serde(default)]
    pub items: Vec<BinItem>,
    #[serde(default)]
    pub occupied: u32,
    /// Timestamp of the most recent intake; `None` for a never-used bin
    #[serde(default)]
    pub day_stored: Option<DateTime<Utc>>,
}

impl Bin {
    pub fn new(id: impl Into<String>, max_capacity: u32) -> Self {
        Self {
            id: id.into(),
            max_capacity,
            items: Vec::new(),
            occupied: 0,
            day_stored: None,
        }
    }

    /// Whether `volume` more occupancy units fit in this bin.
    pub fn has_space(&self, volume: u32) -> bool {
        self.occupied + volume <= self.max_capacity
    }

    /// Store a lot of `qty` units, each consuming `height` occupancy units.
    pub fn add_item(
        &mut self,
        item_id: &str,
        qty: u32,
        height: u32,
        notes: Option<String>,
    ) -> Result<()> {
        let volume = height * qty;
        if !self.has_space(volume) {
            return Err(Error::BinFull(self.id.clone()));
        }
        let now = Utc::now();
        self.items.push(BinItem {
            item_id: item_id.to_string(),
            qty,
            height,
            day: now,
            notes,
        });
        self.occupied += volume;
        self.day_stored = Some(now);
        Ok(())
    }

    /// Remove up to `qty` units of an item, draining lots in insertion order.
    ///
    /// Returns the number of units actually removed, which may be less than
    /// requested when the bin runs dry. Emptied lots are dropped.
    pub fn remove_item(&mut self, item_id: &str, qty: u32) -> u32 {
        let mut removed = 0;
        for item in self.items.iter_mut().filter(|i| i.item_id == item_id) {
            let take = item.qty.min(qty - removed);
            item.qty -= take;
            removed += take;
            self.occupied -= take * item.height;
        }
        self.items.retain(|i| i.qty > 0);
        removed
    }

    /// Total units of an item across all lots in this bin.
    pub fn quantity_of(&self, item_id: &str) -> u32 {
        self.items
            .iter()
            .filter(|i| i.item_id == item_id)
            .map(|i| i.qty)
            .sum()
    }

    pub fn holds(&self, item_id: &str) -> bool {
        self.items.iter().any(|i| i.item_id == item_id)
    }

    pub fn status(&self) -> BinStatus {
        BinStatus {
            bin_id: self.id.clone(),
            occupied: self.occupied,
            max_capacity: self.max_capacity,
            items: self.items.clone(),
        }
    }
}

/// Per-bin occupancy snapshot as reported by the status endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinStatus {
    pub bin_id: String,
    pub occupied: u32,
    pub max_capacity: u32,
    pub items: Vec<BinItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_item_tracks_occupancy() {
        let mut bin = Bin::new("B1", 100);
        bin.add_item("ITEM001", 10, 2, None).unwrap();
        assert_eq!(bin.occupied, 20);
        assert_eq!(bin.quantity_of("ITEM001"), 10);
        assert!(bin.day_stored.is_some());
    }

    #[test]
    fn test_add_item_rejects_overflow() {
        let mut bin = Bin::new("B1", 10);
        let err = bin.add_item("ITEM001", 6, 2, None).unwrap_err();
        assert_eq!(err.to_string(), "Not enough space in bin B1");
        assert_eq!(bin.occupied, 0);
        assert!(bin.items.is_empty());
    }

    #[test]
    fn test_add_item_fills_to_exact_capacity() {
        let mut bin = Bin::new("B1", 10);
        bin.add_item("ITEM001", 5, 2, None).unwrap();
        assert_eq!(bin.occupied, 10);
        assert!(!bin.has_space(1));
    }

    #[test]
    fn test_remove_item_partial() {
        let mut bin = Bin::new("B1", 100);
        bin.add_item("ITEM001", 10, 2, None).unwrap();
        let removed = bin.remove_item("ITEM001", 4);
        assert_eq!(removed, 4);
        assert_eq!(bin.quantity_of("ITEM001"), 6);
        assert_eq!(bin.occupied, 12);
    }

    #[test]
    fn test_remove_item_drains_multiple_lots() {
        let mut bin = Bin::new("B1", 100);
        bin.add_item("ITEM001", 3, 1, None).unwrap();
        bin.add_item("ITEM001", 5, 1, None).unwrap();
        let removed = bin.remove_item("ITEM001", 7);
        assert_eq!(removed, 7);
        assert_eq!(bin.quantity_of("ITEM001"), 1);
        // first lot fully drained and dropped
        assert_eq!(bin.items.len(), 1);
        assert_eq!(bin.occupied, 1);
    }

    #[test]
    fn test_remove_item_short_returns_what_it_had() {
        let mut bin = Bin::new("B1", 100);
        bin.add_item("ITEM001", 3, 1, None).unwrap();
        let removed = bin.remove_item("ITEM001", 10);
        assert_eq!(removed, 3);
        assert_eq!(bin.quantity_of("ITEM001"), 0);
        assert!(bin.items.is_empty());
    }

    #[test]
    fn test_remove_item_ignores_other_items() {
        let mut bin = Bin::new("B1", 100);
        bin.add_item("ITEM001", 3, 1, None).unwrap();
        bin.add_item("ITEM002", 4, 2, None).unwrap();
        let removed = bin.remove_item("ITEM002", 4);
        assert_eq!(removed, 4);
        assert_eq!(bin.quantity_of("ITEM001"), 3);
        assert_eq!(bin.occupied, 3);
    }
}
