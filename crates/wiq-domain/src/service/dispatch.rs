//! First-in-first-out dispatch across bins

use wiq_types::{Error, Result};

use crate::model::Warehouse;

/// Dispatch `qty` units of an item, draining the oldest bins first.
///
/// Bins are ordered by their last-intake timestamp (`day_stored`), with
/// never-used bins last. Availability is checked up front: a failed
/// dispatch leaves the warehouse untouched.
///
/// Returns the number of units dispatched (always `qty` on success).
pub fn dispatch_item(warehouse: &mut Warehouse, item_id: &str, qty: u32) -> Result<u32> {
    let available: u32 = warehouse
        .bins
        .iter()
        .map(|bin| bin.quantity_of(item_id))
        .sum();
    if available == 0 {
        return Err(Error::ItemNotFound(item_id.to_string()));
    }
    if available < qty {
        return Err(Error::InsufficientStock {
            requested: qty,
            available,
        });
    }

    let mut order: Vec<usize> = warehouse
        .bins
        .iter()
        .enumerate()
        .filter(|(_, bin)| bin.holds(item_id))
        .map(|(idx, _)| idx)
        .collect();
    order.sort_by_key(|&idx| {
        warehouse.bins[idx]
            .day_stored
            .unwrap_or(chrono::DateTime::<chrono::Utc>::MAX_UTC)
    });

    let mut dispatched = 0;
    for idx in order {
        dispatched += warehouse.bins[idx].remove_item(item_id, qty - dispatched);
        if dispatched >= qty {
            break;
        }
    }
    Ok(dispatched)
}
