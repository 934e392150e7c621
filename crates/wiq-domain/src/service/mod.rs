//! Domain services

pub mod capacity;
pub mod dispatch;

pub use capacity::{compute_metrics, validate_for_save};
pub use dispatch::dispatch_item;
