//! Warehouse layout configuration and derived capacity metrics

use serde::{Deserialize, Serialize};

/// A numeric form field that may arrive as a number, a numeric string, an
/// empty string, or nothing at all. Anything absent or non-numeric coerces
/// to 0 instead of failing deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawField")]
pub struct FieldValue(f64);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawField {
    Number(f64),
    Text(String),
    Other(serde_json::Value),
}

impl From<RawField> for FieldValue {
    fn from(raw: RawField) -> Self {
        let value = match raw {
            RawField::Number(n) if n.is_finite() => n,
            RawField::Text(s) => s
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|n| n.is_finite())
                .unwrap_or(0.0),
            _ => 0.0,
        };
        FieldValue(value)
    }
}

impl FieldValue {
    pub fn new(value: f64) -> Self {
        FieldValue(if value.is_finite() { value } else { 0.0 })
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue(0.0)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::new(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        RawField::Text(value.to_string()).into()
    }
}

impl std::fmt::Display for FieldValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Warehouse layout as entered on the configuration form.
///
/// `bin_height` is collected alongside the others but plays no part in the
/// capacity calculation; it only participates in save-path validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WarehouseConfig {
    pub rows: FieldValue,
    pub columns: FieldValue,
    pub rack_capacity: FieldValue,
    pub bin_height: FieldValue,
    pub utilization_rate: FieldValue,
    pub bin_area: FieldValue,
}

impl Default for WarehouseConfig {
    fn default() -> Self {
        Self {
            rows: FieldValue::default(),
            columns: FieldValue::default(),
            rack_capacity: FieldValue::default(),
            bin_height: FieldValue::default(),
            utilization_rate: FieldValue::new(65.0),
            bin_area: FieldValue::new(4.0),
        }
    }
}

/// Derived capacity snapshot for a warehouse layout.
///
/// Recomputed from the configuration on demand; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WarehouseMetrics {
    /// Total area in square feet
    pub total_area: f64,
    /// Used area in square feet
    pub used_area: f64,
    /// Available area in square feet
    pub available_area: f64,
    pub utilization_rate: f64,
    pub total_bins: f64,
    pub used_bins: f64,
    pub available_bins: f64,
}
