//! Capacity and utilization calculation for a warehouse layout

use wiq_types::{Error, Result};

use crate::model::{WarehouseConfig, WarehouseMetrics};

/// Compute derived capacity metrics from a layout configuration.
///
/// Pure arithmetic: degenerate inputs produce all-zero metrics, never an
/// error, and negative inputs are not rejected here. Used bins and used
/// area are each floored independently, so `used_area` is not guaranteed
/// to equal `used_bins * bin_area`.
pub fn compute_metrics(config: &WarehouseConfig) -> WarehouseMetrics {
    let rows = config.rows.value();
    let columns = config.columns.value();
    let rack_capacity = config.rack_capacity.value();
    let bin_area = config.bin_area.value();
    let utilization_rate = config.utilization_rate.value();

    let total_bins = rows * columns * rack_capacity;
    let total_area = total_bins * bin_area;

    let used_area = (total_area * (utilization_rate / 100.0)).floor();
    let available_area = total_area - used_area;

    let used_bins = (total_bins * (utilization_rate / 100.0)).floor();
    let available_bins = total_bins - used_bins;

    WarehouseMetrics {
        total_area,
        used_area,
        available_area,
        utilization_rate: round2(utilization_rate),
        total_bins,
        used_bins,
        available_bins,
    }
}

/// Validate a layout before it is saved.
///
/// The compute path accepts anything; only saving requires positive values
/// for the four physical dimensions (`bin_height` included, even though the
/// calculation ignores it).
pub fn validate_for_save(config: &WarehouseConfig) -> Result<()> {
    let required = [
        config.rows,
        config.columns,
        config.rack_capacity,
        config.bin_height,
    ];
    if required.iter().any(|field| field.value() <= 0.0) {
        return Err(Error::Validation(
            "All values must be greater than 0".to_string(),
        ));
    }
    Ok(())
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FieldValue;

    fn config(
        rows: f64,
        columns: f64,
        rack_capacity: f64,
        bin_height: f64,
        utilization_rate: &str,
        bin_area: &str,
    ) -> WarehouseConfig {
        WarehouseConfig {
            rows: FieldValue::new(rows),
            columns: FieldValue::new(columns),
            rack_capacity: FieldValue::new(rack_capacity),
            bin_height: FieldValue::new(bin_height),
            utilization_rate: FieldValue::from(utilization_rate),
            bin_area: FieldValue::from(bin_area),
        }
    }

    #[test]
    fn test_reference_layout() {
        let metrics = compute_metrics(&config(5.0, 3.0, 10.0, 100.0, "65", "4"));
        assert_eq!(metrics.total_bins, 150.0);
        assert_eq!(metrics.total_area, 600.0);
        assert_eq!(metrics.used_bins, 97.0);
        assert_eq!(metrics.available_bins, 53.0);
        assert_eq!(metrics.used_area, 390.0);
        assert_eq!(metrics.available_area, 210.0);
        assert_eq!(metrics.utilization_rate, 65.0);
    }

    #[test]
    fn test_all_zero_layout() {
        let metrics = compute_metrics(&config(0.0, 0.0, 0.0, 0.0, "65", "4"));
        assert_eq!(metrics.total_bins, 0.0);
        assert_eq!(metrics.total_area, 0.0);
        assert_eq!(metrics.used_bins, 0.0);
        assert_eq!(metrics.available_bins, 0.0);
        assert_eq!(metrics.used_area, 0.0);
        assert_eq!(metrics.available_area, 0.0);
    }

    #[test]
    fn test_sum_invariants() {
        let cases = [
            config(5.0, 3.0, 10.0, 100.0, "65", "4"),
            config(20.0, 10.0, 30.0, 200.0, "65", "4"),
            config(7.0, 11.0, 3.0, 50.0, "33.33", "2.5"),
            config(1.0, 1.0, 3.0, 10.0, "50", "4"),
        ];
        for case in &cases {
            let metrics = compute_metrics(case);
            assert_eq!(metrics.used_bins + metrics.available_bins, metrics.total_bins);
            assert_eq!(metrics.used_area + metrics.available_area, metrics.total_area);
        }
    }

    #[test]
    fn test_independent_flooring_can_disagree() {
        // 3 bins at 4 sq ft, 50%: usedBins floors 1.5 down to 1, while
        // usedArea is floor(6) = 6, not usedBins * binArea = 4.
        let metrics = compute_metrics(&config(1.0, 1.0, 3.0, 10.0, "50", "4"));
        assert_eq!(metrics.used_bins, 1.0);
        assert_eq!(metrics.used_area, 6.0);
        assert_ne!(metrics.used_area, metrics.used_bins * 4.0);
    }

    #[test]
    fn test_idempotent() {
        let case = config(20.0, 10.0, 30.0, 200.0, "65", "4");
        assert_eq!(compute_metrics(&case), compute_metrics(&case));
    }

    #[test]
    fn test_non_numeric_fields_coerce_to_zero() {
        let metrics = compute_metrics(&config(5.0, 3.0, 10.0, 100.0, "not a number", ""));
        assert_eq!(metrics.total_bins, 150.0);
        assert_eq!(metrics.total_area, 0.0);
        assert_eq!(metrics.used_bins, 0.0);
        assert_eq!(metrics.utilization_rate, 0.0);
    }

    #[test]
    fn test_rate_rounds_to_two_decimals() {
        let metrics = compute_metrics(&config(1.0, 1.0, 1.0, 1.0, "33.333", "4"));
        assert_eq!(metrics.utilization_rate, 33.33);
    }

    #[test]
    fn test_negative_inputs_flow_through() {
        let metrics = compute_metrics(&config(-5.0, 3.0, 10.0, 100.0, "65", "4"));
        assert_eq!(metrics.total_bins, -150.0);
        assert_eq!(metrics.used_bins + metrics.available_bins, metrics.total_bins);
    }

    #[test]
    fn test_validate_for_save_accepts_positive_layout() {
        assert!(validate_for_save(&config(5.0, 3.0, 10.0, 100.0, "65", "4")).is_ok());
    }

    #[test]
    fn test_validate_for_save_rejects_zero_dimension() {
        let err = validate_for_save(&config(5.0, 0.0, 10.0, 100.0, "65", "4")).unwrap_err();
        assert_eq!(err.to_string(), "All values must be greater than 0");
    }

    #[test]
    fn test_validate_for_save_checks_bin_height() {
        // bin_height never feeds the calculation but still gates saving
        assert!(validate_for_save(&config(5.0, 3.0, 10.0, 0.0, "65", "4")).is_err());
    }
}
