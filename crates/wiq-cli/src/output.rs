//! Output formatting module

use std::collections::BTreeMap;

use wiq_domain::model::{BinStatus, WarehouseMetrics};
use wiq_types::{OutputFormat, Result};

pub fn output_metrics(output_format: OutputFormat, metrics: &WarehouseMetrics) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(metrics)?);
    } else {
        println!("\nWarehouse Capacity");
        println!("==================");
        println!("Total bins:      {}", metrics.total_bins);
        println!("Used bins:       {}", metrics.used_bins);
        println!("Available bins:  {}", metrics.available_bins);
        println!("Total area:      {} sq ft", metrics.total_area);
        println!("Used area:       {} sq ft", metrics.used_area);
        println!("Available area:  {} sq ft", metrics.available_area);
        println!("Utilization:     {}%", metrics.utilization_rate);
    }

    Ok(())
}

pub fn output_stock(output_format: OutputFormat, stock: &BTreeMap<String, u32>) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(stock)?);
    } else if stock.is_empty() {
        println!("No stock on hand");
    } else {
        println!("\n{:<16} {:>8}", "Item", "On hand");
        println!("{}", "-".repeat(25));
        for (item_id, qty) in stock {
            println!("{:<16} {:>8}", item_id, qty);
        }
    }

    Ok(())
}

pub fn output_bins(output_format: OutputFormat, bins: &[BinStatus]) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(bins)?);
    } else if bins.is_empty() {
        println!("No bins registered");
    } else {
        for bin in bins {
            println!(
                "\n{} ({}/{} occupied)",
                bin.bin_id, bin.occupied, bin.max_capacity
            );
            for item in &bin.items {
                let notes = item.notes.as_deref().unwrap_or("");
                println!(
                    "  {:<16} {:>6} x{:<4} {}",
                    item.item_id, item.qty, item.height, notes
                );
            }
        }
    }

    Ok(())
}
