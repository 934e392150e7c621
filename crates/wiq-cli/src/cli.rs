//! CLI argument definitions

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use wiq_types::OutputFormat;

#[derive(Debug, Parser)]
#[command(name = "wiq", version, about = "Warehouse capacity and stock ledger")]
pub struct Cli {
    /// Output format (table, json)
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// State directory override
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Compute capacity metrics for a layout (saved layout + overrides)
    Metrics {
        #[arg(long)]
        rows: Option<f64>,
        #[arg(long)]
        columns: Option<f64>,
        #[arg(long)]
        rack_capacity: Option<f64>,
        #[arg(long)]
        bin_height: Option<f64>,
        #[arg(long)]
        utilization_rate: Option<f64>,
        #[arg(long)]
        bin_area: Option<f64>,
    },

    /// Validate and save a warehouse layout
    Layout {
        #[arg(long)]
        rows: f64,
        #[arg(long)]
        columns: f64,
        #[arg(long)]
        rack_capacity: f64,
        #[arg(long)]
        bin_height: f64,
        #[arg(long)]
        utilization_rate: Option<f64>,
        #[arg(long)]
        bin_area: Option<f64>,
    },

    /// Show on-hand stock per item
    Status,

    /// Show per-bin occupancy
    Bins,

    /// Receive a stock lot into a bin
    Receive {
        item_id: String,
        quantity: u32,
        /// Occupancy units per item
        #[arg(long, default_value_t = 1)]
        height: u32,
        /// Target bin id
        #[arg(long, default_value = "B1")]
        bin: String,
        /// Capacity used if the bin must be created
        #[arg(long, default_value_t = 100)]
        bin_capacity: u32,
        #[arg(long)]
        notes: Option<String>,
    },

    /// Dispatch stock out of the warehouse
    Dispatch {
        item_id: String,
        quantity: u32,
        #[arg(long)]
        destination: Option<String>,
        #[arg(long)]
        notes: Option<String>,
    },

    /// Bulk intake from a CSV file (item_id,quantity,height[,bin][,bin_capacity][,notes])
    Import { csv: PathBuf },

    /// Show the active configuration
    Config,
}
