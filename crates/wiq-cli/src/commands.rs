//! Command handlers

use wiq_app::{Config, WarehouseService};
use wiq_domain::model::{DispatchRequest, FieldValue, StockReceipt, WarehouseConfig};
use wiq_domain::service::compute_metrics;
use wiq_infra::stock_csv::load_receipts_from_csv;
use wiq_types::Result;

use crate::cli::{Cli, Commands};
use crate::output;

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    // Load config
    let mut config = Config::load()?;

    // Override from CLI args
    if let Some(ref dir) = cli.data_dir {
        config.data_dir = Some(dir.clone());
    }
    let output_format = cli.format.unwrap_or(config.output_format);

    match cli.command {
        Commands::Metrics {
            rows,
            columns,
            rack_capacity,
            bin_height,
            utilization_rate,
            bin_area,
        } => {
            let layout = layout_with_overrides(
                &config.layout,
                rows,
                columns,
                rack_capacity,
                bin_height,
                utilization_rate,
                bin_area,
            );
            let metrics = compute_metrics(&layout);
            output::output_metrics(output_format, &metrics)
        }

        Commands::Layout {
            rows,
            columns,
            rack_capacity,
            bin_height,
            utilization_rate,
            bin_area,
        } => {
            let layout = layout_with_overrides(
                &config.layout,
                Some(rows),
                Some(columns),
                Some(rack_capacity),
                Some(bin_height),
                utilization_rate,
                bin_area,
            );
            config.apply_layout(layout)?;
            println!("Configuration saved successfully");
            output::output_metrics(output_format, &compute_metrics(&config.layout))
        }

        Commands::Status => {
            let service = WarehouseService::open(&config)?;
            output::output_stock(output_format, &service.stock_status())
        }

        Commands::Bins => {
            let service = WarehouseService::open(&config)?;
            output::output_bins(output_format, &service.bin_status())
        }

        Commands::Receive {
            item_id,
            quantity,
            height,
            bin,
            bin_capacity,
            notes,
        } => {
            let mut service = WarehouseService::open(&config)?;
            let mut receipt = StockReceipt::new(item_id, quantity, height)
                .with_location(bin)
                .with_bin_capacity(bin_capacity);
            if let Some(notes) = notes {
                receipt = receipt.with_notes(notes);
            }
            let bin_status = service.receive(&receipt)?;
            println!("Stock added successfully");
            output::output_bins(output_format, &bin_status)
        }

        Commands::Dispatch {
            item_id,
            quantity,
            destination,
            notes: _,
        } => {
            let mut service = WarehouseService::open(&config)?;
            let mut request = DispatchRequest::new(item_id, quantity);
            if let Some(destination) = destination {
                request = request.with_destination(destination);
            }
            let outcome = service.dispatch(&request)?;
            println!("Dispatched {} units", outcome.dispatched);
            output::output_stock(output_format, &outcome.stock_status)
        }

        Commands::Import { csv } => {
            let mut service = WarehouseService::open(&config)?;
            let receipts = load_receipts_from_csv(&csv)?;
            let count = service.import(&receipts)?;
            println!("Imported {} receipts", count);
            output::output_stock(output_format, &service.stock_status())
        }

        Commands::Config => {
            print!("{}", config);
            Ok(())
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn layout_with_overrides(
    base: &WarehouseConfig,
    rows: Option<f64>,
    columns: Option<f64>,
    rack_capacity: Option<f64>,
    bin_height: Option<f64>,
    utilization_rate: Option<f64>,
    bin_area: Option<f64>,
) -> WarehouseConfig {
    let mut layout = base.clone();
    if let Some(rows) = rows {
        layout.rows = FieldValue::new(rows);
    }
    if let Some(columns) = columns {
        layout.columns = FieldValue::new(columns);
    }
    if let Some(rack_capacity) = rack_capacity {
        layout.rack_capacity = FieldValue::new(rack_capacity);
    }
    if let Some(bin_height) = bin_height {
        layout.bin_height = FieldValue::new(bin_height);
    }
    if let Some(utilization_rate) = utilization_rate {
        layout.utilization_rate = FieldValue::new(utilization_rate);
    }
    if let Some(bin_area) = bin_area {
        layout.bin_area = FieldValue::new(bin_area);
    }
    layout
}
