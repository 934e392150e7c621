//! Warehouse service - stock intake, dispatch, and status reporting
//!
//! The façade the server and CLI both drive:
//! 1. Open the state repository (seeding from master data on first run)
//! 2. Validate the operation
//! 3. Apply it to the in-memory warehouse
//! 4. Write the state back through the repository

use std::collections::BTreeMap;

use serde::Serialize;

use wiq_domain::model::{
    BinStatus, DispatchRequest, StockReceipt, Warehouse, WarehouseConfig, WarehouseMaster,
    WarehouseMetrics,
};
use wiq_domain::repository::WarehouseRepository;
use wiq_domain::service::{compute_metrics, dispatch_item};
use wiq_infra::FileWarehouseRepository;
use wiq_types::{Error, Result};

use crate::config::Config;
use crate::repository;

/// Outcome of a dispatch operation.
#[derive(Debug, Clone, Serialize)]
pub struct DispatchOutcome {
    pub dispatched: u32,
    pub stock_status: BTreeMap<String, u32>,
}

/// Aggregate report served to dashboards: capacity metrics derived from the
/// configured layout, plus live occupancy of the registered bins.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WarehouseReport {
    #[serde(flatten)]
    pub capacity: WarehouseMetrics,
    pub total_capacity: u32,
    pub occupied_space: u32,
    /// Occupied share of registered bin capacity, percent
    pub space_utilization: f64,
    pub active_bins: usize,
    pub registered_bins: usize,
}

/// Use-case façade over the warehouse state.
pub struct WarehouseService {
    repo: FileWarehouseRepository,
    warehouse: Warehouse,
}

impl WarehouseService {
    /// Open the service against the configured data directory.
    ///
    /// A fresh state (no state file yet) is seeded from the configured
    /// master file when one exists; otherwise the warehouse starts empty.
    pub fn open(config: &Config) -> Result<Self> {
        let repo = repository::open_warehouse_repo(config)?;
        let master = repository::load_master(config)?;
        Self::with_repo(repo, master)
    }

    /// Open the service against an explicit repository.
    pub fn with_repo(
        repo: FileWarehouseRepository,
        master: Option<WarehouseMaster>,
    ) -> Result<Self> {
        let warehouse = if repo.exists() {
            repo.load()?
        } else if let Some(master) = master {
            let warehouse = master.build_warehouse();
            repo.save(&warehouse)?;
            warehouse
        } else {
            Warehouse::new()
        };
        Ok(Self { repo, warehouse })
    }

    /// Store an incoming lot, creating the target bin on demand.
    pub fn receive(&mut self, receipt: &StockReceipt) -> Result<Vec<BinStatus>> {
        validate_operation(&receipt.item_id, receipt.quantity)?;
        if receipt.location.trim().is_empty() {
            return Err(invalid_fields());
        }

        let bin = self
            .warehouse
            .bin_or_create(&receipt.location, receipt.bin_capacity);
        bin.add_item(
            &receipt.item_id,
            receipt.quantity,
            receipt.height,
            receipt.notes.clone(),
        )?;
        self.repo.save(&self.warehouse)?;
        Ok(self.warehouse.bin_status())
    }

    /// Dispatch stock out of the warehouse, oldest bins first.
    pub fn dispatch(&mut self, request: &DispatchRequest) -> Result<DispatchOutcome> {
        validate_operation(&request.item_id, request.quantity)?;

        let dispatched = dispatch_item(&mut self.warehouse, &request.item_id, request.quantity)?;
        self.repo.save(&self.warehouse)?;
        Ok(DispatchOutcome {
            dispatched,
            stock_status: self.warehouse.stock_status(),
        })
    }

    /// Bulk intake; receipts are applied in order.
    pub fn import(&mut self, receipts: &[StockReceipt]) -> Result<usize> {
        for receipt in receipts {
            self.receive(receipt)?;
        }
        Ok(receipts.len())
    }

    pub fn stock_status(&self) -> BTreeMap<String, u32> {
        self.warehouse.stock_status()
    }

    pub fn bin_status(&self) -> Vec<BinStatus> {
        self.warehouse.bin_status()
    }

    /// Build the aggregate dashboard report for a layout.
    pub fn report(&self, layout: &WarehouseConfig) -> WarehouseReport {
        let capacity = compute_metrics(layout);
        let total_capacity = self.warehouse.total_capacity();
        let occupied_space = self.warehouse.total_occupied();
        let space_utilization = if total_capacity > 0 {
            let ratio = occupied_space as f64 / total_capacity as f64 * 100.0;
            (ratio * 100.0).round() / 100.0
        } else {
            0.0
        };
        WarehouseReport {
            capacity,
            total_capacity,
            occupied_space,
            space_utilization,
            active_bins: self.warehouse.active_bins(),
            registered_bins: self.warehouse.bins.len(),
        }
    }
}

fn validate_operation(item_id: &str, quantity: u32) -> Result<()> {
    if item_id.trim().is_empty() || quantity == 0 {
        return Err(invalid_fields());
    }
    Ok(())
}

fn invalid_fields() -> Error {
    Error::Validation("Please fill in all required fields with valid values".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;
    use wiq_domain::model::{BinSpec, FieldValue};

    fn service_in(dir: &std::path::Path) -> WarehouseService {
        let repo = FileWarehouseRepository::open(dir.to_path_buf()).unwrap();
        WarehouseService::with_repo(repo, None).unwrap()
    }

    fn seed(service: &mut WarehouseService) {
        service
            .receive(
                &StockReceipt::new("ITEM001", 100, 1)
                    .with_location("A1")
                    .with_bin_capacity(500)
                    .with_notes("Main stock"),
            )
            .unwrap();
        service
            .receive(&StockReceipt::new("ITEM002", 50, 1).with_location("B2"))
            .unwrap();
        service
            .receive(
                &StockReceipt::new("ITEM003", 200, 1)
                    .with_location("C3")
                    .with_bin_capacity(500),
            )
            .unwrap();
    }

    #[test]
    fn test_receive_add_then_increment() {
        let dir = tempdir().unwrap();
        let mut service = service_in(dir.path());
        seed(&mut service);

        service
            .receive(&StockReceipt::new("ITEM001", 50, 1).with_location("A1"))
            .unwrap();
        assert_eq!(service.stock_status()["ITEM001"], 150);
        // still a single A1 bin
        assert_eq!(
            service
                .bin_status()
                .iter()
                .filter(|b| b.bin_id == "A1")
                .count(),
            1
        );
    }

    #[test]
    fn test_receive_rejects_blank_fields() {
        let dir = tempdir().unwrap();
        let mut service = service_in(dir.path());
        let err = service
            .receive(&StockReceipt::new("", 10, 1))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Please fill in all required fields with valid values"
        );
        let err = service
            .receive(&StockReceipt::new("ITEM001", 0, 1))
            .unwrap_err();
        assert!(err.is_user_error());
    }

    #[test]
    fn test_dispatch_reduces_stock() {
        let dir = tempdir().unwrap();
        let mut service = service_in(dir.path());
        seed(&mut service);

        let outcome = service
            .dispatch(&DispatchRequest::new("ITEM001", 30).with_destination("Customer A"))
            .unwrap();
        assert_eq!(outcome.dispatched, 30);
        assert_eq!(outcome.stock_status["ITEM001"], 70);
    }

    #[test]
    fn test_dispatch_insufficient_stock() {
        let dir = tempdir().unwrap();
        let mut service = service_in(dir.path());
        seed(&mut service);

        let err = service
            .dispatch(&DispatchRequest::new("ITEM002", 500))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Not enough stock to dispatch. Requested: 500, Available: 50"
        );
        assert_eq!(service.stock_status()["ITEM002"], 50);
    }

    #[test]
    fn test_state_survives_reopen() {
        let dir = tempdir().unwrap();
        {
            let mut service = service_in(dir.path());
            seed(&mut service);
            service
                .dispatch(&DispatchRequest::new("ITEM003", 100))
                .unwrap();
        }
        let service = service_in(dir.path());
        assert_eq!(service.stock_status()["ITEM003"], 100);
        assert_eq!(service.stock_status()["ITEM001"], 100);
    }

    #[test]
    fn test_fresh_state_seeds_from_master() {
        let dir = tempdir().unwrap();
        let master = WarehouseMaster {
            layout: WarehouseConfig::default(),
            bins: vec![
                BinSpec {
                    id: "A1".to_string(),
                    max_capacity: 200,
                },
                BinSpec {
                    id: "B2".to_string(),
                    max_capacity: 100,
                },
            ],
        };
        let repo = FileWarehouseRepository::open(dir.path().to_path_buf()).unwrap();
        let service = WarehouseService::with_repo(repo, Some(master.clone())).unwrap();
        assert_eq!(service.bin_status().len(), 2);

        // an existing state file wins over master data
        let repo = FileWarehouseRepository::open(dir.path().to_path_buf()).unwrap();
        let mut service = WarehouseService::with_repo(repo, Some(master)).unwrap();
        service
            .receive(&StockReceipt::new("ITEM001", 10, 1).with_location("A1"))
            .unwrap();
        assert_eq!(service.bin_status().len(), 2);
    }

    #[test]
    fn test_import_applies_all_receipts() {
        let dir = tempdir().unwrap();
        let mut service = service_in(dir.path());
        let receipts = vec![
            StockReceipt::new("ITEM001", 100, 1).with_location("A1"),
            StockReceipt::new("ITEM002", 50, 1).with_location("B2"),
        ];
        let count = service.import(&receipts).unwrap();
        assert_eq!(count, 2);
        assert_eq!(service.stock_status().len(), 2);
    }

    #[test]
    fn test_report_merges_layout_and_occupancy() {
        let dir = tempdir().unwrap();
        let mut service = service_in(dir.path());
        seed(&mut service);

        let layout = WarehouseConfig {
            rows: FieldValue::new(5.0),
            columns: FieldValue::new(3.0),
            rack_capacity: FieldValue::new(10.0),
            bin_height: FieldValue::new(100.0),
            ..WarehouseConfig::default()
        };
        let report = service.report(&layout);
        assert_eq!(report.capacity.total_bins, 150.0);
        assert_eq!(report.capacity.used_bins, 97.0);
        assert_eq!(report.total_capacity, 1100);
        assert_eq!(report.occupied_space, 350);
        assert_eq!(report.space_utilization, 31.82);
        assert_eq!(report.active_bins, 3);
        assert_eq!(report.registered_bins, 3);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["totalBins"], 150.0);
        assert_eq!(json["occupiedSpace"], 350);
    }
}
