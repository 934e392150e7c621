//! Repository adapters for the persistence layer

use wiq_domain::model::WarehouseMaster;
use wiq_domain::repository::WarehouseMasterRepository;
use wiq_infra::{FileWarehouseMasterRepository, FileWarehouseRepository};
use wiq_types::Result;

use crate::config::Config;

/// Open the file-based warehouse state repository
pub fn open_warehouse_repo(config: &Config) -> Result<FileWarehouseRepository> {
    let data_dir = config.data_dir()?;
    FileWarehouseRepository::open(data_dir)
}

/// Load master data if a master file is configured and present
pub fn load_master(config: &Config) -> Result<Option<WarehouseMaster>> {
    match config.master_file {
        Some(ref path) if path.exists() => {
            let repo = FileWarehouseMasterRepository::new(path.clone())?;
            Ok(Some(repo.load_master()?))
        }
        _ => Ok(None),
    }
}
