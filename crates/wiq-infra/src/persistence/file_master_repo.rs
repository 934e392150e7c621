//! File-based implementation of WarehouseMasterRepository

use std::path::PathBuf;

use wiq_domain::model::WarehouseMaster;
use wiq_domain::repository::WarehouseMasterRepository;
use wiq_types::Result;

/// Warehouse master data loaded from a TOML file.
pub struct FileWarehouseMasterRepository {
    toml_path: PathBuf,
    master: WarehouseMaster,
}

impl FileWarehouseMasterRepository {
    /// Create a new repository from a TOML file path
    pub fn new(toml_path: PathBuf) -> Result<Self> {
        let master = load_master_from_file(&toml_path)?;
        Ok(Self { toml_path, master })
    }

    pub fn toml_path(&self) -> &PathBuf {
        &self.toml_path
    }

    /// Reload data from TOML
    pub fn reload(&mut self) -> Result<()> {
        self.master = load_master_from_file(&self.toml_path)?;
        Ok(())
    }
}

impl WarehouseMasterRepository for FileWarehouseMasterRepository {
    fn load_master(&self) -> Result<WarehouseMaster> {
        Ok(self.master.clone())
    }
}

fn load_master_from_file(path: &PathBuf) -> Result<WarehouseMaster> {
    let content = std::fs::read_to_string(path)?;
    let master = toml::from_str(&content)?;
    Ok(master)
}
