//! File-based implementation of WarehouseRepository

use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

use wiq_domain::model::Warehouse;
use wiq_domain::repository::WarehouseRepository;
use wiq_types::Result;

/// Warehouse state persisted as a single JSON file under the data directory.
pub struct FileWarehouseRepository {
    state_path: PathBuf,
}

impl FileWarehouseRepository {
    /// Create or attach to a state directory
    pub fn open(state_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&state_dir)?;
        Ok(Self {
            state_path: state_dir.join("state.json"),
        })
    }

    pub fn state_path(&self) -> &PathBuf {
        &self.state_path
    }

    /// Whether a state file has been written yet
    pub fn exists(&self) -> bool {
        self.state_path.exists()
    }
}

impl WarehouseRepository for FileWarehouseRepository {
    fn load(&self) -> Result<Warehouse> {
        if !self.state_path.exists() {
            return Ok(Warehouse::new());
        }
        let file = File::open(&self.state_path)?;
        let reader = BufReader::new(file);
        let warehouse = serde_json::from_reader(reader)?;
        Ok(warehouse)
    }

    fn save(&self, warehouse: &Warehouse) -> Result<()> {
        let file = File::create(&self.state_path)?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, warehouse)?;
        Ok(())
    }
}
