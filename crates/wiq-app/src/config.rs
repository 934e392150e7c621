//! Configuration management for warehouse-iq
//!
//! Config stored at: ~/.config/warehouse-iq/config.json

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use wiq_domain::model::WarehouseConfig;
use wiq_domain::service::validate_for_save;
use wiq_types::{ConfigError, OutputFormat, Result};

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Address the API server binds to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port the API server listens on
    #[serde(default = "default_port")]
    pub port: u16,

    /// State directory override
    #[serde(default)]
    pub data_dir: Option<PathBuf>,

    /// Optional TOML master file used to seed a fresh warehouse
    #[serde(default)]
    pub master_file: Option<PathBuf>,

    /// Default output format (json, table)
    #[serde(default = "default_output_format")]
    pub output_format: OutputFormat,

    /// Saved warehouse layout
    #[serde(default)]
    pub layout: WarehouseConfig,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_output_format() -> OutputFormat {
    OutputFormat::Table
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            data_dir: None,
            master_file: None,
            output_format: default_output_format(),
            layout: WarehouseConfig::default(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("warehouse-iq");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Get the state directory path
    pub fn data_dir(&self) -> Result<PathBuf> {
        if let Some(ref dir) = self.data_dir {
            return Ok(dir.clone());
        }

        let data_dir = dirs::data_dir()
            .ok_or(ConfigError::NotFound)?
            .join("warehouse-iq");
        Ok(data_dir)
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;

        // Ensure directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, content)?;
        Ok(())
    }

    /// Replace the saved layout. This is the save path: the layout must
    /// pass validation, unlike the compute path which accepts anything.
    pub fn apply_layout(&mut self, layout: WarehouseConfig) -> Result<()> {
        validate_for_save(&layout)?;
        self.layout = layout;
        self.save()
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Warehouse IQ Configuration")?;
        writeln!(f, "==========================")?;
        writeln!(f)?;
        writeln!(f, "Listen:         {}:{}", self.host, self.port)?;
        writeln!(
            f,
            "Data dir:       {}",
            self.data_dir()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|_| "(error)".to_string())
        )?;
        writeln!(
            f,
            "Master file:    {}",
            self.master_file
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(none)".to_string())
        )?;
        writeln!(f, "Output format:  {}", self.output_format)?;
        writeln!(f)?;
        writeln!(f, "Layout")?;
        writeln!(f, "  Rows:             {}", self.layout.rows)?;
        writeln!(f, "  Columns:          {}", self.layout.columns)?;
        writeln!(f, "  Rack capacity:    {}", self.layout.rack_capacity)?;
        writeln!(f, "  Bin height (cm):  {}", self.layout.bin_height)?;
        writeln!(f, "  Utilization (%):  {}", self.layout.utilization_rate)?;
        writeln!(f, "  Bin area (sq ft): {}", self.layout.bin_area)?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:    {}", path.display())?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiq_domain::model::FieldValue;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 5000);
        assert_eq!(config.output_format, OutputFormat::Table);
        assert_eq!(config.layout.utilization_rate.value(), 65.0);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: Config = serde_json::from_str(r#"{"port": 8080}"#).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.layout.bin_area.value(), 4.0);
    }

    #[test]
    fn test_apply_layout_rejects_invalid() {
        let mut config = Config::default();
        let layout = WarehouseConfig {
            rows: FieldValue::new(5.0),
            columns: FieldValue::new(0.0),
            rack_capacity: FieldValue::new(10.0),
            bin_height: FieldValue::new(100.0),
            ..WarehouseConfig::default()
        };
        let err = config.apply_layout(layout).unwrap_err();
        assert_eq!(err.to_string(), "All values must be greater than 0");
        // saved layout untouched
        assert_eq!(config.layout.rows.value(), 0.0);
    }
}
