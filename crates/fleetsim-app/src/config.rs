//! Configuration management for fleetsim
//!
//! Config stored at: ~/.config/fleetsim/config.json

use fleetsim_domain::model::parameters::{BASELINE_ROUTE_DURATION_HOURS, DEFAULT_FUEL_PRICE};
use fleetsim_types::{ConfigError, OutputFormat, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Default output format (json, table)
    #[serde(default = "default_output_format")]
    pub output_format: OutputFormat,

    /// Fuel price used when a run does not specify one (currency/liter)
    #[serde(default = "default_fuel_price")]
    pub fuel_price: f64,

    /// Route duration used when a run does not specify one (hours)
    #[serde(default = "default_max_route_duration")]
    pub max_route_duration: f64,

    /// Default collection strategy label
    #[serde(default)]
    pub collection_strategy: Option<String>,

    /// Baseline TOML file; the built-in baseline is used when unset
    #[serde(default)]
    pub baseline_file: Option<PathBuf>,
}

fn default_output_format() -> OutputFormat {
    OutputFormat::Table
}

fn default_fuel_price() -> f64 {
    DEFAULT_FUEL_PRICE
}

fn default_max_route_duration() -> f64 {
    BASELINE_ROUTE_DURATION_HOURS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_format: default_output_format(),
            fuel_price: default_fuel_price(),
            max_route_duration: default_max_route_duration(),
            collection_strategy: None,
            baseline_file: None,
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("fleetsim");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load config from an explicit path, or create default if it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)
                .map_err(|e| ConfigError::ParseError(e.to_string()))?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| ConfigError::SaveError(e.to_string()))?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|e| ConfigError::SaveError(e.to_string()))?;
        Ok(())
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Fleetsim Configuration")?;
        writeln!(f, "======================")?;
        writeln!(f)?;
        writeln!(f, "Output format:       {}", self.output_format)?;
        writeln!(f, "Fuel price:          {:.2} /L", self.fuel_price)?;
        writeln!(f, "Max route duration:  {} h", self.max_route_duration)?;
        writeln!(
            f,
            "Collection strategy: {}",
            self.collection_strategy.as_deref().unwrap_or("(none)")
        )?;
        writeln!(
            f,
            "Baseline file:       {}",
            self.baseline_file
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(built-in)".to_string())
        )?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:         {}", path.display())?;
        }

        Ok(())
    }
}
