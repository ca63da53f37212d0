//! Configuration for wellcdf
//!
//! Centralized settings for which columns drive the analysis and how the
//! chart is sized. Every section falls back to its defaults when omitted.
//!
//! ```toml
//! [data]
//! key_column = "well_id"
//!
//! [analysis]
//! performance_measure = "Gas Cum 365 / 100 m"
//!
//! [plot]
//! width = 650
//! height = 650
//! marker_size = 7
//! ```

#[cfg(feature = "toml-config")]
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default column holding the well identifier
pub const DEFAULT_KEY_COLUMN: &str = "well_id";

/// Default performance measure used for quartiles
pub const DEFAULT_PERFORMANCE_MEASURE: &str = "Gas Cum 365 / 100 m";

/// System-wide configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WellCdfConfig {
    /// Input table settings
    pub data: DataConfig,
    /// Pipeline settings
    pub analysis: AnalysisConfig,
    /// Chart layout settings
    pub plot: PlotConfig,
}

/// Input table configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Column holding the unique well identifier
    pub key_column: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            key_column: DEFAULT_KEY_COLUMN.to_string(),
        }
    }
}

/// Pipeline configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Column used to form the performance quartiles
    pub performance_measure: String,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            performance_measure: DEFAULT_PERFORMANCE_MEASURE.to_string(),
        }
    }
}

/// Chart layout configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotConfig {
    /// Figure width in pixels
    pub width: u32,
    /// Figure height in pixels
    pub height: u32,
    /// Marker diameter in pixels
    pub marker_size: u32,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 650,
            height: 650,
            marker_size: 7,
        }
    }
}

impl WellCdfConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML string
    #[cfg(feature = "toml-config")]
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Serialize configuration to TOML
    #[cfg(feature = "toml-config")]
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load and validate a TOML configuration file
    #[cfg(feature = "toml-config")]
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {}", path.display(), e)))?;
        let config = Self::from_toml(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load the user configuration file, or defaults when there is none
    #[cfg(feature = "toml-config")]
    pub fn load_or_default() -> Result<Self, ConfigError> {
        match Self::default_path() {
            Some(path) if path.exists() => {
                tracing::debug!(path = %path.display(), "Loading configuration");
                Self::load(&path)
            }
            _ => Ok(Self::default()),
        }
    }

    /// Location of the user configuration file
    #[cfg(feature = "toml-config")]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("wellcdf").join("config.toml"))
    }

    /// Load configuration from a JSON string
    pub fn from_json(json_str: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json_str).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Serialize configuration to JSON
    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.data.key_column.trim().is_empty() {
            return Err(ConfigError::MissingField("data.key_column".to_string()));
        }

        if self.analysis.performance_measure.trim().is_empty() {
            return Err(ConfigError::MissingField(
                "analysis.performance_measure".to_string(),
            ));
        }

        if self.data.key_column == self.analysis.performance_measure {
            return Err(ConfigError::OutOfRange(
                "performance_measure must differ from key_column".to_string(),
            ));
        }

        if self.plot.width == 0 || self.plot.height == 0 {
            return Err(ConfigError::OutOfRange(
                "plot width and height must be positive".to_string(),
            ));
        }

        if self.plot.marker_size == 0 {
            return Err(ConfigError::OutOfRange(
                "marker_size must be positive".to_string(),
            ));
        }

        Ok(())
    }
}

/// Configuration loading and validation errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("Cannot read config: {0}")]
    Io(String),
    /// Config text is malformed
    #[error("Cannot parse config: {0}")]
    Parse(String),
    /// Value is out of valid range
    #[error("Value out of range: {0}")]
    OutOfRange(String),
    /// Required field is missing
    #[error("Missing field: {0}")]
    MissingField(String),
}
