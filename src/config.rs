//! Configuration management and validation.
//!
//! Provides configuration structures for the events API and the processing
//! pipeline. Settings are layered: built-in defaults, then an optional YAML
//! config file, then CLI argument overrides applied by the commands.

use crate::constants::{
    DEFAULT_OUTPUT_DIR, DEFAULT_RECORD_LIMIT, DEFAULT_TIMEOUT_SECS, EVENTS_API_BASE_URL,
    EVENTS_CSV_FILENAME, MAX_RECORD_LIMIT,
};
use crate::error::{DriveBcError, Result};
use crate::models::UnknownGeometryPolicy;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Events API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the Open511 endpoint
    pub base_url: String,

    /// Number of records to request per fetch
    pub record_limit: usize,

    /// HTTP timeout in seconds
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: EVENTS_API_BASE_URL.to_string(),
            record_limit: DEFAULT_RECORD_LIMIT,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Processing pipeline settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessingConfig {
    /// Path of the flattened events CSV (fetch output, convert input)
    pub csv_path: PathBuf,

    /// Directory for generated GeoJSON layers
    pub output_dir: PathBuf,

    /// How to treat rows with an unsupported geography type
    pub unknown_geometry: UnknownGeometryPolicy,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            csv_path: PathBuf::from(EVENTS_CSV_FILENAME),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            unknown_geometry: UnknownGeometryPolicy::default(),
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub processing: ProcessingConfig,
}

impl Config {
    /// Load configuration from an optional YAML file, falling back to the
    /// default config path and then to built-in defaults.
    pub fn load(config_file: Option<&Path>) -> Result<Self> {
        let candidate = match config_file {
            Some(path) => {
                if !path.exists() {
                    return Err(DriveBcError::configuration(format!(
                        "Config file does not exist: {}",
                        path.display()
                    )));
                }
                Some(path.to_path_buf())
            }
            None => Self::default_config_path().filter(|path| path.exists()),
        };

        match candidate {
            Some(path) => {
                debug!("Loading configuration from {}", path.display());
                let contents = std::fs::read_to_string(&path)?;
                let config: Config = serde_yaml::from_str(&contents).map_err(|e| {
                    DriveBcError::configuration(format!(
                        "Failed to parse config file '{}': {}",
                        path.display(),
                        e
                    ))
                })?;
                Ok(config)
            }
            None => {
                debug!("No config file found, using defaults");
                Ok(Config::default())
            }
        }
    }

    /// Default config file location: `<config dir>/drivebc-processor/config.yaml`
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("drivebc-processor").join("config.yaml"))
    }

    /// Validate settings for consistency
    pub fn validate(&self) -> Result<()> {
        if self.api.base_url.is_empty() {
            return Err(DriveBcError::configuration("API base URL cannot be empty"));
        }

        if self.api.record_limit == 0 {
            return Err(DriveBcError::configuration(
                "Record limit must be greater than 0",
            ));
        }

        if self.api.record_limit > MAX_RECORD_LIMIT {
            return Err(DriveBcError::configuration(format!(
                "Record limit cannot exceed {} (API per-request cap)",
                MAX_RECORD_LIMIT
            )));
        }

        if self.api.timeout_secs == 0 {
            return Err(DriveBcError::configuration(
                "HTTP timeout must be greater than 0 seconds",
            ));
        }

        Ok(())
    }
}
