use crate::error::{FarmgridError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Default API base; matches the endpoint the original tool hard-coded.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Default dataset file name.
pub const DEFAULT_DATASET_PATH: &str = "datatest.json";

/// Configuration source for tracking where values come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigSource {
    /// Default value
    Default,
    /// Loaded from config file
    File,
    /// Loaded from environment variable
    Environment,
    /// Provided via CLI argument
    Cli,
}

impl ConfigSource {
    /// Returns the precedence level (higher = higher priority)
    pub fn precedence(&self) -> u8 {
        match self {
            ConfigSource::Default => 0,
            ConfigSource::File => 1,
            ConfigSource::Environment => 2,
            ConfigSource::Cli => 3,
        }
    }
}

/// A configuration value with its source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigValue<T> {
    pub value: T,
    pub source: ConfigSource,
}

impl<T> ConfigValue<T> {
    pub fn new(value: T, source: ConfigSource) -> Self {
        Self { value, source }
    }

    /// Update the value if the new source has higher precedence
    pub fn update(&mut self, value: T, source: ConfigSource) {
        if source.precedence() > self.source.precedence() {
            self.value = value;
            self.source = source;
        }
    }
}

/// Layered uploader configuration
///
/// Precedence: CLI arguments > environment variables > config file >
/// defaults. The defaults reproduce the constants the original tool
/// hard-coded, so an unconfigured run behaves identically.
#[derive(Debug, Clone)]
pub struct LayeredConfig {
    pub base_url: ConfigValue<String>,
    pub timeout_secs: ConfigValue<u64>,
    pub dataset_path: ConfigValue<PathBuf>,
}

impl LayeredConfig {
    /// Create a new configuration with default values
    pub fn with_defaults() -> Self {
        Self {
            base_url: ConfigValue::new(DEFAULT_BASE_URL.to_string(), ConfigSource::Default),
            timeout_secs: ConfigValue::new(DEFAULT_TIMEOUT_SECS, ConfigSource::Default),
            dataset_path: ConfigValue::new(
                PathBuf::from(DEFAULT_DATASET_PATH),
                ConfigSource::Default,
            ),
        }
    }

    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| FarmgridError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to read config file: {}", e),
            })?;

        let file_config: FileConfig =
            toml::from_str(&content).map_err(|e| FarmgridError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to parse TOML: {}", e),
            })?;

        if let Some(base_url) = file_config.base_url {
            self.base_url.update(base_url, ConfigSource::File);
        }

        if let Some(timeout_secs) = file_config.timeout_secs {
            self.timeout_secs.update(timeout_secs, ConfigSource::File);
        }

        if let Some(dataset_path) = file_config.dataset_path {
            self.dataset_path.update(dataset_path, ConfigSource::File);
        }

        Ok(self)
    }

    /// Load configuration from environment variables
    pub fn load_from_env(mut self) -> Self {
        // FARMGRID_BASE_URL
        if let Ok(base_url) = env::var("FARMGRID_BASE_URL") {
            self.base_url.update(base_url, ConfigSource::Environment);
        }

        // FARMGRID_TIMEOUT_SECS
        if let Ok(timeout_str) = env::var("FARMGRID_TIMEOUT_SECS") {
            match timeout_str.parse::<u64>() {
                Ok(timeout_secs) => {
                    self.timeout_secs.update(timeout_secs, ConfigSource::Environment)
                }
                Err(_) => tracing::warn!(
                    "Invalid FARMGRID_TIMEOUT_SECS value '{}': expected integer seconds",
                    timeout_str
                ),
            }
        }

        // FARMGRID_DATASET
        if let Ok(dataset_path) = env::var("FARMGRID_DATASET") {
            self.dataset_path.update(PathBuf::from(dataset_path), ConfigSource::Environment);
        }

        self
    }

    /// Update configuration from CLI arguments
    pub fn update_from_cli(&mut self, overrides: CliConfigOverrides) {
        if let Some(base_url) = overrides.base_url {
            self.base_url.update(base_url, ConfigSource::Cli);
        }

        if let Some(timeout_secs) = overrides.timeout_secs {
            self.timeout_secs.update(timeout_secs, ConfigSource::Cli);
        }

        if let Some(dataset_path) = overrides.dataset_path {
            self.dataset_path.update(dataset_path, ConfigSource::Cli);
        }
    }

    /// Get all configuration values as a map for inspection
    pub fn to_inspection_map(&self) -> HashMap<String, (String, ConfigSource)> {
        let mut map = HashMap::new();

        map.insert(
            "base_url".to_string(),
            (self.base_url.value.clone(), self.base_url.source),
        );

        map.insert(
            "timeout_secs".to_string(),
            (format!("{}s", self.timeout_secs.value), self.timeout_secs.source),
        );

        map.insert(
            "dataset_path".to_string(),
            (self.dataset_path.value.display().to_string(), self.dataset_path.source),
        );

        map
    }
}

/// Configuration loaded from TOML file
#[derive(Debug, Deserialize, Serialize)]
struct FileConfig {
    base_url: Option<String>,
    timeout_secs: Option<u64>,
    dataset_path: Option<PathBuf>,
}

/// CLI configuration overrides
#[derive(Debug, Default)]
pub struct CliConfigOverrides {
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub dataset_path: Option<PathBuf>,
}
