//! Configuration file handling.
//!
//! Settings live in a `fathom.yaml` next to the data, with kebab-case
//! keys. Missing engine values fall back to defaults so a minimal file
//! only has to name the three dataset paths.

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use pontus::TableBackend;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

/// Configuration file name looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "fathom.yaml";

const DEFAULT_BACKEND: &str = "probing";
const DEFAULT_INITIAL_CAPACITY: usize = 2;
const DEFAULT_MAX_RESULTS: usize = 10;

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct FathomConfig {
    /// Paths of the three CSV input files.
    pub dataset: DatasetPaths,

    /// Engine tuning knobs.
    #[serde(default)]
    pub engine: EngineConfig,
}

/// Paths of the three CSV input files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct DatasetPaths {
    /// Countries file with capital coordinates and statistics.
    pub countries: PathBuf,

    /// Landing points file.
    pub landing_points: PathBuf,

    /// Cable connections file.
    pub connections: PathBuf,
}

/// Engine tuning knobs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct EngineConfig {
    /// Symbol table backend, `chaining` or `probing`.
    #[serde(default = "default_backend")]
    pub backend: String,

    /// Initial capacity for engine tables.
    #[serde(default = "default_initial_capacity")]
    pub initial_capacity: usize,

    /// Cap on ranked listing length.
    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

fn default_backend() -> String {
    DEFAULT_BACKEND.to_string()
}

const fn default_initial_capacity() -> usize {
    DEFAULT_INITIAL_CAPACITY
}

const fn default_max_results() -> usize {
    DEFAULT_MAX_RESULTS
}

impl Default for DatasetPaths {
    fn default() -> Self {
        Self {
            countries: PathBuf::from("data/countries.csv"),
            landing_points: PathBuf::from("data/landing_points.csv"),
            connections: PathBuf::from("data/connections.csv"),
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            initial_capacity: default_initial_capacity(),
            max_results: default_max_results(),
        }
    }
}

impl Default for FathomConfig {
    fn default() -> Self {
        Self {
            dataset: DatasetPaths::default(),
            engine: EngineConfig::default(),
        }
    }
}

impl FathomConfig {
    /// Load and validate a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] when the file cannot be read, [`Error::Yaml`]
    /// when it does not parse, and [`Error::Config`] when a value fails
    /// validation.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&raw)?;
        config.validate()?;
        debug!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    /// Write the configuration to `path` as YAML.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] when the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<()> {
        let raw = serde_yaml::to_string(self)?;
        fs::write(path, raw)?;
        Ok(())
    }

    /// Check every value against its allowed range.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] naming the offending key.
    pub fn validate(&self) -> Result<()> {
        if self.engine.initial_capacity == 0 {
            return Err(Error::Config(
                "engine.initial-capacity must be at least 1".to_string(),
            ));
        }
        if self.engine.max_results == 0 {
            return Err(Error::Config(
                "engine.max-results must be at least 1".to_string(),
            ));
        }
        self.engine.table_backend()?;
        Ok(())
    }
}

impl EngineConfig {
    /// Parse the configured backend name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when the name is not a known backend.
    pub fn table_backend(&self) -> Result<TableBackend> {
        TableBackend::from_str(&self.backend).map_err(Error::Config)
    }
}
