//! Implementation of the `init` command.
//!
//! Writes a starter `fathom.yaml` into the working directory so the dataset
//! paths and engine settings have a visible, editable home.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::config::{CONFIG_FILE_NAME, FathomConfig};
use crate::error::{Error, Result};

/// Result of the init command.
#[derive(Debug)]
pub struct InitResult {
    /// Path to the created configuration file.
    pub config_file: PathBuf,
    /// The configuration that was written.
    pub config: FathomConfig,
}

/// Write a default `fathom.yaml` into the given directory.
///
/// # Errors
///
/// Returns [`Error::ConfigExists`] when the directory already has a
/// `fathom.yaml`, or an error when the file cannot be written.
pub fn init(base_dir: &Path) -> Result<InitResult> {
    let config_file = base_dir.join(CONFIG_FILE_NAME);

    if config_file.exists() {
        return Err(Error::ConfigExists(config_file));
    }

    let config = FathomConfig::default();
    config.save(&config_file)?;
    info!(path = %config_file.display(), "wrote default configuration");

    Ok(InitResult {
        config_file,
        config,
    })
}
