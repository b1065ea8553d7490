//! Application context for CLI command execution.
//!
//! The [`App`] owns a fully built [`Network`] plus the configuration it was
//! built from. Commands borrow it, run an analyzer, and hand the report to
//! the output module.

use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use pontus::TableBackend;
use tracing::debug;

use crate::config::{CONFIG_FILE_NAME, FathomConfig};
use crate::dataset::Dataset;
use crate::network::Network;

/// Application context for CLI operations.
///
/// Resolves configuration, loads the dataset and builds the network once;
/// every subcommand then runs against the same in-memory graph.
pub struct App {
    config: FathomConfig,
    network: Network,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("config", &self.config)
            .field("network", &"<Network>")
            .finish()
    }
}

impl App {
    /// Build an `App` from configuration and the dataset it points at.
    ///
    /// Configuration comes from `config_path` when given, otherwise from
    /// `./fathom.yaml` when present, otherwise from built-in defaults.
    /// A `backend_override` takes precedence over the configured backend.
    ///
    /// # Errors
    ///
    /// Returns an error when the configuration cannot be loaded or fails
    /// validation, when a dataset file cannot be read, or when the network
    /// cannot be built.
    pub fn load(
        config_path: Option<&Path>,
        backend_override: Option<TableBackend>,
    ) -> Result<Self> {
        let config = resolve_config(config_path)?;

        let backend = match backend_override {
            Some(backend) => backend,
            None => config
                .engine
                .table_backend()
                .context("invalid engine.backend in configuration")?,
        };

        let dataset = Dataset::load(&config.dataset).context("loading dataset")?;
        let network = Network::build(&dataset, backend, config.engine.initial_capacity)
            .context("building the cable network")?;

        Ok(Self { config, network })
    }

    /// The loaded network.
    #[must_use]
    pub fn network(&self) -> &Network {
        &self.network
    }

    /// The configuration the network was built from.
    #[must_use]
    pub fn config(&self) -> &FathomConfig {
        &self.config
    }

    /// Default result cap for listing commands.
    #[must_use]
    pub fn max_results(&self) -> usize {
        self.config.engine.max_results
    }
}

fn resolve_config(config_path: Option<&Path>) -> Result<FathomConfig> {
    match config_path {
        Some(path) => FathomConfig::load(path)
            .with_context(|| format!("loading configuration from {}", path.display())),
        None => {
            let default_path = PathBuf::from(CONFIG_FILE_NAME);
            if default_path.exists() {
                debug!(path = %default_path.display(), "using configuration file");
                FathomConfig::load(&default_path).with_context(|| {
                    format!("loading configuration from {}", default_path.display())
                })
            } else {
                debug!("no configuration file found, using built-in defaults");
                Ok(FathomConfig::default())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_dataset(dir: &TempDir) -> (PathBuf, PathBuf, PathBuf) {
        let countries = dir.path().join("countries.csv");
        fs::write(
            &countries,
            "country_name,capital_name,latitude,longitude,code,continent,population,internet_users\n\
             Chile,Santiago,-33.45,-70.66,CL,South America,18000000,15000000\n\
             Peru,Lima,-12.05,-77.05,PE,South America,31000000,17000000\n",
        )
        .unwrap();

        let landings = dir.path().join("landing_points.csv");
        fs::write(
            &landings,
            "landing_id,id,location,latitude,longitude\n\
             1,10,\"Valparaiso, Chile\",-33.02,-71.64\n\
             2,20,\"Lima, Peru\",-12.05,-77.05\n",
        )
        .unwrap();

        let connections = dir.path().join("connections.csv");
        fs::write(
            &connections,
            "origin,destination,cable_id\n1,2,pan-am\n",
        )
        .unwrap();

        (countries, landings, connections)
    }

    fn write_config(dir: &TempDir, backend: &str) -> PathBuf {
        let (countries, landings, connections) = write_dataset(dir);
        let config_path = dir.path().join("fathom.yaml");
        fs::write(
            &config_path,
            format!(
                "dataset:\n  countries: {}\n  landing-points: {}\n  connections: {}\nengine:\n  backend: {backend}\n  initial-capacity: 2\n  max-results: 10\n",
                countries.display(),
                landings.display(),
                connections.display()
            ),
        )
        .unwrap();
        config_path
    }

    #[test]
    fn load_builds_the_network_from_an_explicit_config() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, "probing");

        let app = App::load(Some(&config_path), None).unwrap();

        assert_eq!(app.network().graph().vertex_count(), 4);
        assert_eq!(app.max_results(), 10);
    }

    #[test]
    fn backend_override_takes_precedence() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, "probing");

        let app = App::load(Some(&config_path), Some(TableBackend::Chaining)).unwrap();

        assert_eq!(app.network().graph().vertex_count(), 4);
    }

    #[test]
    fn load_reports_a_missing_config_file() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.yaml");

        let error = App::load(Some(&missing), None).unwrap_err();

        assert!(error.to_string().contains("nope.yaml"));
    }

    #[test]
    fn load_rejects_a_bad_backend_name() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, "cuckoo");

        assert!(App::load(Some(&config_path), None).is_err());
    }
}
