//! CSV dataset loading.
//!
//! Reads the three input files into plain record vectors. Parsing stops at
//! the first malformed record and reports its file and 1-based position.

use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::DatasetPaths;
use crate::error::{Error, Result};
use crate::records::{Connection, Country, Landing};

/// The three record collections, in file order.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    /// Countries with capital coordinates.
    pub countries: Vec<Country>,

    /// Cable landing points.
    pub landings: Vec<Landing>,

    /// Cable connections between landing points.
    pub connections: Vec<Connection>,
}

impl Dataset {
    /// Load all three files named by `paths`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DatasetOpen`] when a file cannot be opened and
    /// [`Error::DatasetRecord`] when a record fails to parse.
    pub fn load(paths: &DatasetPaths) -> Result<Self> {
        let countries = read_records(&paths.countries)?;
        let landings = read_records(&paths.landing_points)?;
        let connections = read_records(&paths.connections)?;

        debug!(
            countries = countries.len(),
            landings = landings.len(),
            connections = connections.len(),
            "dataset loaded"
        );

        Ok(Self {
            countries,
            landings,
            connections,
        })
    }
}

/// Read every record of one headered CSV file.
fn read_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|source| Error::DatasetOpen {
            path: path.to_path_buf(),
            source,
        })?;

    let mut records = Vec::new();
    for (index, record) in reader.deserialize().enumerate() {
        let record = record.map_err(|source| Error::DatasetRecord {
            path: path.to_path_buf(),
            record: index as u64 + 1,
            source,
        })?;
        records.push(record);
    }

    debug!(path = %path.display(), records = records.len(), "file read");
    Ok(records)
}
