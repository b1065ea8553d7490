//! Error types for fathom operations.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// The error type for fathom operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Configuration value failed validation.
    #[error("configuration error: {0}")]
    Config(String),

    /// Configuration file already exists and would be overwritten.
    #[error("configuration file already exists: {}", .0.display())]
    ConfigExists(PathBuf),

    /// Configuration file could not be parsed.
    #[error("invalid configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A dataset file could not be opened or read.
    #[error("cannot read dataset {}: {source}", path.display())]
    DatasetOpen {
        /// Path of the dataset file.
        path: PathBuf,
        /// Underlying reader error.
        source: csv::Error,
    },

    /// A dataset record failed to deserialize.
    #[error("{}: record {record}: {source}", path.display())]
    DatasetRecord {
        /// Path of the dataset file.
        path: PathBuf,
        /// 1-based record number, not counting the header row.
        record: u64,
        /// Underlying deserialization error.
        source: csv::Error,
    },

    /// Engine failure from the underlying data structures.
    #[error(transparent)]
    Engine(#[from] pontus::Error),
}

/// A specialized Result type for fathom operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dataset_record_error_names_file_and_record() {
        let inner = csv::Error::from(io::Error::new(io::ErrorKind::InvalidData, "bad field"));
        let error = Error::DatasetRecord {
            path: PathBuf::from("data/countries.csv"),
            record: 7,
            source: inner,
        };

        let message = error.to_string();
        assert!(message.contains("data/countries.csv"));
        assert!(message.contains("record 7"));
    }

    #[test]
    fn engine_errors_pass_through_unchanged() {
        let error = Error::from(pontus::Error::position(4, 2));
        assert_eq!(error.to_string(), pontus::Error::position(4, 2).to_string());
    }

    #[test]
    fn config_exists_shows_the_path() {
        let error = Error::ConfigExists(PathBuf::from("fathom.yaml"));
        assert!(error.to_string().contains("fathom.yaml"));
    }
}
