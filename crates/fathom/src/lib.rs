//! # Fathom: Submarine Cable Network Analysis
//!
//! Fathom loads country, landing point and cable connection datasets into a
//! weighted graph and answers connectivity, routing and resilience questions
//! about it: which landing points share a cable cluster, where the busiest
//! hubs are, the shortest route between two countries, a minimum-length
//! expansion backbone, and the blast radius of losing a landing point.
//!
//! The containers and graph algorithms live in [`pontus`]; this crate
//! supplies the domain records, the network builder, the analyzers and the
//! CLI around them.
//!
//! ## Quick Start
//!
//! ```no_run
//! use fathom::app::App;
//!
//! # fn main() -> anyhow::Result<()> {
//! let app = App::load(None, None)?;
//! let report = app.network().summary();
//! println!("{} vertices across {} countries", report.vertices, report.countries);
//! # Ok(())
//! # }
//! ```

// Domain and ingestion modules
pub mod config;
pub mod dataset;
pub mod error;
pub mod geo;
pub mod network;
pub mod records;

// Analysis and reporting
pub mod analysis;
pub mod output;

// CLI surface (needed by the binary)
pub mod app;
pub mod cli;
pub mod commands;

pub use error::{Error, Result};
pub use network::Network;
