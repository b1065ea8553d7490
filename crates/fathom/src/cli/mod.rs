//! CLI argument parsing and command dispatch.
//!
//! This module provides the command-line interface for fathom using clap's
//! derive API.
//!
//! # Commands
//!
//! - `init`: Write a default configuration file
//! - `summary`: Show dataset and graph totals
//! - `clusters`: Check whether two landing points share a cable cluster
//! - `hubs`: List landing points hosting more than one cable
//! - `route`: Find the shortest cable route between two countries
//! - `expansion`: Plan a minimum-length expansion backbone
//! - `impact`: List countries affected by the loss of a landing point
//!
//! # Global Flags
//!
//! - `-v/--verbose`: Increase log verbosity (repeatable)
//! - `--config`: Path to `fathom.yaml`
//! - `--format text|json`: Output format (applies to all commands)
//! - `--backend probing|chaining`: Override the configured table backend
//!
//! # Example
//!
//! ```bash
//! fathom init
//! fathom summary
//! fathom clusters valparaiso suva
//! fathom route chile peru --format json
//! ```

mod execute;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use pontus::TableBackend;

use crate::app::App;
use crate::output::OutputMode;

/// Fathom - submarine cable network analysis
///
/// Loads country, landing point and cable connection datasets into a graph
/// and answers connectivity, routing and resilience questions about it.
#[derive(Parser, Debug)]
#[command(name = "fathom")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbose output (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to the configuration file (defaults to ./fathom.yaml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, global = true, default_value = "text")]
    pub format: FormatArg,

    /// Override the configured symbol-table backend
    #[arg(short, long, global = true, value_parser = parse_backend)]
    pub backend: Option<TableBackend>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Write a default configuration file
    ///
    /// Creates `fathom.yaml` in the current directory with the default
    /// dataset paths and engine settings. Refuses to overwrite.
    Init,

    /// Show dataset and graph totals
    ///
    /// Reports vertex, edge record and country counts along with the first
    /// landing point and the last country loaded.
    Summary,

    /// Check whether two landing points share a cable cluster
    ///
    /// Labels the connected components of the network and reports which
    /// cluster each landing point belongs to.
    Clusters {
        /// First landing point name (case-insensitive)
        landing_a: String,

        /// Second landing point name (case-insensitive)
        landing_b: String,
    },

    /// List landing points hosting more than one cable
    Hubs {
        /// Maximum number of hubs to display (defaults to engine.max-results)
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Find the shortest cable route between two countries
    ///
    /// Runs a shortest-path search from the origin capital to the
    /// destination capital and prints the hops with their distances.
    Route {
        /// Origin country name
        origin: String,

        /// Destination country name
        destination: String,
    },

    /// Plan a minimum-length expansion backbone
    ///
    /// Builds a minimum spanning tree seeded at the busiest landing point
    /// and reports its reach, total length and longest branch.
    Expansion,

    /// List countries affected by the loss of a landing point
    Impact {
        /// Landing point name (case-insensitive)
        name: String,
    },
}

/// Output format for CLI arguments
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatArg {
    /// Human-readable text
    Text,
    /// Pretty-printed JSON
    Json,
}

impl From<FormatArg> for OutputMode {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Text => OutputMode::Text,
            FormatArg::Json => OutputMode::Json,
        }
    }
}

fn parse_backend(value: &str) -> std::result::Result<TableBackend, String> {
    value.parse()
}

impl Cli {
    /// Parse CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        <Self as Parser>::parse()
    }

    /// Parse CLI arguments from an iterator (for testing).
    ///
    /// # Errors
    ///
    /// Returns a `clap::Error` when the arguments do not parse.
    pub fn try_parse_from<I, T>(iter: I) -> std::result::Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(iter)
    }

    /// Execute the parsed command.
    ///
    /// # Errors
    ///
    /// Returns an error when loading the network fails or when the command
    /// itself fails.
    pub fn execute(&self) -> Result<()> {
        let mode = OutputMode::from(self.format);

        match &self.command {
            Commands::Init => execute::execute_init(mode),
            Commands::Summary => {
                let app = self.load_app()?;
                execute::execute_summary(&app, mode)
            }
            Commands::Clusters {
                landing_a,
                landing_b,
            } => {
                let app = self.load_app()?;
                execute::execute_clusters(&app, landing_a, landing_b, mode)
            }
            Commands::Hubs { limit } => {
                let app = self.load_app()?;
                execute::execute_hubs(&app, *limit, mode)
            }
            Commands::Route {
                origin,
                destination,
            } => {
                let app = self.load_app()?;
                execute::execute_route(&app, origin, destination, mode)
            }
            Commands::Expansion => {
                let app = self.load_app()?;
                execute::execute_expansion(&app, mode)
            }
            Commands::Impact { name } => {
                let app = self.load_app()?;
                execute::execute_impact(&app, name, mode)
            }
        }
    }

    fn load_app(&self) -> Result<App> {
        App::load(self.config.as_deref(), self.backend)
    }
}
