//! Command execution logic.
//!
//! Each function here runs one analyzer against the loaded [`App`] and
//! hands the resulting report to the output module.

use anyhow::Result;

use crate::app::App;
use crate::commands::init;
use crate::output::{self, OutputMode};

/// Execute the init command.
pub fn execute_init(mode: OutputMode) -> Result<()> {
    let current_dir = std::env::current_dir()?;
    let result = init::init(&current_dir)?;

    match mode {
        OutputMode::Json => output::print_json(&serde_json::json!({
            "config_file": result.config_file.display().to_string(),
        }))?,
        OutputMode::Text => {
            output::print_message(&format!("Wrote {}", result.config_file.display()))?;
            output::print_message("Point the dataset paths at your CSV files, then run `fathom summary`.")?;
        }
    }

    Ok(())
}

/// Execute the summary command.
pub fn execute_summary(app: &App, mode: OutputMode) -> Result<()> {
    let report = app.network().summary();
    output::print_summary(&report, mode)?;
    Ok(())
}

/// Execute the clusters command.
pub fn execute_clusters(app: &App, first: &str, second: &str, mode: OutputMode) -> Result<()> {
    let report = app.network().clusters(first, second)?;
    output::print_clusters(&report, mode)?;
    Ok(())
}

/// Execute the hubs command.
pub fn execute_hubs(app: &App, limit: Option<usize>, mode: OutputMode) -> Result<()> {
    let limit = limit.unwrap_or_else(|| app.max_results());
    let report = app.network().hubs(limit);
    output::print_hubs(&report, mode)?;
    Ok(())
}

/// Execute the route command.
pub fn execute_route(app: &App, origin: &str, destination: &str, mode: OutputMode) -> Result<()> {
    let report = app.network().route(origin, destination)?;
    output::print_route(&report, mode)?;
    Ok(())
}

/// Execute the expansion command.
pub fn execute_expansion(app: &App, mode: OutputMode) -> Result<()> {
    let report = app.network().expansion(app.max_results())?;
    output::print_expansion(&report, mode)?;
    Ok(())
}

/// Execute the impact command.
pub fn execute_impact(app: &App, name: &str, mode: OutputMode) -> Result<()> {
    let report = app.network().impact(name)?;
    output::print_impact(&report, mode)?;
    Ok(())
}
