//! Output formatting for CLI commands.
//!
//! Every report renders in two modes: human-readable text built from the
//! styling helpers in [`color`], and pretty-printed JSON straight off the
//! report's `Serialize` implementation.

pub mod color;

use std::env;
use std::io::{self, Write};

use serde::Serialize;

use crate::analysis::{
    ClustersReport, ExpansionReport, HubsReport, ImpactReport, RouteReport, SummaryReport,
};

pub use color::{error, info, success, warning};

use color::{arrow, bold, colorize_id, dimmed, verdict_icon};

const DEFAULT_TERMINAL_WIDTH: u16 = 80;
const DEFAULT_MAX_CONTENT_WIDTH: usize = 80;

/// Configuration for output formatting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    /// Maximum content width for text wrapping.
    pub max_width: usize,
    /// Whether to use ASCII-only connectors instead of Unicode.
    pub use_ascii: bool,
    /// Whether to use colors in output.
    pub use_colors: bool,
}

impl OutputConfig {
    /// Create a new `OutputConfig` with explicit values.
    #[must_use]
    pub fn new(max_width: usize, use_ascii: bool, use_colors: bool) -> Self {
        Self {
            max_width,
            use_ascii,
            use_colors,
        }
    }

    /// Create an `OutputConfig` by reading from environment variables.
    ///
    /// Reads:
    /// - `FATHOM_MAX_WIDTH`: Maximum content width (default: 80)
    /// - `FATHOM_ASCII`: Set to "1" or "true" for ASCII-only connectors
    /// - `NO_COLOR`: Standard env var to disable colors (any value disables)
    /// - `FATHOM_COLOR`: Set to "0" or "false" to disable colors
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup<F>(var: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let max_width = match var("FATHOM_MAX_WIDTH") {
            Some(s) if !s.is_empty() => match s.parse() {
                Ok(width) => width,
                Err(_) => {
                    tracing::warn!(
                        env_var = "FATHOM_MAX_WIDTH",
                        value = %s,
                        default = DEFAULT_MAX_CONTENT_WIDTH,
                        "invalid value, using default"
                    );
                    DEFAULT_MAX_CONTENT_WIDTH
                }
            },
            _ => DEFAULT_MAX_CONTENT_WIDTH,
        };

        let use_ascii = match var("FATHOM_ASCII") {
            Some(v) if v == "1" || v.eq_ignore_ascii_case("true") => true,
            Some(v) if v == "0" || v.eq_ignore_ascii_case("false") || v.is_empty() => false,
            Some(v) => {
                tracing::warn!(
                    env_var = "FATHOM_ASCII",
                    value = %v,
                    "invalid value (expected '1', 'true', '0', or 'false'), using default"
                );
                false
            }
            None => false,
        };

        // Respect the NO_COLOR standard (https://no-color.org/); FATHOM_COLOR
        // gives explicit control.
        let use_colors = var("NO_COLOR").is_none()
            && var("FATHOM_COLOR").map_or(true, |v| v != "0" && !v.eq_ignore_ascii_case("false"));

        Self {
            max_width,
            use_ascii,
            use_colors,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            max_width: DEFAULT_MAX_CONTENT_WIDTH,
            use_ascii: false,
            use_colors: true,
        }
    }
}

/// Get the current terminal width, falling back to default if detection fails.
fn get_terminal_width() -> usize {
    terminal_size::terminal_size()
        .map(|(w, _)| w.0 as usize)
        .unwrap_or(DEFAULT_TERMINAL_WIDTH as usize)
}

/// Output format mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable text format.
    Text,
    /// JSON format for programmatic use.
    Json,
}

// ============================================================================
// Public Dispatch Functions
// ============================================================================

/// Print a dataset and graph summary in the specified format.
///
/// # Errors
///
/// Returns an error when writing to stdout fails.
pub fn print_summary(report: &SummaryReport, mode: OutputMode) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let config = OutputConfig::from_env();

    match mode {
        OutputMode::Text => print_summary_text(&mut handle, report, &config),
        OutputMode::Json => write_json(&mut handle, report),
    }
}

/// Print a cluster report in the specified format.
///
/// # Errors
///
/// Returns an error when writing to stdout fails.
pub fn print_clusters(report: &ClustersReport, mode: OutputMode) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let config = OutputConfig::from_env();

    match mode {
        OutputMode::Text => print_clusters_text(&mut handle, report, &config),
        OutputMode::Json => write_json(&mut handle, report),
    }
}

/// Print a hubs report in the specified format.
///
/// # Errors
///
/// Returns an error when writing to stdout fails.
pub fn print_hubs(report: &HubsReport, mode: OutputMode) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let config = OutputConfig::from_env();

    match mode {
        OutputMode::Text => print_hubs_text(&mut handle, report, &config),
        OutputMode::Json => write_json(&mut handle, report),
    }
}

/// Print a route report in the specified format.
///
/// # Errors
///
/// Returns an error when writing to stdout fails.
pub fn print_route(report: &RouteReport, mode: OutputMode) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let config = OutputConfig::from_env();

    match mode {
        OutputMode::Text => print_route_text(&mut handle, report, &config),
        OutputMode::Json => write_json(&mut handle, report),
    }
}

/// Print an expansion report in the specified format.
///
/// # Errors
///
/// Returns an error when writing to stdout fails.
pub fn print_expansion(report: &ExpansionReport, mode: OutputMode) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let config = OutputConfig::from_env();

    match mode {
        OutputMode::Text => print_expansion_text(&mut handle, report, &config),
        OutputMode::Json => write_json(&mut handle, report),
    }
}

/// Print an impact report in the specified format.
///
/// # Errors
///
/// Returns an error when writing to stdout fails.
pub fn print_impact(report: &ImpactReport, mode: OutputMode) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let config = OutputConfig::from_env();

    match mode {
        OutputMode::Text => print_impact_text(&mut handle, report, &config),
        OutputMode::Json => write_json(&mut handle, report),
    }
}

/// Print a simple message.
///
/// # Errors
///
/// Returns an error when writing to stdout fails.
pub fn print_message(msg: &str) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    writeln!(handle, "{msg}")
}

/// Print a JSON-formatted result for any serializable value.
///
/// # Errors
///
/// Returns an error when serialization or writing to stdout fails.
pub fn print_json<T: Serialize>(value: &T) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_json(&mut handle, value)
}

fn write_json<W: Write, T: Serialize>(w: &mut W, value: &T) -> io::Result<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    writeln!(w, "{json}")
}

// ============================================================================
// Text Formatting
// ============================================================================

fn print_summary_text<W: Write>(
    w: &mut W,
    report: &SummaryReport,
    config: &OutputConfig,
) -> io::Result<()> {
    writeln!(w, "{}", bold("Network summary", config))?;
    writeln!(w, "  {} {}", dimmed("Vertices:", config), report.vertices)?;
    writeln!(
        w,
        "  {} {}",
        dimmed("Edge records:", config),
        report.edge_records
    )?;
    writeln!(w, "  {} {}", dimmed("Countries:", config), report.countries)?;

    if let Some(ref landing) = report.first_landing {
        writeln!(w)?;
        writeln!(w, "{}", bold("First landing point", config))?;
        writeln!(
            w,
            "  {} {} ({:.2}, {:.2})",
            colorize_id(&format!("[{}]", landing.landing_id), config),
            landing.name,
            landing.latitude,
            landing.longitude
        )?;
    }

    if let Some(ref country) = report.last_country {
        writeln!(w)?;
        writeln!(w, "{}", bold("Last country", config))?;
        writeln!(w, "  {}, capital {}", country.name, country.capital)?;
        writeln!(
            w,
            "  {} {}    {} {}",
            dimmed("Population:", config),
            country.population,
            dimmed("Internet users:", config),
            country.internet_users
        )?;
    }

    Ok(())
}

fn print_clusters_text<W: Write>(
    w: &mut W,
    report: &ClustersReport,
    config: &OutputConfig,
) -> io::Result<()> {
    writeln!(w, "{} {}", dimmed("Clusters:", config), report.cluster_count)?;

    for membership in [&report.first, &report.second] {
        match (&membership.landing_id, membership.cluster) {
            (Some(id), Some(cluster)) => writeln!(
                w,
                "  {}: landing {}, cluster {cluster}",
                membership.query,
                colorize_id(id, config)
            )?,
            (Some(id), None) => writeln!(
                w,
                "  {}: landing {} has no cable connections",
                membership.query,
                colorize_id(id, config)
            )?,
            (None, _) => writeln!(w, "  {}: unknown landing point", membership.query)?,
        }
    }

    match report.same_cluster {
        Some(true) => writeln!(
            w,
            "{} {} and {} are connected",
            verdict_icon(true, config),
            report.first.query,
            report.second.query
        ),
        Some(false) => writeln!(
            w,
            "{} {} and {} are in different clusters",
            verdict_icon(false, config),
            report.first.query,
            report.second.query
        ),
        None => writeln!(w, "No verdict: a landing point could not be placed."),
    }
}

fn print_hubs_text<W: Write>(
    w: &mut W,
    report: &HubsReport,
    config: &OutputConfig,
) -> io::Result<()> {
    if report.hubs.is_empty() {
        writeln!(w, "No multi-cable landing points found.")?;
        return Ok(());
    }

    writeln!(w, "Found {} multi-cable landing point(s):", report.hubs.len())?;
    writeln!(w)?;

    for hub in &report.hubs {
        writeln!(
            w,
            "  {} {}, {}: {} cables, {} connections",
            colorize_id(&format!("[{}]", hub.landing_id), config),
            hub.name,
            hub.country,
            hub.vertex_count,
            hub.connection_count
        )?;
    }

    Ok(())
}

fn print_route_text<W: Write>(
    w: &mut W,
    report: &RouteReport,
    config: &OutputConfig,
) -> io::Result<()> {
    if !report.found {
        writeln!(
            w,
            "No route found from {} to {}.",
            report.origin, report.destination
        )?;
        return Ok(());
    }

    writeln!(
        w,
        "{}",
        bold(
            &format!("Route from {} to {}", report.origin, report.destination),
            config
        )
    )?;
    writeln!(w)?;

    for hop in &report.hops {
        writeln!(
            w,
            "  {} {} {}  {}",
            hop.from,
            arrow(config),
            hop.to,
            dimmed(&format!("{:.1} km", hop.km), config)
        )?;
    }

    writeln!(w)?;
    writeln!(
        w,
        "{} {:.1} km over {} hop(s)",
        dimmed("Total:", config),
        report.total_km,
        report.hops.len()
    )
}

fn print_expansion_text<W: Write>(
    w: &mut W,
    report: &ExpansionReport,
    config: &OutputConfig,
) -> io::Result<()> {
    let Some(ref seed) = report.seed else {
        writeln!(w, "The network has no landing vertices to span.")?;
        return Ok(());
    };

    writeln!(
        w,
        "{}",
        bold(&format!("Expansion backbone from {seed}"), config)
    )?;
    writeln!(
        w,
        "  {} {}",
        dimmed("Connected vertices:", config),
        report.connected_vertices
    )?;
    writeln!(
        w,
        "  {} {:.1} km",
        dimmed("Total length:", config),
        report.total_km
    )?;

    if report.longest_branch.is_empty() {
        return Ok(());
    }

    writeln!(w)?;
    writeln!(
        w,
        "{}",
        bold(
            &format!("Longest branch ({} vertices)", report.branch_length),
            config
        )
    )?;

    let line = report.longest_branch.join(&format!(" {} ", arrow(config)));
    let content_width = get_terminal_width().min(config.max_width);
    for wrapped in wrap_text(&line, content_width.saturating_sub(2)) {
        writeln!(w, "  {wrapped}")?;
    }

    if report.longest_branch.len() < report.branch_length {
        writeln!(
            w,
            "  {}",
            dimmed(
                &format!(
                    "(first {} of {})",
                    report.longest_branch.len(),
                    report.branch_length
                ),
                config
            )
        )?;
    }

    Ok(())
}

fn print_impact_text<W: Write>(
    w: &mut W,
    report: &ImpactReport,
    config: &OutputConfig,
) -> io::Result<()> {
    let Some(ref landing_id) = report.landing_id else {
        writeln!(w, "Unknown landing point: {}", report.query)?;
        return Ok(());
    };

    writeln!(
        w,
        "{}",
        bold(
            &format!(
                "Impact of {} (landing {}, {} vertices)",
                report.query, landing_id, report.affected_landing_vertices
            ),
            config
        )
    )?;
    writeln!(w)?;

    if report.affected.is_empty() {
        writeln!(w, "No affected countries.")?;
        return Ok(());
    }

    for country in &report.affected {
        writeln!(
            w,
            "  {}  {}",
            country.name,
            dimmed(&format!("{:.1} km", country.distance_km), config)
        )?;
    }

    writeln!(w)?;
    writeln!(
        w,
        "  {} {}",
        dimmed("Affected countries:", config),
        report.affected.len()
    )?;
    writeln!(
        w,
        "  {} {}",
        dimmed("Total population:", config),
        report.total_population
    )?;
    writeln!(
        w,
        "  {} {}",
        dimmed("Internet users:", config),
        report.total_internet_users
    )?;
    writeln!(
        w,
        "  {} {:.1} km",
        dimmed("Average distance:", config),
        report.average_distance_km
    )
}

/// Wrap text to fit within a given width, preserving existing line breaks.
/// Uses textwrap to handle edge cases like long words (ids, labels).
fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    text.lines()
        .flat_map(|line| {
            if line.trim().is_empty() {
                vec![String::new()]
            } else {
                textwrap::wrap(line, max_width)
                    .into_iter()
                    .map(|s| s.into_owned())
                    .collect()
            }
        })
        .collect()
}
