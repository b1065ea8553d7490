//! Dataset and graph summary.

use serde::Serialize;

use crate::network::Network;

/// Headline counts plus the first landing and last country in load order.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryReport {
    /// Edge records held by the graph, two per undirected link.
    pub edge_records: usize,

    /// Graph vertices, capitals and landing vertices combined.
    pub vertices: usize,

    /// Registered countries.
    pub countries: usize,

    /// First landing record of the dataset, if any.
    pub first_landing: Option<LandingSummary>,

    /// Last registered country record, if any.
    pub last_country: Option<CountrySummary>,
}

/// Landing identity and position.
#[derive(Debug, Clone, Serialize)]
pub struct LandingSummary {
    /// Landing id.
    pub landing_id: String,

    /// Landing point name.
    pub name: String,

    /// Latitude in degrees.
    pub latitude: f64,

    /// Longitude in degrees.
    pub longitude: f64,
}

/// Country identity and connectivity statistics.
#[derive(Debug, Clone, Serialize)]
pub struct CountrySummary {
    /// Country name.
    pub name: String,

    /// Capital name.
    pub capital: String,

    /// Population count.
    pub population: u64,

    /// Internet user count.
    pub internet_users: u64,
}

impl Network {
    /// Summarize the built network.
    #[must_use]
    pub fn summary(&self) -> SummaryReport {
        SummaryReport {
            edge_records: self.graph().edge_count(),
            vertices: self.graph().vertex_count(),
            countries: self.country_count(),
            first_landing: self.first_landing().map(|landing| LandingSummary {
                landing_id: landing.landing_id.clone(),
                name: landing.name().to_string(),
                latitude: landing.latitude,
                longitude: landing.longitude,
            }),
            last_country: self.last_country().map(|country| CountrySummary {
                name: country.country_name.clone(),
                capital: country.capital_name.clone(),
                population: country.population,
                internet_users: country.internet_users,
            }),
        }
    }
}
