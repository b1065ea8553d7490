//! Multi-cable landing station ranking.

use pontus::Vertex;
use serde::Serialize;

use crate::network::Network;

/// The busiest landing stations.
#[derive(Debug, Clone, Serialize)]
pub struct HubsReport {
    /// Stations serving more than one cable, in registry storage order.
    pub hubs: Vec<Hub>,
}

/// One landing station serving several cables.
#[derive(Debug, Clone, Serialize)]
pub struct Hub {
    /// Landing id.
    pub landing_id: String,

    /// Landing point name.
    pub name: String,

    /// Country the station belongs to.
    pub country: String,

    /// Graph vertices built from this station, one per cable.
    pub vertex_count: usize,

    /// Total edge records across the station's vertices.
    pub connection_count: usize,
}

impl Network {
    /// List landing stations with more than one graph vertex, capped at
    /// `limit` entries.
    #[must_use]
    pub fn hubs(&self, limit: usize) -> HubsReport {
        let mut hubs = Vec::new();

        for landing_id in &self.landing_ids() {
            if hubs.len() == limit {
                break;
            }
            let Some(vertices) = self.landing_vertex_ids(landing_id) else {
                continue;
            };
            if vertices.size() < 2 {
                continue;
            }
            let Some(record) = self.landing(landing_id) else {
                continue;
            };

            let connection_count = vertices
                .iter()
                .map(|vertex_id| self.graph().get_vertex(vertex_id).map_or(0, Vertex::degree))
                .sum();

            hubs.push(Hub {
                landing_id: landing_id.clone(),
                name: record.name().to_string(),
                country: record.country().to_string(),
                vertex_count: vertices.size(),
                connection_count,
            });
        }

        HubsReport { hubs }
    }
}
