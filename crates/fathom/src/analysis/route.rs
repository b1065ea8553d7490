//! Shortest route between two countries.

use serde::Serialize;
use tracing::debug;

use crate::error::Result;
use crate::network::Network;

/// A capital-to-capital route over the cable network.
#[derive(Debug, Clone, Serialize)]
pub struct RouteReport {
    /// Origin country as queried.
    pub origin: String,

    /// Destination country as queried.
    pub destination: String,

    /// Hops in travel order, empty when no route exists.
    pub hops: Vec<Hop>,

    /// Total route length in kilometers.
    pub total_km: f64,

    /// Whether a route was found.
    pub found: bool,
}

/// One hop of a route.
#[derive(Debug, Clone, Serialize)]
pub struct Hop {
    /// Display name of the hop's starting point.
    pub from: String,

    /// Display name of the hop's end point.
    pub to: String,

    /// Hop length in kilometers.
    pub km: f64,
}

impl Network {
    /// Find the shortest route between two countries' capitals.
    ///
    /// An unknown country or an unreachable destination yields an empty
    /// route with `found` unset, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Engine`](crate::Error::Engine) when the path
    /// search fails.
    pub fn route(&self, origin: &str, destination: &str) -> Result<RouteReport> {
        let mut report = RouteReport {
            origin: origin.to_string(),
            destination: destination.to_string(),
            hops: Vec::new(),
            total_km: 0.0,
            found: false,
        };

        let (Some(from), Some(to)) = (self.country(origin), self.country(destination)) else {
            debug!(origin, destination, "route endpoints did not both resolve");
            return Ok(report);
        };

        let mut path = self
            .graph()
            .min_path(&from.capital_name, &to.capital_name)?;

        while let Ok(edge) = path.pop() {
            report.hops.push(Hop {
                from: self.display_name(edge.source()),
                to: self.display_name(edge.destination()),
                km: edge.weight(),
            });
            report.total_km += edge.weight();
        }
        report.found = !report.hops.is_empty();

        Ok(report)
    }

    fn display_name(&self, vertex_id: &str) -> String {
        self.graph().get_vertex(&vertex_id.to_string()).map_or_else(
            || vertex_id.to_string(),
            |vertex| vertex.payload().display_name().to_string(),
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::analysis::fixtures;
    use crate::geo;

    #[test]
    fn route_walks_capital_landing_landing_capital() {
        let network = fixtures::network(&fixtures::pacific());

        let report = network.route("Chile", "Peru").expect("search succeeds");

        assert!(report.found);
        let legs: Vec<(&str, &str)> = report
            .hops
            .iter()
            .map(|hop| (hop.from.as_str(), hop.to.as_str()))
            .collect();
        assert_eq!(
            legs,
            [
                ("Santiago", "Valparaiso"),
                ("Valparaiso", "Lima"),
                ("Lima", "Lima"),
            ]
        );

        let expected = geo::haversine_km(-33.45, -70.66, -33.02, -71.64)
            + geo::haversine_km(-33.02, -71.64, -12.05, -77.05)
            + geo::haversine_km(-12.05, -77.05, -12.04, -77.03);
        assert!((report.total_km - expected).abs() < 1e-9);
    }

    #[test]
    fn unreachable_destination_reports_an_empty_route() {
        let network = fixtures::network(&fixtures::pacific());

        let report = network.route("Chile", "Iceland").expect("search succeeds");

        assert!(!report.found);
        assert!(report.hops.is_empty());
        assert!(report.total_km.abs() < 1e-9);
    }

    #[test]
    fn unknown_country_reports_an_empty_route() {
        let network = fixtures::network(&fixtures::pacific());

        let report = network.route("Chile", "Narnia").expect("search succeeds");

        assert!(!report.found);
        assert!(report.hops.is_empty());
        assert_eq!(report.destination, "Narnia");
    }
}
