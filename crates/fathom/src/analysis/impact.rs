//! Affected countries when a landing point fails.

use pontus::{merge_sort, DynArray, SeparateChaining, SymbolTable};
use serde::Serialize;
use tracing::{debug, trace};

use crate::error::Result;
use crate::geo;
use crate::network::{Network, NetworkEntity};
use crate::records::Landing;

/// Countries touched by one landing point, nearest first.
#[derive(Debug, Clone, Serialize)]
pub struct ImpactReport {
    /// The landing point name as queried.
    pub query: String,

    /// Resolved landing id, [`None`] for an unknown name.
    pub landing_id: Option<String>,

    /// Affected countries sorted ascending by distance.
    pub affected: Vec<AffectedCountry>,

    /// Graph vertices the landing contributes to the network.
    pub affected_landing_vertices: usize,

    /// Combined population of the affected countries.
    pub total_population: u64,

    /// Combined internet users of the affected countries.
    pub total_internet_users: u64,

    /// Mean capital-to-landing distance over the affected countries.
    pub average_distance_km: f64,
}

/// One affected country.
#[derive(Debug, Clone, Serialize)]
pub struct AffectedCountry {
    /// Country name.
    pub name: String,

    /// Distance from the country's capital to the affected landing.
    pub distance_km: f64,

    /// Population count.
    pub population: u64,

    /// Internet user count.
    pub internet_users: u64,
}

impl Network {
    /// Collect the countries that lose connectivity when the named
    /// landing point fails: the landing's own country plus the country
    /// behind every adjacent vertex, deduplicated on first sight and
    /// sorted ascending by distance.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Engine`](crate::Error::Engine) when a working
    /// table rejects an entry.
    pub fn impact(&self, landing_name: &str) -> Result<ImpactReport> {
        let mut report = ImpactReport {
            query: landing_name.to_string(),
            landing_id: None,
            affected: Vec::new(),
            affected_landing_vertices: 0,
            total_population: 0,
            total_internet_users: 0,
            average_distance_km: 0.0,
        };

        let Some(landing_id) = self.resolve_landing(landing_name).cloned() else {
            debug!(query = landing_name, "unknown landing point");
            return Ok(report);
        };
        report.landing_id = Some(landing_id.clone());

        let Some(vertices) = self.landing_vertex_ids(&landing_id) else {
            return Ok(report);
        };
        report.affected_landing_vertices = vertices.size();

        let mut seen: SeparateChaining<String, bool> =
            SeparateChaining::with_capacity(vertices.size().max(1));
        let mut collected: DynArray<AffectedCountry> =
            DynArray::with_capacity(vertices.size().max(1));

        for vertex_id in vertices {
            let Some(vertex) = self.graph().get_vertex(vertex_id) else {
                continue;
            };
            let NetworkEntity::Landing(origin) = vertex.payload() else {
                continue;
            };

            self.collect_country(&mut seen, &mut collected, origin.country(), origin)?;

            for edge in vertex.edges() {
                let Some(neighbor) = self.graph().get_vertex(edge.destination()) else {
                    continue;
                };
                match neighbor.payload() {
                    NetworkEntity::Landing(target) => {
                        self.collect_country(&mut seen, &mut collected, target.country(), target)?;
                    }
                    NetworkEntity::Country(country) => {
                        self.collect_country(
                            &mut seen,
                            &mut collected,
                            &country.country_name,
                            origin,
                        )?;
                    }
                }
            }
        }

        merge_sort(
            &mut collected,
            |a, b| a.distance_km.total_cmp(&b.distance_km),
            true,
        );

        let mut total_distance = 0.0;
        for entry in &collected {
            report.total_population += entry.population;
            report.total_internet_users += entry.internet_users;
            total_distance += entry.distance_km;
        }
        if !collected.is_empty() {
            #[allow(clippy::cast_precision_loss)]
            let count = collected.size() as f64;
            report.average_distance_km = total_distance / count;
        }
        report.affected = collected.iter().cloned().collect();

        Ok(report)
    }

    /// Record a country once, with the distance from its capital to the
    /// landing site it was reached through.
    fn collect_country(
        &self,
        seen: &mut SeparateChaining<String, bool>,
        collected: &mut DynArray<AffectedCountry>,
        name: &str,
        site: &Landing,
    ) -> Result<()> {
        if name.is_empty() || seen.contains(&name.to_string()) {
            return Ok(());
        }
        let Some(country) = self.country(name) else {
            trace!(country = name, "affected country has no record, skipped");
            return Ok(());
        };
        seen.put(name.to_string(), true)?;
        collected.append(AffectedCountry {
            name: name.to_string(),
            distance_km: geo::haversine_km(
                country.latitude,
                country.longitude,
                site.latitude,
                site.longitude,
            ),
            population: country.population,
            internet_users: country.internet_users,
        });
        Ok(())
    }
}
