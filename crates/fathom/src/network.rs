//! Network model built from the dataset.
//!
//! The builder turns the three record files into one undirected graph:
//! a vertex per country capital, a vertex per (landing, cable) pair, cable
//! edges weighted by haversine distance, a link from every landing vertex
//! to its country's capital, and zero-weight transfers between vertices of
//! the same landing station. Registries around the graph resolve names and
//! ids for the analyzers.

use pontus::{
    DynArray, Graph, GraphConfig, LinearProbing, SeparateChaining, SymbolTable, TableBackend,
};
use tracing::{info, trace, warn};

use crate::dataset::Dataset;
use crate::error::Result;
use crate::geo;
use crate::records::{Connection, Country, Landing};

/// Payload carried by every graph vertex.
#[derive(Debug, Clone)]
pub enum NetworkEntity {
    /// A country, anchored at its capital.
    Country(Country),

    /// A cable landing point, one vertex per cable it serves.
    Landing(Landing),
}

impl NetworkEntity {
    /// Human-readable name: landing name or capital name.
    #[must_use]
    pub fn display_name(&self) -> &str {
        match self {
            NetworkEntity::Country(country) => &country.capital_name,
            NetworkEntity::Landing(landing) => landing.name(),
        }
    }

    /// Country the entity belongs to.
    #[must_use]
    pub fn country_name(&self) -> &str {
        match self {
            NetworkEntity::Country(country) => &country.country_name,
            NetworkEntity::Landing(landing) => landing.country(),
        }
    }

    /// Location in degrees, capital or landing coordinates.
    #[must_use]
    pub fn coordinates(&self) -> (f64, f64) {
        match self {
            NetworkEntity::Country(country) => (country.latitude, country.longitude),
            NetworkEntity::Landing(landing) => (landing.latitude, landing.longitude),
        }
    }
}

/// The built cable network: graph plus lookup registries.
pub struct Network {
    graph: Graph<String, NetworkEntity>,
    countries: LinearProbing<String, Country>,
    landings: LinearProbing<String, Landing>,
    landing_vertices: SeparateChaining<String, DynArray<String>>,
    landing_names: SeparateChaining<String, String>,
    first_landing: Option<Landing>,
    last_country: Option<Country>,
}

impl Network {
    /// Build the network from loaded records.
    ///
    /// Records that cannot take part are skipped, not fatal: countries
    /// without a name or capital, landings without an id, connections
    /// naming an unknown landing, and self-loop connections.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Engine`](crate::Error::Engine) when the graph or a
    /// registry rejects an operation.
    pub fn build(
        dataset: &Dataset,
        backend: TableBackend,
        initial_capacity: usize,
    ) -> Result<Self> {
        let mut network = Self {
            graph: Graph::with_config(GraphConfig {
                backend,
                initial_capacity,
            }),
            countries: LinearProbing::with_capacity(initial_capacity),
            landings: LinearProbing::with_capacity(initial_capacity),
            landing_vertices: SeparateChaining::with_capacity(initial_capacity),
            landing_names: SeparateChaining::with_capacity(initial_capacity),
            first_landing: None,
            last_country: None,
        };

        network.load_countries(&dataset.countries)?;
        network.load_landings(&dataset.landings)?;
        network.load_connections(&dataset.connections)?;

        info!(
            vertices = network.graph.vertex_count(),
            edge_records = network.graph.edge_count(),
            countries = network.countries.len(),
            "network built"
        );
        Ok(network)
    }

    fn load_countries(&mut self, records: &[Country]) -> Result<()> {
        for country in records {
            if country.country_name.is_empty() || country.capital_name.is_empty() {
                trace!(code = %country.code, "country record without name or capital skipped");
                continue;
            }
            self.graph.insert_vertex(
                country.capital_name.clone(),
                NetworkEntity::Country(country.clone()),
            )?;
            self.countries
                .put(country.country_name.clone(), country.clone())?;
            self.last_country = Some(country.clone());
        }
        Ok(())
    }

    fn load_landings(&mut self, records: &[Landing]) -> Result<()> {
        for landing in records {
            if landing.landing_id.is_empty() {
                trace!(location = %landing.location, "landing record without id skipped");
                continue;
            }
            if self.first_landing.is_none() {
                self.first_landing = Some(landing.clone());
            }
            let name = landing.name().to_lowercase();
            if !name.is_empty() {
                self.landing_names.put(name, landing.landing_id.clone())?;
            }
            self.landings
                .put(landing.landing_id.clone(), landing.clone())?;
        }
        Ok(())
    }

    fn load_connections(&mut self, records: &[Connection]) -> Result<()> {
        for connection in records {
            let (Some(origin), Some(destination)) = (
                self.landings.get(&connection.origin).cloned(),
                self.landings.get(&connection.destination).cloned(),
            ) else {
                trace!(
                    origin = %connection.origin,
                    destination = %connection.destination,
                    "connection names an unknown landing, skipped"
                );
                continue;
            };

            let origin_vertex = format!("{}-{}", connection.origin, connection.cable_id);
            let destination_vertex =
                format!("{}-{}", connection.destination, connection.cable_id);
            if origin_vertex == destination_vertex {
                trace!(cable = %connection.cable_id, "self-loop connection skipped");
                continue;
            }

            self.ensure_landing_vertex(origin_vertex.clone(), &origin)?;
            self.ensure_landing_vertex(destination_vertex.clone(), &destination)?;

            let km = geo::haversine_km(
                origin.latitude,
                origin.longitude,
                destination.latitude,
                destination.longitude,
            );
            self.graph.add_edge(&origin_vertex, &destination_vertex, km)?;
        }
        Ok(())
    }

    /// Insert a landing vertex on first sight: capital link, zero-weight
    /// transfers to the station's other vertices, registry entry.
    fn ensure_landing_vertex(&mut self, vertex_id: String, landing: &Landing) -> Result<()> {
        if self.graph.get_vertex(&vertex_id).is_some() {
            return Ok(());
        }
        self.graph
            .insert_vertex(vertex_id.clone(), NetworkEntity::Landing(landing.clone()))?;

        match self.countries.get(&landing.country().to_string()) {
            Some(country) => {
                let km = geo::haversine_km(
                    country.latitude,
                    country.longitude,
                    landing.latitude,
                    landing.longitude,
                );
                let capital = country.capital_name.clone();
                self.graph.add_edge(&vertex_id, &capital, km)?;
            }
            None => warn!(
                landing = %landing.landing_id,
                country = landing.country(),
                "unknown country, capital link skipped"
            ),
        }

        if let Some(siblings) = self.landing_vertices.get(&landing.landing_id) {
            for sibling in siblings {
                self.graph.add_edge(&vertex_id, sibling, 0.0)?;
            }
        }

        if let Some(list) = self.landing_vertices.get_mut(&landing.landing_id) {
            list.append(vertex_id);
        } else {
            let mut list = DynArray::with_capacity(1);
            list.append(vertex_id);
            self.landing_vertices
                .put(landing.landing_id.clone(), list)?;
        }
        Ok(())
    }

    /// The underlying graph.
    #[must_use]
    pub fn graph(&self) -> &Graph<String, NetworkEntity> {
        &self.graph
    }

    /// Country record by exact name.
    #[must_use]
    pub fn country(&self, name: &str) -> Option<&Country> {
        self.countries.get(&name.to_string())
    }

    /// Landing record by landing id.
    #[must_use]
    pub fn landing(&self, id: &str) -> Option<&Landing> {
        self.landings.get(&id.to_string())
    }

    /// Resolve a landing point name, case-insensitively, to its id.
    #[must_use]
    pub fn resolve_landing(&self, name: &str) -> Option<&String> {
        self.landing_names.get(&name.trim().to_lowercase())
    }

    /// Ids of all landings that produced at least one graph vertex, in
    /// registry storage order.
    #[must_use]
    pub fn landing_ids(&self) -> DynArray<String> {
        self.landing_vertices.key_set()
    }

    /// Graph vertex ids built from one landing, in insertion order.
    #[must_use]
    pub fn landing_vertex_ids(&self, landing_id: &str) -> Option<&DynArray<String>> {
        self.landing_vertices.get(&landing_id.to_string())
    }

    /// First landing record in load order.
    #[must_use]
    pub fn first_landing(&self) -> Option<&Landing> {
        self.first_landing.as_ref()
    }

    /// Last country record in load order.
    #[must_use]
    pub fn last_country(&self) -> Option<&Country> {
        self.last_country.as_ref()
    }

    /// Number of registered countries.
    #[must_use]
    pub fn country_count(&self) -> usize {
        self.countries.len()
    }
}
