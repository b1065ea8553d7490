//! Weighted adjacency-list graph and its analysis operations.
//!
//! This module provides:
//! - Vertex/edge storage over the crate's own symbol tables
//! - Component labeling (`connected_components`)
//! - Minimum spanning tree construction (`mst_prim_lazy`)
//! - Shortest-path search with path reconstruction (`min_path`)
//!
//! The graph is built once during a load phase and queried read-only
//! afterwards. Algorithms allocate private scratch structures per call
//! and never mutate the graph, so read queries can share a built graph
//! freely.

mod components;
mod mst;
mod paths;
mod types;

pub use types::{Edge, Vertex};

use std::fmt;

use crate::array::DynArray;
use crate::error::{Error, Result};
use crate::table::{SymbolTable, TableBackend, TableKey, create_table};

/// Construction parameters for a [`Graph`].
///
/// The symbol table holding the vertices is chosen here; algorithms and
/// callers never observe the difference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphConfig {
    /// Collision strategy for the vertex table.
    pub backend: TableBackend,
    /// Initial capacity for the vertex table.
    pub initial_capacity: usize,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            backend: TableBackend::Chaining,
            initial_capacity: 16,
        }
    }
}

/// Undirected weighted graph over an adjacency-list representation.
///
/// Identifiers are unique; inserting an existing identifier is a no-op.
/// A logical connection is stored once per direction, so every edge
/// appears twice: in each endpoint's adjacency list and twice in the
/// edge log that backs [`edges`](Graph::edges).
///
/// # Examples
///
/// ```
/// use pontus::{Graph, GraphConfig};
///
/// let mut graph = Graph::new();
/// graph.insert_vertex("cartagena".to_string(), ()).unwrap();
/// graph.insert_vertex("miami".to_string(), ()).unwrap();
/// graph.add_edge(&"cartagena".to_string(), &"miami".to_string(), 1_874.0).unwrap();
///
/// assert_eq!(graph.vertex_count(), 2);
/// assert_eq!(graph.edge_count(), 2); // one record per direction
/// ```
pub struct Graph<K: TableKey + 'static, P: Clone + 'static> {
    table: Box<dyn SymbolTable<K, Vertex<K, P>>>,
    order: DynArray<K>,
    edge_log: DynArray<Edge<K>>,
}

impl<K: TableKey + 'static, P: Clone + 'static> Graph<K, P> {
    /// Create a graph with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(GraphConfig::default())
    }

    /// Create a graph with an explicit table backend and capacity.
    #[must_use]
    pub fn with_config(config: GraphConfig) -> Self {
        Self {
            table: create_table(config.backend, config.initial_capacity),
            order: DynArray::new(),
            edge_log: DynArray::new(),
        }
    }

    // === Construction ===

    /// Insert a vertex. No-op when `id` is already present.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NullKey`] when `id` is null for its key type.
    pub fn insert_vertex(&mut self, id: K, payload: P) -> Result<()> {
        if id.is_null() {
            return Err(Error::NullKey);
        }
        if self.table.contains(&id) {
            return Ok(());
        }
        self.table
            .put(id.clone(), Vertex::new(id.clone(), payload))?;
        self.order.append(id);
        Ok(())
    }

    /// Connect two existing vertices with an undirected weighted edge.
    ///
    /// Appends one edge record per direction, both carrying `weight`.
    /// The weight is supplied by the caller (a geodesic distance in the
    /// network domain) and never recomputed here.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingVertex`] when either endpoint does not
    /// exist, and [`Error::InvalidWeight`] when `weight` is negative,
    /// NaN, or infinite.
    pub fn add_edge(&mut self, id1: &K, id2: &K, weight: f64) -> Result<()> {
        if !weight.is_finite() || weight < 0.0 {
            return Err(Error::InvalidWeight { weight });
        }
        if !self.table.contains(id1) {
            return Err(Error::MissingVertex {
                id: id1.to_string(),
            });
        }
        if !self.table.contains(id2) {
            return Err(Error::MissingVertex {
                id: id2.to_string(),
            });
        }

        let forward = Edge::new(id1.clone(), id2.clone(), weight);
        let backward = Edge::new(id2.clone(), id1.clone(), weight);

        if let Some(vertex) = self.table.get_mut(id1) {
            vertex.connect(forward.clone());
        }
        if let Some(vertex) = self.table.get_mut(id2) {
            vertex.connect(backward.clone());
        }
        self.edge_log.append(forward);
        self.edge_log.append(backward);
        Ok(())
    }

    // === Lookup and snapshots ===

    /// Look up a vertex by identifier. Absence is a miss, not an error.
    #[must_use]
    pub fn get_vertex(&self, id: &K) -> Option<&Vertex<K, P>> {
        self.table.get(id)
    }

    /// Number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.order.size()
    }

    /// Number of edge records (two per logical connection).
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_log.size()
    }

    /// Snapshot of all vertices in insertion order.
    #[must_use]
    pub fn vertices(&self) -> DynArray<Vertex<K, P>> {
        let mut snapshot = DynArray::with_capacity(self.order.size().max(1));
        for id in &self.order {
            if let Some(vertex) = self.table.get(id) {
                snapshot.append(vertex.clone());
            }
        }
        snapshot
    }

    /// Snapshot of all edge records in insertion order.
    #[must_use]
    pub fn edges(&self) -> DynArray<Edge<K>> {
        self.edge_log.clone()
    }

    pub(crate) fn vertex_ids(&self) -> &DynArray<K> {
        &self.order
    }

    pub(crate) fn adjacency(&self, id: &K) -> Option<&DynArray<Edge<K>>> {
        self.table.get(id).map(Vertex::edges)
    }
}

impl<K: TableKey + 'static, P: Clone + 'static> Default for Graph<K, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: TableKey + 'static, P: Clone + 'static> fmt::Debug for Graph<K, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Graph")
            .field("vertices", &self.order.size())
            .field("edge_records", &self.edge_log.size())
            .finish()
    }
}
