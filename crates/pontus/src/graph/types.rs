//! Graph entities: weighted edges and payload-carrying vertices.

use crate::array::DynArray;
use crate::table::TableKey;

/// A directed edge record.
///
/// Endpoints are referenced by identifier; edges never own vertices. An
/// undirected connection is stored as two records with swapped endpoints
/// and the same weight. Weights are validated by
/// [`Graph::add_edge`](crate::Graph::add_edge), which is the only place
/// edges enter a graph.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge<K> {
    source: K,
    destination: K,
    weight: f64,
}

impl<K> Edge<K> {
    /// Create an edge record from `source` to `destination`.
    #[must_use]
    pub fn new(source: K, destination: K, weight: f64) -> Self {
        Self {
            source,
            destination,
            weight,
        }
    }

    /// Identifier of the vertex this edge leaves.
    #[must_use]
    pub fn source(&self) -> &K {
        &self.source
    }

    /// Identifier of the vertex this edge enters.
    #[must_use]
    pub fn destination(&self) -> &K {
        &self.destination
    }

    /// Edge weight. Non-negative and finite for edges held by a graph.
    #[must_use]
    pub fn weight(&self) -> f64 {
        self.weight
    }
}

/// A graph vertex: identifier, opaque payload, and its adjacency list.
///
/// The payload is domain data the graph never inspects; algorithms
/// operate on identifiers and weights only.
#[derive(Debug, Clone)]
pub struct Vertex<K, P> {
    id: K,
    payload: P,
    adjacency: DynArray<Edge<K>>,
}

impl<K: TableKey, P> Vertex<K, P> {
    /// Create a vertex with an empty adjacency list.
    #[must_use]
    pub fn new(id: K, payload: P) -> Self {
        Self {
            id,
            payload,
            adjacency: DynArray::with_capacity(1),
        }
    }

    /// The vertex identifier.
    #[must_use]
    pub fn id(&self) -> &K {
        &self.id
    }

    /// The domain payload carried by this vertex.
    #[must_use]
    pub fn payload(&self) -> &P {
        &self.payload
    }

    /// Outgoing edge records, in insertion order.
    #[must_use]
    pub fn edges(&self) -> &DynArray<Edge<K>> {
        &self.adjacency
    }

    /// Number of outgoing edge records.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.adjacency.size()
    }

    pub(crate) fn connect(&mut self, edge: Edge<K>) {
        self.adjacency.append(edge);
    }
}
