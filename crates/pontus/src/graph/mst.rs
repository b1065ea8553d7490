//! Minimum spanning tree construction (lazy Prim).

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use tracing::debug;

use crate::array::DynArray;
use crate::error::Result;
use crate::graph::{Edge, Graph};
use crate::table::{SeparateChaining, SymbolTable, TableKey};

/// Heap entry: a crossing-edge candidate plus its push sequence number.
///
/// Ordered so the binary heap pops the lowest weight first and, among
/// equal weights, the earliest-pushed candidate. The sequence number
/// makes equal-weight selection deterministic.
struct Candidate<K> {
    edge: Edge<K>,
    sequence: u64,
}

impl<K> PartialEq for Candidate<K> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<K> Eq for Candidate<K> {}

impl<K> PartialOrd for Candidate<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K> Ord for Candidate<K> {
    // BinaryHeap is a max-heap; invert both fields for min-behavior.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .edge
            .weight()
            .total_cmp(&self.edge.weight())
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl<K: TableKey + 'static, P: Clone + 'static> Graph<K, P> {
    /// Grow a minimum spanning tree from `start` with lazy Prim.
    ///
    /// Every edge incident to a newly attached vertex whose far endpoint
    /// is still outside the tree is pushed into a priority heap; entries
    /// that have gone stale by the time they are popped (far endpoint
    /// attached meanwhile) are discarded then. Equal-weight candidates
    /// resolve to the one pushed first.
    ///
    /// Returns the selected edges in selection order: n−1 edges for the
    /// n-vertex component containing `start`. A singleton component or
    /// an unknown `start` yields an empty sequence, not an error.
    ///
    /// # Errors
    ///
    /// Propagates symbol-table write failures; these cannot occur for
    /// identifiers already accepted by the graph.
    pub fn mst_prim_lazy(&self, start: &K) -> Result<DynArray<Edge<K>>> {
        let mut tree = DynArray::new();
        if self.get_vertex(start).is_none() {
            return Ok(tree);
        }

        let mut attached: SeparateChaining<K, ()> =
            SeparateChaining::with_capacity(self.vertex_count().max(1));
        let mut heap: BinaryHeap<Candidate<K>> = BinaryHeap::new();
        let mut sequence: u64 = 0;

        attached.put(start.clone(), ())?;
        self.push_crossing_edges(start, &attached, &mut heap, &mut sequence);

        while let Some(candidate) = heap.pop() {
            let edge = candidate.edge;
            let far = edge.destination();
            if attached.contains(far) {
                // Stale: both endpoints entered the tree since the push.
                continue;
            }

            attached.put(far.clone(), ())?;
            let far = far.clone();
            self.push_crossing_edges(&far, &attached, &mut heap, &mut sequence);
            tree.append(edge);
        }

        debug!(
            start = %start,
            edges = tree.size(),
            "built minimum spanning tree"
        );
        Ok(tree)
    }

    fn push_crossing_edges(
        &self,
        id: &K,
        attached: &SeparateChaining<K, ()>,
        heap: &mut BinaryHeap<Candidate<K>>,
        sequence: &mut u64,
    ) {
        let Some(edges) = self.adjacency(id) else {
            return;
        };
        for edge in edges {
            if !attached.contains(edge.destination()) {
                heap.push(Candidate {
                    edge: edge.clone(),
                    sequence: *sequence,
                });
                *sequence += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph_with_edges(
        vertices: &[&str],
        edges: &[(&str, &str, f64)],
    ) -> Graph<String, ()> {
        let mut graph = Graph::new();
        for id in vertices {
            graph.insert_vertex((*id).to_string(), ()).unwrap();
        }
        for (a, b, weight) in edges {
            graph
                .add_edge(&(*a).to_string(), &(*b).to_string(), *weight)
                .unwrap();
        }
        graph
    }

    fn total_weight(tree: &DynArray<Edge<String>>) -> f64 {
        tree.iter().map(Edge::weight).sum()
    }

    #[test]
    fn connected_graph_yields_n_minus_one_edges() {
        let graph = graph_with_edges(
            &["a", "b", "c", "d", "e"],
            &[
                ("a", "b", 2.0),
                ("a", "c", 6.0),
                ("b", "c", 3.0),
                ("b", "d", 4.0),
                ("c", "d", 1.0),
                ("d", "e", 7.0),
                ("b", "e", 9.0),
            ],
        );

        let tree = graph.mst_prim_lazy(&"a".to_string()).unwrap();
        assert_eq!(tree.size(), 4);
        // Known minimum: a-b(2) + b-c(3) + c-d(1) + d-e(7)
        assert!((total_weight(&tree) - 13.0).abs() < 1e-9);
    }

    #[test]
    fn square_with_expensive_diagonal_drops_the_heaviest_side() {
        let graph = graph_with_edges(
            &["a", "b", "c", "d"],
            &[
                ("a", "b", 1.0),
                ("b", "c", 2.0),
                ("c", "d", 3.0),
                ("d", "a", 10.0),
            ],
        );

        let tree = graph.mst_prim_lazy(&"a".to_string()).unwrap();
        assert_eq!(tree.size(), 3);
        assert!((total_weight(&tree) - 6.0).abs() < 1e-9);
    }

    #[test]
    fn equal_weight_ties_prefer_the_earlier_pushed_edge() {
        // a-b and a-c push first; b-c pushes after b attaches. All weigh
        // the same, so the tree must be exactly {a-b, a-c}.
        let graph = graph_with_edges(
            &["a", "b", "c"],
            &[("a", "b", 1.0), ("a", "c", 1.0), ("b", "c", 1.0)],
        );

        let tree = graph.mst_prim_lazy(&"a".to_string()).unwrap();
        assert_eq!(tree.size(), 2);
        assert_eq!(tree.get(1).unwrap().source(), "a");
        assert_eq!(tree.get(1).unwrap().destination(), "b");
        assert_eq!(tree.get(2).unwrap().source(), "a");
        assert_eq!(tree.get(2).unwrap().destination(), "c");
    }

    #[test]
    fn tree_covers_only_the_start_vertex_component() {
        let graph = graph_with_edges(
            &["p1", "p2", "p3", "p4"],
            &[("p1", "p2", 1.0), ("p3", "p4", 1.0)],
        );

        let tree = graph.mst_prim_lazy(&"p1".to_string()).unwrap();
        assert_eq!(tree.size(), 1);
        assert_eq!(tree.get(1).unwrap().destination(), "p2");
    }

    #[test]
    fn singleton_component_yields_an_empty_sequence() {
        let graph = graph_with_edges(&["lonely", "a", "b"], &[("a", "b", 1.0)]);
        let tree = graph.mst_prim_lazy(&"lonely".to_string()).unwrap();
        assert!(tree.is_empty());
    }

    #[test]
    fn unknown_start_yields_an_empty_sequence() {
        let graph = graph_with_edges(&["a"], &[]);
        let tree = graph.mst_prim_lazy(&"nowhere".to_string()).unwrap();
        assert!(tree.is_empty());
    }

    #[test]
    fn selection_order_grows_outward_from_the_start() {
        let graph = graph_with_edges(
            &["hub", "x", "y"],
            &[("hub", "x", 1.0), ("x", "y", 1.0)],
        );

        let tree = graph.mst_prim_lazy(&"hub".to_string()).unwrap();
        assert_eq!(tree.get(1).unwrap().destination(), "x");
        assert_eq!(tree.get(2).unwrap().destination(), "y");
    }
}
