//! Shortest-path search (Dijkstra) with path reconstruction.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use tracing::debug;

use crate::error::Result;
use crate::graph::{Edge, Graph};
use crate::stack::Stack;
use crate::table::{LinearProbing, SeparateChaining, SymbolTable, TableKey};

/// Heap entry: a vertex with its tentative distance and push sequence.
///
/// Ordered for min-heap behavior on distance, breaking ties toward the
/// earlier push so traversal order is deterministic.
struct Visit<K> {
    distance: f64,
    sequence: u64,
    id: K,
}

impl<K> PartialEq for Visit<K> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<K> Eq for Visit<K> {}

impl<K> PartialOrd for Visit<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K> Ord for Visit<K> {
    // BinaryHeap is a max-heap; invert both fields for min-behavior.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .total_cmp(&self.distance)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl<K: TableKey + 'static, P: Clone + 'static> Graph<K, P> {
    /// Find the minimum-cumulative-weight path from `source` to
    /// `destination`.
    ///
    /// Tentative distances are relaxed until `destination` settles; the
    /// path is then rebuilt by walking predecessor edges backwards and
    /// pushing them onto a stack, so popping yields the edges in
    /// source→destination travel order.
    ///
    /// Returns an empty stack when either endpoint is unknown, when no
    /// path exists, or when `source == destination`. Never returns a
    /// partial path.
    ///
    /// # Errors
    ///
    /// Propagates symbol-table write failures; these cannot occur for
    /// identifiers already accepted by the graph.
    pub fn min_path(&self, source: &K, destination: &K) -> Result<Stack<Edge<K>>> {
        let mut path = Stack::new();
        if self.get_vertex(source).is_none() || self.get_vertex(destination).is_none() {
            return Ok(path);
        }

        let capacity = self.vertex_count().max(1);
        let mut distances: LinearProbing<K, f64> = LinearProbing::with_capacity(capacity);
        let mut predecessors: SeparateChaining<K, Edge<K>> =
            SeparateChaining::with_capacity(capacity);
        let mut heap: BinaryHeap<Visit<K>> = BinaryHeap::new();
        let mut sequence: u64 = 0;

        distances.put(source.clone(), 0.0)?;
        heap.push(Visit {
            distance: 0.0,
            sequence,
            id: source.clone(),
        });
        sequence += 1;

        let mut reached = false;
        while let Some(visit) = heap.pop() {
            if visit.id == *destination {
                reached = true;
                break;
            }
            // A larger distance than the recorded best means this entry
            // went stale after a later relaxation.
            if let Some(best) = distances.get(&visit.id) {
                if visit.distance > *best {
                    continue;
                }
            }

            let Some(edges) = self.adjacency(&visit.id) else {
                continue;
            };
            for edge in edges {
                let next = edge.destination();
                let tentative = visit.distance + edge.weight();
                let improves = match distances.get(next) {
                    None => true,
                    Some(best) => tentative < *best,
                };
                if improves {
                    distances.put(next.clone(), tentative)?;
                    predecessors.put(next.clone(), edge.clone())?;
                    heap.push(Visit {
                        distance: tentative,
                        sequence,
                        id: next.clone(),
                    });
                    sequence += 1;
                }
            }
        }

        if !reached {
            return Ok(path);
        }

        let mut current = destination.clone();
        while current != *source {
            let Some(edge) = predecessors.get(&current) else {
                return Ok(Stack::new());
            };
            current = edge.source().clone();
            path.push(edge.clone());
        }

        debug!(
            source = %source,
            destination = %destination,
            hops = path.size(),
            "reconstructed shortest path"
        );
        Ok(path)
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

    fn pop_all(mut path: Stack<Edge<String>>) -> Vec<(String, String, f64)> {
        let mut hops = Vec::new();
        while !path.is_empty() {
            let edge = path.pop().unwrap();
            hops.push((
                edge.source().clone(),
                edge.destination().clone(),
                edge.weight(),
            ));
        }
        hops
    }

    #[test]
    fn cycle_takes_the_cheap_side() {
        // A-B-C costs 2; the direct D side costs 5 alone.
        let graph = graph_with_edges(
            &["a", "b", "c", "d"],
            &[
                ("a", "b", 1.0),
                ("b", "c", 1.0),
                ("c", "d", 1.0),
                ("d", "a", 5.0),
            ],
        );

        let path = graph.min_path(&"a".to_string(), &"c".to_string()).unwrap();
        let hops = pop_all(path);

        assert_eq!(
            hops,
            vec![
                ("a".to_string(), "b".to_string(), 1.0),
                ("b".to_string(), "c".to_string(), 1.0),
            ]
        );
        let total: f64 = hops.iter().map(|(_, _, w)| w).sum();
        assert!((total - 2.0).abs() < 1e-9);
    }

    #[test]
    fn pops_yield_hops_in_travel_order() {
        let graph = graph_with_edges(
            &["src", "mid", "dst"],
            &[("src", "mid", 3.0), ("mid", "dst", 4.0)],
        );

        let hops = pop_all(graph.min_path(&"src".to_string(), &"dst".to_string()).unwrap());
        assert_eq!(hops[0].0, "src");
        assert_eq!(hops[0].1, "mid");
        assert_eq!(hops[1].0, "mid");
        assert_eq!(hops[1].1, "dst");
    }

    #[test]
    fn later_relaxation_replaces_a_greedy_first_path() {
        // Direct a-b weighs 4; the detour through c weighs 2.
        let graph = graph_with_edges(
            &["a", "b", "c"],
            &[("a", "b", 4.0), ("a", "c", 1.0), ("c", "b", 1.0)],
        );

        let hops = pop_all(graph.min_path(&"a".to_string(), &"b".to_string()).unwrap());
        assert_eq!(hops.len(), 2);
        assert_eq!(hops[0].1, "c", "path should detour through c");
    }

    #[test]
    fn missing_endpoint_yields_an_empty_stack() {
        let graph = graph_with_edges(&["a", "b"], &[("a", "b", 1.0)]);

        let path = graph.min_path(&"a".to_string(), &"zz".to_string()).unwrap();
        assert!(path.is_empty());

        let path = graph.min_path(&"zz".to_string(), &"a".to_string()).unwrap();
        assert!(path.is_empty());
    }

    #[test]
    fn unreachable_destination_yields_an_empty_stack() {
        let graph = graph_with_edges(&["a", "b", "x", "y"], &[("a", "b", 1.0), ("x", "y", 1.0)]);
        let path = graph.min_path(&"a".to_string(), &"y".to_string()).unwrap();
        assert!(path.is_empty());
    }

    #[test]
    fn source_equal_to_destination_yields_an_empty_stack() {
        let graph = graph_with_edges(&["a", "b"], &[("a", "b", 1.0)]);
        let path = graph.min_path(&"a".to_string(), &"a".to_string()).unwrap();
        assert!(path.is_empty());
    }

    #[test]
    fn zero_weight_hops_are_traversed() {
        // Same-station transfers cost nothing but still appear as hops.
        let graph = graph_with_edges(
            &["a", "a2", "b"],
            &[("a", "a2", 0.0), ("a2", "b", 2.0)],
        );

        let hops = pop_all(graph.min_path(&"a".to_string(), &"b".to_string()).unwrap());
        assert_eq!(hops.len(), 2);
        assert!((hops[0].2 - 0.0).abs() < f64::EPSILON);
    }
}
