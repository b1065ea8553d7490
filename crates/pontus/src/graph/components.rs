//! Connected-component labeling.

use tracing::debug;

use crate::error::Result;
use crate::graph::Graph;
use crate::stack::Stack;
use crate::table::{SeparateChaining, SymbolTable, TableKey};

impl<K: TableKey + 'static, P: Clone + 'static> Graph<K, P> {
    /// Partition the vertices into connected components.
    ///
    /// Returns a symbol table mapping every vertex identifier to a
    /// component label. Labels start at 1 and increase by one per newly
    /// discovered component, in vertex insertion order, so the maximum
    /// label equals the component count. Two vertices share a label iff
    /// an undirected path connects them; edge direction is ignored
    /// (every connection is stored in both directions anyway).
    ///
    /// The traversal uses an explicit work stack, so component shape
    /// never grows the call stack: a path of a million vertices labels
    /// as safely as a star.
    ///
    /// # Errors
    ///
    /// Propagates symbol-table write failures; these cannot occur for
    /// identifiers already accepted by the graph.
    pub fn connected_components(&self) -> Result<Box<dyn SymbolTable<K, u32>>> {
        let mut labels: SeparateChaining<K, u32> =
            SeparateChaining::with_capacity(self.vertex_count().max(1));
        let mut label: u32 = 0;

        for id in self.vertex_ids() {
            if labels.contains(id) {
                continue;
            }
            label += 1;

            let mut work: Stack<K> = Stack::new();
            labels.put(id.clone(), label)?;
            work.push(id.clone());

            while !work.is_empty() {
                let current = work.pop()?;
                let Some(edges) = self.adjacency(&current) else {
                    continue;
                };
                for edge in edges {
                    let neighbor = edge.destination();
                    if !labels.contains(neighbor) {
                        labels.put(neighbor.clone(), label)?;
                        work.push(neighbor.clone());
                    }
                }
            }
        }

        debug!(
            components = label,
            vertices = self.vertex_count(),
            "labeled connected components"
        );
        Ok(Box::new(labels))
    }
}
