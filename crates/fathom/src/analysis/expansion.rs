//! Expansion backbone planning over the existing network.

use pontus::{DynArray, SeparateChaining, Stack, SymbolTable};
use serde::Serialize;
use tracing::debug;

use crate::error::Result;
use crate::network::Network;

/// Minimum spanning backbone reachable from the busiest station.
#[derive(Debug, Clone, Serialize)]
pub struct ExpansionReport {
    /// Seed vertex the tree grew from, [`None`] for an empty network.
    pub seed: Option<String>,

    /// Distinct vertices connected by the tree.
    pub connected_vertices: usize,

    /// Total cable kilometers in the tree.
    pub total_km: f64,

    /// Vertex count of the longest branch, before display capping.
    pub branch_length: usize,

    /// The longest branch, capped for display.
    pub longest_branch: Vec<String>,
}

impl Network {
    /// Grow a minimum spanning tree from the busiest landing station and
    /// measure its longest branch, displaying at most `display_limit`
    /// vertices of it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Engine`](crate::Error::Engine) when tree
    /// construction fails.
    pub fn expansion(&self, display_limit: usize) -> Result<ExpansionReport> {
        let mut report = ExpansionReport {
            seed: None,
            connected_vertices: 0,
            total_km: 0.0,
            branch_length: 0,
            longest_branch: Vec::new(),
        };

        let mut seed: Option<String> = None;
        let mut best = 0;
        for landing_id in &self.landing_ids() {
            let Some(vertices) = self.landing_vertex_ids(landing_id) else {
                continue;
            };
            if vertices.size() <= best {
                continue;
            }
            if let Ok(first) = vertices.get(1) {
                best = vertices.size();
                seed = Some(first.clone());
            }
        }
        let Some(seed) = seed else {
            return Ok(report);
        };

        let tree = self.graph().mst_prim_lazy(&seed)?;
        report.seed = Some(seed.clone());

        let capacity = tree.size().max(1);
        let mut adjacency: SeparateChaining<String, DynArray<String>> =
            SeparateChaining::with_capacity(capacity);
        let mut reached: SeparateChaining<String, bool> =
            SeparateChaining::with_capacity(capacity);
        reached.put(seed, true)?;

        for edge in &tree {
            report.total_km += edge.weight();
            reached.put(edge.source().clone(), true)?;
            reached.put(edge.destination().clone(), true)?;
            attach(&mut adjacency, edge.source().clone(), edge.destination().clone())?;
            attach(&mut adjacency, edge.destination().clone(), edge.source().clone())?;
        }
        report.connected_vertices = reached.len();

        let mut longest: Vec<String> = Vec::new();
        for leaf in &adjacency.key_set() {
            let Some(neighbors) = adjacency.get(leaf) else {
                continue;
            };
            if neighbors.size() != 1 {
                continue;
            }
            let branch = deepest_walk(&adjacency, leaf)?;
            if branch.len() > longest.len() {
                longest = branch;
            }
        }

        debug!(
            vertices = report.connected_vertices,
            branch = longest.len(),
            "expansion tree measured"
        );
        report.branch_length = longest.len();
        report.longest_branch = longest.into_iter().take(display_limit).collect();
        Ok(report)
    }
}

fn attach(
    adjacency: &mut SeparateChaining<String, DynArray<String>>,
    from: String,
    to: String,
) -> Result<()> {
    if let Some(list) = adjacency.get_mut(&from) {
        list.append(to);
    } else {
        let mut list = DynArray::with_capacity(1);
        list.append(to);
        adjacency.put(from, list)?;
    }
    Ok(())
}

/// Walk the tree from `start` with an explicit stack and return the path
/// to the deepest vertex reached.
fn deepest_walk(
    adjacency: &SeparateChaining<String, DynArray<String>>,
    start: &str,
) -> Result<Vec<String>> {
    let capacity = adjacency.len().max(1);
    let mut depths: SeparateChaining<String, usize> = SeparateChaining::with_capacity(capacity);
    let mut parents: SeparateChaining<String, String> = SeparateChaining::with_capacity(capacity);
    let mut stack = Stack::new();

    let start = start.to_string();
    depths.put(start.clone(), 1)?;
    stack.push(start.clone());
    let mut deepest = (1, start);

    while let Ok(vertex) = stack.pop() {
        let depth = depths.get(&vertex).copied().unwrap_or(1);
        if depth > deepest.0 {
            deepest = (depth, vertex.clone());
        }
        let Some(neighbors) = adjacency.get(&vertex) else {
            continue;
        };
        for neighbor in neighbors {
            if depths.contains(neighbor) {
                continue;
            }
            depths.put(neighbor.clone(), depth + 1)?;
            parents.put(neighbor.clone(), vertex.clone())?;
            stack.push(neighbor.clone());
        }
    }

    let mut branch = Vec::with_capacity(deepest.0);
    let mut current = deepest.1;
    loop {
        match parents.get(&current) {
            Some(parent) => {
                let parent = parent.clone();
                branch.push(current);
                current = parent;
            }
            None => {
                branch.push(current);
                break;
            }
        }
    }
    branch.reverse();
    Ok(branch)
}
