//! Connected-cluster analysis.

use serde::Serialize;

use crate::error::Result;
use crate::network::Network;

/// Cluster count plus a same-cluster verdict for two landing points.
#[derive(Debug, Clone, Serialize)]
pub struct ClustersReport {
    /// Number of connected clusters in the network.
    pub cluster_count: u32,

    /// Membership of the first queried landing point.
    pub first: ClusterMembership,

    /// Membership of the second queried landing point.
    pub second: ClusterMembership,

    /// Whether both landing points sit in the same cluster; [`None`] when
    /// either one could not be placed.
    pub same_cluster: Option<bool>,
}

/// Where one queried landing point landed.
#[derive(Debug, Clone, Serialize)]
pub struct ClusterMembership {
    /// The name as queried.
    pub query: String,

    /// Resolved landing id, [`None`] for an unknown name.
    pub landing_id: Option<String>,

    /// Cluster label of the landing's first graph vertex, [`None`] when
    /// the name is unknown or the landing has no cable connections.
    pub cluster: Option<u32>,
}

impl Network {
    /// Label the clusters and place two landing points by name.
    ///
    /// Unknown names are reported with empty membership, not as errors.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Engine`](crate::Error::Engine) when component
    /// labeling fails.
    pub fn clusters(&self, first: &str, second: &str) -> Result<ClustersReport> {
        let labels = self.graph().connected_components()?;

        let cluster_count = labels.value_set().iter().copied().max().unwrap_or(0);
        let membership = |query: &str| {
            let landing_id = self.resolve_landing(query).cloned();
            let cluster = landing_id
                .as_ref()
                .and_then(|id| self.landing_vertex_ids(id))
                .and_then(|vertices| vertices.get(1).ok())
                .and_then(|vertex| labels.get(vertex).copied());
            ClusterMembership {
                query: query.to_string(),
                landing_id,
                cluster,
            }
        };

        let first = membership(first);
        let second = membership(second);
        let same_cluster = match (first.cluster, second.cluster) {
            (Some(a), Some(b)) => Some(a == b),
            _ => None,
        };

        Ok(ClustersReport {
            cluster_count,
            first,
            second,
            same_cluster,
        })
    }
}
