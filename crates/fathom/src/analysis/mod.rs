//! Analyzers over the built network.
//!
//! Each analyzer is a method on [`Network`](crate::network::Network) that
//! returns a serializable report struct; rendering happens in the output
//! module, so reports stay plain data.

pub mod clusters;
pub mod expansion;
pub mod hubs;
pub mod impact;
pub mod route;
pub mod summary;

pub use clusters::{ClusterMembership, ClustersReport};
pub use expansion::ExpansionReport;
pub use hubs::{Hub, HubsReport};
pub use impact::{AffectedCountry, ImpactReport};
pub use route::{Hop, RouteReport};
pub use summary::{CountrySummary, LandingSummary, SummaryReport};
