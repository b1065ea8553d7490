//! # Pontus: In-Memory Data Structures and Graph Analysis
//!
//! Pontus provides the resizable arrays, stacks, symbol tables, sorting,
//! and weighted-graph algorithms that back network analysis tools. It is
//! designed for programmatic use by CLIs and services that need
//! deterministic, observable behavior from their core structures.
//!
//! ## Design Philosophy
//!
//! - **Deterministic** - identical inputs produce identical iteration and
//!   traversal orders across runs
//! - **Explicit results** - fallible operations return [`Result`]; lookups
//!   that can simply miss return [`Option`] or empty collections
//! - **Swappable backends** - symbol tables hide separate chaining and
//!   linear probing behind one trait, chosen at construction
//! - **Embeddable** - library first, no I/O, no global state
//!
//! ## Quick Start
//!
//! ```
//! use pontus::{Graph, GraphConfig, TableBackend};
//!
//! let config = GraphConfig {
//!     backend: TableBackend::Probing,
//!     initial_capacity: 4,
//! };
//! let mut graph: Graph<String, ()> = Graph::with_config(config);
//!
//! graph.insert_vertex("valparaiso".to_string(), ())?;
//! graph.insert_vertex("auckland".to_string(), ())?;
//! graph.add_edge(&"valparaiso".to_string(), &"auckland".to_string(), 9307.0)?;
//!
//! let components = graph.connected_components()?;
//! assert_eq!(components.get(&"auckland".to_string()), Some(&1));
//!
//! let path = graph.min_path(&"valparaiso".to_string(), &"auckland".to_string())?;
//! assert_eq!(path.size(), 1);
//! # Ok::<(), pontus::Error>(())
//! ```

mod array;
mod error;
mod graph;
mod sort;
mod stack;
mod table;

pub use array::DynArray;
pub use error::{Error, Result};
pub use graph::{Edge, Graph, GraphConfig, Vertex};
pub use sort::merge_sort;
pub use stack::Stack;
pub use table::{
    LinearProbing, SeparateChaining, SymbolTable, TableBackend, TableKey, create_table,
};
