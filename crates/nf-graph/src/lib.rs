//! nf-graph: graph/model layer for netflow.
//!
//! Provides:
//! - Core entities (Router, Link) held in an arena and addressed by `RouterId`
//! - The mutable `Network` container (topology edits, transpose, reset)
//! - Consistency validation between the link table and adjacency lists
//! - The whitespace-triple link-file loader
//! - An ordered topology snapshot for callers to format
//!
//! # Example
//!
//! ```
//! use nf_graph::Network;
//!
//! let mut net = Network::new();
//! net.add_link("A", "B", 2.0).unwrap();
//! net.add_link("B", "A", 2.0).unwrap();
//!
//! assert_eq!(net.router_count(), 2);
//! assert_eq!(net.link_count(), 2);
//! ```

pub mod error;
pub mod graph;
pub mod loader;
pub mod network;
pub mod topology;
pub(crate) mod validate;

// Re-exports for ergonomics
pub use error::GraphError;
pub use graph::{Link, Router};
pub use loader::{LoadReport, load_links, load_links_path};
pub use network::Network;
pub use topology::{LinkTopology, RouterTopology, TopologySnapshot};
