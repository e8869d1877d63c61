//! nf-route: query engines over an nf-graph network.
//!
//! Provides:
//! - A binary min-heap priority queue with decrease-key (`MinHeap`)
//! - The Dijkstra shortest transmission-time traversal (`shortest_path`)
//! - Transpose-based all-pairs reachability (`reachability`)
//!
//! Queries take `&mut Network` because they reset transient per-router
//! state before running; the topology itself is left exactly as found.

pub mod dijkstra;
pub mod error;
pub mod heap;
pub mod reachability;

// Re-exports for ergonomics
pub use dijkstra::{Route, shortest_path};
pub use error::{HeapError, RouteError, RouteResult};
pub use heap::MinHeap;
pub use reachability::{AncestorMap, reachability};
