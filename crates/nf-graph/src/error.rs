//! Graph-specific error types.

use std::path::PathBuf;

use nf_core::NfError;
use thiserror::Error;

/// Errors from the graph model layer.
///
/// Everything here is recoverable: an error leaves the network unchanged
/// and is reported to the caller, never escalated.
#[derive(Error, Debug)]
pub enum GraphError {
    /// A link from a router to itself was requested.
    #[error("Self-loop link on {name} is not allowed")]
    SelfLoop { name: String },

    /// Link weight was negative or non-finite.
    #[error("Invalid link weight: {0}")]
    InvalidWeight(#[from] NfError),

    /// A link exists in the link table but its source has no adjacency entry.
    #[error("Link {src} -> {dst} has no adjacency entry")]
    MissingAdjacency { src: String, dst: String },

    /// An adjacency entry references a pair absent from the link table.
    #[error("Adjacency entry {src} -> {dst} has no link")]
    DanglingAdjacency { src: String, dst: String },

    /// An adjacency list is unsorted or contains a duplicate target.
    #[error("Adjacency list of {router} is not sorted by neighbour name")]
    AdjacencyOrder { router: String },

    /// The name index and the router arena disagree.
    #[error("Name index entry for {name} is inconsistent")]
    NameIndex { name: String },

    /// A link endpoint points outside the router arena.
    #[error("Link endpoint index {index} is outside the router arena")]
    ForeignEndpoint { index: u32 },

    /// A link's stored endpoints disagree with its key in the link table.
    #[error("Link table key {src} -> {dst} does not match the stored link")]
    LinkKeyMismatch { src: String, dst: String },

    #[error("Failed to read topology file: {}", .path.display())]
    TopologyRead { path: PathBuf, source: std::io::Error },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
