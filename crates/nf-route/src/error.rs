//! Error types for the query engines.

use nf_core::{Real, RouterId};
use thiserror::Error;

pub type RouteResult<T> = Result<T, RouteError>;

/// Errors a query can report. All of them are recoverable and leave the
/// network unchanged.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RouteError {
    /// The query named a router absent from the model.
    #[error("Router {name} does not exist")]
    UnknownRouter { name: String },

    /// No finite-cost path under the current active topology.
    #[error("Router {name} is not reachable")]
    Unreachable { name: String },

    /// The priority queue reported a defined failure.
    #[error("Priority queue error: {0}")]
    Heap(#[from] HeapError),
}

/// Defined failures of the priority queue primitive.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum HeapError {
    /// Extraction was attempted on an empty heap.
    #[error("Extract from an empty heap")]
    Empty,

    /// A key update would have raised the key; rejected without mutation.
    #[error("New key {requested} is greater than current key {current}")]
    KeyIncrease { current: Real, requested: Real },

    /// The router addressed by a key update is not in the heap.
    #[error("Router #{router} is not queued")]
    NotQueued { router: RouterId },

    /// The router is already queued; inserting it again would corrupt the
    /// slot map.
    #[error("Router #{router} is already queued")]
    AlreadyQueued { router: RouterId },
}
