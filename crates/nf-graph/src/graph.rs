//! Core graph entities.

use std::collections::BTreeSet;

use nf_core::{Real, RouterId, UNREACHED};

/// A router: one named vertex of the network.
///
/// Cross-references (predecessor, adjacency, ancestors) are `RouterId`s
/// into the owning [`Network`](crate::Network)'s arena, never live
/// references. Distance, predecessor and ancestors are transient query
/// state; `reset` returns them to their defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct Router {
    pub(crate) name: String,
    pub(crate) active: bool,
    pub(crate) distance: Real,
    pub(crate) predecessor: Option<RouterId>,
    /// Outgoing neighbours, sorted by router name, no duplicates.
    pub(crate) adjacent: Vec<RouterId>,
    /// Valid only immediately after a reachability run.
    pub(crate) ancestors: BTreeSet<RouterId>,
}

impl Router {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            active: true,
            distance: UNREACHED,
            predecessor: None,
            adjacent: Vec::new(),
            ancestors: BTreeSet::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Tentative distance from the most recent query's source.
    pub fn distance(&self) -> Real {
        self.distance
    }

    pub fn set_distance(&mut self, distance: Real) {
        self.distance = distance;
    }

    pub fn predecessor(&self) -> Option<RouterId> {
        self.predecessor
    }

    pub fn set_predecessor(&mut self, predecessor: Option<RouterId>) {
        self.predecessor = predecessor;
    }

    /// Outgoing neighbours in name order.
    pub fn adjacent(&self) -> &[RouterId] {
        &self.adjacent
    }

    /// Routers that can reach this one, as of the last reachability run.
    pub fn ancestors(&self) -> &BTreeSet<RouterId> {
        &self.ancestors
    }

    pub fn set_ancestors(&mut self, ancestors: BTreeSet<RouterId>) {
        self.ancestors = ancestors;
    }

    /// Clear transient query state: distance, predecessor, ancestors.
    pub fn reset(&mut self) {
        self.distance = UNREACHED;
        self.predecessor = None;
        self.ancestors.clear();
    }
}

/// A link: one directed, weighted edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    pub(crate) src: RouterId,
    pub(crate) dst: RouterId,
    /// Transmission time; finite and non-negative.
    pub(crate) weight: Real,
    pub(crate) active: bool,
}

impl Link {
    pub fn src(&self) -> RouterId {
        self.src
    }

    pub fn dst(&self) -> RouterId {
        self.dst
    }

    pub fn weight(&self) -> Real {
        self.weight
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Swap the endpoints in place. The caller re-registers adjacency.
    pub(crate) fn reverse(&mut self) {
        core::mem::swap(&mut self.src, &mut self.dst);
    }
}
