//! The mutable network container.

use std::collections::{BTreeMap, HashMap};

use nf_core::{Real, RouterId, ensure_finite, ensure_non_negative};

use crate::error::GraphError;
use crate::graph::{Link, Router};
use crate::validate;

/// A network of routers and directed links.
///
/// The network exclusively owns every [`Router`] and [`Link`]. Routers live
/// in an arena and are addressed by [`RouterId`]; links are keyed by the
/// ordered endpoint pair, at most one per pair. The name index is a
/// `BTreeMap` so that by-name iteration (printing, heap snapshots) is
/// deterministic.
///
/// Routers are created on first reference and never deleted. Down routers
/// and links stay in the model; queries skip them.
#[derive(Debug, Clone, Default)]
pub struct Network {
    routers: Vec<Router>,
    by_name: BTreeMap<String, RouterId>,
    links: HashMap<(RouterId, RouterId), Link>,
}

impl Network {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn router_count(&self) -> usize {
        self.routers.len()
    }

    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    /// Resolve a router name to its ID.
    pub fn lookup(&self, name: &str) -> Option<RouterId> {
        self.by_name.get(name).copied()
    }

    /// Borrow a router by ID.
    ///
    /// IDs are only ever minted by this network and routers are never
    /// deleted, so any ID obtained from it stays valid for its lifetime.
    pub fn router(&self, id: RouterId) -> &Router {
        &self.routers[id.idx()]
    }

    pub fn router_mut(&mut self, id: RouterId) -> &mut Router {
        &mut self.routers[id.idx()]
    }

    /// All router IDs in name order.
    pub fn ids(&self) -> impl Iterator<Item = RouterId> + '_ {
        self.by_name.values().copied()
    }

    pub fn link(&self, src: RouterId, dst: RouterId) -> Option<&Link> {
        self.links.get(&(src, dst))
    }

    pub fn link_by_name(&self, src: &str, dst: &str) -> Option<&Link> {
        let s = self.lookup(src)?;
        let d = self.lookup(dst)?;
        self.link(s, d)
    }

    pub(crate) fn links(&self) -> &HashMap<(RouterId, RouterId), Link> {
        &self.links
    }

    pub(crate) fn by_name(&self) -> &BTreeMap<String, RouterId> {
        &self.by_name
    }

    /// Add a router, or return the existing one with that name.
    pub fn add_router(&mut self, name: &str) -> RouterId {
        if let Some(&id) = self.by_name.get(name) {
            return id;
        }
        let id = RouterId::from_index(self.routers.len() as u32);
        self.routers.push(Router::new(name));
        self.by_name.insert(name.to_string(), id);
        id
    }

    /// Add a directed link, creating missing endpoints.
    ///
    /// Idempotent on the ordered pair: re-adding an existing pair replaces
    /// its weight in place and touches nothing else, so no duplicate
    /// adjacency entry can arise and a downed link stays down.
    pub fn add_link(&mut self, src: &str, dst: &str, weight: Real) -> Result<(), GraphError> {
        if src == dst {
            return Err(GraphError::SelfLoop { name: src.into() });
        }
        let weight = ensure_finite(weight, "link weight")?;
        let weight = ensure_non_negative(weight, "link weight")?;

        let s = self.add_router(src);
        let d = self.add_router(dst);
        if let Some(link) = self.links.get_mut(&(s, d)) {
            link.weight = weight;
            return Ok(());
        }
        self.links.insert(
            (s, d),
            Link {
                src: s,
                dst: d,
                weight,
                active: true,
            },
        );
        self.insert_adjacent(s, d);
        Ok(())
    }

    /// Remove a directed link. Returns false (and does nothing) if the pair
    /// is absent.
    pub fn delete_link(&mut self, src: &str, dst: &str) -> bool {
        let (Some(s), Some(d)) = (self.lookup(src), self.lookup(dst)) else {
            return false;
        };
        if self.links.remove(&(s, d)).is_none() {
            return false;
        }
        self.routers[s.idx()].adjacent.retain(|&a| a != d);
        true
    }

    /// Flip a router's active flag. Returns false if the router is absent.
    pub fn set_router_active(&mut self, name: &str, active: bool) -> bool {
        match self.lookup(name) {
            Some(id) => {
                self.routers[id.idx()].active = active;
                true
            }
            None => false,
        }
    }

    /// Flip a link's active flag. Returns false if the pair is absent.
    pub fn set_link_active(&mut self, src: &str, dst: &str, active: bool) -> bool {
        let (Some(s), Some(d)) = (self.lookup(src), self.lookup(dst)) else {
            return false;
        };
        match self.links.get_mut(&(s, d)) {
            Some(link) => {
                link.active = active;
                true
            }
            None => false,
        }
    }

    /// Clear every router's transient query state.
    ///
    /// Runs at the start of every query so that queries are independent and
    /// order-insensitive.
    pub fn reset_all(&mut self) {
        for router in &mut self.routers {
            router.reset();
        }
    }

    /// Reverse every link and rebuild the link table and all adjacency
    /// lists accordingly. An involution: applying it twice restores the
    /// original topology exactly.
    pub fn transpose(&mut self) {
        for router in &mut self.routers {
            router.adjacent.clear();
        }

        let mut reversed = HashMap::with_capacity(self.links.len());
        for (_, mut link) in self.links.drain() {
            link.reverse();
            reversed.insert((link.src, link.dst), link);
        }
        self.links = reversed;

        let pairs: Vec<(RouterId, RouterId)> = self.links.keys().copied().collect();
        for (s, d) in pairs {
            self.insert_adjacent(s, d);
        }

        debug_assert!(self.validate().is_ok());
    }

    /// Check the mutual-consistency invariants between the router arena,
    /// the name index, the link table and the adjacency lists.
    pub fn validate(&self) -> Result<(), GraphError> {
        validate::validate(self)
    }

    /// Register `dst` in `src`'s adjacency list, keeping it sorted by
    /// neighbour name and free of duplicates.
    fn insert_adjacent(&mut self, src: RouterId, dst: RouterId) {
        let pos = {
            let routers = &self.routers;
            let dst_name = routers[dst.idx()].name.as_str();
            match routers[src.idx()]
                .adjacent
                .binary_search_by(|&a| routers[a.idx()].name.as_str().cmp(dst_name))
            {
                Ok(_) => return,
                Err(pos) => pos,
            }
        };
        self.routers[src.idx()].adjacent.insert(pos, dst);
    }
}
