//! All-pairs reachability via the transposed graph.

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use nf_core::RouterId;
use nf_graph::Network;
use tracing::debug;

/// For every router, the names of the routers that can reach it through
/// active routers and active links. Down routers carry empty sets.
pub type AncestorMap = BTreeMap<String, BTreeSet<String>>;

/// Compute every router's ancestor set.
///
/// The graph is transposed once, so that for each router `v` a forward
/// traversal over the reversed links visits exactly the routers with an
/// active path *to* `v` in the original orientation. A second transpose
/// restores the topology, making the whole query a topological no-op.
///
/// The per-source traversal handles cycles exactly: a router's ancestor
/// set never depends on the order routers are visited in. Ancestor sets
/// are also stored on the routers until the next reset.
pub fn reachability(net: &mut Network) -> AncestorMap {
    net.reset_all();
    net.transpose();

    let ids: Vec<RouterId> = net.ids().collect();
    for &v in &ids {
        if !net.router(v).is_active() {
            continue;
        }
        let ancestors = collect_ancestors(net, v);
        net.router_mut(v).set_ancestors(ancestors);
    }

    net.transpose();

    let mut map = AncestorMap::new();
    for &v in &ids {
        let router = net.router(v);
        let names = router
            .ancestors()
            .iter()
            .map(|&a| net.router(a).name().to_string())
            .collect();
        map.insert(router.name().to_string(), names);
    }
    debug!(routers = map.len(), "computed reachability");
    map
}

/// Breadth-first scan from `v` over the (currently transposed) adjacency.
/// Every router reached through an active link into an active router is an
/// ancestor of `v`; `v` itself is excluded even when it sits on a cycle.
fn collect_ancestors(net: &Network, v: RouterId) -> BTreeSet<RouterId> {
    let mut ancestors = BTreeSet::new();
    let mut seen = vec![false; net.router_count()];
    let mut queue = VecDeque::from([v]);
    seen[v.idx()] = true;

    while let Some(u) = queue.pop_front() {
        for &w in net.router(u).adjacent() {
            if seen[w.idx()] {
                continue;
            }
            let link = net
                .link(u, w)
                .expect("adjacency is consistent with the link table");
            if !link.is_active() || !net.router(w).is_active() {
                continue;
            }
            seen[w.idx()] = true;
            ancestors.insert(w);
            queue.push_back(w);
        }
    }
    ancestors
}
