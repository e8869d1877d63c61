//! Shortest transmission-time queries.

use nf_core::{Real, RouterId};
use nf_graph::Network;
use tracing::{debug, warn};

use crate::error::{RouteError, RouteResult};
use crate::heap::MinHeap;

/// A shortest path: router names from source to destination, plus the
/// total transmission time.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    pub hops: Vec<String>,
    pub cost: Real,
}

/// Find the cheapest active path between two named routers.
///
/// Both endpoints must exist in the model. The query resets transient
/// per-router state first, so earlier queries never influence this one.
/// When source and destination coincide the route has a single hop and
/// zero cost.
pub fn shortest_path(net: &mut Network, src: &str, dst: &str) -> RouteResult<Route> {
    let source = net.lookup(src).ok_or_else(|| RouteError::UnknownRouter {
        name: src.to_string(),
    })?;
    let target = net.lookup(dst).ok_or_else(|| RouteError::UnknownRouter {
        name: dst.to_string(),
    })?;

    run(net, source)?;

    if net.router(target).distance().is_infinite() {
        return Err(RouteError::Unreachable {
            name: dst.to_string(),
        });
    }
    Ok(Route {
        hops: collect_path(net, target),
        cost: net.router(target).distance(),
    })
}

/// Dijkstra over the live network.
///
/// Every router enters the queue up front; the queue is kept consistent
/// with relaxed distances through decrease-key. A down router leaves the
/// queue without its outgoing links being relaxed, so no path can pass
/// through it; relaxing *into* a down router is allowed and only ever
/// terminates a path there.
fn run(net: &mut Network, source: RouterId) -> RouteResult<()> {
    net.reset_all();
    net.router_mut(source).set_distance(0.0);

    let mut heap = MinHeap::build(net.ids().map(|id| (id, net.router(id).distance())));
    debug!(
        source = net.router(source).name(),
        routers = heap.len(),
        "running shortest-path traversal"
    );

    while !heap.is_empty() {
        let (u, _) = heap.extract_min()?;
        if !net.router(u).is_active() {
            continue;
        }

        let degree = net.router(u).adjacent().len();
        for i in 0..degree {
            let v = net.router(u).adjacent()[i];
            let Some(link) = net.link(u, v) else { continue };
            if !link.is_active() {
                continue;
            }
            let candidate = net.router(u).distance() + link.weight();
            if candidate < net.router(v).distance() {
                net.router_mut(v).set_distance(candidate);
                net.router_mut(v).set_predecessor(Some(u));
                if let Err(err) = heap.decrease_key(v, candidate) {
                    // rejected updates are reported and ignored
                    warn!(%err, router = net.router(v).name(), "key update rejected");
                }
            }
        }
    }
    Ok(())
}

/// Walk predecessors back from the destination and reverse, avoiding
/// recursion on long paths.
fn collect_path(net: &Network, target: RouterId) -> Vec<String> {
    let mut hops = Vec::new();
    let mut cursor = Some(target);
    while let Some(id) = cursor {
        hops.push(net.router(id).name().to_string());
        cursor = net.router(id).predecessor();
    }
    hops.reverse();
    hops
}
