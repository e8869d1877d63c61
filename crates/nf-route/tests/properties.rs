//! Randomized properties for both query engines.

use std::collections::{BTreeMap, HashMap, VecDeque};

use nf_core::{Real, Tolerances, nearly_equal};
use nf_graph::Network;
use nf_route::{RouteError, reachability, shortest_path};
use proptest::prelude::*;

const POOL: usize = 7;

fn name(i: u8) -> String {
    format!("R{}", i as usize % POOL)
}

#[derive(Debug, Clone)]
struct Scenario {
    edges: Vec<(u8, u8, f64)>,
    down_routers: Vec<u8>,
    down_links: Vec<(u8, u8)>,
}

fn scenario() -> impl Strategy<Value = Scenario> {
    (
        prop::collection::vec((0u8..POOL as u8, 0u8..POOL as u8, 0.0f64..50.0), 1..30),
        prop::collection::vec(0u8..POOL as u8, 0..3),
        prop::collection::vec((0u8..POOL as u8, 0u8..POOL as u8), 0..5),
    )
        .prop_map(|(edges, down_routers, down_links)| Scenario {
            edges,
            down_routers,
            down_links,
        })
}

fn build(scenario: &Scenario) -> Network {
    let mut net = Network::new();
    for &(s, d, w) in &scenario.edges {
        if s % POOL as u8 != d % POOL as u8 {
            net.add_link(&name(s), &name(d), w).unwrap();
        }
    }
    for &r in &scenario.down_routers {
        net.set_router_active(&name(r), false);
    }
    for &(s, d) in &scenario.down_links {
        net.set_link_active(&name(s), &name(d), false);
    }
    net
}

/// Reference distances by exhaustive relaxation: no heap involved, so any
/// ordering bug in the engine's queue shows up as a mismatch.
fn reference_distances(net: &Network, src: &str) -> HashMap<String, Real> {
    let mut dist: HashMap<String, Real> = net
        .ids()
        .map(|id| (net.router(id).name().to_string(), Real::INFINITY))
        .collect();
    dist.insert(src.to_string(), 0.0);

    let n = net.router_count();
    for _ in 0..n {
        let mut changed = false;
        for u in net.ids() {
            if !net.router(u).is_active() {
                continue;
            }
            let du = dist[net.router(u).name()];
            if du.is_infinite() {
                continue;
            }
            for &v in net.router(u).adjacent() {
                let link = net.link(u, v).unwrap();
                if !link.is_active() {
                    continue;
                }
                let cand = du + link.weight();
                let entry = dist.get_mut(net.router(v).name()).unwrap();
                if cand < *entry {
                    *entry = cand;
                    changed = true;
                }
            }
        }
        if !changed {
            break;
        }
    }
    dist
}

/// Reference reachability: a plain scan from each active router over the
/// original orientation.
fn reference_reachable(net: &Network) -> BTreeMap<String, Vec<String>> {
    let mut out = BTreeMap::new();
    for u in net.ids() {
        let mut reached = Vec::new();
        if net.router(u).is_active() {
            let mut seen = vec![false; net.router_count()];
            seen[u.idx()] = true;
            let mut queue = VecDeque::from([u]);
            while let Some(x) = queue.pop_front() {
                for &y in net.router(x).adjacent() {
                    if seen[y.idx()] || !net.link(x, y).unwrap().is_active() {
                        continue;
                    }
                    if !net.router(y).is_active() {
                        continue;
                    }
                    seen[y.idx()] = true;
                    reached.push(net.router(y).name().to_string());
                    queue.push_back(y);
                }
            }
        }
        reached.sort();
        out.insert(net.router(u).name().to_string(), reached);
    }
    out
}

proptest! {
    #[test]
    fn shortest_path_matches_exhaustive_relaxation(
        s in scenario(),
        src in 0u8..POOL as u8,
        dst in 0u8..POOL as u8,
    ) {
        let mut net = build(&s);
        let src = name(src);
        let dst = name(dst);
        prop_assume!(net.lookup(&src).is_some() && net.lookup(&dst).is_some());

        let reference = reference_distances(&net, &src);
        let tol = Tolerances::default();

        match shortest_path(&mut net, &src, &dst) {
            Ok(route) => {
                prop_assert!(route.cost >= 0.0);
                prop_assert!(nearly_equal(route.cost, reference[&dst], tol));

                // the hop list must be a real active walk of that exact cost
                prop_assert_eq!(route.hops.first().unwrap(), &src);
                prop_assert_eq!(route.hops.last().unwrap(), &dst);
                let mut walked = 0.0;
                for pair in route.hops.windows(2) {
                    let link = net.link_by_name(&pair[0], &pair[1]).unwrap();
                    prop_assert!(link.is_active());
                    let from = net.lookup(&pair[0]).unwrap();
                    prop_assert!(net.router(from).is_active());
                    walked += link.weight();
                }
                prop_assert!(nearly_equal(walked, route.cost, tol));
            }
            Err(RouteError::Unreachable { .. }) => {
                prop_assert!(reference[&dst].is_infinite());
            }
            Err(other) => prop_assert!(false, "unexpected error: {}", other),
        }
    }

    #[test]
    fn repeated_queries_agree(s in scenario(), src in 0u8..POOL as u8, dst in 0u8..POOL as u8) {
        let mut net = build(&s);
        let src = name(src);
        let dst = name(dst);
        prop_assume!(net.lookup(&src).is_some() && net.lookup(&dst).is_some());

        let first = shortest_path(&mut net, &src, &dst);
        let between = reachability(&mut net);
        let second = shortest_path(&mut net, &src, &dst);
        prop_assert_eq!(first, second);
        prop_assert_eq!(between, reachability(&mut net));
    }

    #[test]
    fn ancestor_sets_match_path_existence(s in scenario()) {
        let mut net = build(&s);
        let before = net.topology();

        let ancestors = reachability(&mut net);
        prop_assert_eq!(net.topology(), before);
        net.validate().unwrap();

        let reachable = reference_reachable(&net);
        // u is an ancestor of v exactly when v is in u's reachable set
        for (u, reached) in &reachable {
            for v in ancestors.keys() {
                let expected = reached.contains(v);
                let actual = ancestors[v].contains(u);
                prop_assert_eq!(actual, expected, "u={}, v={}", u, v);
            }
        }
    }
}
