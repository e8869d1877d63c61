//! Graph consistency validation.

use nf_core::RouterId;

use crate::error::GraphError;
use crate::network::Network;

/// Check that the router arena, name index, link table and adjacency lists
/// all agree with each other.
pub(crate) fn validate(net: &Network) -> Result<(), GraphError> {
    let count = net.router_count();

    // The name index and the arena must cover each other exactly
    if net.by_name().len() != count {
        return Err(GraphError::NameIndex {
            name: format!("{} names for {} routers", net.by_name().len(), count),
        });
    }
    for (name, &id) in net.by_name() {
        if id.idx() >= count || net.router(id).name() != name {
            return Err(GraphError::NameIndex { name: name.clone() });
        }
    }

    // Every link must have live endpoints, a matching key and an adjacency entry
    for (&(s, d), link) in net.links() {
        for endpoint in [s, d] {
            if endpoint.idx() >= count {
                return Err(GraphError::ForeignEndpoint {
                    index: endpoint.index(),
                });
            }
        }
        if link.src() != s || link.dst() != d {
            return Err(GraphError::LinkKeyMismatch {
                src: net.router(s).name().to_string(),
                dst: net.router(d).name().to_string(),
            });
        }
        if !net.router(s).adjacent().contains(&d) {
            return Err(GraphError::MissingAdjacency {
                src: net.router(s).name().to_string(),
                dst: net.router(d).name().to_string(),
            });
        }
    }

    // Every adjacency list must be name-sorted, duplicate-free and backed by links
    for i in 0..count {
        let id = RouterId::from_index(i as u32);
        let router = net.router(id);
        let mut prev: Option<&str> = None;
        for &a in router.adjacent() {
            let a_name = net.router(a).name();
            if let Some(p) = prev
                && p >= a_name
            {
                return Err(GraphError::AdjacencyOrder {
                    router: router.name().to_string(),
                });
            }
            prev = Some(a_name);
            if net.link(id, a).is_none() {
                return Err(GraphError::DanglingAdjacency {
                    src: router.name().to_string(),
                    dst: a_name.to_string(),
                });
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::network::Network;

    #[test]
    fn fresh_network_is_consistent() {
        let net = Network::new();
        assert!(net.validate().is_ok());
    }

    #[test]
    fn mutated_network_stays_consistent() {
        let mut net = Network::new();
        net.add_link("A", "B", 2.0).unwrap();
        net.add_link("B", "A", 2.0).unwrap();
        net.add_link("B", "C", 3.0).unwrap();
        net.delete_link("B", "A");
        net.set_router_active("C", false);
        net.validate().unwrap();

        net.transpose();
        net.validate().unwrap();
        net.transpose();
        net.validate().unwrap();
    }
}
