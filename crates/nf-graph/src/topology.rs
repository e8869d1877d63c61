//! Ordered topology snapshots.

use std::fmt;

use nf_core::Real;
use serde::Serialize;

use crate::network::Network;

/// A point-in-time dump of the whole topology, ordered for printing:
/// routers by name, each router's links by target name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopologySnapshot {
    pub routers: Vec<RouterTopology>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouterTopology {
    pub name: String,
    pub active: bool,
    pub links: Vec<LinkTopology>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinkTopology {
    pub to: String,
    pub weight: Real,
    pub active: bool,
}

impl Network {
    /// Snapshot the topology for callers to format or serialize.
    pub fn topology(&self) -> TopologySnapshot {
        let routers = self
            .ids()
            .map(|id| {
                let router = self.router(id);
                let links = router
                    .adjacent()
                    .iter()
                    .map(|&dst| {
                        let link = self
                            .link(id, dst)
                            .expect("adjacency is consistent with the link table");
                        LinkTopology {
                            to: self.router(dst).name().to_string(),
                            weight: link.weight(),
                            active: link.is_active(),
                        }
                    })
                    .collect();
                RouterTopology {
                    name: router.name().to_string(),
                    active: router.is_active(),
                    links,
                }
            })
            .collect();
        TopologySnapshot { routers }
    }
}

impl fmt::Display for TopologySnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for router in &self.routers {
            write!(f, "{}", router.name)?;
            if !router.active {
                write!(f, " <DOWN>")?;
            }
            writeln!(f)?;
            for link in &router.links {
                write!(f, "  {} {}", link.to, link.weight)?;
                if !link.active {
                    write!(f, " <DOWN>")?;
                }
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Network {
        let mut net = Network::new();
        net.add_link("A", "B", 2.0).unwrap();
        net.add_link("B", "A", 2.0).unwrap();
        net.add_link("A", "C", 10.0).unwrap();
        net.set_link_active("A", "C", false);
        net.set_router_active("B", false);
        net
    }

    #[test]
    fn snapshot_is_ordered() {
        let snap = sample().topology();
        let names: Vec<&str> = snap.routers.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["A", "B", "C"]);
        let a_links: Vec<&str> = snap.routers[0].links.iter().map(|l| l.to.as_str()).collect();
        assert_eq!(a_links, ["B", "C"]);
    }

    #[test]
    fn snapshot_flags_down_entities() {
        let snap = sample().topology();
        assert!(!snap.routers[1].active);
        assert!(!snap.routers[0].links[1].active);
        assert!(snap.routers[0].links[0].active);
    }

    #[test]
    fn display_matches_expected_layout() {
        let text = sample().topology().to_string();
        let expected = "A\n  B 2\n  C 10 <DOWN>\nB <DOWN>\n  A 2\nC\n";
        assert_eq!(text, expected);
    }
}
