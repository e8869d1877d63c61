//! Link-file loader.
//!
//! The format is whitespace-separated triples, one base relation per line:
//!
//! ```text
//! <source> <destination> <weight>
//! ```
//!
//! Each line is symmetrized into two directed links. Malformed lines are
//! skipped with a warning rather than aborting the load.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use nf_core::Real;
use tracing::warn;

use crate::error::GraphError;
use crate::network::Network;

/// What a load did: `pairs` base relations installed, `skipped` lines
/// dropped as malformed or unusable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadReport {
    pub pairs: usize,
    pub skipped: usize,
}

/// Load link triples from a reader into the network.
///
/// Empty lines are ignored. A line that does not parse as exactly
/// `<source> <destination> <weight>`, or whose link the model rejects
/// (self-loop, bad weight), is counted in `skipped` and logged.
pub fn load_links<R: BufRead>(net: &mut Network, reader: R) -> Result<LoadReport, GraphError> {
    let mut report = LoadReport::default();

    for (lineno, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let Some((src, dst, weight)) = parse_line(line) else {
            warn!(line = lineno + 1, content = line, "skipping malformed link line");
            report.skipped += 1;
            continue;
        };

        // one base relation per line, installed in both directions
        let installed = net
            .add_link(src, dst, weight)
            .and_then(|_| net.add_link(dst, src, weight));
        match installed {
            Ok(()) => report.pairs += 1,
            Err(err) => {
                warn!(line = lineno + 1, %err, "skipping unusable link line");
                report.skipped += 1;
            }
        }
    }

    Ok(report)
}

/// Load link triples from a file on disk.
pub fn load_links_path(
    net: &mut Network,
    path: impl AsRef<Path>,
) -> Result<LoadReport, GraphError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| GraphError::TopologyRead {
        path: path.to_path_buf(),
        source,
    })?;
    load_links(net, BufReader::new(file))
}

fn parse_line(line: &str) -> Option<(&str, &str, Real)> {
    let mut fields = line.split_whitespace();
    let src = fields.next()?;
    let dst = fields.next()?;
    let weight = fields.next()?.parse::<Real>().ok()?;
    if fields.next().is_some() {
        return None;
    }
    Some((src, dst, weight))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn loads_symmetric_pairs() {
        let mut net = Network::new();
        let input = "A B 2\nB C 3\nA C 10\n";
        let report = load_links(&mut net, Cursor::new(input)).unwrap();

        assert_eq!(report, LoadReport { pairs: 3, skipped: 0 });
        assert_eq!(net.router_count(), 3);
        assert_eq!(net.link_count(), 6);
        assert_eq!(net.link_by_name("B", "A").unwrap().weight(), 2.0);
        assert_eq!(net.link_by_name("C", "B").unwrap().weight(), 3.0);
    }

    #[test]
    fn malformed_lines_are_skipped() {
        let mut net = Network::new();
        let input = "A B 2\nnot a triple\nB C three\nB C 3 extra\n\nC D 4\n";
        let report = load_links(&mut net, Cursor::new(input)).unwrap();

        assert_eq!(report.pairs, 2);
        assert_eq!(report.skipped, 3);
        assert!(net.link_by_name("A", "B").is_some());
        assert!(net.link_by_name("C", "D").is_some());
        assert!(net.link_by_name("B", "C").is_none());
    }

    #[test]
    fn rejected_links_are_skipped() {
        let mut net = Network::new();
        let input = "A A 1\nB C -2\nB C 3\n";
        let report = load_links(&mut net, Cursor::new(input)).unwrap();

        assert_eq!(report.pairs, 1);
        assert_eq!(report.skipped, 2);
        assert_eq!(net.link_by_name("B", "C").unwrap().weight(), 3.0);
    }

    #[test]
    fn missing_file_is_an_error() {
        let mut net = Network::new();
        let err = load_links_path(&mut net, "/definitely/not/here.txt").unwrap_err();
        assert!(matches!(err, GraphError::TopologyRead { .. }));
    }
}
