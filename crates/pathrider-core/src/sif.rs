//! Reading and writing SIF networks and node lists
//!
//! A SIF network holds one `source<TAB>label<TAB>target` triple per line.
//! A node list holds one node per line. Blank lines are skipped and leading
//! whitespace of every field is trimmed.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::DuplicateEdgePolicy;
use crate::error::{PathriderError, Result};
use crate::network::{Edge, Network};

/// Required extension of network output files
pub const SIF_EXTENSION: &str = "sif";

/// Nodes read from a node list file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeList {
    /// Nodes present in the network, first occurrence order, no duplicates
    pub nodes: Vec<String>,
    /// Nodes listed in the file but absent from the network
    pub dropped: Vec<String>,
}

fn read_file(path: &Path, what: &str) -> Result<String> {
    fs::read_to_string(path)
        .map_err(|e| PathriderError::io_operation(&format!("read {}", what), path.display(), e))
}

/// Read a SIF network file
pub fn read_network(path: &Path, policy: DuplicateEdgePolicy) -> Result<Network> {
    let content = read_file(path, "network")?;

    let mut triples = Vec::new();
    for (index, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split('\t').map(str::trim_start).collect();
        let invalid = |reason: String| PathriderError::InvalidNetwork {
            path: path.to_path_buf(),
            line: index + 1,
            reason,
        };

        if fields.len() != 3 {
            return Err(invalid(format!(
                "expected 3 tab-separated fields, found {}",
                fields.len()
            )));
        }
        if fields.iter().any(|field| field.is_empty()) {
            return Err(invalid("empty field".to_string()));
        }

        triples.push((fields[0], fields[1], fields[2]));
    }

    if triples.is_empty() {
        crate::bail_empty!(path.display(), "after reading");
    }

    let network = Network::from_triples(triples, policy)?;
    tracing::debug!(
        path = %path.display(),
        nodes = network.nodes().len(),
        edges = network.edges().len(),
        "read_network"
    );
    Ok(network)
}

/// Read a node list, keeping only nodes present in `network`.
///
/// Absent nodes are reported in [`NodeList::dropped`] rather than failing.
/// A list left empty is an `EmptyInput` error.
pub fn read_nodes(path: &Path, network: &Network) -> Result<NodeList> {
    let content = read_file(path, "node list")?;

    let mut list = NodeList::default();
    let mut seen: HashSet<&str> = HashSet::new();
    for (index, line) in content.lines().enumerate() {
        let node = line.trim_start();
        if node.trim_end().is_empty() {
            continue;
        }
        if node.contains('\t') {
            return Err(PathriderError::InvalidNodeList {
                path: path.to_path_buf(),
                line: index + 1,
                reason: "expected a single node per line".to_string(),
            });
        }
        if !seen.insert(node) {
            continue;
        }

        if network.contains_node(node) {
            list.nodes.push(node.to_string());
        } else {
            tracing::debug!(path = %path.display(), node, "node not in network");
            list.dropped.push(node.to_string());
        }
    }

    if list.nodes.is_empty() {
        crate::bail_empty!(path.display(), "after reading");
    }

    Ok(list)
}

/// Write edges as SIF rows, one row per label. Returns the row count.
pub fn write_network(path: &Path, network: &Network, edges: &[Edge]) -> Result<usize> {
    let rows = network.labelled_rows(edges);
    if rows.is_empty() {
        crate::bail_empty!(path.display(), "before writing");
    }

    let mut out = String::new();
    for (from, label, to) in &rows {
        out.push_str(from);
        out.push('\t');
        out.push_str(label);
        out.push('\t');
        out.push_str(to);
        out.push('\n');
    }

    fs::write(path, out)
        .map_err(|e| PathriderError::io_operation("write network", path.display(), e))?;
    tracing::debug!(path = %path.display(), rows = rows.len(), "write_network");
    Ok(rows.len())
}

/// Write a node list, one node per line
pub fn write_nodes(path: &Path, nodes: &[String]) -> Result<()> {
    if nodes.is_empty() {
        crate::bail_empty!(path.display(), "before writing");
    }

    let mut out = nodes.join("\n");
    out.push('\n');
    fs::write(path, out)
        .map_err(|e| PathriderError::io_operation("write node list", path.display(), e))?;
    Ok(())
}

/// Check that an output network path carries the `.sif` extension
pub fn validate_output_path(path: &Path) -> Result<()> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(SIF_EXTENSION) => Ok(()),
        _ => Err(PathriderError::InvalidOutputPath {
            path: path.to_path_buf(),
            reason: format!("must have the \".{}\" file extension", SIF_EXTENSION),
        }),
    }
}

/// Sibling output path: `dir/out.sif` with suffix `shortest.sif` gives
/// `dir/out-shortest.sif`
pub fn derived_path(out: &Path, suffix: &str) -> PathBuf {
    let base = out
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let stem = base
        .strip_suffix(&format!(".{}", SIF_EXTENSION))
        .unwrap_or(&base);
    out.with_file_name(format!("{}-{}", stem, suffix))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_read_network() {
        let dir = tempdir().unwrap();
        let path = write(
            dir.path(),
            "net.sif",
            "A\tactivation\tB\n\nB\t inhibition\tC\r\nA\tbinding\tB\n",
        );

        let network = read_network(&path, DuplicateEdgePolicy::Merge).unwrap();
        assert_eq!(network.nodes(), &["A", "B", "C"]);
        assert_eq!(network.edges(), &[Edge::new("A", "B"), Edge::new("B", "C")]);
        assert_eq!(network.labels(&Edge::new("A", "B")), &["activation", "binding"]);
        assert_eq!(network.labels(&Edge::new("B", "C")), &["inhibition"]);
    }

    #[test]
    fn test_read_network_wrong_field_count() {
        let dir = tempdir().unwrap();
        let path = write(dir.path(), "net.sif", "A\tx\tB\nB\tC\n");

        let err = read_network(&path, DuplicateEdgePolicy::Merge).unwrap_err();
        assert!(matches!(err, PathriderError::InvalidNetwork { line: 2, .. }));
    }

    #[test]
    fn test_read_network_empty_file() {
        let dir = tempdir().unwrap();
        let path = write(dir.path(), "net.sif", "\n\n");

        let err = read_network(&path, DuplicateEdgePolicy::Merge).unwrap_err();
        assert!(matches!(err, PathriderError::EmptyInput { .. }));
    }

    #[test]
    fn test_read_network_reject_policy() {
        let dir = tempdir().unwrap();
        let path = write(dir.path(), "net.sif", "A\tx\tB\nA\ty\tB\n");

        let err = read_network(&path, DuplicateEdgePolicy::Reject).unwrap_err();
        assert!(matches!(err, PathriderError::MultiEdge { .. }));
    }

    #[test]
    fn test_read_network_missing_file() {
        let dir = tempdir().unwrap();
        let err = read_network(&dir.path().join("nope.sif"), DuplicateEdgePolicy::Merge)
            .unwrap_err();
        assert!(matches!(err, PathriderError::FailedOperationWithTarget { .. }));
    }

    #[test]
    fn test_read_nodes_drops_unknown_and_duplicates() {
        let dir = tempdir().unwrap();
        let net = write(dir.path(), "net.sif", "A\tx\tB\nB\tx\tC\n");
        let network = read_network(&net, DuplicateEdgePolicy::Merge).unwrap();
        let path = write(dir.path(), "nodes.txt", "C\n  A\nZ\nC\n\n");

        let list = read_nodes(&path, &network).unwrap();
        assert_eq!(list.nodes, vec!["C", "A"]);
        assert_eq!(list.dropped, vec!["Z"]);
    }

    #[test]
    fn test_read_nodes_all_unknown_is_empty() {
        let dir = tempdir().unwrap();
        let net = write(dir.path(), "net.sif", "A\tx\tB\n");
        let network = read_network(&net, DuplicateEdgePolicy::Merge).unwrap();
        let path = write(dir.path(), "nodes.txt", "Y\nZ\n");

        let err = read_nodes(&path, &network).unwrap_err();
        assert!(matches!(err, PathriderError::EmptyInput { .. }));
    }

    #[test]
    fn test_read_nodes_rejects_multiple_fields() {
        let dir = tempdir().unwrap();
        let net = write(dir.path(), "net.sif", "A\tx\tB\n");
        let network = read_network(&net, DuplicateEdgePolicy::Merge).unwrap();
        let path = write(dir.path(), "nodes.txt", "A\nA\tB\n");

        let err = read_nodes(&path, &network).unwrap_err();
        assert!(matches!(err, PathriderError::InvalidNodeList { line: 2, .. }));
    }

    #[test]
    fn test_write_network_expands_labels() {
        let dir = tempdir().unwrap();
        let net = write(dir.path(), "net.sif", "A\tx\tB\nA\ty\tB\nB\tz\tC\n");
        let network = read_network(&net, DuplicateEdgePolicy::Merge).unwrap();
        let out = dir.path().join("out.sif");

        let rows = write_network(&out, &network, &[Edge::new("B", "C"), Edge::new("A", "B")])
            .unwrap();
        assert_eq!(rows, 3);
        assert_eq!(
            fs::read_to_string(&out).unwrap(),
            "B\tz\tC\nA\tx\tB\nA\ty\tB\n"
        );
    }

    #[test]
    fn test_write_network_empty_is_error() {
        let dir = tempdir().unwrap();
        let net = write(dir.path(), "net.sif", "A\tx\tB\n");
        let network = read_network(&net, DuplicateEdgePolicy::Merge).unwrap();
        let out = dir.path().join("out.sif");

        assert!(write_network(&out, &network, &[]).is_err());
        assert!(!out.exists());
    }

    #[test]
    fn test_write_nodes() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("out-terminal.txt");
        write_nodes(&out, &["A".to_string(), "B".to_string()]).unwrap();
        assert_eq!(fs::read_to_string(&out).unwrap(), "A\nB\n");
        assert!(write_nodes(&dir.path().join("empty.txt"), &[]).is_err());
    }

    #[test]
    fn test_validate_output_path() {
        assert!(validate_output_path(Path::new("results/out.sif")).is_ok());
        assert!(validate_output_path(Path::new("out.txt")).is_err());
        assert!(validate_output_path(Path::new("out")).is_err());
    }

    #[test]
    fn test_derived_path() {
        assert_eq!(
            derived_path(Path::new("out.sif"), "shortest.sif"),
            PathBuf::from("out-shortest.sif")
        );
        assert_eq!(
            derived_path(Path::new("results/run1.sif"), "terminal.txt"),
            PathBuf::from("results/run1-terminal.txt")
        );
    }
}
