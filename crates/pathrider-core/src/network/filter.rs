//! Node blacklisting and self-loop separation

use std::collections::HashSet;

use super::{Edge, EdgeSet, Network};
use crate::error::Result;

impl Network {
    /// Remove every edge touching a blacklisted node.
    ///
    /// Nodes and labels are rebuilt from the surviving edges, so nodes only
    /// connected through blacklisted ones disappear too. A network left
    /// without edges is an `EmptyInput` error.
    pub fn without_nodes(&self, blacklist: &[String]) -> Result<Network> {
        let blacklist: HashSet<&str> = blacklist.iter().map(String::as_str).collect();

        let mut filtered = Network::empty();
        for edge in self.edges() {
            if blacklist.contains(edge.from.as_str()) || blacklist.contains(edge.to.as_str()) {
                continue;
            }
            filtered.add_node(&edge.from);
            filtered.add_node(&edge.to);
            filtered
                .labels
                .insert(edge.clone(), self.labels(edge).to_vec());
            filtered.edges.insert(edge.clone());
        }

        if filtered.edges.is_empty() {
            crate::bail_empty!("network", "after blacklisting");
        }

        tracing::debug!(
            removed = self.edges().len() - filtered.edges().len(),
            kept = filtered.edges().len(),
            "blacklist_filter"
        );
        Ok(filtered)
    }
}

/// Split self-loops out of an edge list.
///
/// Returns the loop-free edges and the nodes that carried a self-loop.
pub fn split_self_loops(edges: &[Edge]) -> (EdgeSet, HashSet<String>) {
    let mut loop_free = EdgeSet::new();
    let mut self_looped = HashSet::new();

    for edge in edges {
        if edge.is_self_loop() {
            self_looped.insert(edge.from.clone());
        } else {
            loop_free.insert(edge.clone());
        }
    }

    (loop_free, self_looped)
}
