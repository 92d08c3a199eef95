//! Network model: nodes, directed edges and their labels
//!
//! A [`Network`] is built once from `(from, label, to)` triples and never
//! mutated afterwards. Filtering produces a fresh network.

mod filter;
mod types;

pub use filter::split_self_loops;
pub use types::{Edge, EdgeSet};

use std::collections::{HashMap, HashSet};

use crate::config::DuplicateEdgePolicy;
use crate::error::{PathriderError, Result};

/// A directed network with labelled edges
#[derive(Debug, Clone)]
pub struct Network {
    nodes: Vec<String>,
    node_index: HashSet<String>,
    edges: EdgeSet,
    labels: HashMap<Edge, Vec<String>>,
}

impl Network {
    /// Build a network from `(from, label, to)` triples.
    ///
    /// Fails with `EmptyInput` when no triple is given and with `MultiEdge`
    /// when `policy` is [`DuplicateEdgePolicy::Reject`] and an ordered pair
    /// repeats.
    pub fn from_triples<I, S>(triples: I, policy: DuplicateEdgePolicy) -> Result<Self>
    where
        I: IntoIterator<Item = (S, S, S)>,
        S: Into<String>,
    {
        let mut network = Network::empty();
        for (from, label, to) in triples {
            network.push_triple(from.into(), label.into(), to.into(), policy)?;
        }

        if network.edges.is_empty() {
            crate::bail_empty!("network", "after reading");
        }

        Ok(network)
    }

    fn empty() -> Self {
        Self {
            nodes: Vec::new(),
            node_index: HashSet::new(),
            edges: EdgeSet::new(),
            labels: HashMap::new(),
        }
    }

    fn push_triple(
        &mut self,
        from: String,
        label: String,
        to: String,
        policy: DuplicateEdgePolicy,
    ) -> Result<()> {
        if from.is_empty() || to.is_empty() || label.is_empty() {
            return Err(PathriderError::Other(format!(
                "empty field in edge ({:?}, {:?}, {:?})",
                from, label, to
            )));
        }

        let edge = Edge::new(from, to);
        if self.edges.contains(&edge) && policy == DuplicateEdgePolicy::Reject {
            return Err(PathriderError::MultiEdge {
                from: edge.from,
                to: edge.to,
            });
        }

        self.add_node(&edge.from);
        self.add_node(&edge.to);

        let labels = self.labels.entry(edge.clone()).or_default();
        if !labels.contains(&label) {
            labels.push(label);
        }
        self.edges.insert(edge);
        Ok(())
    }

    fn add_node(&mut self, node: &str) {
        if self.node_index.insert(node.to_string()) {
            self.nodes.push(node.to_string());
        }
    }

    /// Nodes in order of first appearance
    pub fn nodes(&self) -> &[String] {
        &self.nodes
    }

    pub fn contains_node(&self, node: &str) -> bool {
        self.node_index.contains(node)
    }

    /// Edges in order of first appearance
    pub fn edges(&self) -> &[Edge] {
        self.edges.as_slice()
    }

    /// Labels of an edge, empty if the edge is not part of this network
    pub fn labels(&self, edge: &Edge) -> &[String] {
        self.labels.get(edge).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Expand edges into `(from, label, to)` rows, one row per label.
    ///
    /// Edges unknown to this network produce no rows.
    pub fn labelled_rows<'a>(&'a self, edges: &'a [Edge]) -> Vec<(&'a str, &'a str, &'a str)> {
        edges
            .iter()
            .flat_map(|edge| {
                self.labels(edge)
                    .iter()
                    .map(move |label| (edge.from.as_str(), label.as_str(), edge.to.as_str()))
            })
            .collect()
    }
}
