//! Node and edge adjacency derived from an edge list

use std::collections::{BTreeMap, HashMap};

use super::Direction;
use crate::network::Edge;

/// Read-only adjacency view over a fixed edge list, in one direction.
///
/// Holds the direct neighbors of every node (successors downstream,
/// predecessors upstream) and, for every edge, the edges one hop further
/// in that direction. Node keys iterate in sorted order.
#[derive(Debug, Clone)]
pub struct Adjacency {
    direction: Direction,
    nodes: BTreeMap<String, Vec<String>>,
    edges: HashMap<Edge, Vec<Edge>>,
}

impl Adjacency {
    /// Build the adjacency of a list of distinct edges
    pub fn build(edges: &[Edge], direction: Direction) -> Self {
        let mut nodes: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for edge in edges {
            nodes.entry(edge.from.clone()).or_default();
            nodes.entry(edge.to.clone()).or_default();
        }
        for edge in edges {
            let (node, neighbor) = direction.endpoints(edge);
            nodes
                .entry(node.to_string())
                .or_default()
                .push(neighbor.to_string());
        }

        let mut next: HashMap<Edge, Vec<Edge>> = HashMap::with_capacity(edges.len());
        for (node, neighbors) in &nodes {
            for neighbor in neighbors {
                let hops: Vec<Edge> = nodes
                    .get(neighbor)
                    .map(|further| {
                        further
                            .iter()
                            .map(|n3| direction.edge(neighbor, n3))
                            .collect()
                    })
                    .unwrap_or_default();
                next.insert(direction.edge(node, neighbor), hops);
            }
        }

        tracing::trace!(
            direction = %direction,
            nodes = nodes.len(),
            edges = next.len(),
            "build_adjacency"
        );

        Self {
            direction,
            nodes,
            edges: next,
        }
    }

    pub fn successors(edges: &[Edge]) -> Self {
        Self::build(edges, Direction::Down)
    }

    pub fn predecessors(edges: &[Edge]) -> Self {
        Self::build(edges, Direction::Up)
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Direct neighbors of a node; empty for unknown nodes
    pub fn neighbors(&self, node: &str) -> &[String] {
        self.nodes.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Edges one hop beyond `edge` in this direction; empty for unknown edges
    pub fn next_edges(&self, edge: &Edge) -> &[Edge] {
        self.edges.get(edge).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every node with its neighbor list, in sorted node order
    pub fn nodes(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.nodes
            .iter()
            .map(|(node, neighbors)| (node.as_str(), neighbors.as_slice()))
    }
}
