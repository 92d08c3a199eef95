//! Edge-set propagation from seed nodes to a fixpoint

use super::{Adjacency, Direction};
use crate::network::{Edge, EdgeSet};

/// Collect every edge reachable from `seeds` along `adjacency`.
///
/// Starts from the direct edges of each seed and repeatedly follows the
/// next-edge relation until a round adds nothing. Membership is checked
/// before insertion, so cycles terminate. Seeds without edges contribute
/// nothing.
pub fn propagate(seeds: &[String], adjacency: &Adjacency) -> EdgeSet {
    let direction = adjacency.direction();
    let mut reached = EdgeSet::new();
    let mut frontier: Vec<Edge> = Vec::new();

    for seed in seeds {
        for neighbor in adjacency.neighbors(seed) {
            let edge = direction.edge(seed, neighbor);
            if reached.insert(edge.clone()) {
                frontier.push(edge);
            }
        }
    }

    let mut round = 0usize;
    while !frontier.is_empty() {
        round += 1;
        let mut next = Vec::new();
        for edge in &frontier {
            for candidate in adjacency.next_edges(edge) {
                if reached.insert(candidate.clone()) {
                    next.push(candidate.clone());
                }
            }
        }
        tracing::trace!(%direction, round, added = next.len(), "propagation_round");
        frontier = next;
    }

    reached
}

/// Edges on any walk leaving one of `seeds`
pub fn forward_edges(seeds: &[String], edges: &[Edge]) -> EdgeSet {
    propagate(seeds, &Adjacency::build(edges, Direction::Down))
}

/// Edges on any walk arriving at one of `seeds`
pub fn backward_edges(seeds: &[String], edges: &[Edge]) -> EdgeSet {
    propagate(seeds, &Adjacency::build(edges, Direction::Up))
}

/// Edges present in both sets, in the order of `left`
pub fn intersect_edges(left: &EdgeSet, right: &EdgeSet) -> EdgeSet {
    left.iter()
        .filter(|edge| right.contains(edge))
        .cloned()
        .collect()
}
