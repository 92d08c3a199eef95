//! All shortest paths between node sets, fewest hops, ties preserved

use std::collections::HashSet;

use super::{Adjacency, Direction};
use crate::network::{split_self_loops, Edge, EdgeSet};

/// Breadth-first layering from `source`.
///
/// Each round keeps only the edges whose target was not reached in an
/// earlier round, so a node's first round is its distance from `source`.
/// Edges arriving at the same new node within one round are all kept.
/// The union of all rounds is the shortest-path DAG rooted at `source`.
pub fn shortest_path_dag(source: &str, successors: &Adjacency) -> EdgeSet {
    debug_assert_eq!(successors.direction(), Direction::Down);

    let mut dag = EdgeSet::new();
    let mut layer: Vec<Edge> = Vec::new();
    for neighbor in successors.neighbors(source) {
        let edge = Edge::new(source, neighbor.as_str());
        if dag.insert(edge.clone()) {
            layer.push(edge);
        }
    }

    let mut visited: HashSet<String> = HashSet::new();
    while !layer.is_empty() {
        for edge in &layer {
            visited.insert(edge.to.clone());
        }

        let mut next = Vec::new();
        for edge in &layer {
            for candidate in successors.next_edges(edge) {
                if !visited.contains(&candidate.to) && dag.insert(candidate.clone()) {
                    next.push(candidate.clone());
                }
            }
        }
        layer = next;
    }

    dag
}

/// Edges on every minimum-length path from `source` to `target`.
///
/// `predecessors` must be built over the shortest-path DAG of `source`.
/// Walks backward from `target` one layer at a time and stops at the first
/// layer holding an edge that leaves `source`. Returns an empty set when
/// `source` is never reached.
pub fn shortest_paths(source: &str, target: &str, predecessors: &Adjacency) -> EdgeSet {
    debug_assert_eq!(predecessors.direction(), Direction::Up);

    let mut shortest = EdgeSet::new();
    let mut frontier: Vec<Edge> = Vec::new();
    for neighbor in predecessors.neighbors(target) {
        let edge = Edge::new(neighbor.as_str(), target);
        if shortest.insert(edge.clone()) {
            frontier.push(edge);
        }
    }

    loop {
        if frontier.iter().any(|edge| edge.from == source) {
            return shortest;
        }

        let mut next = Vec::new();
        for edge in &frontier {
            for candidate in predecessors.next_edges(edge) {
                if shortest.insert(candidate.clone()) {
                    next.push(candidate.clone());
                }
            }
        }

        if next.is_empty() {
            return EdgeSet::new();
        }
        frontier = next;
    }
}

/// Union of the shortest paths over every `(source, target)` pair.
///
/// Self-loops are removed before layering. A pair whose source equals its
/// target and carries a self-loop is answered by that self-loop alone.
pub fn all_shortest_paths(sources: &[String], targets: &[String], edges: &[Edge]) -> EdgeSet {
    let (loop_free, self_looped) = split_self_loops(edges);
    let successors = Adjacency::successors(loop_free.as_slice());

    let mut all = EdgeSet::new();
    for source in sources {
        let dag = shortest_path_dag(source, &successors);
        let predecessors = Adjacency::predecessors(dag.as_slice());

        for target in targets {
            if source == target && self_looped.contains(source) {
                all.insert(Edge::new(source.as_str(), target.as_str()));
                continue;
            }

            let shortest = shortest_paths(source, target, &predecessors);
            tracing::trace!(
                source = %source,
                target = %target,
                edges = shortest.len(),
                "shortest_pair"
            );
            all.extend(shortest);
        }
    }

    all
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edges(pairs: &[(&str, &str)]) -> Vec<Edge> {
        pairs.iter().map(|(a, b)| Edge::new(*a, *b)).collect()
    }

    fn nodes(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|id| id.to_string()).collect()
    }

    fn set(pairs: &[(&str, &str)]) -> EdgeSet {
        edges(pairs).into_iter().collect()
    }

    #[test]
    fn test_dag_drops_edges_into_visited_nodes() {
        let net = edges(&[("A", "B"), ("B", "C"), ("B", "D"), ("D", "C")]);
        let dag = shortest_path_dag("A", &Adjacency::successors(&net));
        assert_eq!(dag, set(&[("A", "B"), ("B", "C"), ("B", "D")]));
    }

    #[test]
    fn test_dag_keeps_ties_within_a_round() {
        let net = edges(&[("A", "B"), ("A", "C"), ("B", "D"), ("C", "D"), ("D", "E")]);
        let dag = shortest_path_dag("A", &Adjacency::successors(&net));
        assert_eq!(dag, net.iter().cloned().collect::<EdgeSet>());
    }

    #[test]
    fn test_shortest_prefers_fewer_hops() {
        let net = edges(&[("A", "B"), ("B", "C"), ("B", "D"), ("D", "C")]);
        let result = all_shortest_paths(&nodes(&["A"]), &nodes(&["C"]), &net);
        assert_eq!(result, set(&[("A", "B"), ("B", "C")]));
    }

    #[test]
    fn test_shortest_keeps_all_ties() {
        let net = edges(&[
            ("A", "B"),
            ("A", "C"),
            ("B", "D"),
            ("C", "D"),
            ("A", "E"),
            ("E", "F"),
            ("F", "G"),
            ("G", "D"),
        ]);
        let result = all_shortest_paths(&nodes(&["A"]), &nodes(&["D"]), &net);
        assert_eq!(result, set(&[("A", "B"), ("A", "C"), ("B", "D"), ("C", "D")]));
    }

    #[test]
    fn test_direct_edge_beats_longer_chain() {
        let net = edges(&[("A", "B"), ("B", "C"), ("C", "D"), ("A", "D")]);
        let result = all_shortest_paths(&nodes(&["A"]), &nodes(&["D"]), &net);
        assert_eq!(result, set(&[("A", "D")]));
    }

    #[test]
    fn test_self_loop_answers_source_equal_target() {
        let net = edges(&[("A", "A"), ("A", "B")]);
        let result = all_shortest_paths(&nodes(&["A"]), &nodes(&["A"]), &net);
        assert_eq!(result.as_slice(), &[Edge::new("A", "A")]);
    }

    #[test]
    fn test_self_loop_wins_over_longer_cycle() {
        let net = edges(&[("A", "A"), ("A", "B"), ("B", "A")]);
        let result = all_shortest_paths(&nodes(&["A"]), &nodes(&["A"]), &net);
        assert_eq!(result, set(&[("A", "A")]));
    }

    #[test]
    fn test_cycle_back_to_source_without_self_loop() {
        let net = edges(&[("A", "B"), ("B", "A")]);
        let result = all_shortest_paths(&nodes(&["A"]), &nodes(&["A"]), &net);
        assert_eq!(result, set(&[("A", "B"), ("B", "A")]));
    }

    #[test]
    fn test_self_loops_ignored_for_other_pairs() {
        let net = edges(&[("A", "A"), ("A", "B"), ("B", "B"), ("B", "C")]);
        let result = all_shortest_paths(&nodes(&["A"]), &nodes(&["C"]), &net);
        assert_eq!(result, set(&[("A", "B"), ("B", "C")]));
    }

    #[test]
    fn test_unreachable_target_yields_nothing() {
        let net = edges(&[("A", "B"), ("C", "D")]);
        assert!(all_shortest_paths(&nodes(&["A"]), &nodes(&["D"]), &net).is_empty());
        assert!(all_shortest_paths(&nodes(&["B"]), &nodes(&["A"]), &net).is_empty());
    }

    #[test]
    fn test_union_over_pairs_deduplicates() {
        let net = edges(&[("A", "B"), ("B", "C"), ("B", "D"), ("D", "C")]);
        let result = all_shortest_paths(&nodes(&["A"]), &nodes(&["C", "D"]), &net);
        assert_eq!(result, set(&[("A", "B"), ("B", "C"), ("B", "D")]));
        assert_eq!(result.len(), 3);
    }

    #[test]
    fn test_layers_are_per_source() {
        // From A, D is two hops away through B; C is also two hops away, so
        // C -> D lies on no shortest A path. From C it is the direct edge.
        let net = edges(&[
            ("A", "B"),
            ("B", "D"),
            ("A", "X"),
            ("X", "C"),
            ("C", "D"),
        ]);
        let result = all_shortest_paths(&nodes(&["A", "C"]), &nodes(&["D"]), &net);
        assert_eq!(result, set(&[("A", "B"), ("B", "D"), ("C", "D")]));
    }
}
