use super::Adjacency;

/// Nodes with no neighbor in the adjacency's direction.
///
/// Over a downstream result these are the nodes without successors, over
/// an upstream result the nodes without predecessors. Sorted by node.
pub fn terminal_nodes(adjacency: &Adjacency) -> Vec<String> {
    adjacency
        .nodes()
        .filter(|(_, neighbors)| neighbors.is_empty())
        .map(|(node, _)| node.to_string())
        .collect()
}
