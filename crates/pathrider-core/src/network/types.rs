use serde::Serialize;
use std::collections::HashSet;

/// A directed edge between two nodes, identified by its ordered endpoints
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Edge {
    pub from: String,
    pub to: String,
}

impl Edge {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    pub fn is_self_loop(&self) -> bool {
        self.from == self.to
    }
}

/// Insertion-ordered set of edges.
///
/// Iteration follows first insertion so output stays deterministic, while
/// membership checks are hash lookups. Equality ignores order.
#[derive(Debug, Clone, Default)]
pub struct EdgeSet {
    edges: Vec<Edge>,
    index: HashSet<Edge>,
}

impl EdgeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an edge, returning `false` if it was already present
    pub fn insert(&mut self, edge: Edge) -> bool {
        if self.index.contains(&edge) {
            return false;
        }
        self.index.insert(edge.clone());
        self.edges.push(edge);
        true
    }

    pub fn contains(&self, edge: &Edge) -> bool {
        self.index.contains(edge)
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Edge> {
        self.edges.iter()
    }

    pub fn as_slice(&self) -> &[Edge] {
        &self.edges
    }

    pub fn into_vec(self) -> Vec<Edge> {
        self.edges
    }
}

impl PartialEq for EdgeSet {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|edge| other.contains(edge))
    }
}

impl Eq for EdgeSet {}

impl Extend<Edge> for EdgeSet {
    fn extend<I: IntoIterator<Item = Edge>>(&mut self, iter: I) {
        for edge in iter {
            self.insert(edge);
        }
    }
}

impl FromIterator<Edge> for EdgeSet {
    fn from_iter<I: IntoIterator<Item = Edge>>(iter: I) -> Self {
        let mut set = EdgeSet::new();
        set.extend(iter);
        set
    }
}

impl<'a> IntoIterator for &'a EdgeSet {
    type Item = &'a Edge;
    type IntoIter = std::slice::Iter<'a, Edge>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.iter()
    }
}

impl IntoIterator for EdgeSet {
    type Item = Edge;
    type IntoIter = std::vec::IntoIter<Edge>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_rejects_duplicates() {
        let mut set = EdgeSet::new();
        assert!(set.insert(Edge::new("A", "B")));
        assert!(!set.insert(Edge::new("A", "B")));
        assert!(set.insert(Edge::new("B", "A")));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_iteration_keeps_insertion_order() {
        let set: EdgeSet = vec![Edge::new("C", "D"), Edge::new("A", "B"), Edge::new("C", "D")]
            .into_iter()
            .collect();
        assert_eq!(set.as_slice(), &[Edge::new("C", "D"), Edge::new("A", "B")]);
    }

    #[test]
    fn test_equality_ignores_order() {
        let left: EdgeSet = vec![Edge::new("A", "B"), Edge::new("B", "C")]
            .into_iter()
            .collect();
        let right: EdgeSet = vec![Edge::new("B", "C"), Edge::new("A", "B")]
            .into_iter()
            .collect();
        assert_eq!(left, right);
    }

    #[test]
    fn test_self_loop() {
        assert!(Edge::new("A", "A").is_self_loop());
        assert!(!Edge::new("A", "a").is_self_loop());
    }
}
