use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::PathriderError;
use crate::network::Edge;

/// Direction for propagation and adjacency construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Follow predecessors (edges into a node)
    Up,
    /// Follow successors (edges out of a node)
    Down,
}

impl Direction {
    /// Orient the edge between `node` and one of its neighbors in this direction.
    ///
    /// Downstream the neighbor is a successor (`node -> neighbor`), upstream
    /// it is a predecessor (`neighbor -> node`).
    pub fn edge(self, node: &str, neighbor: &str) -> Edge {
        match self {
            Direction::Down => Edge::new(node, neighbor),
            Direction::Up => Edge::new(neighbor, node),
        }
    }

    /// The `(node, neighbor)` pair an edge contributes in this direction
    pub fn endpoints(self, edge: &Edge) -> (&str, &str) {
        match self {
            Direction::Down => (&edge.from, &edge.to),
            Direction::Up => (&edge.to, &edge.from),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }
}

impl FromStr for Direction {
    type Err = PathriderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            other => Err(PathriderError::InvalidDirection(other.to_string())),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
