//! Reachability and shortest-path algorithms over directed edge lists
//!
//! - [`Adjacency`]: node neighbors and next-edge maps in one direction
//! - [`propagate`]: fixpoint edge propagation from seed nodes
//! - [`all_shortest_paths`]: fewest-hop paths with ties preserved
//! - [`terminal_nodes`]: nodes with nowhere further to go

pub mod adjacency;
pub mod propagate;
pub mod shortest;
pub mod terminal;
pub mod types;

pub use adjacency::Adjacency;
pub use propagate::{backward_edges, forward_edges, intersect_edges, propagate};
pub use shortest::{all_shortest_paths, shortest_path_dag, shortest_paths};
pub use terminal::terminal_nodes;
pub use types::Direction;
