//! Pathrider Core Library
//!
//! Finds paths of interest in directed regulatory networks: the edges
//! connecting source nodes to target nodes, and the edges upstream or
//! downstream of seed nodes, optionally reduced to shortest paths or
//! annotated with terminal nodes.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
pub mod network;
pub mod query;
pub mod sif;
