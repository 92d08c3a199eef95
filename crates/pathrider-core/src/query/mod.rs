//! The two path queries: `connect` and `stream`
//!
//! Both take an already filtered [`Network`](crate::network::Network) and
//! seed nodes known to belong to it. Empty intermediate results are not
//! errors: they are reported as [`QueryWarning`]s and only skip the stages
//! that depend on them.

mod connect;
mod stream;

pub use connect::{connect, ConnectOptions, ConnectReport};
pub use stream::{stream, StreamOptions, StreamReport};

use serde::Serialize;
use thiserror::Error;

use crate::graph::Direction;

/// A query stage that produced nothing
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum QueryWarning {
    #[error("no forward paths found")]
    NoForwardPaths,

    #[error("no backward paths found")]
    NoBackwardPaths,

    #[error("no connecting paths found")]
    NoConnectingPaths,

    #[error("no shortest connecting paths found")]
    NoShortestPaths,

    #[error("no {direction}stream paths found")]
    NoStreamPaths { direction: Direction },

    #[error("no {direction}stream terminal nodes found")]
    NoTerminalNodes { direction: Direction },
}

fn record(warnings: &mut Vec<QueryWarning>, warning: QueryWarning) {
    tracing::debug!(%warning, "empty_result");
    warnings.push(warning);
}
