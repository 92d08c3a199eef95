//! Configuration data types

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PathriderError;

/// Default output network file
pub const DEFAULT_OUT: &str = "out.sif";

/// What to do when the same ordered node pair appears on more than one line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicateEdgePolicy {
    /// Merge the labels of repeated pairs into one edge
    #[default]
    Merge,
    /// Reject repeated pairs as multi-edges
    Reject,
}

impl FromStr for DuplicateEdgePolicy {
    type Err = PathriderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "merge" => Ok(DuplicateEdgePolicy::Merge),
            "reject" => Ok(DuplicateEdgePolicy::Reject),
            other => Err(PathriderError::UsageError(format!(
                "unknown duplicate edge policy '{}' (expected: merge, reject)",
                other
            ))),
        }
    }
}

impl fmt::Display for DuplicateEdgePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DuplicateEdgePolicy::Merge => write!(f, "merge"),
            DuplicateEdgePolicy::Reject => write!(f, "reject"),
        }
    }
}

/// Network reading options
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkConfig {
    #[serde(default)]
    pub duplicate_edges: DuplicateEdgePolicy,
}

/// Output options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_out")]
    pub out: String,
}

fn default_out() -> String {
    DEFAULT_OUT.to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { out: default_out() }
    }
}

/// User configuration (stored in ~/.config/pathrider/config.toml)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathriderConfig {
    #[serde(default)]
    pub network: NetworkConfig,
    #[serde(default)]
    pub output: OutputConfig,
}
