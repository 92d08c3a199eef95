//! Error types and exit codes for pathrider
//!
//! Exit codes:
//! - 0: Success (warnings about empty results included)
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, unknown direction, bad output path)
//! - 3: Data error (empty input, multi-edges, malformed network or node list)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes reported by the pathrider binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - empty or malformed input (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while reading, querying or writing a network
#[derive(Error, Debug)]
pub enum PathriderError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("{0}: unknown direction, expecting one of: up, down")]
    InvalidDirection(String),

    #[error("{path:?}: {reason}")]
    InvalidOutputPath { path: PathBuf, reason: String },

    // Data errors (exit code 3)
    #[error("{what}: empty {stage}")]
    EmptyInput { what: String, stage: String },

    #[error("multi-edge (or duplicated edge): {from} -> {to}")]
    MultiEdge { from: String, to: String },

    #[error("{path:?}: line {line}: {reason}")]
    InvalidNetwork {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    #[error("{path:?}: line {line}: {reason}")]
    InvalidNodeList {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

impl PathriderError {
    /// Create an error for an input found empty at a processing stage
    /// (`"after reading"`, `"after blacklisting"`, `"before writing"`)
    pub fn empty(what: impl std::fmt::Display, stage: &str) -> Self {
        PathriderError::EmptyInput {
            what: what.to_string(),
            stage: stage.to_string(),
        }
    }

    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        PathriderError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            PathriderError::UnknownFormat(_)
            | PathriderError::UsageError(_)
            | PathriderError::InvalidDirection(_)
            | PathriderError::InvalidOutputPath { .. } => ExitCode::Usage,

            PathriderError::EmptyInput { .. }
            | PathriderError::MultiEdge { .. }
            | PathriderError::InvalidNetwork { .. }
            | PathriderError::InvalidNodeList { .. } => ExitCode::Data,

            PathriderError::Io(_)
            | PathriderError::Json(_)
            | PathriderError::Toml(_)
            | PathriderError::FailedOperationWithTarget { .. }
            | PathriderError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            PathriderError::UnknownFormat(_) => "unknown_format",
            PathriderError::UsageError(_) => "usage_error",
            PathriderError::InvalidDirection(_) => "invalid_direction",
            PathriderError::InvalidOutputPath { .. } => "invalid_output_path",
            PathriderError::EmptyInput { .. } => "empty_input",
            PathriderError::MultiEdge { .. } => "multi_edge",
            PathriderError::InvalidNetwork { .. } => "invalid_network",
            PathriderError::InvalidNodeList { .. } => "invalid_node_list",
            PathriderError::Io(_) => "io_error",
            PathriderError::Json(_) => "json_error",
            PathriderError::Toml(_) => "toml_error",
            PathriderError::FailedOperationWithTarget { .. } => "failed_operation_with_target",
            PathriderError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for pathrider operations
pub type Result<T> = std::result::Result<T, PathriderError>;
