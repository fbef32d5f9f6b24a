//! Error types and exit codes for transit-route
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (unknown station, invalid network, unreachable destination)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - unknown station, invalid graph, no route (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while loading a network or planning a route
#[derive(Error, Debug)]
pub enum RouteError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    // Data errors (exit code 3)
    #[error("unknown station: {id}")]
    UnknownNode { id: String },

    #[error("invalid graph: {reason}")]
    InvalidGraph { reason: String },

    #[error("no route from {from} to {to}")]
    Unreachable { from: String, to: String },

    #[error("invalid network file {path:?}: {reason}")]
    InvalidNetworkFile { path: PathBuf, reason: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl RouteError {
    /// Create an error for a station missing from the graph
    pub fn unknown_node(id: impl Into<String>) -> Self {
        RouteError::UnknownNode { id: id.into() }
    }

    /// Create an error for adjacency data that violates graph invariants
    pub fn invalid_graph(reason: impl std::fmt::Display) -> Self {
        RouteError::InvalidGraph {
            reason: reason.to_string(),
        }
    }

    /// Create an error for a destination not connected to the start
    pub fn unreachable(from: impl Into<String>, to: impl Into<String>) -> Self {
        RouteError::Unreachable {
            from: from.into(),
            to: to.into(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            RouteError::UnknownFormat(_) | RouteError::UsageError(_) => ExitCode::Usage,

            RouteError::UnknownNode { .. }
            | RouteError::InvalidGraph { .. }
            | RouteError::Unreachable { .. }
            | RouteError::InvalidNetworkFile { .. } => ExitCode::Data,

            RouteError::Io(_)
            | RouteError::Json(_)
            | RouteError::Toml(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            RouteError::UnknownFormat(_) => "unknown_format",
            RouteError::UsageError(_) => "usage_error",
            RouteError::UnknownNode { .. } => "unknown_node",
            RouteError::InvalidGraph { .. } => "invalid_graph",
            RouteError::Unreachable { .. } => "unreachable_destination",
            RouteError::InvalidNetworkFile { .. } => "invalid_network_file",
            RouteError::Io(_) => "io_error",
            RouteError::Json(_) => "json_error",
            RouteError::Toml(_) => "toml_error",
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

/// Result type alias for routing operations
pub type Result<T> = std::result::Result<T, RouteError>;
