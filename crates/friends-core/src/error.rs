//! Error types and exit codes for friends
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (graph file not set, unreadable or malformed; unknown person)
//!
//! The graph queries themselves never fail: a missing person or an empty
//! result is reported as `None` or an empty set by the query functions.

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the friends binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - missing or unreadable graph, malformed graph file, unknown person (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while building, loading or querying a graph
#[derive(Error, Debug)]
pub enum FriendsError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    // Data errors (exit code 3)
    #[error("no graph file given (use --graph, FRIENDS_GRAPH or `graph` in the config file)")]
    GraphFileNotSet,

    #[error("cannot read graph file {path:?}: {source}")]
    GraphFileUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid graph file {path:?} at line {line}: {reason}")]
    InvalidGraph {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    #[error("duplicate person: {name}")]
    DuplicatePerson { name: String },

    #[error("person not found: {name}")]
    PersonNotFound { name: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl FriendsError {
    /// Create an error for a person missing from the graph
    pub fn person_not_found(name: impl Into<String>) -> Self {
        FriendsError::PersonNotFound { name: name.into() }
    }

    /// Create an error for a malformed line in a graph file
    pub fn invalid_graph(path: impl Into<PathBuf>, line: usize, reason: impl Into<String>) -> Self {
        FriendsError::InvalidGraph {
            path: path.into(),
            line,
            reason: reason.into(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            FriendsError::UnknownFormat(_)
            | FriendsError::UsageError(_) => ExitCode::Usage,

            FriendsError::GraphFileNotSet
            | FriendsError::GraphFileUnreadable { .. }
            | FriendsError::InvalidGraph { .. }
            | FriendsError::DuplicatePerson { .. }
            | FriendsError::PersonNotFound { .. } => ExitCode::Data,

            FriendsError::Io(_)
            | FriendsError::Json(_)
            | FriendsError::Toml(_)
            | FriendsError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            FriendsError::UnknownFormat(_) => "unknown_format",
            FriendsError::UsageError(_) => "usage_error",
            FriendsError::GraphFileNotSet => "graph_file_not_set",
            FriendsError::GraphFileUnreadable { .. } => "graph_file_unreadable",
            FriendsError::InvalidGraph { .. } => "invalid_graph",
            FriendsError::DuplicatePerson { .. } => "duplicate_person",
            FriendsError::PersonNotFound { .. } => "person_not_found",
            FriendsError::Io(_) => "io_error",
            FriendsError::Json(_) => "json_error",
            FriendsError::Toml(_) => "toml_error",
            FriendsError::Other(_) => "other",
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

/// Result type alias for friends operations
pub type Result<T> = std::result::Result<T, FriendsError>;
