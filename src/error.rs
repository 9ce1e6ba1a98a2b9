//! Error handling for the surface graph
//!
//! Every fallible operation returns [`GraphResult`]. Errors only arise at
//! configuration time; a validated graph ticks without error paths.

use std::path::Path;

/// Main error type for the surface graph
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    // Selection Errors
    #[error("Invalid function selection: index {index} is outside the registry (0..{count})")]
    InvalidSelection { index: i64, count: u32 },

    #[error("Unknown surface function: '{name}'")]
    UnknownFunction { name: String },

    // Configuration Errors
    #[error("Invalid config: {field} = {value} ({reason})")]
    InvalidConfig {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Config load failed for {path}: {error}")]
    ConfigLoad { path: String, error: String },

    #[error("Config parse error: {error}")]
    ConfigParse { error: String },

    #[error("Config serialization error: {error}")]
    ConfigSerialize { error: String },
}

/// Type alias for Results in the surface graph
pub type GraphResult<T> = Result<T, GraphError>;

/// Shorthand for building an [`GraphError::InvalidConfig`]
pub fn invalid_config(
    field: &str,
    value: impl std::fmt::Display,
    reason: impl Into<String>,
) -> GraphError {
    GraphError::InvalidConfig {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

impl From<toml::de::Error> for GraphError {
    fn from(error: toml::de::Error) -> Self {
        GraphError::ConfigParse {
            error: error.to_string(),
        }
    }
}

impl From<toml::ser::Error> for GraphError {
    fn from(error: toml::ser::Error) -> Self {
        GraphError::ConfigSerialize {
            error: error.to_string(),
        }
    }
}

/// Extension trait for attaching a file path to I/O failures
pub trait PathContext<T> {
    fn path_context(self, path: &Path) -> GraphResult<T>;
}

impl<T> PathContext<T> for std::io::Result<T> {
    fn path_context(self, path: &Path) -> GraphResult<T> {
        self.map_err(|e| GraphError::ConfigLoad {
            path: path.display().to_string(),
            error: e.to_string(),
        })
    }
}
