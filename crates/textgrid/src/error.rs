//! Error types for table construction and configuration.

use thiserror::Error;

/// Errors raised while validating a rectangular [`Rows`](crate::Rows) matrix.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum RowsError {
    /// A row's length differs from the length established before it.
    #[error("inconsistent row lengths: expected {expected}, got {got}")]
    InconsistentLengths { expected: usize, got: usize },
}

/// Errors returned by [`TableBuilder::build`](crate::TableBuilder::build).
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum BuilderError {
    /// Rows added to the builder do not all have the same number of columns.
    #[error("inconsistent column count: expected {expected} columns, got {got}")]
    InconsistentColumnCount { expected: usize, got: usize },

    /// No rows were added.
    #[error("table has no rows")]
    EmptyTable,

    /// The title was set to an empty string.
    #[error("table title is empty")]
    EmptyTitle,
}

impl From<RowsError> for BuilderError {
    fn from(err: RowsError) -> Self {
        match err {
            RowsError::InconsistentLengths { expected, got } => {
                BuilderError::InconsistentColumnCount { expected, got }
            }
        }
    }
}

/// Errors from loading a [`RenderConfig`](crate::RenderConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The YAML document could not be parsed.
    #[error("invalid YAML render config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The JSON document could not be parsed.
    #[error("invalid JSON render config: {0}")]
    Json(#[from] serde_json::Error),
}
