//! Incremental construction of validated tables.
//!
//! ```rust
//! use textgrid::{BuilderError, TableBuilder};
//!
//! let table = TableBuilder::new()
//!     .add_row(["name", "qty"])
//!     .add_row(["apples", "3"])
//!     .title("Groceries")
//!     .build()
//!     .unwrap();
//! assert_eq!(table.column_count(), 2);
//!
//! assert_eq!(TableBuilder::new().build().unwrap_err(), BuilderError::EmptyTable);
//! ```

use tracing::debug;

use crate::error::BuilderError;
use crate::rows::Rows;
use crate::table::Table;

#[derive(Clone, Debug)]
enum State {
    Accumulating {
        rows: Vec<Vec<String>>,
        title: Option<String>,
    },
    /// The first error encountered; later calls leave it untouched.
    Failed(BuilderError),
}

/// Collects rows and an optional title, then validates them into a [`Table`].
///
/// Errors are sticky: once an operation fails, every later call is a no-op
/// and [`build`](TableBuilder::build) reports that first error.
#[derive(Clone, Debug)]
pub struct TableBuilder {
    state: State,
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TableBuilder {
    pub fn new() -> Self {
        TableBuilder {
            state: State::Accumulating {
                rows: Vec::new(),
                title: None,
            },
        }
    }

    /// Appends a row. The first row is the header.
    pub fn add_row<S: Into<String>, I: IntoIterator<Item = S>>(mut self, columns: I) -> Self {
        if let State::Accumulating { rows, .. } = &mut self.state {
            rows.push(columns.into_iter().map(Into::into).collect());
        }
        self
    }

    /// Sets the title, replacing any previous one. An empty title is an error.
    pub fn title(self, title: impl Into<String>) -> Self {
        match self.state {
            State::Accumulating { rows, .. } => {
                let title = title.into();
                if title.is_empty() {
                    return Self::fail(BuilderError::EmptyTitle);
                }
                TableBuilder {
                    state: State::Accumulating {
                        rows,
                        title: Some(title),
                    },
                }
            }
            State::Failed(_) => self,
        }
    }

    /// The error this builder is holding, if it has failed.
    pub fn error(&self) -> Option<&BuilderError> {
        match &self.state {
            State::Failed(err) => Some(err),
            State::Accumulating { .. } => None,
        }
    }

    /// Validates the collected rows and produces the table.
    pub fn build(self) -> Result<Table, BuilderError> {
        match self.state {
            State::Failed(err) => Err(err),
            State::Accumulating { rows, .. } if rows.is_empty() => Err(BuilderError::EmptyTable),
            State::Accumulating { rows, title } => {
                let rows = Rows::from_rows(rows).inspect_err(|err| {
                    debug!(%err, "table rows rejected");
                })?;
                Ok(Table::new(rows, title))
            }
        }
    }

    fn fail(err: BuilderError) -> Self {
        debug!(%err, "table builder failed");
        TableBuilder {
            state: State::Failed(err),
        }
    }
}
