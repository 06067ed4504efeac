//! A validated table and its rendering entry points.

use std::fmt;

use tracing::debug_span;

use crate::builder::TableBuilder;
use crate::render::{Lines, RenderContext, RenderOption};
use crate::rows::Rows;

/// A rectangular grid of text cells with an optional title.
///
/// The first row is the header. Rendering never fails and has no side
/// effects, so the same table can be rendered any number of times.
///
/// ```rust
/// use textgrid::TableBuilder;
///
/// let table = TableBuilder::new()
///     .add_row(["1", "2", "3"])
///     .add_row(["4", "5", "6"])
///     .add_row(["7", "8", "9"])
///     .build()
///     .unwrap();
///
/// assert_eq!(
///     table.render(),
///     "+---+---+---+\n\
///      | 1 | 2 | 3 |\n\
///      +---+---+---+\n\
///      | 4 | 5 | 6 |\n\
///      | 7 | 8 | 9 |\n\
///      +---+---+---+"
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Table {
    rows: Rows<String>,
    title: Option<String>,
}

impl Table {
    pub(crate) fn new(rows: Rows<String>, title: Option<String>) -> Self {
        Table { rows, title }
    }

    /// Starts building a table.
    pub fn builder() -> TableBuilder {
        TableBuilder::new()
    }

    pub fn rows(&self) -> &Rows<String> {
        &self.rows
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn column_count(&self) -> usize {
        self.rows.column_count()
    }

    /// Renders with default options: ASCII borders, a rule under the header,
    /// title on top.
    pub fn render(&self) -> String {
        self.render_with_options(&[])
    }

    /// Renders with `options` applied in order, joining lines with `\n`.
    pub fn render_with_options(&self, options: &[RenderOption]) -> String {
        self.render_lines(options).collect::<Vec<_>>().join("\n")
    }

    /// Renders lazily, one output line at a time.
    pub fn render_lines(&self, options: &[RenderOption]) -> Lines<'_> {
        let span = debug_span!(
            "render_table",
            rows = self.rows.row_count(),
            columns = self.rows.column_count()
        );
        let context = span.in_scope(|| RenderContext::with_options(&self.rows, options));
        Lines::new(&self.rows, self.title.as_deref(), context, span)
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
