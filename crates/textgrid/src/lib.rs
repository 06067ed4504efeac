//! # textgrid - Bordered Text Tables
//!
//! `textgrid` renders a grid of text cells as an aligned table with ASCII,
//! box-drawing or blank borders, an optional centered title, and cells that
//! may span several lines.
//!
//! ## Core Concepts
//!
//! - [`Rows`]: rectangular matrix; every row has the same number of columns
//! - [`TableBuilder`]: collects rows and a title, validates them into a [`Table`]
//! - [`Table`]: renders to a `String` or lazily line by line
//! - [`RenderOption`]: width, line style, rule and title adjustments
//! - [`RenderConfig`]: the same options loaded from YAML or JSON
//!
//! ## Quick Start
//!
//! ```rust
//! use textgrid::{LineStyle, RenderOption, TableBuilder};
//!
//! let table = TableBuilder::new()
//!     .add_row(["name", "qty"])
//!     .add_row(["apples", "3"])
//!     .add_row(["pears", "12"])
//!     .title("Groceries")
//!     .build()
//!     .unwrap();
//!
//! let output = table.render_with_options(&[RenderOption::LineStyle(LineStyle::BoxDrawing)]);
//! assert_eq!(
//!     output,
//!     "   Groceries    \n\
//!      ┌────────┬─────┐\n\
//!      │ name   │ qty │\n\
//!      ├────────┼─────┤\n\
//!      │ apples │ 3   │\n\
//!      │ pears  │ 12  │\n\
//!      └────────┴─────┘"
//! );
//! ```
//!
//! ## Widths
//!
//! Columns are as wide as their widest line. [`RenderOption::TableWidth`]
//! scales them proportionally to a target table width;
//! [`RenderOption::ColumnWidth`] gives every column the same width. Content
//! that does not fit is clipped by display width, so wide characters such as
//! CJK ideographs count as two columns.

mod builder;
pub mod error;
pub mod render;
pub mod rows;
mod table;
pub mod util;

pub use builder::TableBuilder;
pub use error::{BuilderError, ConfigError, RowsError};
pub use render::{HorizontalRules, LineStyle, Lines, RenderConfig, RenderOption, TitlePosition};
pub use rows::Rows;
pub use table::Table;
