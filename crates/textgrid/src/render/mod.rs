//! Table rendering.
//!
//! A render starts from a [`RenderContext`] derived from the table's cells,
//! adjusts it with [`RenderOption`]s, then produces [`Lines`]:
//!
//! 1. title lines, when the title is shown on top
//! 2. the top border
//! 3. every row, with rules placed per [`HorizontalRules`]
//! 4. the bottom border
//! 5. title lines, when the title is shown at the bottom
//!
//! Content lines look like `| a | b |`; rules like `+---+---+`. Cells are
//! padded with one space on each side and clipped to their column's display
//! width.

mod border;
mod context;
mod lines;
mod options;
mod resolve;
mod row;

pub use border::{BorderVisibility, Element, LineStyle};
pub use context::{RenderContext, TitlePolicy};
pub use lines::{rule, Lines, RuleKind};
pub use options::{HorizontalRules, RenderConfig, RenderOption, TitlePosition};
pub use resolve::{decorated_width, decoration_width, fixed_column_widths, scale_to_table_width};
pub use row::{format_visual_row, render_row, visual_rows};
