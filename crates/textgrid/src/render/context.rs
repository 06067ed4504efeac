//! Per-render configuration derived from table content and options.

use super::border::{BorderVisibility, Element, LineStyle};
use super::options::{HorizontalRules, RenderOption, TitlePosition};
use super::resolve::{decorated_width, fixed_column_widths, scale_to_table_width};
use crate::rows::Rows;
use crate::util::{display_width, split_lines};

/// How and whether the title is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TitlePolicy {
    pub position: TitlePosition,
    pub visible: bool,
}

/// Everything the renderer needs to know besides the cells themselves.
///
/// Built fresh from a table's rows for each render, then adjusted by
/// applying options in order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderContext {
    content_widths: Vec<usize>,
    column_widths: Vec<usize>,
    line_style: LineStyle,
    horizontal_rules: HorizontalRules,
    title: TitlePolicy,
    border_visibility: BorderVisibility,
}

impl RenderContext {
    /// Creates the default context for `rows`.
    ///
    /// Each column starts at the widest physical line of any of its cells,
    /// header included.
    pub fn new(rows: &Rows<String>) -> Self {
        let content_widths = rows.columnwise_fold(0, |widest, cell| {
            split_lines(cell)
                .into_iter()
                .map(display_width)
                .fold(widest, usize::max)
        });
        let line_style = LineStyle::default();

        RenderContext {
            column_widths: content_widths.clone(),
            content_widths,
            line_style,
            horizontal_rules: HorizontalRules::default(),
            title: TitlePolicy {
                position: TitlePosition::default(),
                visible: true,
            },
            border_visibility: line_style.border_visibility(),
        }
    }

    /// Creates a context for `rows` with `options` applied in order.
    pub fn with_options<'a, I>(rows: &Rows<String>, options: I) -> Self
    where
        I: IntoIterator<Item = &'a RenderOption>,
    {
        options
            .into_iter()
            .fold(Self::new(rows), |context, option| context.apply(option))
    }

    /// Returns a new context with `option` applied.
    ///
    /// Width options always start from the content widths, so the last
    /// width option fully determines the result.
    pub fn apply(self, option: &RenderOption) -> Self {
        match *option {
            RenderOption::TableWidth(width) => RenderContext {
                column_widths: scale_to_table_width(&self.content_widths, width),
                ..self
            },
            RenderOption::ColumnWidth(width) => RenderContext {
                column_widths: fixed_column_widths(self.content_widths.len(), width),
                ..self
            },
            RenderOption::LineStyle(line_style) => RenderContext {
                line_style,
                border_visibility: line_style.border_visibility(),
                ..self
            },
            RenderOption::HorizontalRules(horizontal_rules) => RenderContext {
                horizontal_rules,
                ..self
            },
            RenderOption::TitlePosition(position) => RenderContext {
                title: TitlePolicy {
                    position,
                    ..self.title
                },
                ..self
            },
            RenderOption::HideTitle => RenderContext {
                title: TitlePolicy {
                    visible: false,
                    ..self.title
                },
                ..self
            },
        }
    }

    /// Content width of each column, excluding padding.
    pub fn column_widths(&self) -> &[usize] {
        &self.column_widths
    }

    /// Width of a rendered line, borders included.
    pub fn decorated_width(&self) -> usize {
        decorated_width(&self.column_widths)
    }

    pub fn line_style(&self) -> LineStyle {
        self.line_style
    }

    /// Looks up the glyph for a border element in the current style.
    pub fn glyph(&self, element: Element) -> char {
        self.line_style.glyph(element)
    }

    pub fn horizontal_rules(&self) -> HorizontalRules {
        self.horizontal_rules
    }

    pub fn title_policy(&self) -> TitlePolicy {
        self.title
    }

    pub fn border_visibility(&self) -> BorderVisibility {
        self.border_visibility
    }
}
