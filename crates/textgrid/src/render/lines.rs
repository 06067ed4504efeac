//! Lazy, line-by-line table output.

use std::iter::FusedIterator;

use super::border::{BorderVisibility, Element};
use super::context::RenderContext;
use super::options::{HorizontalRules, TitlePosition};
use super::row::render_row;
use crate::rows::Rows;
use crate::util::{pad_center, split_lines};

/// Which horizontal rule to draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RuleKind {
    Top,
    Center,
    Bottom,
}

/// Draws a horizontal rule spanning every column and its padding.
pub fn rule(context: &RenderContext, kind: RuleKind) -> String {
    let (start, junction, end) = match kind {
        RuleKind::Top => (Element::TopStart, Element::TopJunction, Element::TopEnd),
        RuleKind::Center => (
            Element::StartJunction,
            Element::FourWay,
            Element::EndJunction,
        ),
        RuleKind::Bottom => (
            Element::BottomStart,
            Element::BottomJunction,
            Element::BottomEnd,
        ),
    };
    let horizontal = context.glyph(Element::Horizontal);

    let mut line = String::new();
    line.push(context.glyph(start));
    for (i, &width) in context.column_widths().iter().enumerate() {
        if i > 0 {
            line.push(context.glyph(junction));
        }
        line.extend(std::iter::repeat_n(horizontal, width + 2));
    }
    line.push(context.glyph(end));
    line
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Stage {
    TopTitle,
    TopBorder,
    Content,
    BottomBorder,
    BottomTitle,
    Done,
}

/// Iterator over the rendered lines of a table.
///
/// Lines carry no trailing line terminator. The output is produced one
/// logical row at a time; restarting means calling
/// [`Table::render_lines`](crate::Table::render_lines) again.
#[derive(Debug)]
pub struct Lines<'a> {
    rows: &'a Rows<String>,
    title: Option<&'a str>,
    context: RenderContext,
    stage: Stage,
    next_row: usize,
    pending: std::vec::IntoIter<String>,
    span: tracing::Span,
}

impl<'a> Lines<'a> {
    pub(crate) fn new(
        rows: &'a Rows<String>,
        title: Option<&'a str>,
        context: RenderContext,
        span: tracing::Span,
    ) -> Self {
        Lines {
            rows,
            title,
            context,
            stage: Stage::TopTitle,
            next_row: 0,
            pending: Vec::new().into_iter(),
            span,
        }
    }

    /// The context the lines are rendered with.
    pub fn context(&self) -> &RenderContext {
        &self.context
    }

    fn title_lines(&self, position: TitlePosition) -> Vec<String> {
        let policy = self.context.title_policy();
        match self.title {
            Some(title) if policy.visible && policy.position == position => {
                let width = self.context.decorated_width();
                split_lines(title)
                    .into_iter()
                    .map(|line| pad_center(line, width))
                    .collect()
            }
            _ => Vec::new(),
        }
    }

    fn border(&self, kind: RuleKind) -> Vec<String> {
        match self.context.border_visibility() {
            BorderVisibility::Visible => vec![rule(&self.context, kind)],
            BorderVisibility::Hidden => Vec::new(),
        }
    }

    /// Lines for the next logical row, with any rules that belong to it.
    fn next_block(&mut self) -> Option<Vec<String>> {
        let index = self.next_row;
        let rows = self.rows;
        let cells = rows.row(index)?;
        self.next_row += 1;

        let widths = self.context.column_widths();
        let vertical = self.context.glyph(Element::Vertical);
        let mut block = Vec::new();

        match self.context.horizontal_rules() {
            HorizontalRules::EveryRow if index > 0 => {
                block.push(rule(&self.context, RuleKind::Center));
                block.extend(render_row(cells, widths, vertical));
            }
            HorizontalRules::HeaderOnly if index == 0 => {
                block.extend(render_row(cells, widths, vertical));
                block.push(rule(&self.context, RuleKind::Center));
            }
            _ => block.extend(render_row(cells, widths, vertical)),
        }
        Some(block)
    }
}

impl Iterator for Lines<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let span = self.span.clone();
        let _guard = span.enter();

        loop {
            if let Some(line) = self.pending.next() {
                return Some(line);
            }

            let (lines, next_stage) = match self.stage {
                Stage::TopTitle => (self.title_lines(TitlePosition::Top), Stage::TopBorder),
                Stage::TopBorder => (self.border(RuleKind::Top), Stage::Content),
                Stage::Content => match self.next_block() {
                    Some(block) => (block, Stage::Content),
                    None => (Vec::new(), Stage::BottomBorder),
                },
                Stage::BottomBorder => (self.border(RuleKind::Bottom), Stage::BottomTitle),
                Stage::BottomTitle => (self.title_lines(TitlePosition::Bottom), Stage::Done),
                Stage::Done => return None,
            };
            self.pending = lines.into_iter();
            self.stage = next_stage;
        }
    }
}

impl FusedIterator for Lines<'_> {}
