//! Border glyphs for each line style.

use serde::{Deserialize, Serialize};

/// Glyph set used to draw borders and rules.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineStyle {
    /// ASCII borders: +, -, |
    #[default]
    Ascii,
    /// Light box-drawing characters: ┌, ─, ┐, │, └, ┘, ├, ┼, ┤, ┬, ┴
    BoxDrawing,
    /// Rounded corners with light lines: ╭, ─, ╮, │, ╰, ╯, ├, ┼, ┤, ┬, ┴
    BoxDrawingRounded,
    /// Spaces everywhere. Top and bottom borders are not drawn.
    Blank,
}

/// The kinds of border element a line style provides a glyph for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Element {
    Horizontal,
    Vertical,
    /// Where a rule crosses an inner column divider.
    FourWay,
    /// Left end of an inner rule.
    StartJunction,
    /// Right end of an inner rule.
    EndJunction,
    /// Column divider meeting the top border.
    TopJunction,
    /// Column divider meeting the bottom border.
    BottomJunction,
    TopStart,
    TopEnd,
    BottomStart,
    BottomEnd,
}

impl Element {
    /// All element kinds, in declaration order.
    pub const ALL: [Element; 11] = [
        Element::Horizontal,
        Element::Vertical,
        Element::FourWay,
        Element::StartJunction,
        Element::EndJunction,
        Element::TopJunction,
        Element::BottomJunction,
        Element::TopStart,
        Element::TopEnd,
        Element::BottomStart,
        Element::BottomEnd,
    ];
}

impl LineStyle {
    /// Returns the glyph drawn for `element` in this style.
    pub fn glyph(self, element: Element) -> char {
        let chars = self.chars();
        match element {
            Element::Horizontal => chars.horizontal,
            Element::Vertical => chars.vertical,
            Element::FourWay => chars.cross,
            Element::StartJunction => chars.left_t,
            Element::EndJunction => chars.right_t,
            Element::TopJunction => chars.top_t,
            Element::BottomJunction => chars.bottom_t,
            Element::TopStart => chars.top_left,
            Element::TopEnd => chars.top_right,
            Element::BottomStart => chars.bottom_left,
            Element::BottomEnd => chars.bottom_right,
        }
    }

    /// Whether tables in this style draw their top and bottom borders.
    pub fn border_visibility(self) -> BorderVisibility {
        match self {
            LineStyle::Blank => BorderVisibility::Hidden,
            _ => BorderVisibility::Visible,
        }
    }

    fn chars(self) -> BorderChars {
        match self {
            LineStyle::Ascii => BorderChars {
                horizontal: '-',
                vertical: '|',
                top_left: '+',
                top_right: '+',
                bottom_left: '+',
                bottom_right: '+',
                left_t: '+',
                cross: '+',
                right_t: '+',
                top_t: '+',
                bottom_t: '+',
            },
            LineStyle::BoxDrawing => BorderChars {
                horizontal: '─',
                vertical: '│',
                top_left: '┌',
                top_right: '┐',
                bottom_left: '└',
                bottom_right: '┘',
                left_t: '├',
                cross: '┼',
                right_t: '┤',
                top_t: '┬',
                bottom_t: '┴',
            },
            LineStyle::BoxDrawingRounded => BorderChars {
                top_left: '╭',
                top_right: '╮',
                bottom_left: '╰',
                bottom_right: '╯',
                ..LineStyle::BoxDrawing.chars()
            },
            LineStyle::Blank => BorderChars::blank(),
        }
    }
}

/// Whether the top and bottom border rules are drawn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BorderVisibility {
    #[default]
    Visible,
    Hidden,
}

#[derive(Clone, Copy, Debug)]
struct BorderChars {
    horizontal: char,
    vertical: char,
    top_left: char,
    top_right: char,
    bottom_left: char,
    bottom_right: char,
    left_t: char,
    cross: char,
    right_t: char,
    top_t: char,
    bottom_t: char,
}

impl BorderChars {
    fn blank() -> Self {
        BorderChars {
            horizontal: ' ',
            vertical: ' ',
            top_left: ' ',
            top_right: ' ',
            bottom_left: ' ',
            bottom_right: ' ',
            left_t: ' ',
            cross: ' ',
            right_t: ' ',
            top_t: ' ',
            bottom_t: ' ',
        }
    }
}
