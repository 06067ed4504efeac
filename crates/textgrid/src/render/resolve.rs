//! Column width resolution.
//!
//! Content widths come from the cells themselves. A requested table width
//! rescales them proportionally; a requested column width replaces them.

use tracing::trace;

/// Columns taken up by borders, dividers and cell padding.
///
/// Every cell gets one space of padding on each side, adjacent cells share
/// one divider, and the table has one border glyph at each end.
pub fn decoration_width(columns: usize) -> usize {
    2 * columns + columns.saturating_sub(1) + 2
}

/// Total rendered width of a table with the given content widths.
pub fn decorated_width(widths: &[usize]) -> usize {
    widths.iter().sum::<usize>() + decoration_width(widths.len())
}

/// Scales content widths so the decorated table is `table_width` wide.
///
/// Each column gets `floor(width * target / total)`. If that falls short of
/// the target, columns that ended up with no width get one column each
/// first, then the rest is handed out one column at a time from the left.
/// Requests narrower than the decorations leave one column of content per
/// column.
///
/// # Example
///
/// ```rust
/// use textgrid::render::scale_to_table_width;
///
/// // 3 columns use 10 columns of decoration, leaving 5 for content.
/// assert_eq!(scale_to_table_width(&[1, 1, 1], 15), vec![2, 2, 1]);
/// ```
pub fn scale_to_table_width(widths: &[usize], table_width: usize) -> Vec<usize> {
    let columns = widths.len();
    if columns == 0 {
        return Vec::new();
    }

    let decoration = decoration_width(columns);
    if table_width <= decoration {
        trace!(table_width, decoration, "table width below decoration floor");
        return vec![1; columns];
    }
    let target = table_width - decoration;

    let total: usize = widths.iter().sum();
    let mut scaled: Vec<usize> = if total == 0 {
        vec![0; columns]
    } else {
        widths
            .iter()
            .map(|&w| (w as u128 * target as u128 / total as u128) as usize)
            .collect()
    };

    let scaled_total: usize = scaled.iter().sum();
    if scaled_total >= target {
        trace!(table_width, ?scaled, "scaled widths");
        return scaled;
    }

    let mut extra = target - scaled_total;
    let remainder = extra;

    for width in scaled.iter_mut().filter(|w| **w == 0) {
        if extra == 0 {
            break;
        }
        *width += 1;
        extra -= 1;
    }

    let share = extra / columns;
    let leftover = extra % columns;
    for (i, width) in scaled.iter_mut().enumerate() {
        *width += share + usize::from(i < leftover);
    }

    trace!(table_width, ?scaled, remainder, "scaled widths with remainder");
    scaled
}

/// Fixed content width for every column, never less than 1.
pub fn fixed_column_widths(columns: usize, width: usize) -> Vec<usize> {
    vec![width.max(1); columns]
}
