//! Turns one logical row into aligned visual rows.
//!
//! A cell may span several physical lines, either because it contains line
//! breaks or not at all when it is too wide (in which case it is clipped).
//! All cells of a row are padded to the same number of lines so the row
//! renders as a block of equally tall visual rows.

use crate::rows::Rows;
use crate::util::{clip_to_width, pad_right, split_lines};

/// Splits, clips and aligns the cells of one row.
///
/// Returns one entry per visual row, each holding one string per column.
/// Cells with fewer lines than the tallest cell are padded with empty lines
/// below their content. A row always yields at least one visual row.
///
/// ```rust
/// use textgrid::render::visual_rows;
///
/// let cells = vec!["1\n1".to_string(), "2".to_string()];
/// assert_eq!(
///     visual_rows(&cells, &[1, 1]),
///     vec![vec!["1", "2"], vec!["1", ""]],
/// );
/// ```
pub fn visual_rows(cells: &[String], widths: &[usize]) -> Vec<Vec<String>> {
    if cells.is_empty() {
        return vec![Vec::new()];
    }

    let columns: Vec<Vec<String>> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| {
            split_lines(cell)
                .into_iter()
                .map(|line| clip_to_width(line, width))
                .collect()
        })
        .collect();

    // Each column is one list of lines; transposing lines them up.
    Rows::from_columns(columns, String::new).into_rows()
}

/// Formats one visual row as `| a | b |`, padding every cell to its width.
pub fn format_visual_row(cells: &[String], widths: &[usize], vertical: char) -> String {
    let mut line = String::new();
    line.push(vertical);
    for (i, (cell, &width)) in cells.iter().zip(widths).enumerate() {
        if i > 0 {
            line.push(vertical);
        }
        line.push(' ');
        line.push_str(&pad_right(cell, width));
        line.push(' ');
    }
    line.push(vertical);
    line
}

/// Renders a logical row to its output lines.
pub fn render_row(cells: &[String], widths: &[usize], vertical: char) -> Vec<String> {
    visual_rows(cells, widths)
        .iter()
        .map(|visual| format_visual_row(visual, widths, vertical))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::display_width;

    fn cells(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn single_line_row() {
        let rows = visual_rows(&cells(&["a", "bc"]), &[1, 2]);
        assert_eq!(rows, vec![vec!["a", "bc"]]);
    }

    #[test]
    fn multi_line_cells_are_bottom_padded() {
        let rows = visual_rows(&cells(&["x", "1\n2\n3", "y\nz"]), &[1, 1, 1]);
        assert_eq!(
            rows,
            vec![vec!["x", "1", "y"], vec!["", "2", "z"], vec!["", "3", ""]]
        );
    }

    #[test]
    fn lines_are_clipped_to_width() {
        let rows = visual_rows(&cells(&["abcdef\nxy", "日本語"]), &[3, 3]);
        assert_eq!(rows, vec![vec!["abc", "日"], vec!["xy", ""]]);
    }

    #[test]
    fn emoji_are_clipped_to_the_column() {
        let hearts = "\u{2764}\u{FE0F}\u{2764}\u{FE0F}".to_string();
        let line = format_visual_row(&visual_rows(&[hearts], &[3])[0], &[3], '|');
        assert_eq!(display_width(&line), 3 + 4);
    }

    #[test]
    fn empty_cells_still_produce_a_line() {
        let rows = visual_rows(&cells(&["", ""]), &[0, 2]);
        assert_eq!(rows, vec![vec!["", ""]]);
    }

    #[test]
    fn zero_column_row_has_one_visual_row() {
        let rows = visual_rows(&[], &[]);
        assert_eq!(rows, vec![Vec::<String>::new()]);
        assert_eq!(format_visual_row(&[], &[], '|'), "||");
    }

    #[test]
    fn format_pads_each_cell() {
        let line = format_visual_row(&cells(&["a", "bb", ""]), &[3, 2, 1], '|');
        assert_eq!(line, "| a   | bb |   |");
    }

    #[test]
    fn format_pads_by_display_width() {
        let line = format_visual_row(&cells(&["日", "ab"]), &[3, 2], '│');
        assert_eq!(line, "│ 日  │ ab │");
    }

    #[test]
    fn render_row_emits_one_line_per_visual_row() {
        let lines = render_row(&cells(&["1\n1", "2", "3"]), &[1, 1, 1], '|');
        assert_eq!(lines, vec!["| 1 | 2 | 3 |", "| 1 |   |   |"]);
    }
}
