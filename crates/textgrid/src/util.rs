//! Display-width aware text measurement, clipping and padding.
//!
//! Widths are terminal columns, not characters: CJK ideographs and most
//! emoji occupy two columns, combining marks occupy none.

use console::{measure_text_width, pad_str, Alignment, AnsiCodeIterator};

/// Returns the display width of a string in terminal columns.
///
/// # Example
///
/// ```rust
/// use textgrid::util::display_width;
///
/// assert_eq!(display_width("hello"), 5);
/// assert_eq!(display_width("日本"), 4);
/// ```
pub fn display_width(s: &str) -> usize {
    measure_text_width(s)
}

/// Cuts a string so that it fits within `max_width` display columns.
///
/// Trailing content is dropped with no ellipsis. A wide character that would
/// straddle the limit is dropped entirely, so the result can be one column
/// narrower than `max_width`. ANSI escape sequences take no columns and are
/// kept whole, including any that follow the cut.
///
/// ```rust
/// use textgrid::util::clip_to_width;
///
/// assert_eq!(clip_to_width("Hello World", 5), "Hello");
/// assert_eq!(clip_to_width("日本語", 3), "日");
/// ```
pub fn clip_to_width(s: &str, max_width: usize) -> String {
    if display_width(s) <= max_width {
        return s.to_string();
    }

    // Widths are measured on the whole candidate so that grapheme-level
    // rules (emoji presentation selectors, combining marks) apply.
    let mut result = String::new();
    let mut full = false;
    for (segment, is_ansi) in AnsiCodeIterator::new(s) {
        if is_ansi {
            result.push_str(segment);
            continue;
        }
        if full {
            continue;
        }
        for c in segment.chars() {
            let mut candidate = result.clone();
            candidate.push(c);
            if display_width(&candidate) > max_width {
                full = true;
                break;
            }
            result = candidate;
        }
    }
    result
}

/// Pads a string on the right (left-aligns) to reach the target width.
///
/// Strings already at least `width` columns wide are returned unchanged.
pub fn pad_right(s: &str, width: usize) -> String {
    pad_str(s, width, Alignment::Left, None).into_owned()
}

/// Pads a string on both sides (centers) to reach the target width.
///
/// When the remaining space is odd, the extra space goes on the right.
///
/// ```rust
/// use textgrid::util::pad_center;
///
/// assert_eq!(pad_center("hi", 6), "  hi  ");
/// assert_eq!(pad_center("hi", 5), " hi  ");
/// ```
pub fn pad_center(s: &str, width: usize) -> String {
    pad_str(s, width, Alignment::Center, None).into_owned()
}

/// Splits text into its physical lines.
///
/// Both `\n` and `\r\n` break lines. Empty text is a single empty line, so a
/// blank cell still occupies one visual row.
pub fn split_lines(s: &str) -> Vec<&str> {
    let lines: Vec<&str> = s.lines().collect();
    if lines.is_empty() {
        vec![""]
    } else {
        lines
    }
}
