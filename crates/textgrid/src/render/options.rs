//! Render options and their serde-loadable configuration form.
//!
//! Options are applied in the order given; when two options set the same
//! thing, the later one wins. [`TableWidth`](RenderOption::TableWidth) and
//! [`ColumnWidth`](RenderOption::ColumnWidth) both set the column widths, so
//! only the last of them has any effect.

use serde::{Deserialize, Serialize};

use super::border::LineStyle;
use crate::error::ConfigError;

/// Where horizontal rules are drawn between content rows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HorizontalRules {
    /// A single rule below the first (header) row.
    #[default]
    HeaderOnly,
    /// A rule between every pair of rows.
    EveryRow,
    /// No rules between rows.
    None,
}

/// Whether the title is drawn above or below the table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TitlePosition {
    #[default]
    Top,
    Bottom,
}

/// A single rendering adjustment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RenderOption {
    /// Scale the columns so the whole table is about this many columns wide.
    TableWidth(usize),
    /// Give every column exactly this content width (at least 1).
    ColumnWidth(usize),
    /// Draw borders with this glyph set.
    LineStyle(LineStyle),
    /// Choose where horizontal rules go.
    HorizontalRules(HorizontalRules),
    /// Draw the title above or below the table.
    TitlePosition(TitlePosition),
    /// Do not draw the title.
    HideTitle,
}

/// Render options as a deserializable document.
///
/// ```rust
/// use textgrid::{LineStyle, RenderConfig, RenderOption};
///
/// let config = RenderConfig::from_yaml("line_style: box_drawing\ntable_width: 40\n").unwrap();
/// assert_eq!(
///     config.into_options(),
///     vec![
///         RenderOption::LineStyle(LineStyle::BoxDrawing),
///         RenderOption::TableWidth(40),
///     ]
/// );
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    pub line_style: Option<LineStyle>,
    pub horizontal_rules: Option<HorizontalRules>,
    pub table_width: Option<usize>,
    /// Takes precedence over `table_width` when both are set.
    pub column_width: Option<usize>,
    pub title_position: Option<TitlePosition>,
    pub hide_title: bool,
}

impl RenderConfig {
    /// Parses a config from YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Parses a config from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Converts the config into an ordered option list.
    pub fn into_options(self) -> Vec<RenderOption> {
        let mut options = Vec::new();
        if let Some(style) = self.line_style {
            options.push(RenderOption::LineStyle(style));
        }
        if let Some(rules) = self.horizontal_rules {
            options.push(RenderOption::HorizontalRules(rules));
        }
        if let Some(width) = self.table_width {
            options.push(RenderOption::TableWidth(width));
        }
        if let Some(width) = self.column_width {
            options.push(RenderOption::ColumnWidth(width));
        }
        if let Some(position) = self.title_position {
            options.push(RenderOption::TitlePosition(position));
        }
        if self.hide_title {
            options.push(RenderOption::HideTitle);
        }
        options
    }
}

impl From<RenderConfig> for Vec<RenderOption> {
    fn from(config: RenderConfig) -> Self {
        config.into_options()
    }
}
