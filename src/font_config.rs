// src/font_config.rs

// Font styles for page and chart rendering, centralized so text pages and
// charts stay visually consistent.

use crate::constants::{
    FONT_SIZE_AXIS_LABEL, FONT_SIZE_BODY, FONT_SIZE_CHART_TITLE, FONT_SIZE_LEGEND,
    FONT_SIZE_MAIN_TITLE, FONT_SIZE_MESSAGE, FONT_SIZE_PAGE_HEADING,
};

/// Font family name for default system fonts.
/// When plotters renders with "sans-serif", it uses system fonts
pub const FONT_FAMILY_SYSTEM: &str = "sans-serif";

/// Monospace family for the summary page body so numeric columns line up.
pub const FONT_FAMILY_MONO: &str = "monospace";

// Tuple representations for use with plotters' IntoFont trait
// These are convenient for direct use with plotters methods like `.caption()` and `.label_style()`
pub const FONT_TUPLE_MAIN_TITLE: (&str, i32) = (FONT_FAMILY_SYSTEM, FONT_SIZE_MAIN_TITLE);
pub const FONT_TUPLE_PAGE_HEADING: (&str, i32) = (FONT_FAMILY_SYSTEM, FONT_SIZE_PAGE_HEADING);
pub const FONT_TUPLE_BODY: (&str, i32) = (FONT_FAMILY_SYSTEM, FONT_SIZE_BODY);
pub const FONT_TUPLE_BODY_MONO: (&str, i32) = (FONT_FAMILY_MONO, FONT_SIZE_BODY);
pub const FONT_TUPLE_CHART_TITLE: (&str, i32) = (FONT_FAMILY_SYSTEM, FONT_SIZE_CHART_TITLE);
pub const FONT_TUPLE_AXIS_LABEL: (&str, i32) = (FONT_FAMILY_SYSTEM, FONT_SIZE_AXIS_LABEL);
pub const FONT_TUPLE_LEGEND: (&str, i32) = (FONT_FAMILY_SYSTEM, FONT_SIZE_LEGEND);
pub const FONT_TUPLE_MESSAGE: (&str, i32) = (FONT_FAMILY_SYSTEM, FONT_SIZE_MESSAGE);
