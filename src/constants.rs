// src/constants.rs

use plotters::style::colors::full_palette::{BLUE_700, GREY_600, ORANGE, RED_600, TEAL};
use plotters::style::RGBColor;

// Page dimensions. Text pages are portrait (8.5x11 at 200 dpi), chart pages landscape.
pub const TEXT_PAGE_WIDTH: u32 = 1700;
pub const TEXT_PAGE_HEIGHT: u32 = 2200;
pub const CHART_PAGE_WIDTH: u32 = 2000;
pub const CHART_PAGE_HEIGHT: u32 = 800;
pub const OVERLAY_PAGE_WIDTH: u32 = 2000;
pub const OVERLAY_PAGE_HEIGHT: u32 = 1200;

// Output naming.
pub const DOCUMENT_NAME: &str = "rs_phase4_batch_analysis";
pub const DOCUMENT_SUMMARY_FILE: &str = "summary.txt";
pub const STAGING_PREFIX: &str = ".rs_report_staging_";
pub const REPORT_TITLE: &str = "LaunchLab - Phase-4 RS Batch Analysis";

// Required CSV columns.
pub const COLUMN_TIMESTAMP: &str = "timestamp";
pub const COLUMN_CODE: &str = "code";
pub const COLUMN_VALUE_A: &str = "valueA";
pub const COLUMN_VALUE_B: &str = "valueB";
pub const REQUIRED_COLUMNS: [&str; 4] = [COLUMN_TIMESTAMP, COLUMN_CODE, COLUMN_VALUE_A, COLUMN_VALUE_B];

// Correlator default: two events belong together if emitted within 2 ms.
pub const DEFAULT_ALIGN_TOLERANCE_S: f64 = 0.002;

// Verdict heuristic: shear max must reach this multiple of the shear median.
pub const SEPARATION_MULTIPLIER: f64 = 2.5;

// Font sizes.
pub const FONT_SIZE_MAIN_TITLE: i32 = 56;
pub const FONT_SIZE_PAGE_HEADING: i32 = 44;
pub const FONT_SIZE_BODY: i32 = 30;
pub const FONT_SIZE_CHART_TITLE: i32 = 28;
pub const FONT_SIZE_AXIS_LABEL: i32 = 18;
pub const FONT_SIZE_LEGEND: i32 = 18;
pub const FONT_SIZE_MESSAGE: i32 = 32;

// Vertical layout of text pages, as fractions of page height.
pub const COVER_TITLE_Y: f64 = 0.15;
pub const COVER_SUBTITLE_Y: f64 = 0.25;
pub const COVER_LIST_START_Y: f64 = 0.30;
pub const COVER_LIST_STEP_Y: f64 = 0.035;
pub const SUMMARY_HEADING_Y: f64 = 0.10;
pub const SUMMARY_BODY_Y: f64 = 0.18;
pub const TEXT_LINE_SPACING: f64 = 1.5;

// Marker sizes (pixels) for scatter charts.
pub const MARKER_SIZE_FRAME: i32 = 3;
pub const MARKER_SIZE_WINDOW: i32 = 6;
pub const MARKER_SIZE_FAIL: i32 = 7;
pub const MARKER_SIZE_PASS: i32 = 8;
pub const MARKER_SIZE_OVERLAY: i32 = 9;

// --- Plot Color Assignments ---
pub const COLOR_SHEAR: &RGBColor = &BLUE_700;
pub const COLOR_WINDOW: &RGBColor = &TEAL;
pub const COLOR_PASS: &RGBColor = &BLUE_700;
pub const COLOR_FAIL: &RGBColor = &RED_600;
pub const COLOR_CORRELATION: &RGBColor = &ORANGE;
pub const COLOR_PLACEHOLDER_TEXT: &RGBColor = &GREY_600;

pub const MARKER_OPACITY_FRAME: f64 = 0.5;
pub const MARKER_OPACITY_WINDOW: f64 = 0.7;
pub const MARKER_OPACITY_VERDICT: f64 = 0.8;
pub const LINE_WIDTH_LEGEND: u32 = 2;

// src/constants.rs
