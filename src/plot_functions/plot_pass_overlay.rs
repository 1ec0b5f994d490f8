// src/plot_functions/plot_pass_overlay.rs

use std::path::Path;

use plotters::style::RGBColor;

use crate::constants::{
    MARKER_OPACITY_VERDICT, MARKER_SIZE_OVERLAY, OVERLAY_PAGE_HEIGHT, OVERLAY_PAGE_WIDTH,
};
use crate::data_input::telemetry_event::TelemetryEvent;
use crate::plot_framework::{draw_chart_page, MarkerShape, PlotConfig, PlotSeries};
use crate::types::PlotResult;

/// Phase-4 PASS windows collected from one input, kept for the cross-run overlay.
#[derive(Debug, Clone)]
pub struct PassWindowSet {
    pub label: String,
    pub windows: Vec<TelemetryEvent>,
}

fn series_color(index: usize) -> RGBColor {
    let palette = colorous::CATEGORY10;
    let color = palette[index % palette.len()];
    RGBColor(color.r, color.g, color.b)
}

/// One series per input, structure consistency (x) against zmax peak (y).
/// Inputs without PASS windows contribute no series.
pub fn pass_overlay_series(sets: &[PassWindowSet]) -> Vec<PlotSeries> {
    sets.iter()
        .filter(|set| !set.windows.is_empty())
        .enumerate()
        .map(|(index, set)| PlotSeries {
            data: set.windows.iter().map(|e| (e.value_b, e.value_a)).collect(),
            label: set.label.clone(),
            color: series_color(index),
            marker: MarkerShape::Circle,
            marker_size: MARKER_SIZE_OVERLAY,
            opacity: MARKER_OPACITY_VERDICT,
        })
        .collect()
}

pub fn pass_overlay_config(sets: &[PassWindowSet]) -> PlotConfig {
    PlotConfig {
        title: "Phase-4 PASS Windows - Cross-Test Comparison".to_string(),
        x_label: "Structure Consistency".to_string(),
        y_label: "zmaxPeak".to_string(),
        series: pass_overlay_series(sets),
    }
}

/// Renders the overlay page. Returns false without writing anything when no
/// input produced a PASS window.
pub fn plot_pass_overlay(output_path: &Path, sets: &[PassWindowSet]) -> PlotResult<bool> {
    let config = pass_overlay_config(sets);
    if config.series.is_empty() {
        log::info!("No PASS windows in any input, overlay omitted.");
        return Ok(false);
    }
    draw_chart_page(
        output_path,
        (OVERLAY_PAGE_WIDTH, OVERLAY_PAGE_HEIGHT),
        "Cross-test comparison",
        &config,
    )?;
    log::info!("PASS overlay saved as '{}'.", output_path.display());
    Ok(true)
}
