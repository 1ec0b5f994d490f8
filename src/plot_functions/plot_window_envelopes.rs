// src/plot_functions/plot_window_envelopes.rs

use std::path::Path;

use crate::constants::{
    CHART_PAGE_HEIGHT, CHART_PAGE_WIDTH, COLOR_WINDOW, MARKER_OPACITY_WINDOW, MARKER_SIZE_WINDOW,
};
use crate::data_analysis::aggregate::EventGroups;
use crate::plot_framework::{draw_chart_page, MarkerShape, PlotConfig, PlotSeries};
use crate::types::PlotResult;

/// Phase-3 window zmax peaks over time.
pub fn window_envelopes_config(groups: &EventGroups) -> PlotConfig {
    PlotConfig {
        title: "Phase-3 RS window envelopes".to_string(),
        x_label: "Time (s)".to_string(),
        y_label: "zmaxPeak".to_string(),
        series: vec![PlotSeries {
            data: groups
                .window_summaries()
                .iter()
                .map(|e| (e.timestamp, e.value_a))
                .collect(),
            label: String::new(),
            color: *COLOR_WINDOW,
            marker: MarkerShape::Circle,
            marker_size: MARKER_SIZE_WINDOW,
            opacity: MARKER_OPACITY_WINDOW,
        }],
    }
}

pub fn plot_window_envelopes(output_path: &Path, label: &str, groups: &EventGroups) -> PlotResult {
    let config = window_envelopes_config(groups);
    if draw_chart_page(output_path, (CHART_PAGE_WIDTH, CHART_PAGE_HEIGHT), label, &config)? {
        log::info!("  Window envelope plot saved as '{}'.", output_path.display());
    } else {
        log::info!("  '{}': no Phase-3 windows, placeholder drawn.", output_path.display());
    }
    Ok(())
}
