// src/plot_functions/plot_shear_over_time.rs

use std::path::Path;

use crate::constants::{
    CHART_PAGE_HEIGHT, CHART_PAGE_WIDTH, COLOR_SHEAR, MARKER_OPACITY_FRAME, MARKER_SIZE_FRAME,
};
use crate::data_analysis::aggregate::EventGroups;
use crate::plot_framework::{draw_chart_page, MarkerShape, PlotConfig, PlotSeries};
use crate::types::PlotResult;

/// Frame-level zmax over time.
pub fn shear_over_time_config(groups: &EventGroups) -> PlotConfig {
    PlotConfig {
        title: "Phase-2 RS shear (frame-level)".to_string(),
        x_label: "Time (s)".to_string(),
        y_label: "zmax".to_string(),
        series: vec![PlotSeries {
            data: groups.shear().iter().map(|e| (e.timestamp, e.value_a)).collect(),
            label: String::new(),
            color: *COLOR_SHEAR,
            marker: MarkerShape::Circle,
            marker_size: MARKER_SIZE_FRAME,
            opacity: MARKER_OPACITY_FRAME,
        }],
    }
}

pub fn plot_shear_over_time(output_path: &Path, label: &str, groups: &EventGroups) -> PlotResult {
    let config = shear_over_time_config(groups);
    if draw_chart_page(output_path, (CHART_PAGE_WIDTH, CHART_PAGE_HEIGHT), label, &config)? {
        log::info!("  Shear plot saved as '{}'.", output_path.display());
    } else {
        log::info!("  '{}': no shear metrics, placeholder drawn.", output_path.display());
    }
    Ok(())
}
