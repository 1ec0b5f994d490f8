// src/plot_functions/plot_pass_fail.rs

use std::path::Path;

use crate::constants::{
    CHART_PAGE_HEIGHT, CHART_PAGE_WIDTH, COLOR_FAIL, COLOR_PASS, MARKER_OPACITY_VERDICT,
    MARKER_SIZE_FAIL, MARKER_SIZE_PASS,
};
use crate::data_analysis::aggregate::EventGroups;
use crate::plot_framework::{draw_chart_page, MarkerShape, PlotConfig, PlotSeries};
use crate::types::PlotResult;

/// Phase-4 verdict windows over time: FAIL as crosses, PASS as circles.
pub fn pass_fail_config(groups: &EventGroups) -> PlotConfig {
    let fail_series = PlotSeries {
        data: groups.fails().iter().map(|e| (e.timestamp, e.value_a)).collect(),
        label: "FAIL".to_string(),
        color: *COLOR_FAIL,
        marker: MarkerShape::Cross,
        marker_size: MARKER_SIZE_FAIL,
        opacity: MARKER_OPACITY_VERDICT,
    };
    let pass_series = PlotSeries {
        data: groups.passes().iter().map(|e| (e.timestamp, e.value_a)).collect(),
        label: "PASS".to_string(),
        color: *COLOR_PASS,
        marker: MarkerShape::Circle,
        marker_size: MARKER_SIZE_PASS,
        opacity: MARKER_OPACITY_VERDICT,
    };
    PlotConfig {
        title: "Phase-4 PASS / FAIL windows".to_string(),
        x_label: "Time (s)".to_string(),
        y_label: "zmaxPeak".to_string(),
        series: vec![fail_series, pass_series],
    }
}

pub fn plot_pass_fail(output_path: &Path, label: &str, groups: &EventGroups) -> PlotResult {
    let config = pass_fail_config(groups);
    if draw_chart_page(output_path, (CHART_PAGE_WIDTH, CHART_PAGE_HEIGHT), label, &config)? {
        log::info!("  PASS/FAIL plot saved as '{}'.", output_path.display());
    } else {
        log::info!("  '{}': no Phase-4 verdicts, placeholder drawn.", output_path.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_input::telemetry_event::TelemetryEvent;

    #[test]
    fn test_pass_and_fail_split_into_series() {
        let events = vec![
            TelemetryEvent::new(1.0, 0x91, 2.0, 0.3),
            TelemetryEvent::new(2.0, 0x90, 6.0, 0.8),
            TelemetryEvent::new(3.0, 0x90, 7.0, 0.9),
        ];
        let config = pass_fail_config(&EventGroups::from_events(&events));
        assert_eq!(config.series[0].label, "FAIL");
        assert_eq!(config.series[0].data, vec![(1.0, 2.0)]);
        assert_eq!(config.series[0].marker, MarkerShape::Cross);
        assert_eq!(config.series[1].label, "PASS");
        assert_eq!(config.series[1].data, vec![(2.0, 6.0), (3.0, 7.0)]);
    }
}
