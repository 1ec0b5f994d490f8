// src/plot_functions/plot_cross_metric.rs

use std::path::Path;

use crate::constants::{
    CHART_PAGE_HEIGHT, CHART_PAGE_WIDTH, COLOR_CORRELATION, MARKER_OPACITY_WINDOW,
    MARKER_SIZE_WINDOW,
};
use crate::data_analysis::aggregate::EventGroups;
use crate::data_analysis::correlate::align_nearest;
use crate::plot_framework::{draw_chart_page, MarkerShape, PlotConfig, PlotSeries};
use crate::types::PlotResult;

/// Frame metric correlated against shear zmax on the joint scatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrossMetric {
    Structure,
    Locality,
}

impl CrossMetric {
    pub const ALL: [CrossMetric; 2] = [CrossMetric::Structure, CrossMetric::Locality];

    pub fn slug(&self) -> &'static str {
        match self {
            CrossMetric::Structure => "shear_vs_structure",
            CrossMetric::Locality => "shear_vs_locality",
        }
    }

    fn axis_label(&self) -> &'static str {
        match self {
            CrossMetric::Structure => "Structure ratio",
            CrossMetric::Locality => "Row-span fraction",
        }
    }
}

/// Shear zmax (x) against the nearest structure or locality sample (y).
pub fn cross_metric_config(groups: &EventGroups, metric: CrossMetric, tolerance: f64) -> PlotConfig {
    let targets = match metric {
        CrossMetric::Structure => groups.structure(),
        CrossMetric::Locality => groups.locality(),
    };
    let pairs = align_nearest(groups.shear(), targets, tolerance);
    log::debug!(
        "{}: {} of {} shear frames aligned within {} s",
        metric.slug(),
        pairs.len(),
        groups.shear().len(),
        tolerance
    );

    PlotConfig {
        title: format!("RS shear vs {}", metric.axis_label().to_lowercase()),
        x_label: "zmax".to_string(),
        y_label: metric.axis_label().to_string(),
        series: vec![PlotSeries {
            data: pairs.iter().map(|p| p.values_a()).collect(),
            label: String::new(),
            color: *COLOR_CORRELATION,
            marker: MarkerShape::Circle,
            marker_size: MARKER_SIZE_WINDOW,
            opacity: MARKER_OPACITY_WINDOW,
        }],
    }
}

pub fn plot_cross_metric(
    output_path: &Path,
    label: &str,
    groups: &EventGroups,
    metric: CrossMetric,
    tolerance: f64,
) -> PlotResult {
    let config = cross_metric_config(groups, metric, tolerance);
    if draw_chart_page(output_path, (CHART_PAGE_WIDTH, CHART_PAGE_HEIGHT), label, &config)? {
        log::info!("  Correlation plot saved as '{}'.", output_path.display());
    } else {
        log::info!("  '{}': nothing aligned, placeholder drawn.", output_path.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_input::telemetry_event::TelemetryEvent;

    fn groups() -> EventGroups {
        EventGroups::from_events(&[
            TelemetryEvent::new(1.0, 0x20, 3.0, 40.0),
            TelemetryEvent::new(1.0004, 0x22, 0.6, 9.0),
            TelemetryEvent::new(1.0010, 0x21, 0.25, 0.9),
            TelemetryEvent::new(2.0, 0x20, 5.0, 41.0),
            TelemetryEvent::new(2.5, 0x22, 0.9, 9.5),
        ])
    }

    #[test]
    fn test_structure_pairs_respect_tolerance() {
        let config = cross_metric_config(&groups(), CrossMetric::Structure, 0.002);
        assert_eq!(config.series[0].data, vec![(3.0, 0.6)]);
        assert_eq!(config.y_label, "Structure ratio");
    }

    #[test]
    fn test_locality_pairs() {
        let config = cross_metric_config(&groups(), CrossMetric::Locality, 0.002);
        assert_eq!(config.series[0].data, vec![(3.0, 0.25)]);
        let narrow = cross_metric_config(&groups(), CrossMetric::Locality, 0.0005);
        assert!(!narrow.has_data());
    }
}
