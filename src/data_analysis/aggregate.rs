// src/data_analysis/aggregate.rs

use std::collections::BTreeMap;

use crate::data_analysis::descriptive::{max_or_zero, median_or_zero};
use crate::data_input::telemetry_event::{TelemetryEvent, TelemetryLog};
use crate::event_taxonomy::{EventKind, VerdictOutcome};

/// Events of one run partitioned by kind.
///
/// Built once per run; summaries, the heuristic and every chart read their
/// collections from here instead of filtering the raw log again. Each group
/// keeps the log's timestamp order.
#[derive(Debug, Clone, Default)]
pub struct EventGroups {
    groups: BTreeMap<EventKind, Vec<TelemetryEvent>>,
}

impl EventGroups {
    pub fn from_events(events: &[TelemetryEvent]) -> Self {
        let mut groups: BTreeMap<EventKind, Vec<TelemetryEvent>> = BTreeMap::new();
        for event in events {
            groups.entry(event.kind).or_default().push(*event);
        }
        Self { groups }
    }

    pub fn get(&self, kind: EventKind) -> &[TelemetryEvent] {
        self.groups.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn count(&self, kind: EventKind) -> usize {
        self.get(kind).len()
    }

    pub fn total(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    /// Kinds present in this run, ascending.
    pub fn kinds(&self) -> impl Iterator<Item = EventKind> + '_ {
        self.groups.keys().copied()
    }

    pub fn shear(&self) -> &[TelemetryEvent] {
        self.get(EventKind::ShearMetric)
    }

    pub fn locality(&self) -> &[TelemetryEvent] {
        self.get(EventKind::LocalityMetric)
    }

    pub fn structure(&self) -> &[TelemetryEvent] {
        self.get(EventKind::StructureMetric)
    }

    pub fn window_summaries(&self) -> &[TelemetryEvent] {
        self.get(EventKind::WindowSummary)
    }

    pub fn passes(&self) -> &[TelemetryEvent] {
        self.get(EventKind::Verdict(VerdictOutcome::Pass))
    }

    pub fn fails(&self) -> &[TelemetryEvent] {
        self.get(EventKind::Verdict(VerdictOutcome::Fail))
    }
}

/// Count, median and max of one value column over one group.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MetricStats {
    pub count: usize,
    pub median: f64,
    pub max: f64,
}

impl MetricStats {
    pub fn of<F>(events: &[TelemetryEvent], value: F) -> Self
    where
        F: Fn(&TelemetryEvent) -> f64,
    {
        let values: Vec<f64> = events.iter().map(value).collect();
        Self {
            count: events.len(),
            median: median_or_zero(&values),
            max: max_or_zero(&values),
        }
    }
}

/// Per-run statistics consumed by the console text, the heuristic and the renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub label: String,
    pub total_events: usize,
    pub rows_dropped: usize,
    pub time_span: Option<(f64, f64)>,
    pub counts: BTreeMap<EventKind, usize>,
    /// ShearMetric valueA (zmax).
    pub shear: MetricStats,
    /// WindowSummary valueA (zmax peak).
    pub window_zmax: MetricStats,
    /// Max of WindowSummary valueB (structure-consistency peak).
    pub window_structure_peak: f64,
    /// LocalityMetric valueA (row-span fraction).
    pub locality: MetricStats,
    /// StructureMetric valueA (structure ratio).
    pub structure: MetricStats,
}

impl RunSummary {
    pub fn count(&self, kind: EventKind) -> usize {
        self.counts.get(&kind).copied().unwrap_or(0)
    }

    pub fn unknown_count(&self) -> usize {
        self.counts
            .iter()
            .filter(|(kind, _)| !kind.is_known())
            .map(|(_, count)| count)
            .sum()
    }
}

pub fn summarize_run(label: &str, log: &TelemetryLog, groups: &EventGroups) -> RunSummary {
    let counts: BTreeMap<EventKind, usize> =
        groups.kinds().map(|kind| (kind, groups.count(kind))).collect();
    let windows = groups.window_summaries();

    RunSummary {
        label: label.to_string(),
        total_events: log.len(),
        rows_dropped: log.rows_dropped,
        time_span: log.time_span(),
        counts,
        shear: MetricStats::of(groups.shear(), |e| e.value_a),
        window_zmax: MetricStats::of(windows, |e| e.value_a),
        window_structure_peak: max_or_zero(&windows.iter().map(|e| e.value_b).collect::<Vec<_>>()),
        locality: MetricStats::of(groups.locality(), |e| e.value_a),
        structure: MetricStats::of(groups.structure(), |e| e.value_a),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn log_of(rows: &[(f64, u32, f64, f64)]) -> TelemetryLog {
        TelemetryLog {
            events: rows
                .iter()
                .map(|&(t, code, a, b)| TelemetryEvent::new(t, code, a, b))
                .collect(),
            rows_dropped: 0,
        }
    }

    #[test]
    fn test_counts_sum_to_total() {
        let log = log_of(&[
            (1.0, 0x41, 120.0, 0.0),
            (1.1, 0x20, 1.0, 40.0),
            (1.2, 0x20, 2.0, 41.0),
            (1.3, 0x21, 0.3, 0.8),
            (1.4, 0x77, 0.0, 0.0),
            (1.5, 0x90, 6.0, 0.7),
        ]);
        let groups = EventGroups::from_events(&log.events);
        let summary = summarize_run("run", &log, &groups);
        let counted: usize = summary.counts.values().sum();
        assert_eq!(counted, summary.total_events);
        assert_eq!(groups.total(), 6);
        assert_eq!(summary.count(EventKind::ShearMetric), 2);
        assert_eq!(summary.count(EventKind::Unknown(0x77)), 1);
        assert_eq!(summary.unknown_count(), 1);
    }

    #[test]
    fn test_shear_median_and_max() {
        let log = log_of(&[(1.0, 0x20, 1.0, 0.0), (2.0, 0x20, 3.0, 0.0)]);
        let groups = EventGroups::from_events(&log.events);
        let summary = summarize_run("scenario-a", &log, &groups);
        assert_eq!(summary.shear.count, 2);
        assert_eq!(summary.shear.median, 2.0);
        assert_eq!(summary.shear.max, 3.0);
    }

    #[test]
    fn test_window_statistics() {
        let log = log_of(&[
            (1.0, 0x80, 4.0, 0.2),
            (2.0, 0x80, 8.0, 0.9),
            (3.0, 0x80, 5.0, 0.4),
        ]);
        let groups = EventGroups::from_events(&log.events);
        let summary = summarize_run("windows", &log, &groups);
        assert_eq!(summary.window_zmax.count, 3);
        assert_eq!(summary.window_zmax.median, 5.0);
        assert_eq!(summary.window_zmax.max, 8.0);
        assert_eq!(summary.window_structure_peak, 0.9);
    }

    #[test]
    fn test_empty_groups_report_zero() {
        let log = log_of(&[(1.0, 0x41, 100.0, 0.0)]);
        let groups = EventGroups::from_events(&log.events);
        let summary = summarize_run("fast9-only", &log, &groups);
        assert_eq!(summary.shear, MetricStats::default());
        assert_eq!(summary.window_zmax, MetricStats::default());
        assert_eq!(summary.window_structure_peak, 0.0);
        assert!(groups.passes().is_empty());
    }

    #[test]
    fn test_groups_keep_timestamp_order() {
        let log = log_of(&[
            (1.0, 0x90, 3.0, 0.1),
            (2.0, 0x91, 1.0, 0.1),
            (3.0, 0x90, 5.0, 0.2),
        ]);
        let groups = EventGroups::from_events(&log.events);
        let pass_times: Vec<f64> = groups.passes().iter().map(|e| e.timestamp).collect();
        assert_eq!(pass_times, vec![1.0, 3.0]);
        assert_eq!(groups.fails().len(), 1);
    }
}
