// src/report_text.rs
// Console text of the report. Every block is a pure function of the run data.

use std::fmt::Write;

use crate::data_analysis::aggregate::{MetricStats, RunSummary};
use crate::data_analysis::verdict::SignalVerdict;
use crate::event_taxonomy::{EventKind, VerdictOutcome};
use crate::pipeline::RunOutcome;

pub fn block_header(label: &str) -> String {
    format!("=== {label} ===\n")
}

/// Statistics shown under the run heading, also used as the summary page body.
pub fn run_body(summary: &RunSummary, verdict: SignalVerdict, extended: bool) -> String {
    let mut text = String::new();
    let _ = writeln!(text, "FAST9 frames: {}", summary.count(EventKind::FeatureYield));
    let _ = writeln!(text, "RS frames: {}", summary.count(EventKind::ShearMetric));
    let _ = writeln!(text, "Phase-3 windows: {}", summary.count(EventKind::WindowSummary));
    let _ = writeln!(
        text,
        "Phase-4 PASS: {}   FAIL: {}",
        summary.count(EventKind::Verdict(VerdictOutcome::Pass)),
        summary.count(EventKind::Verdict(VerdictOutcome::Fail))
    );
    text.push('\n');
    let _ = writeln!(text, "Peak window zmax: {:.4}", summary.window_zmax.max);
    let _ = writeln!(text, "Peak structure consistency: {:.3}", summary.window_structure_peak);
    let _ = writeln!(text, "{}", stats_line("Window zmax peak", &summary.window_zmax));
    let _ = writeln!(text, "{}", stats_line("RS shear zmax", &summary.shear));

    text.push('\n');
    text.push_str(&event_counts(summary));

    if extended {
        text.push('\n');
        text.push_str(&extended_body(summary));
    }

    text.push('\n');
    let _ = writeln!(text, "Verdict (heuristic): {verdict}");
    text
}

fn stats_line(name: &str, stats: &MetricStats) -> String {
    format!("{name} median: {:.4}   max: {:.4}", stats.median, stats.max)
}

/// Every known kind present in the run, in code order, then unknown codes.
fn event_counts(summary: &RunSummary) -> String {
    let mut text = String::from("Event counts:\n");
    for kind in EventKind::all_known() {
        let count = summary.count(kind);
        if count > 0 {
            let _ = writeln!(text, "  {kind}: {count}");
        }
    }
    let _ = writeln!(text, "  Unknown codes: {}", summary.unknown_count());
    text
}

fn extended_body(summary: &RunSummary) -> String {
    let mut text = String::new();
    let _ = writeln!(text, "Events retained: {}", summary.total_events);
    let _ = writeln!(text, "Rows dropped: {}", summary.rows_dropped);
    if let Some((first, last)) = summary.time_span {
        let _ = writeln!(text, "Time span: {first:.6} - {last:.6} s");
    }
    let _ = writeln!(text, "{}", stats_line("RS row-span fraction", &summary.locality));
    let _ = writeln!(text, "{}", stats_line("RS structure ratio", &summary.structure));
    text
}

pub fn run_block(summary: &RunSummary, verdict: SignalVerdict, extended: bool) -> String {
    let mut text = block_header(&summary.label);
    text.push_str(&run_body(summary, verdict, extended));
    text.push('\n');
    text
}

pub fn empty_block(label: &str, rows_dropped: usize) -> String {
    format!(
        "{}(No telemetry data)\nRows dropped: {rows_dropped}\n\n",
        block_header(label)
    )
}

pub fn skipped_block(label: &str, reason: &str) -> String {
    format!("{}Skipped: {reason}\n\n", block_header(label))
}

/// Final `<label>: <status>` line per input, in input order.
pub fn batch_rollup(outcomes: &[RunOutcome]) -> String {
    let mut text = block_header("Batch summary");
    for outcome in outcomes {
        let _ = writeln!(text, "{}: {}", outcome.label(), outcome.rollup_status());
    }
    text
}
