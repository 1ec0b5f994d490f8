// src/pipeline.rs

use std::path::PathBuf;

use crate::constants::{DEFAULT_ALIGN_TOLERANCE_S, DOCUMENT_NAME, DOCUMENT_SUMMARY_FILE};
use crate::data_analysis::aggregate::{summarize_run, EventGroups, RunSummary};
use crate::data_analysis::verdict::{evaluate_run, SignalVerdict};
use crate::data_input::input_spec::InputSpec;
use crate::data_input::telemetry_event::{LoadedTelemetry, TelemetryLog};
use crate::data_input::telemetry_parser::parse_telemetry_file;
use crate::error::ReportError;
use crate::plot_functions::plot_cross_metric::{plot_cross_metric, CrossMetric};
use crate::plot_functions::plot_pass_fail::plot_pass_fail;
use crate::plot_functions::plot_pass_overlay::{plot_pass_overlay, PassWindowSet};
use crate::plot_functions::plot_shear_over_time::plot_shear_over_time;
use crate::plot_functions::plot_text_pages::{
    plot_cover_page, plot_placeholder_page, plot_summary_page,
};
use crate::plot_functions::plot_window_envelopes::plot_window_envelopes;
use crate::report_sink::{OutputMode, ReportSink};
use crate::report_text;
use crate::types::PlotResult;

/// What happens when one input cannot be loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Report the input as skipped and continue with the next one.
    SkipInput,
    /// Abort the whole run; nothing is published.
    AbortRun,
}

#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub mode: OutputMode,
    pub failure_policy: FailurePolicy,
    /// Extended statistics text plus the correlation pages.
    pub extended: bool,
    /// Correlator tolerance in seconds.
    pub tolerance: f64,
    pub output_dir: PathBuf,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            mode: OutputMode::Document,
            failure_policy: FailurePolicy::SkipInput,
            extended: false,
            tolerance: DEFAULT_ALIGN_TOLERANCE_S,
            output_dir: PathBuf::from("."),
        }
    }
}

/// Grouped events, summary and verdict of one loaded run.
#[derive(Debug, Clone)]
pub struct RunAnalysis {
    pub groups: EventGroups,
    pub summary: RunSummary,
    pub verdict: SignalVerdict,
}

pub fn analyze_run(label: &str, log: &TelemetryLog) -> RunAnalysis {
    let groups = EventGroups::from_events(&log.events);
    let summary = summarize_run(label, log, &groups);
    let verdict = evaluate_run(&summary);
    RunAnalysis {
        groups,
        summary,
        verdict,
    }
}

/// Result for one input, in command-line order.
#[derive(Debug, Clone)]
pub enum RunOutcome {
    Analyzed {
        summary: RunSummary,
        verdict: SignalVerdict,
    },
    Empty {
        label: String,
        rows_dropped: usize,
    },
    Skipped {
        label: String,
        reason: String,
    },
}

impl RunOutcome {
    pub fn label(&self) -> &str {
        match self {
            RunOutcome::Analyzed { summary, .. } => &summary.label,
            RunOutcome::Empty { label, .. } | RunOutcome::Skipped { label, .. } => label,
        }
    }

    pub fn rollup_status(&self) -> String {
        match self {
            RunOutcome::Analyzed { verdict, .. } => verdict.to_string(),
            RunOutcome::Empty { .. } => "no telemetry data".to_string(),
            RunOutcome::Skipped { reason, .. } => format!("skipped ({reason})"),
        }
    }

    pub fn verdict(&self) -> Option<SignalVerdict> {
        match self {
            RunOutcome::Analyzed { verdict, .. } => Some(*verdict),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub struct BatchReport {
    pub outcomes: Vec<RunOutcome>,
    pub pass_windows: Vec<PassWindowSet>,
    /// Exact console text, identical to `summary.txt` in the document.
    pub text: String,
    /// Published document directory or figure directory.
    pub output: Option<PathBuf>,
}

fn render(page: &str, result: PlotResult) -> Result<(), ReportError> {
    result.map_err(|err| ReportError::render(page, err))
}

/// Loads, analyzes and renders every input in order, then publishes the output.
///
/// Input-scoped load errors follow `config.failure_policy`; render and output
/// errors always abort, and an aborted run leaves no partial output behind.
pub fn run_report(inputs: &[InputSpec], config: &ReportConfig) -> Result<BatchReport, ReportError> {
    if inputs.is_empty() {
        return Err(ReportError::Usage);
    }
    let mut sink = ReportSink::create(config.mode, &config.output_dir)?;
    if config.mode == OutputMode::Document {
        log::info!(
            "Writing batch analysis to '{}'",
            config.output_dir.join(DOCUMENT_NAME).display()
        );
    }

    if let Some(path) = sink.next_document_page("cover") {
        let labels: Vec<String> = inputs.iter().map(|input| input.label.clone()).collect();
        render("cover page", plot_cover_page(&path, &labels))?;
    }

    let mut outcomes = Vec::with_capacity(inputs.len());
    let mut pass_windows = Vec::new();
    let mut text = String::new();

    for input in inputs {
        log::info!("Processing '{}' ({})", input.path.display(), input.label);
        let root_name = input.root_name();

        let (block, outcome) = match parse_telemetry_file(&input.path) {
            Ok(LoadedTelemetry::Events(telemetry)) => {
                let analysis = analyze_run(&input.label, &telemetry);
                render_run(&mut sink, config, &root_name, &analysis)?;
                if !analysis.groups.passes().is_empty() {
                    pass_windows.push(PassWindowSet {
                        label: input.label.clone(),
                        windows: analysis.groups.passes().to_vec(),
                    });
                }
                let block = report_text::run_block(&analysis.summary, analysis.verdict, config.extended);
                let outcome = RunOutcome::Analyzed {
                    summary: analysis.summary,
                    verdict: analysis.verdict,
                };
                (block, outcome)
            }
            Ok(LoadedTelemetry::Empty { rows_dropped }) => {
                log::warn!("'{}' holds no rows with a positive timestamp.", input.path.display());
                if let Some(path) = sink.next_chart(&root_name, "no_data") {
                    render(
                        "placeholder page",
                        plot_placeholder_page(&path, &input.label, "No telemetry data"),
                    )?;
                }
                (
                    report_text::empty_block(&input.label, rows_dropped),
                    RunOutcome::Empty {
                        label: input.label.clone(),
                        rows_dropped,
                    },
                )
            }
            Err(err) if err.is_input_scoped() && config.failure_policy == FailurePolicy::SkipInput => {
                log::warn!("Skipping '{}': {}", input.label, err);
                let reason = err.input_reason();
                if let Some(path) = sink.next_chart(&root_name, "skipped") {
                    render(
                        "placeholder page",
                        plot_placeholder_page(&path, &input.label, &format!("Skipped: {reason}")),
                    )?;
                }
                (
                    report_text::skipped_block(&input.label, &reason),
                    RunOutcome::Skipped {
                        label: input.label.clone(),
                        reason,
                    },
                )
            }
            Err(err) => return Err(err),
        };

        print!("{block}");
        text.push_str(&block);
        outcomes.push(outcome);
    }

    if pass_windows.is_empty() {
        log::info!("No PASS windows in any input, overlay omitted.");
    } else {
        let overlay_root = match inputs {
            [single] => single.root_name(),
            _ => "batch".to_string(),
        };
        if let Some(path) = sink.next_chart(&overlay_root, "pass_overlay") {
            plot_pass_overlay(&path, &pass_windows)
                .map_err(|err| ReportError::render("PASS overlay", err))?;
        }
    }

    let rollup = report_text::batch_rollup(&outcomes);
    print!("{rollup}");
    text.push_str(&rollup);

    sink.write_text(DOCUMENT_SUMMARY_FILE, &text)?;
    let output = sink.finish()?;

    Ok(BatchReport {
        outcomes,
        pass_windows,
        text,
        output,
    })
}

fn render_run(
    sink: &mut ReportSink,
    config: &ReportConfig,
    root_name: &str,
    analysis: &RunAnalysis,
) -> Result<(), ReportError> {
    let label = analysis.summary.label.as_str();

    if let Some(path) = sink.next_document_page(&format!("{root_name}_summary")) {
        let body = report_text::run_body(&analysis.summary, analysis.verdict, config.extended);
        render("summary page", plot_summary_page(&path, label, &body))?;
    }
    if let Some(path) = sink.next_chart(root_name, "shear") {
        render("shear chart", plot_shear_over_time(&path, label, &analysis.groups))?;
    }
    if let Some(path) = sink.next_chart(root_name, "window_envelopes") {
        render("window envelope chart", plot_window_envelopes(&path, label, &analysis.groups))?;
    }
    if let Some(path) = sink.next_chart(root_name, "pass_fail") {
        render("PASS/FAIL chart", plot_pass_fail(&path, label, &analysis.groups))?;
    }
    if config.extended {
        for metric in CrossMetric::ALL {
            if let Some(path) = sink.next_chart(root_name, metric.slug()) {
                render(
                    metric.slug(),
                    plot_cross_metric(&path, label, &analysis.groups, metric, config.tolerance),
                )?;
            }
        }
    }
    Ok(())
}
