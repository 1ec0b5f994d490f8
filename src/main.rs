// src/main.rs

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{CommandFactory, Parser};

use rs_telemetry_render::constants::DEFAULT_ALIGN_TOLERANCE_S;
use rs_telemetry_render::data_input::input_spec::InputSpec;
use rs_telemetry_render::error::ReportError;
use rs_telemetry_render::pipeline::{run_report, FailurePolicy, ReportConfig};
use rs_telemetry_render::report_sink::OutputMode;

#[derive(Parser)]
#[command(name = "rs_telemetry_render")]
#[command(about = "Batch report of RS telemetry CSV logs: statistics, verdicts and charts")]
#[command(version = rs_telemetry_render::crate_version())]
struct Cli {
    /// Telemetry CSV files, each optionally followed by `:label`
    #[arg(value_name = "INPUT[:LABEL]")]
    inputs: Vec<String>,

    /// Directory that receives the report document or figures
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Write standalone chart files instead of the batch document; load errors abort the run
    #[arg(long, conflicts_with = "text_only")]
    figures: bool,

    /// Console text only, no images
    #[arg(long)]
    text_only: bool,

    /// Extended statistics and shear correlation charts
    #[arg(long)]
    extended: bool,

    /// Correlator tolerance in seconds
    #[arg(long, default_value_t = DEFAULT_ALIGN_TOLERANCE_S)]
    tolerance: f64,

    /// Abort the batch on the first input that cannot be loaded
    #[arg(long)]
    fail_fast: bool,
}

impl Cli {
    fn report_config(&self) -> ReportConfig {
        let mode = if self.text_only {
            OutputMode::TextOnly
        } else if self.figures {
            OutputMode::Figures
        } else {
            OutputMode::Document
        };
        let failure_policy = if self.fail_fast || mode == OutputMode::Figures {
            FailurePolicy::AbortRun
        } else {
            FailurePolicy::SkipInput
        };
        ReportConfig {
            mode,
            failure_policy,
            extended: self.extended,
            tolerance: self.tolerance,
            output_dir: self.output_dir.clone(),
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    if cli.inputs.is_empty() {
        eprintln!("{}", Cli::command().render_usage());
        return ExitCode::from(1);
    }
    if !(cli.tolerance >= 0.0) {
        eprintln!("Error: --tolerance must be a non-negative number of seconds");
        return ExitCode::from(1);
    }

    let inputs: Vec<InputSpec> = cli.inputs.iter().map(|arg| InputSpec::parse(arg)).collect();
    let config = cli.report_config();
    log::info!("rs_telemetry_render {}", rs_telemetry_render::crate_version());

    match run_report(&inputs, &config) {
        Ok(report) => {
            if let Some(output) = report.output {
                log::info!("Batch analysis complete: '{}'", output.display());
            }
            ExitCode::SUCCESS
        }
        Err(ReportError::Usage) => {
            eprintln!("{}", Cli::command().render_usage());
            ExitCode::from(1)
        }
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::from(1)
        }
    }
}
