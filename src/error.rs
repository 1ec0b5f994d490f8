// src/error.rs

use std::path::PathBuf;

use thiserror::Error;

/// Failures that stop an input or the whole report.
///
/// Empty telemetry is not an error: a file without positive-timestamp
/// rows is a valid "no data" result, see `LoadedTelemetry::Empty`.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("no input files given")]
    Usage,

    #[error("cannot read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("'{}' is missing required column(s): {}", path.display(), missing.join(", "))]
    Schema {
        path: PathBuf,
        missing: Vec<&'static str>,
    },

    #[error("cannot parse CSV header of '{}': {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("failed to render {page}: {message}")]
    Render { page: String, message: String },

    #[error("failed to write report output '{}': {source}", path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ReportError {
    /// Whether the error only concerns a single input, so a batch may carry on.
    pub fn is_input_scoped(&self) -> bool {
        matches!(
            self,
            ReportError::Io { .. } | ReportError::Schema { .. } | ReportError::Csv { .. }
        )
    }

    /// Error text without the file path, for report content that must not
    /// depend on where the inputs live.
    pub fn input_reason(&self) -> String {
        match self {
            ReportError::Io { source, .. } => format!("cannot read file: {source}"),
            ReportError::Schema { missing, .. } => {
                format!("missing required column(s): {}", missing.join(", "))
            }
            ReportError::Csv { source, .. } => format!("cannot parse CSV header: {source}"),
            other => other.to_string(),
        }
    }

    pub fn render(page: impl Into<String>, err: Box<dyn std::error::Error>) -> Self {
        ReportError::Render {
            page: page.into(),
            message: err.to_string(),
        }
    }
}
