// src/data_analysis/verdict.rs

use std::fmt;

use crate::constants::SEPARATION_MULTIPLIER;
use crate::data_analysis::aggregate::RunSummary;

/// Qualitative read of the frame-level shear statistic.
///
/// Heuristic only: printed in the report, never used to gate the run or its
/// exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalVerdict {
    /// No shear metrics recorded, or all of them were zero.
    NoSignal,
    /// Peak shear stays below `SEPARATION_MULTIPLIER` times the median.
    WeakSeparation,
    /// Peak shear reaches `SEPARATION_MULTIPLIER` times the median.
    Confirmed,
}

impl SignalVerdict {
    pub fn description(&self) -> &'static str {
        match self {
            SignalVerdict::NoSignal => "no RS signal (no non-zero shear metrics)",
            SignalVerdict::WeakSeparation => "weak separation (zmax peak < 2.5x median)",
            SignalVerdict::Confirmed => "RS signal confirmed (zmax peak >= 2.5x median)",
        }
    }
}

impl fmt::Display for SignalVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Classifies shear separation from the group count, median and max.
///
/// An all-zero group (median == max == 0) is reported as `NoSignal`; the
/// bare comparison would call it `Confirmed`. The exact boundary
/// `max == 2.5 * median` counts as `Confirmed`.
pub fn classify_separation(count: usize, median: f64, max: f64) -> SignalVerdict {
    if count == 0 || (median == 0.0 && max == 0.0) {
        return SignalVerdict::NoSignal;
    }
    if max < SEPARATION_MULTIPLIER * median {
        SignalVerdict::WeakSeparation
    } else {
        SignalVerdict::Confirmed
    }
}

pub fn evaluate_run(summary: &RunSummary) -> SignalVerdict {
    classify_separation(summary.shear.count, summary.shear.median, summary.shear.max)
}
