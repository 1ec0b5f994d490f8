// src/data_input/telemetry_event.rs

use crate::event_taxonomy::EventKind;

/// One row of the telemetry CSV.
///
/// `value_a`/`value_b` meaning depends on `kind`; NaN marks a value the
/// producer did not record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TelemetryEvent {
    pub timestamp: f64, // Seconds, always > 0 after loading.
    pub code: u32,
    pub kind: EventKind,
    pub value_a: f64,
    pub value_b: f64,
}

impl TelemetryEvent {
    pub fn new(timestamp: f64, code: u32, value_a: f64, value_b: f64) -> Self {
        Self {
            timestamp,
            code,
            kind: EventKind::from_code(code),
            value_a,
            value_b,
        }
    }
}

/// Events of one input, sorted ascending by timestamp.
#[derive(Debug, Clone, Default)]
pub struct TelemetryLog {
    pub events: Vec<TelemetryEvent>,
    /// Rows skipped by the loader (non-positive or unparseable timestamp, bad code, CSV record errors).
    pub rows_dropped: usize,
}

impl TelemetryLog {
    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// First and last timestamp, if any events exist.
    pub fn time_span(&self) -> Option<(f64, f64)> {
        match (self.events.first(), self.events.last()) {
            (Some(first), Some(last)) => Some((first.timestamp, last.timestamp)),
            _ => None,
        }
    }
}

/// Loader result: either sorted events or an explicit "nothing recorded".
#[derive(Debug, Clone)]
pub enum LoadedTelemetry {
    Events(TelemetryLog),
    Empty { rows_dropped: usize },
}

// src/data_input/telemetry_event.rs
