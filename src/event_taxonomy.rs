// src/event_taxonomy.rs
//
// Event code lookup table for the RS telemetry stream.
// Decodes the integer `code` column into the kind of event a row carries.

use std::fmt;

/// Spatial extent class emitted by the row-span classifier.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SpanClass {
    Narrow,
    Moderate,
    Wide,
}

/// Reason the upstream detector gave for declining to emit a measurement.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RefusalReason {
    InsufficientPoints,
    TooGlobal,
    LowSlope,
    FlickerAligned,
}

/// Phase-4 window verdict.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum VerdictOutcome {
    Pass,
    Fail,
}

/// Kind of a telemetry event, keyed by its code.
///
/// Codes not present in the table decode to `Unknown` so that newer producers
/// can add event kinds without breaking older readers.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EventKind {
    /// valueA: detected feature-point count.
    FeatureYield,
    /// valueA: zmax, valueB: point count.
    ShearMetric,
    /// valueA: row-span fraction, valueB: adjacent-row correlation.
    LocalityMetric,
    /// valueA: structure ratio, valueB: peak row energy.
    StructureMetric,
    /// valueA: classification output.
    Observable,
    /// valueA: zmax at classification time.
    SpanClass(SpanClass),
    Refusal(RefusalReason),
    /// valueA: zmax peak in window, valueB: structure-consistency peak.
    WindowSummary,
    WindowSpan,
    WindowOutcome,
    /// valueA: zmax peak, valueB: structure consistency.
    Verdict(VerdictOutcome),
    Unknown(u32),
}

pub const CODE_FEATURE_YIELD: u32 = 0x41;
pub const CODE_SHEAR_METRIC: u32 = 0x20;
pub const CODE_LOCALITY_METRIC: u32 = 0x21;
pub const CODE_STRUCTURE_METRIC: u32 = 0x22;
pub const CODE_OBSERVABLE: u32 = 0x55;
pub const CODE_SPAN_NARROW: u32 = 0x61;
pub const CODE_SPAN_MODERATE: u32 = 0x62;
pub const CODE_SPAN_WIDE: u32 = 0x63;
pub const CODE_REFUSAL_INSUFFICIENT: u32 = 0x50;
pub const CODE_REFUSAL_GLOBAL: u32 = 0x52;
pub const CODE_REFUSAL_LOW_SLOPE: u32 = 0x53;
pub const CODE_REFUSAL_FLICKER: u32 = 0x54;
pub const CODE_WINDOW_SUMMARY: u32 = 0x80;
pub const CODE_WINDOW_SPAN: u32 = 0x81;
pub const CODE_WINDOW_OUTCOME: u32 = 0x82;
pub const CODE_VERDICT_PASS: u32 = 0x90;
pub const CODE_VERDICT_FAIL: u32 = 0x91;

/// Code table in ascending code order.
const EVENT_TABLE: [(u32, EventKind); 17] = [
    (CODE_SHEAR_METRIC, EventKind::ShearMetric),
    (CODE_LOCALITY_METRIC, EventKind::LocalityMetric),
    (CODE_STRUCTURE_METRIC, EventKind::StructureMetric),
    (CODE_FEATURE_YIELD, EventKind::FeatureYield),
    (CODE_REFUSAL_INSUFFICIENT, EventKind::Refusal(RefusalReason::InsufficientPoints)),
    (CODE_REFUSAL_GLOBAL, EventKind::Refusal(RefusalReason::TooGlobal)),
    (CODE_REFUSAL_LOW_SLOPE, EventKind::Refusal(RefusalReason::LowSlope)),
    (CODE_REFUSAL_FLICKER, EventKind::Refusal(RefusalReason::FlickerAligned)),
    (CODE_OBSERVABLE, EventKind::Observable),
    (CODE_SPAN_NARROW, EventKind::SpanClass(SpanClass::Narrow)),
    (CODE_SPAN_MODERATE, EventKind::SpanClass(SpanClass::Moderate)),
    (CODE_SPAN_WIDE, EventKind::SpanClass(SpanClass::Wide)),
    (CODE_WINDOW_SUMMARY, EventKind::WindowSummary),
    (CODE_WINDOW_SPAN, EventKind::WindowSpan),
    (CODE_WINDOW_OUTCOME, EventKind::WindowOutcome),
    (CODE_VERDICT_PASS, EventKind::Verdict(VerdictOutcome::Pass)),
    (CODE_VERDICT_FAIL, EventKind::Verdict(VerdictOutcome::Fail)),
];

impl EventKind {
    pub fn from_code(code: u32) -> EventKind {
        EVENT_TABLE
            .iter()
            .find(|(table_code, _)| *table_code == code)
            .map(|&(_, kind)| kind)
            .unwrap_or(EventKind::Unknown(code))
    }

    pub fn code(&self) -> u32 {
        match self {
            EventKind::Unknown(code) => *code,
            known => EVENT_TABLE
                .iter()
                .find(|(_, kind)| kind == known)
                .map(|&(code, _)| code)
                .unwrap_or_default(),
        }
    }

    /// Every known kind, in ascending code order.
    pub fn all_known() -> impl Iterator<Item = EventKind> {
        EVENT_TABLE.iter().map(|&(_, kind)| kind)
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, EventKind::Unknown(_))
    }

    /// Human-readable name used in console text and chart titles.
    pub fn name(&self) -> &'static str {
        match self {
            EventKind::FeatureYield => "FAST9 feature yield",
            EventKind::ShearMetric => "RS shear metric",
            EventKind::LocalityMetric => "RS locality metric",
            EventKind::StructureMetric => "RS structure metric",
            EventKind::Observable => "RS observable",
            EventKind::SpanClass(SpanClass::Narrow) => "Span class narrow",
            EventKind::SpanClass(SpanClass::Moderate) => "Span class moderate",
            EventKind::SpanClass(SpanClass::Wide) => "Span class wide",
            EventKind::Refusal(RefusalReason::InsufficientPoints) => "Refusal: insufficient points",
            EventKind::Refusal(RefusalReason::TooGlobal) => "Refusal: too global",
            EventKind::Refusal(RefusalReason::LowSlope) => "Refusal: low slope",
            EventKind::Refusal(RefusalReason::FlickerAligned) => "Refusal: flicker aligned",
            EventKind::WindowSummary => "Phase-3 window summary",
            EventKind::WindowSpan => "Phase-3 window span",
            EventKind::WindowOutcome => "Phase-3 window outcome",
            EventKind::Verdict(VerdictOutcome::Pass) => "Phase-4 PASS",
            EventKind::Verdict(VerdictOutcome::Fail) => "Phase-4 FAIL",
            EventKind::Unknown(_) => "Unknown",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventKind::Unknown(code) => write!(f, "Unknown (0x{:02X})", code),
            known => write!(f, "{} (0x{:02X})", known.name(), known.code()),
        }
    }
}
