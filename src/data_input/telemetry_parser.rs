// src/data_input/telemetry_parser.rs

use csv::ReaderBuilder;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::constants::REQUIRED_COLUMNS;
use crate::data_input::telemetry_event::{LoadedTelemetry, TelemetryEvent, TelemetryLog};
use crate::error::ReportError;

/// Parses a telemetry CSV file.
///
/// Rows with a non-positive timestamp are "not yet recorded" placeholders and
/// are dropped; the remaining rows are returned sorted by timestamp. A file
/// whose rows are all dropped yields `LoadedTelemetry::Empty`, not an error.
pub fn parse_telemetry_file(input_file_path: &Path) -> Result<LoadedTelemetry, ReportError> {
    let file = File::open(input_file_path).map_err(|source| ReportError::Io {
        path: input_file_path.to_path_buf(),
        source,
    })?;
    parse_telemetry_reader(BufReader::new(file), input_file_path)
}

/// Same as `parse_telemetry_file` over any reader; `source_path` is only used in messages.
pub fn parse_telemetry_reader<R: Read>(
    input: R,
    source_path: &Path,
) -> Result<LoadedTelemetry, ReportError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(input);

    // --- Header Index Mapping ---
    let header_record = reader
        .headers()
        .map_err(|source| ReportError::Csv {
            path: source_path.to_path_buf(),
            source,
        })?
        .clone();
    log::debug!("Headers found in '{}': {:?}", source_path.display(), header_record);

    let mut column_indices = [0usize; REQUIRED_COLUMNS.len()];
    let mut missing: Vec<&'static str> = Vec::new();
    for (slot, &target_header) in column_indices.iter_mut().zip(REQUIRED_COLUMNS.iter()) {
        match header_record.iter().position(|h| h.trim() == target_header) {
            Some(index) => *slot = index,
            None => missing.push(target_header),
        }
    }
    if !missing.is_empty() {
        return Err(ReportError::Schema {
            path: source_path.to_path_buf(),
            missing,
        });
    }
    let [time_idx, code_idx, value_a_idx, value_b_idx] = column_indices;

    // --- Data Reading ---
    let mut events: Vec<TelemetryEvent> = Vec::new();
    let mut placeholder_rows = 0usize;
    let mut malformed_rows = 0usize;

    for (row_index, result) in reader.records().enumerate() {
        let record = match result {
            Ok(record) => record,
            Err(e) => {
                log::warn!("Skipping row {} due to CSV read error: {}", row_index + 1, e);
                malformed_rows += 1;
                continue;
            }
        };

        let timestamp = match record.get(time_idx).and_then(|raw| raw.parse::<f64>().ok()) {
            Some(t) if t.is_finite() => t,
            _ => {
                log::warn!("Skipping row {} due to missing or invalid 'timestamp'", row_index + 1);
                malformed_rows += 1;
                continue;
            }
        };
        if timestamp <= 0.0 {
            placeholder_rows += 1;
            continue;
        }

        let code = match record.get(code_idx).and_then(parse_event_code) {
            Some(code) => code,
            None => {
                log::warn!("Skipping row {} due to missing or invalid 'code'", row_index + 1);
                malformed_rows += 1;
                continue;
            }
        };

        events.push(TelemetryEvent::new(
            timestamp,
            code,
            parse_value(record.get(value_a_idx)),
            parse_value(record.get(value_b_idx)),
        ));
    }

    let rows_dropped = placeholder_rows + malformed_rows;
    log::info!(
        "Read {} events from '{}' ({} placeholder rows, {} malformed rows dropped)",
        events.len(),
        source_path.display(),
        placeholder_rows,
        malformed_rows
    );

    if events.is_empty() {
        return Ok(LoadedTelemetry::Empty { rows_dropped });
    }

    // Stable, so rows sharing a timestamp keep file order.
    events.sort_by(|a, b| a.timestamp.total_cmp(&b.timestamp));

    Ok(LoadedTelemetry::Events(TelemetryLog {
        events,
        rows_dropped,
    }))
}

/// Accepts `32`, `0x20` and `32.0`.
pub fn parse_event_code(raw: &str) -> Option<u32> {
    let trimmed = raw.trim();
    if let Some(hex) = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        return u32::from_str_radix(hex, 16).ok();
    }
    if let Ok(code) = trimmed.parse::<u32>() {
        return Some(code);
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|v| v.fract() == 0.0 && *v >= 0.0 && *v <= u32::MAX as f64)
        .map(|v| v as u32)
}

/// Empty or unparseable cells become NaN ("not recorded").
fn parse_value(raw: Option<&str>) -> f64 {
    raw.and_then(|s| s.parse::<f64>().ok()).unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event_taxonomy::EventKind;

    fn parse_str(content: &str) -> Result<LoadedTelemetry, ReportError> {
        parse_telemetry_reader(content.as_bytes(), Path::new("inline.csv"))
    }

    fn events_of(loaded: LoadedTelemetry) -> TelemetryLog {
        match loaded {
            LoadedTelemetry::Events(log) => log,
            LoadedTelemetry::Empty { .. } => panic!("expected events, got empty result"),
        }
    }

    #[test]
    fn test_rows_are_sorted_and_placeholders_dropped() {
        let csv = "timestamp,code,valueA,valueB\n\
                   3.0,32,1.5,10\n\
                   0,32,9.9,0\n\
                   1.0,128,2.0,0.4\n\
                   -1,144,0,0\n\
                   2.0,33,0.2,0.9\n";
        let log = events_of(parse_str(csv).unwrap());
        let times: Vec<f64> = log.events.iter().map(|e| e.timestamp).collect();
        assert_eq!(times, vec![1.0, 2.0, 3.0]);
        assert_eq!(log.rows_dropped, 2);
        assert_eq!(log.events[0].kind, EventKind::WindowSummary);
        assert_eq!(log.events[2].kind, EventKind::ShearMetric);
        assert_eq!(log.time_span(), Some((1.0, 3.0)));
    }

    #[test]
    fn test_columns_may_be_reordered_and_extra_columns_ignored() {
        let csv = "frame, valueB ,code,timestamp,valueA\n7,0.5,0x22,0.25,3.75\n";
        let log = events_of(parse_str(csv).unwrap());
        assert_eq!(log.len(), 1);
        let event = log.events[0];
        assert_eq!(event.code, 0x22);
        assert_eq!(event.kind, EventKind::StructureMetric);
        assert_eq!(event.value_a, 3.75);
        assert_eq!(event.value_b, 0.5);
    }

    #[test]
    fn test_all_placeholder_rows_yield_empty() {
        let csv = "timestamp,code,valueA,valueB\n0,32,1,0\n-2.5,32,1,0\n";
        match parse_str(csv).unwrap() {
            LoadedTelemetry::Empty { rows_dropped } => assert_eq!(rows_dropped, 2),
            LoadedTelemetry::Events(_) => panic!("expected empty result"),
        }
    }

    #[test]
    fn test_header_only_yields_empty() {
        let csv = "timestamp,code,valueA,valueB\n";
        assert!(matches!(
            parse_str(csv).unwrap(),
            LoadedTelemetry::Empty { rows_dropped: 0 }
        ));
    }

    #[test]
    fn test_missing_columns_are_reported_together() {
        let csv = "timestamp,valueA\n1.0,2.0\n";
        match parse_str(csv) {
            Err(ReportError::Schema { missing, .. }) => {
                assert_eq!(missing, vec!["code", "valueB"]);
            }
            other => panic!("expected schema error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = parse_telemetry_file(Path::new("/definitely/not/here/run.csv"));
        assert!(matches!(result, Err(ReportError::Io { .. })));
    }

    #[test]
    fn test_blank_values_become_nan() {
        let csv = "timestamp,code,valueA,valueB\n1.0,65,120,\n";
        let log = events_of(parse_str(csv).unwrap());
        assert_eq!(log.events[0].value_a, 120.0);
        assert!(log.events[0].value_b.is_nan());
    }

    #[test]
    fn test_malformed_rows_are_skipped() {
        let csv = "timestamp,code,valueA,valueB\nabc,32,1,0\n1.0,not-a-code,1,0\n2.0,32,1,0\n";
        let log = events_of(parse_str(csv).unwrap());
        assert_eq!(log.len(), 1);
        assert_eq!(log.rows_dropped, 2);
    }

    #[test]
    fn test_parse_event_code_spellings() {
        assert_eq!(parse_event_code("32"), Some(0x20));
        assert_eq!(parse_event_code("0x90"), Some(0x90));
        assert_eq!(parse_event_code("0X91"), Some(0x91));
        assert_eq!(parse_event_code("128.0"), Some(0x80));
        assert_eq!(parse_event_code("1.5"), None);
        assert_eq!(parse_event_code("-3"), None);
        assert_eq!(parse_event_code(""), None);
    }
}
