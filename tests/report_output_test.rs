// tests/report_output_test.rs

use std::fs;
use std::path::{Path, PathBuf};

use rs_telemetry_render::constants::DOCUMENT_NAME;
use rs_telemetry_render::data_input::input_spec::InputSpec;
use rs_telemetry_render::pipeline::{run_report, ReportConfig};
use rs_telemetry_render::report_sink::OutputMode;

const HEADER: &str = "timestamp,code,valueA,valueB\n";

const PASS_ROWS: &str = "1.0,0x20,1.0,40\n\
                         1.5,0x20,3.0,41\n\
                         2.0,0x80,6.0,0.8\n\
                         2.0,0x90,6.0,0.8\n\
                         3.0,0x91,2.0,0.3\n";

const FAIL_ROWS: &str = "1.0,0x20,1.0,40\n\
                         2.0,0x80,2.0,0.3\n\
                         2.0,0x91,2.0,0.3\n";

const PLACEHOLDER_ROWS: &str = "0,0x20,3.0,1\n-1.0,0x90,4.0,0.5\n";

fn write_input(dir: &Path, stem: &str, rows: &str) -> InputSpec {
    let path = dir.join(format!("{stem}.csv"));
    fs::write(&path, format!("{HEADER}{rows}")).unwrap();
    InputSpec {
        path,
        label: format!("run {stem}"),
    }
}

fn config(mode: OutputMode, output_dir: PathBuf) -> ReportConfig {
    ReportConfig {
        mode,
        output_dir,
        ..ReportConfig::default()
    }
}

fn sorted_file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn test_document_pages_with_pass_placeholder_and_skipped_inputs() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out");
    let inputs = vec![
        write_input(dir.path(), "a", PASS_ROWS),
        write_input(dir.path(), "b", PLACEHOLDER_ROWS),
        InputSpec {
            path: dir.path().join("c.csv"),
            label: "run c".to_string(),
        },
    ];

    let report = run_report(&inputs, &config(OutputMode::Document, out.clone())).unwrap();
    let document = out.join(DOCUMENT_NAME);
    assert_eq!(report.output.as_deref(), Some(document.as_path()));
    assert_eq!(
        sorted_file_names(&document),
        vec![
            "page_001_cover.png",
            "page_002_a_summary.png",
            "page_003_a_shear.png",
            "page_004_a_window_envelopes.png",
            "page_005_a_pass_fail.png",
            "page_006_b_no_data.png",
            "page_007_c_skipped.png",
            "page_008_batch_pass_overlay.png",
            "summary.txt",
        ]
    );
    assert_eq!(fs::read_to_string(document.join("summary.txt")).unwrap(), report.text);
    // Only the published document remains; the staging directory is gone.
    assert_eq!(sorted_file_names(&out), vec![DOCUMENT_NAME]);
}

#[test]
fn test_document_without_pass_windows_has_no_overlay() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out");
    let inputs = vec![write_input(dir.path(), "a", FAIL_ROWS)];

    run_report(&inputs, &config(OutputMode::Document, out.clone())).unwrap();
    assert_eq!(
        sorted_file_names(&out.join(DOCUMENT_NAME)),
        vec![
            "page_001_cover.png",
            "page_002_a_summary.png",
            "page_003_a_shear.png",
            "page_004_a_window_envelopes.png",
            "page_005_a_pass_fail.png",
            "summary.txt",
        ]
    );
}

#[test]
fn test_document_replaces_previous_report() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out");
    let stale = out.join(DOCUMENT_NAME);
    fs::create_dir_all(&stale).unwrap();
    fs::write(stale.join("page_099_old.png"), b"old").unwrap();

    let inputs = vec![write_input(dir.path(), "a", FAIL_ROWS)];
    run_report(&inputs, &config(OutputMode::Document, out.clone())).unwrap();
    assert!(!stale.join("page_099_old.png").exists());
    assert!(stale.join("page_001_cover.png").exists());
}

#[test]
fn test_extended_document_adds_correlation_pages() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out");
    let inputs = vec![write_input(dir.path(), "a", FAIL_ROWS)];
    let mut config = config(OutputMode::Document, out.clone());
    config.extended = true;

    run_report(&inputs, &config).unwrap();
    let pages = sorted_file_names(&out.join(DOCUMENT_NAME));
    assert!(pages.contains(&"page_006_a_shear_vs_structure.png".to_string()));
    assert!(pages.contains(&"page_007_a_shear_vs_locality.png".to_string()));
}

#[test]
fn test_figures_with_pass_windows() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("figures");
    let inputs = vec![write_input(dir.path(), "a", PASS_ROWS)];

    let report = run_report(&inputs, &config(OutputMode::Figures, out.clone())).unwrap();
    assert_eq!(report.output.as_deref(), Some(out.as_path()));
    assert_eq!(
        sorted_file_names(&out),
        vec![
            "a_pass_fail.png",
            "a_pass_overlay.png",
            "a_shear.png",
            "a_window_envelopes.png",
        ]
    );
}

#[test]
fn test_figures_without_pass_windows_or_data() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("figures");
    let inputs = vec![
        write_input(dir.path(), "a", FAIL_ROWS),
        write_input(dir.path(), "b", PLACEHOLDER_ROWS),
    ];

    run_report(&inputs, &config(OutputMode::Figures, out.clone())).unwrap();
    assert_eq!(
        sorted_file_names(&out),
        vec![
            "a_pass_fail.png",
            "a_shear.png",
            "a_window_envelopes.png",
            "b_no_data.png",
        ]
    );
}
