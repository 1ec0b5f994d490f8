// src/data_input/input_spec.rs

use std::path::{Path, PathBuf};

/// One command-line input: a CSV path plus the label shown in the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputSpec {
    pub path: PathBuf,
    pub label: String,
}

impl InputSpec {
    /// Parses `path[:label]`. The label defaults to the file name.
    ///
    /// The label separator is the first `:` after an optional drive prefix
    /// such as `C:\`, so Windows paths without a label stay intact.
    pub fn parse(arg: &str) -> InputSpec {
        let search_from = if has_drive_prefix(arg) { 2 } else { 0 };
        match arg[search_from..].find(':') {
            Some(offset) => {
                let split_at = search_from + offset;
                let path = &arg[..split_at];
                let label = &arg[split_at + 1..];
                if label.is_empty() {
                    InputSpec::from_path(path)
                } else {
                    InputSpec {
                        path: PathBuf::from(path),
                        label: label.to_string(),
                    }
                }
            }
            None => InputSpec::from_path(arg),
        }
    }

    fn from_path(path: &str) -> InputSpec {
        let label = Path::new(path)
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string());
        InputSpec {
            path: PathBuf::from(path),
            label,
        }
    }

    /// File stem used when naming standalone figure files.
    pub fn root_name(&self) -> String {
        self.path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| "telemetry".to_string())
    }
}

fn has_drive_prefix(arg: &str) -> bool {
    let bytes = arg.as_bytes();
    bytes.len() >= 3
        && bytes[0].is_ascii_alphabetic()
        && bytes[1] == b':'
        && (bytes[2] == b'\\' || bytes[2] == b'/')
}
