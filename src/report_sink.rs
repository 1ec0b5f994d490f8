// src/report_sink.rs

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::constants::{DOCUMENT_NAME, STAGING_PREFIX};
use crate::error::ReportError;

/// Where rendered pages go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Numbered page bundle `rs_phase4_batch_analysis/` with cover, summary and chart pages.
    Document,
    /// Standalone `<stem>_<chart>.png` files, charts only.
    Figures,
    /// Console text only.
    TextOnly,
}

/// Staged report output.
///
/// Pages are rendered into a temporary directory created inside the output
/// directory and only moved into place by `finish`. Dropping the sink without
/// finishing removes everything staged.
pub struct ReportSink {
    mode: OutputMode,
    output_dir: PathBuf,
    staging: Option<TempDir>,
    page_count: usize,
    staged_files: Vec<String>,
}

impl ReportSink {
    pub fn create(mode: OutputMode, output_dir: &Path) -> Result<Self, ReportError> {
        let output_error = |source| ReportError::Output {
            path: output_dir.to_path_buf(),
            source,
        };
        let staging = if mode == OutputMode::TextOnly {
            None
        } else {
            fs::create_dir_all(output_dir).map_err(output_error)?;
            let staging = tempfile::Builder::new()
                .prefix(STAGING_PREFIX)
                .tempdir_in(output_dir)
                .map_err(output_error)?;
            log::debug!("Staging report output in '{}'", staging.path().display());
            Some(staging)
        };
        Ok(Self {
            mode,
            output_dir: output_dir.to_path_buf(),
            staging,
            page_count: 0,
            staged_files: Vec::new(),
        })
    }

    /// Path for a page that only exists in the document (cover, summaries).
    pub fn next_document_page(&mut self, slug: &str) -> Option<PathBuf> {
        match self.mode {
            OutputMode::Document => {
                let file_name = self.document_page_name(slug);
                self.stage(file_name)
            }
            OutputMode::Figures | OutputMode::TextOnly => None,
        }
    }

    /// Path for a chart of input `root_name`; `None` when no images are written.
    pub fn next_chart(&mut self, root_name: &str, chart: &str) -> Option<PathBuf> {
        let root = sanitize_file_component(root_name);
        match self.mode {
            OutputMode::Document => {
                let file_name = self.document_page_name(&format!("{root}_{chart}"));
                self.stage(file_name)
            }
            OutputMode::Figures => {
                let file_name = format!("{root}_{chart}.png");
                if self.staged_files.contains(&file_name) {
                    log::warn!("'{file_name}' is written twice; the later chart replaces the earlier one.");
                }
                self.stage(file_name)
            }
            OutputMode::TextOnly => None,
        }
    }

    /// Writes a text file into the document bundle. Other modes ignore it.
    pub fn write_text(&mut self, file_name: &str, contents: &str) -> Result<(), ReportError> {
        if self.mode != OutputMode::Document {
            return Ok(());
        }
        if let Some(path) = self.stage(file_name.to_string()) {
            fs::write(&path, contents).map_err(|source| ReportError::Output { path, source })?;
        }
        Ok(())
    }

    /// Publishes the staged output. Returns the document directory or the
    /// output directory holding the figures, `None` in text-only mode.
    pub fn finish(mut self) -> Result<Option<PathBuf>, ReportError> {
        let Some(staging) = self.staging.take() else {
            return Ok(None);
        };
        match self.mode {
            OutputMode::Document => {
                let target = self.output_dir.join(DOCUMENT_NAME);
                if target.exists() {
                    fs::remove_dir_all(&target).map_err(|source| ReportError::Output {
                        path: target.clone(),
                        source,
                    })?;
                }
                fs::rename(staging.path(), &target).map_err(|source| ReportError::Output {
                    path: target.clone(),
                    source,
                })?;
                log::info!("Report document written to '{}' ({} pages).", target.display(), self.page_count);
                Ok(Some(target))
            }
            OutputMode::Figures => {
                for file_name in &self.staged_files {
                    let staged = staging.path().join(file_name);
                    if !staged.exists() {
                        log::debug!("'{file_name}' was reserved but never drawn.");
                        continue;
                    }
                    let target = self.output_dir.join(file_name);
                    fs::rename(staged, &target)
                        .map_err(|source| ReportError::Output { path: target, source })?;
                }
                log::info!(
                    "{} figure(s) written to '{}'.",
                    self.staged_files.len(),
                    self.output_dir.display()
                );
                Ok(Some(self.output_dir.clone()))
            }
            OutputMode::TextOnly => Ok(None),
        }
    }

    fn document_page_name(&mut self, slug: &str) -> String {
        self.page_count += 1;
        format!("page_{:03}_{}.png", self.page_count, slug)
    }

    fn stage(&mut self, file_name: String) -> Option<PathBuf> {
        let staging = self.staging.as_ref()?;
        let path = staging.path().join(&file_name);
        if !self.staged_files.contains(&file_name) {
            self.staged_files.push(file_name);
        }
        Some(path)
    }
}

/// Keeps ASCII letters, digits, `-` and `_`; everything else becomes `_`.
pub fn sanitize_file_component(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect();
    if cleaned.is_empty() {
        "telemetry".to_string()
    } else {
        cleaned
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_pages_are_numbered() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = ReportSink::create(OutputMode::Document, dir.path()).unwrap();
        let cover = sink.next_document_page("cover").unwrap();
        let chart = sink.next_chart("run 1", "shear").unwrap();
        assert!(cover.ends_with("page_001_cover.png"));
        assert!(chart.ends_with("page_002_run_1_shear.png"));
    }

    #[test]
    fn test_document_is_published_on_finish() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = ReportSink::create(OutputMode::Document, dir.path()).unwrap();
        sink.write_text("summary.txt", "hello\n").unwrap();
        let published = sink.finish().unwrap().unwrap();
        assert_eq!(published, dir.path().join(DOCUMENT_NAME));
        assert_eq!(fs::read_to_string(published.join("summary.txt")).unwrap(), "hello\n");
        let leftovers = fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(leftovers, 1);
    }

    #[test]
    fn test_dropped_sink_leaves_nothing_behind() {
        let dir = tempfile::tempdir().unwrap();
        {
            let mut sink = ReportSink::create(OutputMode::Document, dir.path()).unwrap();
            sink.write_text("summary.txt", "partial").unwrap();
        }
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_figures_skip_document_pages() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = ReportSink::create(OutputMode::Figures, dir.path()).unwrap();
        assert!(sink.next_document_page("cover").is_none());
        let chart = sink.next_chart("run_07", "pass_fail").unwrap();
        assert!(chart.ends_with("run_07_pass_fail.png"));
        fs::write(&chart, b"png").unwrap();
        sink.finish().unwrap();
        assert!(dir.path().join("run_07_pass_fail.png").exists());
    }

    #[test]
    fn test_text_only_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out");
        let mut sink = ReportSink::create(OutputMode::TextOnly, &out).unwrap();
        assert!(sink.next_chart("run", "shear").is_none());
        sink.write_text("summary.txt", "x").unwrap();
        assert_eq!(sink.finish().unwrap(), None);
        assert!(!out.exists());
    }

    #[test]
    fn test_sanitize_file_component() {
        assert_eq!(sanitize_file_component("Indoor LED: 60Hz"), "Indoor_LED__60Hz");
        assert_eq!(sanitize_file_component(""), "telemetry");
    }
}
