//! Generate command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from code generation.
#[derive(Debug)]
pub struct GenerateReport {
    /// Number of records in the model.
    pub record_count: usize,

    /// Generation result (files written or preview).
    pub result: GenerationResult,
}

/// Result of code generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(Vec<PreviewFile>),
}

/// Result when files were written to disk.
#[derive(Debug)]
pub struct WrittenResult {
    pub written: Vec<PathBuf>,
    /// Files left untouched by their overwrite rule.
    pub skipped: Vec<PathBuf>,
}

/// A file in preview mode.
#[derive(Debug)]
pub struct PreviewFile {
    /// File path.
    pub path: String,
    /// File content.
    pub content: String,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.result {
            GenerationResult::Written(written) => self.render_written(out, written),
            GenerationResult::Preview(files) => self.render_preview(out, files),
        }
    }
}

impl GenerateReport {
    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        if written.written.is_empty() && written.skipped.is_empty() {
            out.warning("model has no files to generate");
            return;
        }

        out.section(&format!(
            "Generated decoders for {} records",
            self.record_count
        ));
        for path in &written.written {
            out.added_item(&path.display().to_string());
        }

        if !written.skipped.is_empty() {
            out.newline();
            out.section("Skipped");
            for path in &written.skipped {
                out.list_item(&path.display().to_string());
            }
        }
    }

    fn render_preview(&self, out: &mut dyn Output, files: &[PreviewFile]) {
        for file in files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.preformatted(&format!("{} files would be generated", files.len()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::RecordingOutput;

    #[test]
    fn test_written_lists_files() {
        let report = GenerateReport {
            record_count: 2,
            result: GenerationResult::Written(WrittenResult {
                written: vec![PathBuf::from("Point+JsonGen.swift")],
                skipped: vec![],
            }),
        };
        let mut out = RecordingOutput::default();
        report.render(&mut out);

        assert_eq!(
            out.lines,
            [
                "Generated decoders for 2 records:",
                "  + Point+JsonGen.swift"
            ]
        );
    }

    #[test]
    fn test_preview_ends_with_summary() {
        let report = GenerateReport {
            record_count: 1,
            result: GenerationResult::Preview(vec![PreviewFile {
                path: "Point+JsonGen.swift".into(),
                content: "import Foundation\n".into(),
            }]),
        };
        let mut out = RecordingOutput::default();
        report.render(&mut out);

        assert_eq!(out.lines[0], "── Point+JsonGen.swift ──");
        assert_eq!(
            out.lines.last().map(String::as_str),
            Some("1 files would be generated")
        );
    }

    #[test]
    fn test_empty_model_warns() {
        let report = GenerateReport {
            record_count: 0,
            result: GenerationResult::Written(WrittenResult {
                written: vec![],
                skipped: vec![],
            }),
        };
        let mut out = RecordingOutput::default();
        report.render(&mut out);

        assert_eq!(out.lines, ["warning: model has no files to generate"]);
    }
}
