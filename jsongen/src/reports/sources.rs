//! Sources command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Discovered sources and their generated counterparts.
#[derive(Debug)]
pub struct SourcesReport {
    pub entries: Vec<SourceEntry>,
}

#[derive(Debug)]
pub struct SourceEntry {
    pub source: PathBuf,
    /// `None` for the support library, which is never generated.
    pub output: Option<PathBuf>,
}

impl Report for SourcesReport {
    fn render(&self, out: &mut dyn Output) {
        if self.entries.is_empty() {
            out.warning("no Swift sources found");
            return;
        }

        out.section(&format!("Sources ({})", self.entries.len()));
        for entry in &self.entries {
            let source = entry.source.display().to_string();
            match &entry.output {
                Some(output) => out.key_value_indented(&source, &output.display().to_string()),
                None => out.list_item(&format!("{} (support library)", source)),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::RecordingOutput;

    #[test]
    fn test_render_marks_support_library() {
        let report = SourcesReport {
            entries: vec![
                SourceEntry {
                    source: PathBuf::from("JsonGen.swift"),
                    output: None,
                },
                SourceEntry {
                    source: PathBuf::from("Point.swift"),
                    output: Some(PathBuf::from("Point+JsonGen.swift")),
                },
            ],
        };
        let mut out = RecordingOutput::default();
        report.render(&mut out);

        assert_eq!(
            out.lines,
            [
                "Sources (2):",
                "  - JsonGen.swift (support library)",
                "  Point.swift: Point+JsonGen.swift",
            ]
        );
    }

    #[test]
    fn test_render_empty() {
        let mut out = RecordingOutput::default();
        SourcesReport { entries: vec![] }.render(&mut out);
        assert_eq!(out.lines, ["warning: no Swift sources found"]);
    }
}
