use chrono::{DateTime, Utc};
use jsongen_codegen::builder::{CodeFragment, Renderable};

/// How the generation time is spelled in file headers.
pub const TIMESTAMP_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// The comment block opening every generated file.
///
/// The timestamp is the only input that makes generation non-deterministic;
/// leave it out for reproducible output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileHeader {
    pub output_name: String,
    pub timestamp: Option<DateTime<Utc>>,
}

impl FileHeader {
    pub fn new(output_name: impl Into<String>) -> Self {
        Self {
            output_name: output_name.into(),
            timestamp: None,
        }
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    fn origin(&self) -> String {
        match &self.timestamp {
            Some(at) => format!("Auto generated by jsongen on {}", at.format(TIMESTAMP_FORMAT)),
            None => "Auto generated by jsongen".to_string(),
        }
    }
}

impl Renderable for FileHeader {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![
            CodeFragment::comment(""),
            CodeFragment::comment(self.output_name.as_str()),
            CodeFragment::comment(""),
            CodeFragment::comment(self.origin()),
            CodeFragment::comment(""),
            CodeFragment::Blank,
            CodeFragment::line("import Foundation"),
        ]
    }
}
