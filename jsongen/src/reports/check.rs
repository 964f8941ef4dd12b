//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from model validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the model file.
    pub model_path: PathBuf,
    /// Entries in the merged generic registry.
    pub alias_count: usize,
    pub records: Vec<RecordSummary>,
}

/// How one record decodes.
#[derive(Debug)]
pub struct RecordSummary {
    /// Model file declaring the record.
    pub file: String,
    pub name: String,
    pub type_arguments: Vec<String>,
    pub fields: Vec<FieldSummary>,
}

#[derive(Debug)]
pub struct FieldSummary {
    pub name: String,
    /// Declared type in Swift spelling.
    pub ty: String,
    /// Decoding policy (`optional`, `known`, `cast` or `custom`).
    pub policy: &'static str,
}

impl RecordSummary {
    fn heading(&self) -> String {
        if self.type_arguments.is_empty() {
            self.name.clone()
        } else {
            format!("{}<{}>", self.name, self.type_arguments.join(", "))
        }
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for record in &self.records {
            out.section(&format!("{} ({})", record.heading(), record.file));
            for field in &record.fields {
                out.key_value_indented(&field.name, &format!("{} [{}]", field.ty, field.policy));
            }
            out.newline();
        }

        out.key_value("Generic registry entries", &self.alias_count.to_string());
        out.preformatted(&format!(
            "✓ {} is valid ({} records)",
            self.model_path.display(),
            self.records.len()
        ));
    }
}
