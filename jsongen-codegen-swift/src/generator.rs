use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use chrono::{DateTime, Utc};
use eyre::{Result, bail};
use jsongen_codegen::language::{GenerateResult, LanguageCodegen, PreviewFile};
use jsongen_core::{GeneratedFile, Overwrite, SourceFile, WriteResult};
use jsongen_model::{ModelFile, StructuralModel, TypeAliases, Vocabulary};

use crate::files::{FileHeader, JsonGenSwift};

/// Swift code generator that produces one `+JsonGen.swift` file per source
pub struct Generator<'a> {
    model: &'a StructuralModel,
    aliases: TypeAliases,
    vocabulary: Vocabulary,
    timestamp: Option<DateTime<Utc>>,
    flatten: bool,
    overwrite: Overwrite,
}

impl LanguageCodegen for Generator<'_> {
    fn preview(&self) -> Vec<PreviewFile> {
        self.files()
            .map(|file| PreviewFile {
                path: file.target.display().to_string(),
                content: file.render(),
            })
            .collect()
    }

    fn generate(&self, output_dir: &Path) -> Result<GenerateResult> {
        self.check_targets()?;
        let mut result = GenerateResult::default();
        for file in self.files() {
            let path = file.path(output_dir);
            match file.write(output_dir)? {
                WriteResult::Written => result.written.push(path),
                WriteResult::Skipped => result.skipped.push(path),
            }
        }
        Ok(result)
    }
}

impl<'a> Generator<'a> {
    /// Generator over every file of `model`, using its merged registry.
    pub fn new(model: &'a StructuralModel) -> Self {
        Self {
            model,
            aliases: model.aliases(),
            vocabulary: Vocabulary::default(),
            timestamp: None,
            flatten: false,
            overwrite: Overwrite::Always,
        }
    }

    pub fn vocabulary(mut self, vocabulary: Vocabulary) -> Self {
        self.vocabulary = vocabulary;
        self
    }

    /// Stamp generated headers with `timestamp`.
    pub fn timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Place every output directly in the output directory instead of
    /// next to its source.
    pub fn flatten(mut self, flatten: bool) -> Self {
        self.flatten = flatten;
        self
    }

    /// How targets that already exist are treated.
    pub fn overwrite(mut self, overwrite: Overwrite) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Fail when two sources would be generated into the same file.
    ///
    /// Only possible when flattening sources that share a file name.
    pub fn check_targets(&self) -> Result<()> {
        let mut seen: HashMap<PathBuf, &str> = HashMap::new();
        for file in &self.model.files {
            let Some(generated) = self.file(file) else {
                continue;
            };
            if let Some(first) = seen.insert(generated.target, &file.filename) {
                bail!(
                    "'{}' and '{}' would both be generated into '{}'",
                    first,
                    file.filename,
                    SourceFile::new(&file.filename).output_name
                );
            }
        }
        Ok(())
    }

    fn files(&self) -> impl Iterator<Item = JsonGenSwift<'_>> {
        self.model
            .files
            .iter()
            .filter_map(|file| self.file(file))
    }

    fn file(&self, file: &'a ModelFile) -> Option<JsonGenSwift<'_>> {
        let source = SourceFile::new(&file.filename);
        if source.is_support_library() {
            tracing::debug!(file = %file.filename, "skipping support library");
            return None;
        }

        let target = if self.flatten {
            PathBuf::from(&source.output_name)
        } else {
            source.output_path.clone()
        };
        let mut header = FileHeader::new(&source.output_name);
        if let Some(at) = self.timestamp {
            header = header.with_timestamp(at);
        }

        Some(JsonGenSwift {
            target,
            header,
            structs: &file.structs,
            aliases: &self.aliases,
            vocabulary: &self.vocabulary,
            overwrite: self.overwrite,
        })
    }
}
