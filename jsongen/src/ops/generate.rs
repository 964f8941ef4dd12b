//! Generate operation - Swift decoders from a structural model.

use std::path::Path;

use chrono::{DateTime, Utc};
use eyre::{Context, Result};
use jsongen_codegen_swift::{Generator, LanguageCodegen};
use jsongen_core::Overwrite;
use jsongen_manifest::Config;
use jsongen_model::StructuralModel;

use crate::reports::{GenerateReport, GenerationResult, PreviewFile, WrittenResult};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Directory receiving every file; `None` writes next to each source.
    pub output_dir: Option<&'a Path>,
    /// Whether to preview without writing files.
    pub dry_run: bool,
    /// Generation time stamped into headers.
    pub timestamp: Option<DateTime<Utc>>,
    /// Leave existing generated files untouched.
    pub keep_existing: bool,
}

/// Execute the generate operation.
pub fn generate(
    model: &StructuralModel,
    config: &Config,
    opts: GenerateOptions,
) -> Result<GenerateReport> {
    let mut generator = Generator::new(model)
        .vocabulary(config.vocabulary.clone())
        .flatten(opts.output_dir.is_some())
        .overwrite(if opts.keep_existing {
            Overwrite::IfMissing
        } else {
            Overwrite::Always
        });
    if let Some(at) = opts.timestamp {
        generator = generator.timestamp(at);
    }

    let result = if opts.dry_run {
        generator.check_targets()?;
        let files = generator
            .preview()
            .into_iter()
            .map(|f| PreviewFile {
                path: f.path,
                content: f.content,
            })
            .collect();
        GenerationResult::Preview(files)
    } else {
        let base = opts.output_dir.unwrap_or(Path::new("."));
        let written = generator
            .generate(base)
            .wrap_err("Failed to generate code")?;
        tracing::info!(written = written.written.len(), "generation finished");
        GenerationResult::Written(WrittenResult {
            written: written.written,
            skipped: written.skipped,
        })
    };

    Ok(GenerateReport {
        record_count: model.structs().count(),
        result,
    })
}

#[cfg(test)]
mod tests {
    use jsongen_model::{ModelFile, Struct, Type};
    use tempfile::TempDir;

    use super::*;

    fn model() -> StructuralModel {
        StructuralModel::new(vec![
            ModelFile::new("Point.swift").with_struct(
                Struct::new("Point")
                    .field("x", Type::named("Int"))
                    .field("y", Type::named("Int")),
            ),
        ])
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let report = generate(
            &model(),
            &Config::default(),
            GenerateOptions {
                output_dir: Some(dir.path()),
                dry_run: true,
                timestamp: None,
                keep_existing: false,
            },
        )
        .unwrap();

        match report.result {
            GenerationResult::Preview(files) => {
                assert_eq!(files.len(), 1);
                assert_eq!(files[0].path, "Point+JsonGen.swift");
            }
            GenerationResult::Written(_) => panic!("expected preview"),
        }
        assert!(!dir.path().join("Point+JsonGen.swift").exists());
    }

    #[test]
    fn test_writes_into_output_dir() {
        let dir = TempDir::new().unwrap();
        let report = generate(
            &model(),
            &Config::default(),
            GenerateOptions {
                output_dir: Some(dir.path()),
                dry_run: false,
                timestamp: None,
                keep_existing: false,
            },
        )
        .unwrap();

        assert_eq!(report.record_count, 1);
        let content = std::fs::read_to_string(dir.path().join("Point+JsonGen.swift")).unwrap();
        assert!(content.contains("//  Auto generated by jsongen\n"));
        assert!(content.contains("return Point(x: x, y: y)"));
    }

    #[test]
    fn test_keep_existing_reports_skipped() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("Point+JsonGen.swift");
        std::fs::write(&target, "// edited").unwrap();

        let report = generate(
            &model(),
            &Config::default(),
            GenerateOptions {
                output_dir: Some(dir.path()),
                dry_run: false,
                timestamp: None,
                keep_existing: true,
            },
        )
        .unwrap();

        match report.result {
            GenerationResult::Written(written) => {
                assert!(written.written.is_empty());
                assert_eq!(written.skipped, vec![target.clone()]);
            }
            GenerationResult::Preview(_) => panic!("expected written files"),
        }
        assert_eq!(std::fs::read_to_string(&target).unwrap(), "// edited");
    }

    #[test]
    fn test_dry_run_rejects_colliding_outputs() {
        let model = StructuralModel::new(vec![
            ModelFile::new("A/Point.swift").with_struct(Struct::new("A")),
            ModelFile::new("B/Point.swift").with_struct(Struct::new("B")),
        ]);
        let dir = TempDir::new().unwrap();

        let result = generate(
            &model,
            &Config::default(),
            GenerateOptions {
                output_dir: Some(dir.path()),
                dry_run: true,
                timestamp: None,
                keep_existing: false,
            },
        );
        assert!(result.is_err());
    }
}
