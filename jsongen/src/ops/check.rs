//! Check operation - how each record of a model decodes.

use std::path::Path;

use jsongen_codegen::plan::assemble_record;
use jsongen_manifest::Config;
use jsongen_model::StructuralModel;

use crate::reports::{CheckReport, FieldSummary, RecordSummary};

/// Execute the check operation.
///
/// The model is already validated by loading; this plans every record and
/// records the decoding policy chosen for each field.
pub fn check(model: &StructuralModel, config: &Config, model_path: &Path) -> CheckReport {
    let aliases = model.aliases();

    let records = model
        .files
        .iter()
        .flat_map(|file| file.structs.iter().map(move |s| (file, s)))
        .map(|(file, record)| {
            let plan = assemble_record(record, &aliases, &config.vocabulary);
            let fields = record
                .var_decls
                .iter()
                .zip(&plan.fields)
                .map(|(decl, field)| FieldSummary {
                    name: decl.name.clone(),
                    ty: decl.ty.to_string(),
                    policy: field.kind.as_str(),
                })
                .collect();
            RecordSummary {
                file: file.filename.clone(),
                name: record.base_name.clone(),
                type_arguments: record.type_arguments.clone(),
                fields,
            }
        })
        .collect();

    CheckReport {
        model_path: model_path.to_path_buf(),
        alias_count: aliases.len(),
        records,
    }
}
