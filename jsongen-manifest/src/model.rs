//! Loading the structural model produced by the declaration extractor.

use std::path::Path;

use jsongen_model::StructuralModel;

use crate::{
    Error, Result,
    validate::{ParseContext, validate_model},
};

/// Parse a structural model JSON file from the given path
pub fn parse_model_file(path: impl AsRef<Path>) -> Result<StructuralModel> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| {
        Box::new(Error::Io {
            path: path.to_path_buf(),
            source: e,
        })
    })?;
    parse_model_str(&content, &path.display().to_string())
}

/// Parse a structural model with a custom filename for error reporting
pub fn parse_model_str(content: &str, filename: &str) -> Result<StructuralModel> {
    let model: StructuralModel =
        serde_json::from_str(content).map_err(|e| Error::parse_model(e, content, filename))?;
    validate_model(&model, &ParseContext::new(content, filename))?;
    Ok(model)
}
