//! The structural model of a set of parsed source files.

use serde::{Deserialize, Serialize};

use crate::{Struct, TypeAliases};

/// Records extracted from one source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelFile {
    /// Path of the source file, as handed to the extractor.
    pub filename: String,
    #[serde(default)]
    pub structs: Vec<Struct>,
    /// Decoder requirements of the types this file declares.
    #[serde(default, skip_serializing_if = "TypeAliases::is_empty")]
    pub aliases: TypeAliases,
}

impl ModelFile {
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            structs: Vec::new(),
            aliases: TypeAliases::new(),
        }
    }

    pub fn with_struct(mut self, s: Struct) -> Self {
        self.structs.push(s);
        self
    }

    pub fn with_aliases(mut self, aliases: TypeAliases) -> Self {
        self.aliases = aliases;
        self
    }
}

/// Every file produced by one extractor run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuralModel {
    #[serde(default)]
    pub files: Vec<ModelFile>,
}

impl StructuralModel {
    pub fn new(files: Vec<ModelFile>) -> Self {
        Self { files }
    }

    /// One registry merged from every file, in file order.
    ///
    /// Records may refer to generic types declared in other files, so
    /// generation always runs against the merged registry.
    pub fn aliases(&self) -> TypeAliases {
        let mut merged = TypeAliases::new();
        for file in &self.files {
            merged.merge(&file.aliases);
        }
        merged
    }

    /// All records across all files.
    pub fn structs(&self) -> impl Iterator<Item = &Struct> {
        self.files.iter().flat_map(|f| f.structs.iter())
    }

    /// Find a record by name.
    pub fn find_struct(&self, name: &str) -> Option<&Struct> {
        self.structs().find(|s| s.base_name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Type;

    fn model() -> StructuralModel {
        StructuralModel::new(vec![
            ModelFile::new("Box.swift")
                .with_struct(
                    Struct::new("Box")
                        .type_argument("T")
                        .field("value", Type::named("T")),
                )
                .with_aliases(TypeAliases::new().with("Box", &["T"])),
            ModelFile::new("User.swift")
                .with_struct(
                    Struct::new("User").field("box", Type::generic("Box", vec![Type::named("Int")])),
                )
                .with_aliases(TypeAliases::new().with("Pair", &["A", "B"])),
        ])
    }

    #[test]
    fn test_aliases_merged_across_files() {
        let aliases = model().aliases();
        assert!(aliases.contains("Box"));
        assert!(aliases.contains("Pair"));
    }

    #[test]
    fn test_find_struct() {
        let model = model();
        assert_eq!(model.structs().count(), 2);
        assert!(model.find_struct("User").is_some());
        assert!(model.find_struct("Missing").is_none());
    }

    #[test]
    fn test_deserialize_minimal_file() {
        let model: StructuralModel =
            serde_json::from_str(r#"{ "files": [{ "filename": "Empty.swift" }] }"#).unwrap();
        assert_eq!(model.files.len(), 1);
        assert!(model.files[0].structs.is_empty());
        assert!(model.files[0].aliases.is_empty());
    }
}
