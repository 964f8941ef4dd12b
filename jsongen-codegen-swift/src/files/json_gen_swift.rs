use std::path::{Path, PathBuf};

use jsongen_codegen::builder::{CodeBuilder, CodeFragment};
use jsongen_core::{FileRules, GeneratedFile, Overwrite};
use jsongen_model::{Struct, TypeAliases, Vocabulary};

use super::FileHeader;
use crate::record::assemble_record;

/// Assemble the complete generated file for the records of one source.
///
/// The header is followed by one decode extension per record, each preceded
/// by a single blank line.
pub fn assemble_file(
    structs: &[Struct],
    aliases: &TypeAliases,
    vocabulary: &Vocabulary,
    header: &FileHeader,
) -> String {
    let mut builder = CodeBuilder::swift();
    builder.emit(header);
    for record in structs {
        builder.apply_fragment(CodeFragment::Blank);
        builder.push_raw(&assemble_record(record, aliases, vocabulary));
    }
    tracing::debug!(file = %header.output_name, records = structs.len(), "assembled swift file");
    builder.build()
}

/// The `Foo+JsonGen.swift` file generated for one source file.
pub struct JsonGenSwift<'a> {
    /// Output location relative to the generation base.
    pub target: PathBuf,
    pub header: FileHeader,
    pub structs: &'a [Struct],
    pub aliases: &'a TypeAliases,
    pub vocabulary: &'a Vocabulary,
    /// What to do when the target already exists.
    pub overwrite: Overwrite,
}

impl GeneratedFile for JsonGenSwift<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(&self.target)
    }

    fn rules(&self) -> FileRules {
        FileRules {
            overwrite: self.overwrite,
        }
    }

    fn render(&self) -> String {
        assemble_file(self.structs, self.aliases, self.vocabulary, &self.header)
    }
}
