use jsongen_model::{Struct, TypeAliases, Vocabulary};

use super::{FieldPlan, Statement, generate_field};
use crate::decoder::DecoderScope;

/// The complete decode routine of one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordPlan {
    /// Record name.
    pub name: String,
    /// Type parameters; the routine takes one decoder per parameter, in
    /// this order, ahead of the raw input.
    pub type_arguments: Vec<String>,
    /// Field steps in declaration order.
    pub fields: Vec<FieldPlan>,
    /// Final [`Statement::Construct`], reached only when every field is bound.
    pub construct: Statement,
}

impl RecordPlan {
    /// All steps of the routine body, construction last.
    pub fn statements(&self) -> impl Iterator<Item = &Statement> {
        self.fields
            .iter()
            .flat_map(|f| f.statements.iter())
            .chain(std::iter::once(&self.construct))
    }

    pub fn is_generic(&self) -> bool {
        !self.type_arguments.is_empty()
    }
}

/// Assemble the decode routine of a record.
///
/// The record's own type parameters are the decoders in scope for its fields.
pub fn assemble_record(
    record: &Struct,
    aliases: &TypeAliases,
    vocabulary: &Vocabulary,
) -> RecordPlan {
    let scope = DecoderScope::new(vocabulary, aliases).with_decoders(&record.type_arguments);

    let fields = record
        .var_decls
        .iter()
        .map(|decl| generate_field(decl, &scope))
        .collect();

    let construct = Statement::Construct {
        record: record.base_name.clone(),
        fields: record.var_decls.iter().map(|d| d.name.clone()).collect(),
    };

    tracing::trace!(record = %record.base_name, fields = record.var_decls.len(), "assembled record plan");

    RecordPlan {
        name: record.base_name.clone(),
        type_arguments: record.type_arguments.clone(),
        fields,
        construct,
    }
}
