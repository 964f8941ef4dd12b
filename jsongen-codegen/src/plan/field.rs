use jsongen_model::VarDecl;

use super::{Statement, field_local, value_local};
use crate::decoder::{DecoderScope, Strategy, synthesize};

/// Which policy a field is decoded with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// `Optional<U>`: absence is valid data.
    Optional,
    /// Required, bound without any check.
    Known,
    /// Required, checked downcast.
    Cast,
    /// Required, decoded through a synthesized decoder.
    Custom,
}

impl FieldKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::Optional => "optional",
            FieldKind::Known => "known",
            FieldKind::Cast => "cast",
            FieldKind::Custom => "custom",
        }
    }
}

/// Decode steps for one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPlan {
    pub name: String,
    pub kind: FieldKind,
    pub statements: Vec<Statement>,
}

/// Generate the extract, validate and bind steps for one field.
///
/// Every path ends by binding a local named after the field, or exits.
pub fn generate_field(decl: &VarDecl, scope: &DecoderScope<'_>) -> FieldPlan {
    let name = decl.name.clone();
    let ty = decl.ty.clone();
    let raw = field_local(&name);
    let value = value_local(&name);

    let mut statements = vec![Statement::Lookup {
        key: name.clone(),
        local: raw.clone(),
    }];

    let kind = if ty.is_optional() {
        FieldKind::Optional
    } else {
        match scope.classify(&ty) {
            Strategy::Known => FieldKind::Known,
            Strategy::Cast => FieldKind::Cast,
            Strategy::Custom { .. } => FieldKind::Custom,
        }
    };

    if kind != FieldKind::Optional {
        statements.push(Statement::RequirePresent {
            local: raw.clone(),
            field: name.clone(),
        });
    }

    match kind {
        FieldKind::Known => {
            statements.push(Statement::BindRaw {
                name: name.clone(),
                ty,
                from: raw,
            });
        }
        FieldKind::Cast => {
            statements.push(Statement::Downcast {
                local: value.clone(),
                from: raw,
                ty: ty.clone(),
            });
            statements.extend(require_and_bind(&name, value, ty));
        }
        FieldKind::Optional | FieldKind::Custom => {
            statements.push(Statement::Decode {
                local: value.clone(),
                from: raw,
                ty: ty.clone(),
                decoder: synthesize(&ty, scope),
                absent_as_none: kind == FieldKind::Optional,
            });
            statements.extend(require_and_bind(&name, value, ty));
        }
    }

    FieldPlan {
        name,
        kind,
        statements,
    }
}

fn require_and_bind(name: &str, value: String, ty: jsongen_model::Type) -> [Statement; 2] {
    [
        Statement::RequireValue {
            local: value.clone(),
            field: name.to_string(),
            expected: ty.clone(),
        },
        Statement::BindValue {
            name: name.to_string(),
            ty,
            from: value,
        },
    ]
}
