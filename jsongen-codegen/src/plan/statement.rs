use jsongen_model::Type;

use crate::decoder::DecoderExpr;

/// One step of a record decode routine.
///
/// Steps either bind a local or exit the routine. Locals named `from` are
/// always bound by an earlier step of the same routine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// Read the raw value stored under `key` into `local`. May be absent.
    Lookup { key: String, local: String },
    /// Exit with a missing-field failure when `local` is absent.
    RequirePresent { local: String, field: String },
    /// Bind the raw value of `from` as is.
    BindRaw { name: String, ty: Type, from: String },
    /// Downcast the raw value of `from` to `ty`, storing the optional result.
    Downcast { local: String, from: String, ty: Type },
    /// Apply `decoder` to the raw value of `from`, storing the optional result.
    ///
    /// With `absent_as_none`, an absent `from` stores a successfully decoded
    /// empty optional instead of being an error.
    Decode {
        local: String,
        from: String,
        ty: Type,
        decoder: DecoderExpr,
        absent_as_none: bool,
    },
    /// Exit with a type-mismatch failure when `local` holds no value.
    RequireValue {
        local: String,
        field: String,
        expected: Type,
    },
    /// Bind the value held by `from`.
    BindValue { name: String, ty: Type, from: String },
    /// Build the record, passing each bound field to the field of the same name.
    Construct { record: String, fields: Vec<String> },
}

impl Statement {
    /// Whether this step can exit the routine.
    pub fn can_exit(&self) -> bool {
        matches!(
            self,
            Statement::RequirePresent { .. } | Statement::RequireValue { .. }
        )
    }

    /// The local this step binds, if any.
    pub fn binds(&self) -> Option<&str> {
        match self {
            Statement::Lookup { local, .. }
            | Statement::Downcast { local, .. }
            | Statement::Decode { local, .. } => Some(local),
            Statement::BindRaw { name, .. } | Statement::BindValue { name, .. } => Some(name),
            Statement::RequirePresent { .. }
            | Statement::RequireValue { .. }
            | Statement::Construct { .. } => None,
        }
    }
}

/// Local holding the raw value of a field.
pub fn field_local(name: &str) -> String {
    format!("{}_field", name)
}

/// Local holding the optional decoded value of a field.
pub fn value_local(name: &str) -> String {
    format!("{}_value", name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_names() {
        assert_eq!(field_local("x"), "x_field");
        assert_eq!(value_local("x"), "x_value");
    }

    #[test]
    fn test_only_requirements_exit() {
        let require = Statement::RequirePresent {
            local: "x_field".into(),
            field: "x".into(),
        };
        let bind = Statement::BindRaw {
            name: "x".into(),
            ty: Type::named("AnyObject"),
            from: "x_field".into(),
        };
        assert!(require.can_exit());
        assert!(!bind.can_exit());
        assert_eq!(require.binds(), None);
        assert_eq!(bind.binds(), Some("x"));
    }
}
