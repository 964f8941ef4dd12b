//! Type expressions and record declarations.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A type expression as it appears in a field declaration.
///
/// Type expressions are trees: a record that refers to itself does so by
/// name only, never by embedding its own expansion.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Type {
    /// Base name (e.g. "Int", "Optional", "Dictionary", "Box").
    pub base_name: String,
    /// Positional generic arguments.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub generic_arguments: Vec<Type>,
    /// Name to invoke instead of `base_name` when decoding (typealiases).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
}

impl Type {
    pub const OPTIONAL: &'static str = "Optional";
    pub const ARRAY: &'static str = "Array";
    pub const DICTIONARY: &'static str = "Dictionary";

    /// Create a type without generic arguments.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            base_name: name.into(),
            generic_arguments: Vec::new(),
            alias: None,
        }
    }

    /// Create a generic type with the given arguments.
    pub fn generic(name: impl Into<String>, args: Vec<Type>) -> Self {
        Self {
            base_name: name.into(),
            generic_arguments: args,
            alias: None,
        }
    }

    /// `Optional<inner>`.
    pub fn optional(inner: Type) -> Self {
        Self::generic(Self::OPTIONAL, vec![inner])
    }

    /// `Array<inner>`.
    pub fn array(inner: Type) -> Self {
        Self::generic(Self::ARRAY, vec![inner])
    }

    /// `Dictionary<key, value>`.
    pub fn dictionary(key: Type, value: Type) -> Self {
        Self::generic(Self::DICTIONARY, vec![key, value])
    }

    /// Attach an alias used as the decode entry point name.
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// Number of generic arguments.
    pub fn arity(&self) -> usize {
        self.generic_arguments.len()
    }

    /// Check if this is an `Optional<T>`.
    pub fn is_optional(&self) -> bool {
        self.base_name == Self::OPTIONAL && self.arity() == 1
    }

    /// Name used to invoke this type's decoder: the alias if present.
    pub fn decoder_name(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.base_name)
    }
}

/// Renders the type with Swift's sugar for optionals, arrays and dictionaries.
impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let args = &self.generic_arguments;
        match (self.base_name.as_str(), args.as_slice()) {
            (_, []) => write!(f, "{}", self.base_name),
            (Self::OPTIONAL, [inner]) => write!(f, "{}?", inner),
            (Self::ARRAY, [inner]) => write!(f, "[{}]", inner),
            (Self::DICTIONARY, [key, value]) => write!(f, "[{} : {}]", key, value),
            (base, args) => {
                write!(f, "{}<", base)?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", arg)?;
                }
                f.write_str(">")
            }
        }
    }
}

/// A field declaration inside a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VarDecl {
    /// Field name, unique within its record. Also the mapping key.
    pub name: String,
    /// Declared type.
    #[serde(rename = "type")]
    pub ty: Type,
}

impl VarDecl {
    pub fn new(name: impl Into<String>, ty: Type) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

/// A record declaration.
///
/// Field order is significant: it fixes both the order of the emitted
/// validation statements and the argument order of the constructor call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Struct {
    pub base_name: String,
    /// Type parameters declared by this record.
    #[serde(default)]
    pub type_arguments: Vec<String>,
    #[serde(default)]
    pub var_decls: Vec<VarDecl>,
}

impl Struct {
    pub fn new(base_name: impl Into<String>) -> Self {
        Self {
            base_name: base_name.into(),
            type_arguments: Vec::new(),
            var_decls: Vec::new(),
        }
    }

    /// Declare a type parameter.
    pub fn type_argument(mut self, name: impl Into<String>) -> Self {
        self.type_arguments.push(name.into());
        self
    }

    /// Append a field.
    pub fn field(mut self, name: impl Into<String>, ty: Type) -> Self {
        self.var_decls.push(VarDecl::new(name, ty));
        self
    }

    pub fn is_generic(&self) -> bool {
        !self.type_arguments.is_empty()
    }
}
