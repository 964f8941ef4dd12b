//! Validation of names the generated Swift binds

use std::collections::HashSet;

use jsongen_model::{Struct, StructuralModel};
use miette::SourceSpan;

use crate::{Error, Result};

/// Validation context that carries source information.
///
/// Encapsulates the source content, filename, and current path through the
/// model, so errors can point back into the JSON the extractor produced.
///
/// # Example
///
/// ```ignore
/// let ctx = ParseContext::new(src, "model.json");
/// ctx.validate_name("Point", "record")?;
///
/// // For nested validation
/// let nested = ctx.push("Point");
/// nested.validate_name("x", "field")?;
/// ```
#[derive(Debug, Clone)]
pub struct ParseContext<'a> {
    src: &'a str,
    filename: &'a str,
    /// Path segments for nested validation (e.g., ["Sources/Point.swift", "Point"])
    path: Vec<&'a str>,
}

impl<'a> ParseContext<'a> {
    pub fn new(src: &'a str, filename: &'a str) -> Self {
        Self {
            src,
            filename,
            path: Vec::new(),
        }
    }

    pub fn src(&self) -> &'a str {
        self.src
    }

    pub fn filename(&self) -> &'a str {
        self.filename
    }

    /// Push a path segment and return a new context.
    pub fn push(&self, segment: &'a str) -> Self {
        let mut path = self.path.clone();
        path.push(segment);
        Self {
            src: self.src,
            filename: self.filename,
            path,
        }
    }

    /// The current path joined with `::`.
    pub fn path_string(&self) -> String {
        self.path.join("::")
    }

    /// Describe `kind` at the current path, e.g. "field in 'Point'".
    pub fn context_for(&self, kind: &str) -> String {
        match self.path.last() {
            None => kind.to_string(),
            Some(last) => format!("{} in '{}'", kind, last),
        }
    }

    pub fn find_span(&self, name: &str) -> Option<SourceSpan> {
        find_name_span(self.src, name)
    }

    /// Validate that a name can be bound by generated Swift.
    pub fn validate_name(&self, name: &str, kind: &str) -> Result<()> {
        if is_swift_keyword(name) {
            return Err(Error::reserved_keyword(
                name,
                self.context_for(kind),
                self.src,
                self.filename,
                self.find_span(name),
            ));
        }

        if let Some(reason) = validate_identifier(name) {
            return Err(Error::invalid_identifier(
                name,
                self.context_for(kind),
                reason,
                self.src,
                self.filename,
                self.find_span(name),
            ));
        }

        Ok(())
    }

    /// A field whose name the generated decode routine already declares.
    fn clash(&self, name: &str, with: &str) -> Box<Error> {
        let message = match self.path.last() {
            None => format!("field '{}' clashes with {} in the generated decoder", name, with),
            Some(last) => format!(
                "field '{}' in '{}' clashes with {} in the generated decoder",
                name, last, with
            ),
        };
        Error::validation_at(message, self.src, self.filename, self.find_span(name))
    }

    fn duplicate(&self, name: &str, kind: &str) -> Box<Error> {
        let message = match self.path.last() {
            None => format!("duplicate {} '{}'", kind, name),
            Some(last) => format!("duplicate {} '{}' in '{}'", kind, name, last),
        };
        Error::validation_at(
            message,
            self.src,
            self.filename,
            self.find_span(name),
        )
    }
}

/// Check every record of `model`.
///
/// Only names end up in generated code, so only names are checked. Type
/// expressions are trusted as extracted.
pub(crate) fn validate_model<'a>(model: &'a StructuralModel, ctx: &ParseContext<'a>) -> Result<()> {
    for file in &model.files {
        let file_ctx = ctx.push(&file.filename);
        for record in &file.structs {
            validate_struct(record, &file_ctx)?;
        }
    }
    Ok(())
}

fn validate_struct<'a>(record: &'a Struct, ctx: &ParseContext<'a>) -> Result<()> {
    ctx.validate_name(&record.base_name, "record")?;
    let ctx = ctx.push(&record.base_name);

    let mut seen = HashSet::new();
    for param in &record.type_arguments {
        ctx.validate_name(param, "type parameter")?;
        if !seen.insert(param.as_str()) {
            return Err(ctx.duplicate(param, "type parameter"));
        }
    }

    let mut seen = HashSet::new();
    for decl in &record.var_decls {
        ctx.validate_name(&decl.name, "field")?;
        if !seen.insert(decl.name.as_str()) {
            return Err(ctx.duplicate(&decl.name, "field"));
        }
    }

    validate_locals(record, &ctx)
}

/// Locals every decode routine declares before its fields.
const ROUTINE_LOCALS: &[&str] = &["json", "_dict", "dict"];

/// Suffixes of the per-field helper locals.
const HELPER_SUFFIXES: &[&str] = &["_field", "_value"];

/// Reject fields that would be redeclared in the generated routine's scope.
fn validate_locals(record: &Struct, ctx: &ParseContext<'_>) -> Result<()> {
    for decl in &record.var_decls {
        let name = decl.name.as_str();
        if ROUTINE_LOCALS.contains(&name) {
            return Err(ctx.clash(name, &format!("the local '{}'", name)));
        }
        if let Some(param) = record
            .type_arguments
            .iter()
            .find(|param| name.strip_prefix("decode") == Some(param.as_str()))
        {
            return Err(ctx.clash(
                name,
                &format!("the decoder parameter for '{}'", param),
            ));
        }
        for suffix in HELPER_SUFFIXES {
            let Some(owner) = name.strip_suffix(suffix) else {
                continue;
            };
            if record.var_decls.iter().any(|other| other.name == owner) {
                return Err(ctx.clash(
                    name,
                    &format!("the '{}' local of field '{}'", suffix, owner),
                ));
            }
        }
    }
    Ok(())
}

/// Swift keywords that cannot be used as plain identifiers in declarations
/// and statements.
pub(crate) const SWIFT_KEYWORDS: &[&str] = &[
    // Declarations
    "associatedtype", "class", "deinit", "enum", "extension", "fileprivate", "func", "import",
    "init", "inout", "internal", "let", "open", "operator", "private", "protocol", "public",
    "rethrows", "static", "struct", "subscript", "typealias", "var",
    // Statements
    "break", "case", "continue", "default", "defer", "do", "else", "fallthrough", "for", "guard",
    "if", "in", "repeat", "return", "switch", "where", "while",
    // Expressions and types
    "as", "Any", "catch", "false", "is", "nil", "self", "Self", "super", "throw", "throws",
    "true", "try",
];

pub(crate) fn is_swift_keyword(name: &str) -> bool {
    SWIFT_KEYWORDS.contains(&name)
}

/// Find the span of a name in the JSON source, preferring its quoted form.
pub(crate) fn find_name_span(src: &str, name: &str) -> Option<SourceSpan> {
    let quoted = format!("\"{}\"", name);
    if let Some(pos) = src.find(&quoted) {
        // +1 to skip the opening quote
        return Some(SourceSpan::from((pos + 1, name.len())));
    }

    src.find(name)
        .map(|pos| SourceSpan::from((pos, name.len())))
}

/// Validate that a name is a valid Swift identifier.
/// Returns None if valid, Some(reason) if invalid
pub(crate) fn validate_identifier(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => {}
        Some(_) => return Some("name must start with a letter or underscore"),
        None => return Some("name cannot be empty"),
    }

    if chars.any(|c| !(c.is_alphanumeric() || c == '_')) {
        return Some("name must contain only letters, numbers, and underscores");
    }

    None
}
