//! Swift function builder.

use jsongen_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

/// A parameter of a Swift function.
#[derive(Debug, Clone)]
pub struct Param {
    /// Argument label; `_` suppresses it at the call site.
    pub label: Option<String>,
    pub name: String,
    pub ty: String,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            label: None,
            name: name.into(),
            ty: ty.into(),
        }
    }

    /// Drop the argument label.
    pub fn unlabeled(mut self) -> Self {
        self.label = Some("_".to_string());
        self
    }

    fn format(&self) -> String {
        match &self.label {
            Some(label) => format!("{} {}: {}", label, self.name, self.ty),
            None => format!("{}: {}", self.name, self.ty),
        }
    }
}

/// Builder for Swift functions.
///
/// Parameters are emitted as curried clauses, one per parameter, so a
/// partially applied function is itself a decoder.
#[derive(Debug, Clone)]
pub struct Func {
    name: String,
    is_static: bool,
    params: Vec<Param>,
    return_type: Option<String>,
    body: Vec<CodeFragment>,
}

impl Func {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_static: false,
            params: Vec::new(),
            return_type: None,
            body: Vec::new(),
        }
    }

    pub fn static_(mut self) -> Self {
        self.is_static = true;
        self
    }

    pub fn param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    pub fn returns(mut self, ty: impl Into<String>) -> Self {
        self.return_type = Some(ty.into());
        self
    }

    /// Add a line to the function body.
    pub fn body_line(mut self, line: impl Into<String>) -> Self {
        self.body.push(CodeFragment::Line(line.into()));
        self
    }

    /// Add a blank line to the function body.
    pub fn body_blank(mut self) -> Self {
        self.body.push(CodeFragment::Blank);
        self
    }

    fn format_header(&self) -> String {
        let static_kw = if self.is_static { "static " } else { "" };
        let clauses = if self.params.is_empty() {
            "()".to_string()
        } else {
            self.params
                .iter()
                .map(|p| format!("({})", p.format()))
                .collect()
        };
        match &self.return_type {
            Some(ret) => format!("{}func {}{} -> {} {{", static_kw, self.name, clauses, ret),
            None => format!("{}func {}{} {{", static_kw, self.name, clauses),
        }
    }

    /// Build the function as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::swift();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Func {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::braced(self.format_header(), self.body.clone())]
    }
}
