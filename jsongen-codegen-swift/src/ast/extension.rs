//! Swift extension block builder.

use jsongen_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

use super::Func;

/// Builder for `extension Type { ... }` blocks.
#[derive(Debug, Clone)]
pub struct Extension {
    type_name: String,
    methods: Vec<Func>,
}

impl Extension {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            methods: Vec::new(),
        }
    }

    pub fn method(mut self, method: Func) -> Self {
        self.methods.push(method);
        self
    }

    /// Build the extension as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::swift();
        builder.emit(self);
        builder.build()
    }

    fn methods_to_fragments(&self) -> Vec<CodeFragment> {
        self.methods
            .iter()
            .enumerate()
            .flat_map(|(i, method)| {
                let mut fragments = Vec::new();
                if i > 0 {
                    fragments.push(CodeFragment::Blank);
                }
                fragments.extend(method.to_fragments());
                fragments
            })
            .collect()
    }
}

impl Renderable for Extension {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::braced(
            format!("extension {} {{", self.type_name),
            self.methods_to_fragments(),
        )]
    }
}
