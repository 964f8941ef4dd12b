use jsongen_model::{Type, TypeAliases, Vocabulary};

/// Where a custom type's decoder comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    /// A decoder parameter of the enclosing routine (a record type parameter).
    Scope,
    /// The type's own static `decode` entry point.
    Static,
}

/// How values of a type are decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Unconditional reinterpretation. Never fails.
    Known,
    /// Checked downcast. May fail.
    Cast,
    /// A decoder taking `arity` decoder arguments.
    Custom { arity: usize, lookup: Lookup },
}

/// Everything the synthesizer consults besides the type itself.
///
/// Borrowed and `Copy`: synthesis never mutates it.
#[derive(Debug, Clone, Copy)]
pub struct DecoderScope<'a> {
    vocabulary: &'a Vocabulary,
    aliases: &'a TypeAliases,
    decoders: &'a [String],
}

impl<'a> DecoderScope<'a> {
    /// A scope with no caller-supplied decoders.
    pub fn new(vocabulary: &'a Vocabulary, aliases: &'a TypeAliases) -> Self {
        Self {
            vocabulary,
            aliases,
            decoders: &[],
        }
    }

    /// The same scope with `decoders` supplied by the caller, one per
    /// record type parameter.
    pub fn with_decoders(self, decoders: &'a [String]) -> Self {
        Self { decoders, ..self }
    }

    /// Whether a decoder for `name` is supplied by the caller.
    pub fn has_decoder(&self, name: &str) -> bool {
        self.decoders.iter().any(|d| d == name)
    }

    /// Classify a type node by its declared base name.
    ///
    /// The arity of a custom type is its registered decoder parameter count,
    /// falling back to the number of generic arguments written at the use site.
    pub fn classify(&self, ty: &Type) -> Strategy {
        self.classify_as(ty, &ty.base_name)
    }

    /// Classify a type node by the name its decoder is invoked under, which
    /// is the alias when one is given.
    pub fn classify_decoder(&self, ty: &Type) -> Strategy {
        self.classify_as(ty, ty.decoder_name())
    }

    fn classify_as(&self, ty: &Type, name: &str) -> Strategy {
        if self.vocabulary.is_known(name) {
            return Strategy::Known;
        }
        if self.vocabulary.is_cast(name) {
            return Strategy::Cast;
        }

        let lookup = if self.has_decoder(name) {
            Lookup::Scope
        } else {
            Lookup::Static
        };
        let arity = self
            .aliases
            .decoder_params(name)
            .map_or(ty.arity(), <[String]>::len);
        Strategy::Custom { arity, lookup }
    }
}
