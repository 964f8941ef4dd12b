use jsongen_model::Type;

use super::{DecoderScope, Lookup, Strategy};

/// The decoder being invoked by a [`DecoderExpr::Invoke`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Callee {
    /// Decoder parameter supplied for the named type parameter.
    Scope(String),
    /// Static entry point of the named type.
    Static(String),
}

/// A decoder: a transform from a raw value to an optional typed value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecoderExpr {
    /// Reinterpret the raw value as the named type.
    Reinterpret(String),
    /// Downcast the raw value to the named type, failing on mismatch.
    Downcast(String),
    /// Invoke a decoder, passing one decoder argument per threaded generic
    /// argument.
    Invoke { callee: Callee, args: Vec<DecoderArg> },
}

impl DecoderExpr {
    /// The decoder arguments threaded into this decoder.
    pub fn args(&self) -> &[DecoderArg] {
        match self {
            DecoderExpr::Invoke { args, .. } => args,
            _ => &[],
        }
    }
}

/// A decoder passed as an argument to an enclosing decoder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecoderArg {
    /// A single-value transform closure around a reinterpretation or downcast.
    Transform(DecoderExpr),
    /// A closure forwarding its value to a nested decoder.
    Forward(DecoderExpr),
}

impl DecoderArg {
    pub fn expr(&self) -> &DecoderExpr {
        match self {
            DecoderArg::Transform(expr) | DecoderArg::Forward(expr) => expr,
        }
    }
}

/// Build the decoder that is applied directly to a raw value of type `ty`.
pub fn synthesize(ty: &Type, scope: &DecoderScope<'_>) -> DecoderExpr {
    let name = ty.decoder_name().to_string();
    match scope.classify_decoder(ty) {
        Strategy::Known => DecoderExpr::Reinterpret(name),
        Strategy::Cast => DecoderExpr::Downcast(name),
        Strategy::Custom { arity, lookup } => {
            let args = ty
                .generic_arguments
                .iter()
                .take(arity)
                .map(|arg| synthesize_argument(arg, scope))
                .collect();
            let callee = match lookup {
                Lookup::Scope => Callee::Scope(name),
                Lookup::Static => Callee::Static(name),
            };
            DecoderExpr::Invoke { callee, args }
        }
    }
}

/// Build the decoder for `ty` in the form passed to an enclosing decoder.
///
/// Only the declared base name decides between a bare transform and a
/// forwarding closure; the forwarded decoder still follows the alias.
pub fn synthesize_argument(ty: &Type, scope: &DecoderScope<'_>) -> DecoderArg {
    match scope.classify(ty) {
        Strategy::Known => DecoderArg::Transform(DecoderExpr::Reinterpret(ty.base_name.clone())),
        Strategy::Cast => DecoderArg::Transform(DecoderExpr::Downcast(ty.base_name.clone())),
        Strategy::Custom { .. } => DecoderArg::Forward(synthesize(ty, scope)),
    }
}
