//! Decoder expression synthesis.
//!
//! Every type expression is classified once into a [`Strategy`] and turned
//! into a [`DecoderExpr`]: a value-to-optional-value transform that a
//! language renderer can print and the [`runtime`](crate::runtime) can run.
//!
//! - [`DecoderScope`] - vocabulary, alias registry and in-scope decoders
//! - [`synthesize`] - decoder applied directly to a raw value
//! - [`synthesize_argument`] - decoder passed as an argument to another decoder

mod expr;
mod scope;

pub use expr::{Callee, DecoderArg, DecoderExpr, synthesize, synthesize_argument};
pub use scope::{DecoderScope, Lookup, Strategy};
