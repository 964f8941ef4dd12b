//! Structural model types for the jsongen decoder generator.
//!
//! This crate provides the value types the generator consumes: type
//! expressions, record declarations, the alias registry, and the vocabulary
//! that decides how leaf types are decoded.
//!
//! # Architecture
//!
//! ```text
//! Swift sources → AST extractor (external) → model.json → jsongen-model → codegen
//! ```
//!
//! The model types are designed to be:
//! - Immutable once deserialized (no interior mutability)
//! - Serializable with the camelCase keys the extractor emits
//! - Free of any code generation concerns

mod aliases;
mod model;
mod types;
mod vocabulary;

pub use aliases::TypeAliases;
pub use model::{ModelFile, StructuralModel};
pub use types::{Struct, Type, VarDecl};
pub use vocabulary::Vocabulary;
