//! Decoder synthesis for the jsongen generator.
//!
//! This crate turns records of the structural model into language-agnostic
//! decode plans. Language crates (e.g., `jsongen-codegen-swift`) print them.
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`decoder`] - Decoder expression synthesis (Strategy, DecoderExpr, etc.)
//! - [`plan`] - Field statements and record plans
//! - [`runtime`] - Reference interpreter for record plans
//! - [`language`] - Language-specific abstractions (LanguageCodegen, etc.)
//! - [`testing`] - Test utilities (feature-gated)

pub mod builder;
pub mod decoder;
pub mod language;
pub mod plan;
pub mod runtime;

#[cfg(any(test, feature = "testing"))]
pub mod testing;
