//! Core utilities and types for the jsongen decoder generator.
//!
//! This crate provides source discovery and generated file output shared by
//! the generators and the command line tool.

mod file;
mod source;

// File operations
pub use file::{FileRules, GeneratedFile, Overwrite, WriteResult};
// Source discovery
pub use source::{GENERATED_SUFFIX, SUPPORT_LIBRARY, SourceFile, discover, output_name};
