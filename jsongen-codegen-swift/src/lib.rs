//! Swift code generation for jsongen.
//!
//! Prints the decode plans of `jsongen-codegen` as Swift `extension`s with a
//! static `decode` function per record.

mod generator;
mod record;
mod render;

pub mod ast;
pub mod files;

pub use ast::{Extension, Func, Param};
pub use files::{FileHeader, JsonGenSwift, TIMESTAMP_FORMAT, assemble_file};
pub use generator::Generator;
pub use jsongen_codegen::language::{GenerateResult, LanguageCodegen, PreviewFile};
pub use record::{assemble_record, record_extension};
pub use render::{decoder_param, render_argument, render_decoder, render_statement};
