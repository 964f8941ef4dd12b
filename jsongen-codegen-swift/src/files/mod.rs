//! Generated Swift files.

mod header;
mod json_gen_swift;

pub use header::{FileHeader, TIMESTAMP_FORMAT};
pub use json_gen_swift::{JsonGenSwift, assemble_file};
