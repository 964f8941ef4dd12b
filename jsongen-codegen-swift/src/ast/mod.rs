//! Swift AST builders for generating extensions and functions.
//!
//! These provide a high-level API for constructing Swift syntax,
//! which can then be rendered via CodeBuilder.

mod extension;
mod func;

pub use extension::Extension;
pub use func::{Func, Param};
