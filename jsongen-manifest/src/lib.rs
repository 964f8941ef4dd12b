//! Loading of the structural model and the project configuration.
//!
//! Both inputs are parsed with source-aware [`miette`] diagnostics.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod config;
mod error;
mod model;
mod validate;

pub use config::{CONFIG_FILE, Config, OutputConfig};
pub use error::{Error, Result};
pub use model::{parse_model_file, parse_model_str};
pub use validate::ParseContext;
