//! Core operations.
//!
//! This module contains the business logic for jsongen commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod generate;
pub mod sources;

pub use check::check;
pub use generate::{GenerateOptions, generate};
pub use sources::sources;
