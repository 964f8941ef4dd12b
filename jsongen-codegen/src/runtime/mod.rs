//! Reference runtime for generated decode routines.
//!
//! The runtime interprets [`RecordPlan`](crate::plan::RecordPlan)s against
//! `serde_json` values, with builtin decoders standing in for the support
//! library the generated Swift links against. It gives the exact semantics a
//! generated routine has: which inputs decode, and which field fails first.

mod builtins;
mod catalog;
mod error;
mod value;

pub use catalog::{Decoder, Runtime};
pub use error::DecodeError;
pub use value::{Decoded, Record};
