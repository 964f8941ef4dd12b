//! Language-agnostic decode routines.
//!
//! A [`RecordPlan`] is the ordered list of [`Statement`]s a generated decode
//! routine executes. Language renderers print it; the
//! [`runtime`](crate::runtime) interprets it.

mod field;
mod record;
mod statement;

pub use field::{FieldKind, FieldPlan, generate_field};
pub use record::{RecordPlan, assemble_record};
pub use statement::{Statement, field_local, value_local};
