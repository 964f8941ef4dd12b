//! Report data structures for commands.
//!
//! Commands build reports, then render them to an Output target.

mod check;
mod generate;
mod output;
mod sources;

pub use check::{CheckReport, FieldSummary, RecordSummary};
pub use generate::{GenerateReport, GenerationResult, PreviewFile, WrittenResult};
pub use output::{Report, TerminalOutput};
pub use sources::{SourceEntry, SourcesReport};
