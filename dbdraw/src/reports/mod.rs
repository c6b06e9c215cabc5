//! Report data structures for commands.
//!
//! Commands build reports, then render them to an [`Output`] target.

mod generate;
mod output;
mod sync;

pub use generate::{GenerateReport, GenerationResult, PreviewFile, PreviewResult, WrittenResult};
#[cfg(test)]
pub use output::RecordedOutput;
pub use output::{Report, TerminalOutput};
pub use sync::SyncReport;
