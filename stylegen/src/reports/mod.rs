//! Report data structures for commands.
//!
//! Commands build reports, then render them to an Output target.

mod check;
mod diagnostics;
mod explain;
mod generate;
mod output;

pub use check::CheckReport;
pub use diagnostics::DiagnosticSummary;
pub use explain::{
    Analysis, CategoryInfo, DefaultInfo, ExplainReport, LintInfo, ManifestInfo, PhaseInfo,
};
pub use generate::{GenerateReport, GenerationResult, PreviewResult, WrittenResult};
pub use output::{Report, TerminalOutput};
#[cfg(test)]
pub use output::BufferOutput;
