//! Generate command report data structures.

use std::path::PathBuf;

use stylegen_core::WriteResult;

use super::{
    diagnostics::DiagnosticSummary,
    output::{Output, Report},
};

/// Report data from one generation run.
#[derive(Debug)]
pub struct GenerateReport {
    /// Component base name, when the scanner found a holder.
    pub component: Option<String>,
    pub diagnostics: DiagnosticSummary,
    /// Directory the pipeline snapshots were written to, with `--visualize`.
    pub snapshot_dir: Option<PathBuf>,
    pub result: GenerationResult,
}

/// What the generation run produced.
#[derive(Debug)]
pub enum GenerationResult {
    /// The scanner found nothing to generate from.
    NotGenerated { reason: String },
    /// The schema failed validation.
    Rejected,
    /// The unit was written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(PreviewResult),
}

#[derive(Debug)]
pub struct WrittenResult {
    pub path: PathBuf,
    pub write: WriteResult,
    /// Declarations in the unit, in emission order.
    pub declarations: Vec<String>,
}

#[derive(Debug)]
pub struct PreviewResult {
    pub path: PathBuf,
    pub content: String,
}

impl GenerateReport {
    pub fn is_success(&self) -> bool {
        matches!(
            self.result,
            GenerationResult::Written(_) | GenerationResult::Preview(_)
        )
    }
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        self.diagnostics.render(out);

        match &self.result {
            GenerationResult::NotGenerated { reason } => {
                out.error(&format!("nothing generated: {}", reason));
            }
            GenerationResult::Rejected => {
                let count = self.diagnostics.errors.len();
                out.error(&format!(
                    "nothing generated: schema rejected with {}",
                    stylegen_core::pluralize(count, "error", "errors")
                ));
            }
            GenerationResult::Written(written) => {
                if let Some(component) = &self.component {
                    out.key_value("Component", component);
                }
                out.section("Declarations");
                for name in &written.declarations {
                    out.list_item(name);
                }
                out.newline();
                match written.write {
                    WriteResult::Written => {
                        out.added_item(&written.path.display().to_string());
                    }
                    WriteResult::Unchanged => out.preformatted(&format!(
                        "Unchanged: {}",
                        written.path.display()
                    )),
                }
            }
            GenerationResult::Preview(preview) => {
                out.divider(&preview.path.display().to_string());
                out.preformatted(&preview.content);
                out.divider("Summary");
                out.preformatted("1 file would be generated");
            }
        }

        if let Some(dir) = &self.snapshot_dir {
            out.key_value("Pipeline snapshots", &dir.display().to_string());
        }
    }
}
