//! Pipeline diagnostics grouped by severity.

use stylegen_codegen::pipeline::{Diagnostic, Severity};

use super::output::Output;

/// Diagnostic messages split by severity, locations folded in.
#[derive(Debug, Default)]
pub struct DiagnosticSummary {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub infos: Vec<String>,
}

impl DiagnosticSummary {
    pub fn new(diagnostics: &[Diagnostic]) -> Self {
        let mut summary = Self::default();
        for diag in diagnostics {
            let msg = match &diag.location {
                Some(loc) => format!("{}\n  --> {}", diag.message, loc),
                None => diag.message.clone(),
            };
            match diag.severity {
                Severity::Error => summary.errors.push(msg),
                Severity::Warning => summary.warnings.push(msg),
                Severity::Info => summary.infos.push(msg),
            }
        }
        summary
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty() && self.infos.is_empty()
    }

    pub fn render(&self, out: &mut dyn Output) {
        for error in &self.errors {
            out.error(error);
        }
        for warning in &self.warnings {
            out.warning(warning);
        }
        for info in &self.infos {
            out.preformatted(&format!("info: {}", info));
        }
    }
}
