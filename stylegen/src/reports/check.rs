//! Check command report data structures.

use std::path::PathBuf;

use super::{
    diagnostics::DiagnosticSummary,
    output::{Output, Report},
};

/// Report data from manifest and schema validation.
#[derive(Debug)]
pub struct CheckReport {
    pub config_path: PathBuf,
    /// Component base name, when the scanner found a holder.
    pub component: Option<String>,
    /// Why the scanner found nothing to generate from.
    pub scan_miss: Option<String>,
    /// Number of classified properties.
    pub property_count: usize,
    pub diagnostics: DiagnosticSummary,
}

impl CheckReport {
    /// Whether generation would succeed.
    pub fn is_valid(&self) -> bool {
        self.scan_miss.is_none() && !self.diagnostics.has_errors()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        if let Some(miss) = &self.scan_miss {
            out.error(miss);
            return;
        }

        self.diagnostics.render(out);
        if !self.diagnostics.is_empty() {
            out.newline();
        }

        if self.is_valid() {
            out.preformatted(&format!("✓ {} is valid", self.config_path.display()));
            if let Some(component) = &self.component {
                out.key_value_indented(
                    component,
                    &stylegen_core::pluralize(self.property_count, "property", "properties"),
                );
            }
        }
    }
}
