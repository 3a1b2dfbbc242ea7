//! State threaded through the phases of one compilation.

use stylegen_core::ComponentSchema;

use super::diagnostic::{Diagnostic, Severity};
use crate::generator::StyleArtifactSet;

#[derive(Debug)]
pub struct CompilationContext {
    pub schema: ComponentSchema,
    /// Set by the assemble phase.
    pub artifacts: Option<StyleArtifactSet>,
    pub diagnostics: Vec<Diagnostic>,
}

impl CompilationContext {
    pub fn new(schema: ComponentSchema) -> Self {
        Self {
            schema,
            artifacts: None,
            diagnostics: Vec::new(),
        }
    }

    /// Seeds the context with diagnostics raised before the pipeline ran,
    /// e.g. scanner notes.
    pub fn with_diagnostics(mut self, diagnostics: impl IntoIterator<Item = Diagnostic>) -> Self {
        self.diagnostics.extend(diagnostics);
        self
    }

    pub fn has_errors(&self) -> bool {
        self.count(Severity::Error) > 0
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.severity.is_error())
    }

    pub fn count(&self, severity: Severity) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == severity)
            .count()
    }
}
