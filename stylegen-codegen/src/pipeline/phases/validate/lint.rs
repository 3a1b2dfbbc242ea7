use stylegen_core::ComponentSchema;

use crate::pipeline::Diagnostic;

/// One check over a scanned schema. Lints only report; they never edit
/// the schema.
pub trait Lint: Send + Sync {
    /// Kebab-case identifier, e.g. `reserved-member`.
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    fn check(&self, schema: &ComponentSchema, diagnostics: &mut Vec<Diagnostic>);
}
