//! Runs every lint over the schema before anything is assembled.

mod lint;
pub mod lints;

use eyre::Result;
pub use lint::Lint;
pub use lints::{
    AmbiguousCategoryLint, ComponentNameLint, DuplicatePropertyLint, EmptyGroupLint,
    PropertyNamingLint, ReservedMemberLint,
};

use crate::pipeline::{CompilationContext, Phase};

/// Lints run in registration order and all of them run, so one pass
/// reports every problem at once.
pub struct ValidatePhase {
    lints: Vec<Box<dyn Lint>>,
}

impl ValidatePhase {
    /// The built-in lints.
    pub fn new() -> Self {
        Self {
            lints: vec![
                Box::new(ComponentNameLint),
                Box::new(PropertyNamingLint),
                Box::new(AmbiguousCategoryLint),
                Box::new(DuplicatePropertyLint),
                Box::new(ReservedMemberLint),
                Box::new(EmptyGroupLint),
            ],
        }
    }

    pub fn empty() -> Self {
        Self { lints: Vec::new() }
    }

    pub fn with_lint(mut self, lint: impl Lint + 'static) -> Self {
        self.lints.push(Box::new(lint));
        self
    }

    pub fn lints(&self) -> impl Iterator<Item = &dyn Lint> {
        self.lints.iter().map(|l| l.as_ref())
    }
}

impl Default for ValidatePhase {
    fn default() -> Self {
        Self::new()
    }
}

impl Phase for ValidatePhase {
    fn name(&self) -> &'static str {
        "validate"
    }

    fn description(&self) -> &'static str {
        "Lint the scanned schema and record diagnostics"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        for lint in &self.lints {
            lint.check(&ctx.schema, &mut ctx.diagnostics);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use stylegen_core::{Category, ComponentSchema};

    use super::*;
    use crate::pipeline::Diagnostic;

    #[test]
    fn test_lint_errors_are_diagnostics() {
        struct RejectAll;
        impl Lint for RejectAll {
            fn name(&self) -> &'static str {
                "reject-all"
            }
            fn description(&self) -> &'static str {
                "Rejects every schema"
            }
            fn check(&self, schema: &ComponentSchema, diagnostics: &mut Vec<Diagnostic>) {
                diagnostics.push(Diagnostic::error("validate", format!("{} rejected", schema.name)));
            }
        }

        let mut ctx = CompilationContext::new(ComponentSchema::new("Button"));
        ValidatePhase::empty()
            .with_lint(RejectAll)
            .run(&mut ctx)
            .expect("lint errors are not fatal");

        assert!(ctx.has_errors());
        assert_eq!(ctx.diagnostics[0].message, "Button rejected");
    }

    #[test]
    fn test_notes_do_not_fail() {
        let mut ctx = CompilationContext::new(ComponentSchema::new("Button"));

        let phase = ValidatePhase::empty().with_lint(EmptyGroupLint);
        phase.run(&mut ctx).unwrap();

        assert!(!ctx.has_errors());
        assert_eq!(ctx.diagnostics.len(), 2);
    }

    #[test]
    fn test_default_lints_accept_button() {
        let schema = ComponentSchema::new("Button")
            .with(Category::Shape, ["shape"])
            .with(Category::Color, ["background"])
            .with(Category::Dimension, ["padding"]);
        let mut ctx = CompilationContext::new(schema);

        ValidatePhase::new().run(&mut ctx).unwrap();

        assert!(ctx.diagnostics.is_empty(), "{:?}", ctx.diagnostics);
    }

    #[test]
    fn test_builtin_lint_order() {
        let phase = ValidatePhase::new();
        let names: Vec<_> = phase.lints().map(|l| l.name()).collect();
        assert_eq!(
            names,
            vec![
                "component-name",
                "property-naming",
                "ambiguous-category",
                "duplicate-property",
                "reserved-member",
                "empty-group",
            ]
        );
    }
}
