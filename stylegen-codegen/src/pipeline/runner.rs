use eyre::Result;
use stylegen_core::ComponentSchema;

use super::{
    CompilationContext, Phase, Plugin,
    phases::{AssemblePhase, ValidatePhase},
};

/// Runs `validate`, then `assemble`, then any extra phases, with every
/// plugin called around each of them. The run ends early once a phase
/// leaves an error diagnostic behind.
pub struct Pipeline {
    validate: ValidatePhase,
    phases: Vec<Box<dyn Phase>>,
    plugins: Vec<Box<dyn Plugin>>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self {
            validate: ValidatePhase::new(),
            phases: Vec::new(),
            plugins: Vec::new(),
        }
    }

    /// Replace the validate phase, e.g. to add or remove lints.
    pub fn validate(mut self, phase: ValidatePhase) -> Self {
        self.validate = phase;
        self
    }

    /// Appends a phase after the built-in ones.
    pub fn phase(mut self, phase: impl Phase + 'static) -> Self {
        self.phases.push(Box::new(phase));
        self
    }

    pub fn plugin(mut self, plugin: impl Plugin + 'static) -> Self {
        self.plugins.push(Box::new(plugin));
        self
    }

    pub fn validate_phase(&self) -> &ValidatePhase {
        &self.validate
    }

    /// # Errors
    ///
    /// Fails only when a phase or plugin does. Lint errors end the run
    /// early and come back in the context.
    pub fn run(&self, schema: ComponentSchema) -> Result<CompilationContext> {
        self.run_context(CompilationContext::new(schema))
    }

    /// Like [`Pipeline::run`], for a context already carrying diagnostics.
    pub fn run_context(&self, mut ctx: CompilationContext) -> Result<CompilationContext> {
        for phase in self.phases() {
            self.run_phase(phase, &mut ctx)?;
            if ctx.has_errors() {
                break;
            }
        }
        Ok(ctx)
    }

    /// Every phase this pipeline runs, in order.
    pub fn phases(&self) -> impl Iterator<Item = &dyn Phase> {
        let builtin: [&dyn Phase; 2] = [&self.validate, &AssemblePhase];
        builtin
            .into_iter()
            .chain(self.phases.iter().map(|p| p.as_ref()))
    }

    fn run_phase(&self, phase: &dyn Phase, ctx: &mut CompilationContext) -> Result<()> {
        let name = phase.name();
        self.plugins.iter().try_for_each(|p| p.before(name, ctx))?;
        phase.run(ctx)?;
        self.plugins.iter().try_for_each(|p| p.after(name, ctx))
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    use stylegen_core::Category;

    use super::*;

    struct CountingPlugin {
        before_count: Arc<AtomicUsize>,
        after_count: Arc<AtomicUsize>,
    }

    impl CountingPlugin {
        fn new() -> (Self, Arc<AtomicUsize>, Arc<AtomicUsize>) {
            let before = Arc::new(AtomicUsize::new(0));
            let after = Arc::new(AtomicUsize::new(0));
            (
                Self {
                    before_count: before.clone(),
                    after_count: after.clone(),
                },
                before,
                after,
            )
        }
    }

    impl Plugin for CountingPlugin {
        fn name(&self) -> &'static str {
            "counting"
        }

        fn before(&self, _phase: &str, _ctx: &mut CompilationContext) -> Result<()> {
            self.before_count.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        fn after(&self, _phase: &str, _ctx: &mut CompilationContext) -> Result<()> {
            self.after_count.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    fn button() -> ComponentSchema {
        ComponentSchema::new("Button")
            .with(Category::Shape, ["shape"])
            .with(Category::Color, ["background"])
    }

    #[test]
    fn test_pipeline_runs_phases() {
        let ctx = Pipeline::new().run(button()).expect("pipeline should succeed");

        assert!(!ctx.has_errors());
        assert!(ctx.artifacts.is_some());
    }

    #[test]
    fn test_pipeline_plugin_hooks() {
        let (plugin, before_count, after_count) = CountingPlugin::new();

        let pipeline = Pipeline::new().plugin(plugin);
        let _ = pipeline.run(button()).expect("pipeline should succeed");

        assert_eq!(before_count.load(Ordering::SeqCst), 2);
        assert_eq!(after_count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_pipeline_stops_on_lint_error() {
        let (plugin, before_count, _) = CountingPlugin::new();
        let schema = ComponentSchema::new("Button")
            .with(Category::Shape, ["x"])
            .with(Category::Color, ["x"]);

        let ctx = Pipeline::new()
            .plugin(plugin)
            .run(schema)
            .expect("lint errors are not fatal");

        assert!(ctx.has_errors());
        assert!(ctx.artifacts.is_none());
        assert_eq!(before_count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_phase_order() {
        let pipeline = Pipeline::new();
        let names: Vec<_> = pipeline.phases().map(|p| p.name()).collect();
        assert_eq!(names, vec!["validate", "assemble"]);
    }
}
