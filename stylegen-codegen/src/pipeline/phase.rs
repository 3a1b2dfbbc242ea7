use eyre::Result;

use super::CompilationContext;

/// One step of the [`Pipeline`](super::Pipeline).
///
/// A phase records problems with the schema as diagnostics on the context.
/// Returning `Err` aborts the whole run and is reserved for failures that
/// have nothing to do with the input.
pub trait Phase: Send + Sync {
    /// Short identifier, also used as the `phase` of diagnostics and in
    /// snapshot file names.
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    fn run(&self, ctx: &mut CompilationContext) -> Result<()>;
}
