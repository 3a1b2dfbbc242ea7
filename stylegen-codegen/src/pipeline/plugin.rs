use eyre::Result;

use super::CompilationContext;

/// Observer attached to a [`Pipeline`](super::Pipeline).
///
/// Both hooks default to doing nothing. An `Err` from either aborts the run.
pub trait Plugin: Send + Sync {
    fn name(&self) -> &'static str;

    fn before(&self, _phase: &str, _ctx: &mut CompilationContext) -> Result<()> {
        Ok(())
    }

    fn after(&self, _phase: &str, _ctx: &mut CompilationContext) -> Result<()> {
        Ok(())
    }
}
