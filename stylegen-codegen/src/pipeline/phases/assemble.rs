//! Assemble phase - builds the artifact set from the schema.

use eyre::Result;

use crate::{
    generator::assemble,
    pipeline::{CompilationContext, Phase},
};

/// Phase that assembles the Style, Colors and Dimensions triads.
pub struct AssemblePhase;

impl Phase for AssemblePhase {
    fn name(&self) -> &'static str {
        "assemble"
    }

    fn description(&self) -> &'static str {
        "Build the style family declarations"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        ctx.artifacts = Some(assemble(&ctx.schema));
        Ok(())
    }
}
