use clap::Args;
use eyre::Result;

use super::ConfigArg;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct ExplainCommand {
    #[command(flatten)]
    config: ConfigArg,
}

impl ExplainCommand {
    pub fn run(&self) -> Result<()> {
        ops::explain(&self.config.open())?.render(&mut TerminalOutput::new());
        Ok(())
    }
}
