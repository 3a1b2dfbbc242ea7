use clap::Args;
use eyre::Result;

use super::ConfigArg;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    #[command(flatten)]
    config: ConfigArg,
}

impl CheckCommand {
    pub fn run(&self) -> Result<()> {
        let report = ops::check(&self.config.open())?;
        report.render(&mut TerminalOutput::new());

        if !report.is_valid() {
            std::process::exit(1);
        }
        Ok(())
    }
}
