use std::path::PathBuf;

use clap::Args;
use eyre::Result;

use super::ConfigArg;
use crate::{
    ops::{self, GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    #[command(flatten)]
    config: ConfigArg,

    /// Source root to write into, instead of [output].dir
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the unit instead of writing it
    #[arg(long)]
    dry_run: bool,

    /// Dump the compilation context after each phase to .stylegen/debug
    #[arg(long)]
    visualize: bool,
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        let file = self.config.open();
        let options = GenerateOptions {
            output_dir: self.output.as_deref(),
            dry_run: self.dry_run,
            visualize: self.visualize,
        };

        let report = ops::generate(&file, options)?;
        report.render(&mut TerminalOutput::new());

        if !report.is_success() {
            std::process::exit(1);
        }
        Ok(())
    }
}
