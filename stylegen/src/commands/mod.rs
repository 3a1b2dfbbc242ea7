mod check;
mod completions;
mod explain;
mod generate;

use std::path::PathBuf;

use check::CheckCommand;
use clap::{Args, Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use explain::ExplainCommand;
use generate::GenerateCommand;
use stylegen_manifest::StyleToml;

/// Manifest errors are printed through miette, with source excerpts, and
/// end the process instead of going through eyre.
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for stylegen_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        self.unwrap_or_else(|e| {
            eprintln!("{:?}", miette::Report::new(*e));
            std::process::exit(1);
        })
    }
}

/// `--config`, shared by every command that reads a manifest.
#[derive(Args)]
pub(crate) struct ConfigArg {
    /// Path to the manifest
    #[arg(short, long, default_value = "stylegen.toml")]
    config: PathBuf,
}

impl ConfigArg {
    fn open(&self) -> StyleToml {
        StyleToml::open(&self.config).unwrap_or_exit()
    }
}

#[derive(Parser)]
#[command(name = "stylegen", version)]
#[command(about = "Generate Compose style families from stylegen.toml")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Explain(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Write the style family unit for the component in the manifest
    Generate(GenerateCommand),

    /// Scan and validate without writing anything
    Check(CheckCommand),

    /// Show the pipeline and what it would produce for the manifest
    Explain(ExplainCommand),

    /// Print shell completions
    Completions(CompletionsCommand),
}
