//! Generate operation - scan, validate, render and emit one unit.

use std::path::{Path, PathBuf};

use eyre::{Context, Result};
use stylegen_codegen::{
    emit::{Orchestrator, Outcome},
    pipeline::{Pipeline, SnapshotPlugin},
};
use stylegen_codegen_kotlin::KotlinGenerator;
use stylegen_core::{DeclarationScanner, DirectorySink, MemorySink};
use stylegen_manifest::StyleToml;

use crate::reports::{
    DiagnosticSummary, GenerateReport, GenerationResult, PreviewResult, WrittenResult,
};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Replaces the output directory from the manifest.
    pub output_dir: Option<&'a Path>,
    /// Render without writing to disk.
    pub dry_run: bool,
    /// Dump a JSON snapshot of the pipeline state after each phase.
    pub visualize: bool,
}

/// Execute the generate operation.
pub fn generate(file: &StyleToml, opts: GenerateOptions) -> Result<GenerateReport> {
    let snapshot_dir = opts.visualize.then(|| debug_dir(file));

    let mut pipeline = Pipeline::new();
    if let Some(dir) = &snapshot_dir {
        pipeline = pipeline.plugin(SnapshotPlugin::writing_to(dir));
    }

    let language = KotlinGenerator::new();
    let orchestrator = Orchestrator::new(&language).pipeline(pipeline);
    let target = file.target(opts.output_dir);
    let scan = file.scanner().scan();

    let outcome = if opts.dry_run {
        orchestrator.run(scan, &target, &mut MemorySink::new())
    } else {
        orchestrator.run(scan, &target, &mut DirectorySink)
    }
    .wrap_err("Failed to generate code")?;

    let diagnostics = DiagnosticSummary::new(outcome.diagnostics());
    let (component, result) = match outcome {
        Outcome::NoDeclaration(miss) => (
            None,
            GenerationResult::NotGenerated {
                reason: miss.to_string(),
            },
        ),
        Outcome::Rejected { .. } => (None, GenerationResult::Rejected),
        Outcome::Emitted(emission) => {
            let component = emission.artifacts.names.base.clone();
            let result = if opts.dry_run {
                GenerationResult::Preview(PreviewResult {
                    path: emission.path,
                    content: emission.unit.content,
                })
            } else {
                GenerationResult::Written(WrittenResult {
                    path: emission.path,
                    write: emission.write,
                    declarations: emission
                        .artifacts
                        .names
                        .declarations()
                        .iter()
                        .map(|name| name.to_string())
                        .collect(),
                })
            };
            (Some(component), result)
        }
    };

    Ok(GenerateReport {
        component,
        diagnostics,
        snapshot_dir,
        result,
    })
}

fn debug_dir(file: &StyleToml) -> PathBuf {
    file.path()
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .join(".stylegen/debug")
}
