//! Check operation - manifest and schema validation.

use eyre::{Context, Result};
use stylegen_codegen::emit::Orchestrator;
use stylegen_codegen_kotlin::KotlinGenerator;
use stylegen_core::DeclarationScanner;
use stylegen_manifest::StyleToml;

use crate::reports::{CheckReport, DiagnosticSummary};

/// Execute the check operation.
///
/// Scans the manifest and runs the pipeline without rendering anything.
pub fn check(file: &StyleToml) -> Result<CheckReport> {
    let language = KotlinGenerator::new();
    let compiled = Orchestrator::new(&language)
        .compile(file.scanner().scan())
        .wrap_err("Validation failed")?;

    let report = match compiled {
        Ok(ctx) => CheckReport {
            config_path: file.path().to_path_buf(),
            component: Some(ctx.schema.name.clone()),
            scan_miss: None,
            property_count: ctx.schema.properties.len(),
            diagnostics: DiagnosticSummary::new(&ctx.diagnostics),
        },
        Err(miss) => CheckReport {
            config_path: file.path().to_path_buf(),
            component: None,
            scan_miss: Some(miss.to_string()),
            property_count: 0,
            diagnostics: DiagnosticSummary::default(),
        },
    };
    Ok(report)
}
