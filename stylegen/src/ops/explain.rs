//! Explain operation - pipeline explanation.

use eyre::{Context, Result};
use stylegen_codegen::{
    builder::TypeMapper,
    emit::Orchestrator,
    eval::{Record, StyleModel},
    language::LanguageCodegen,
    pipeline::{CompilationContext, Pipeline},
};
use stylegen_codegen_kotlin::{KotlinGenerator, KotlinTypeMapper};
use stylegen_core::{Category, DeclarationScanner};
use stylegen_manifest::StyleToml;

use crate::reports::{
    Analysis, CategoryInfo, DefaultInfo, ExplainReport, LintInfo, ManifestInfo, PhaseInfo,
};

/// Execute the explain operation.
///
/// Describes the pipeline, then scans the manifest and reports what would
/// be generated from it.
pub fn explain(file: &StyleToml) -> Result<ExplainReport> {
    let manifest = file.manifest();
    let pipeline = Pipeline::new();

    let phases: Vec<PhaseInfo> = pipeline
        .phases()
        .map(|p| PhaseInfo {
            name: p.name().to_string(),
            description: p.description().to_string(),
        })
        .collect();

    let lints: Vec<LintInfo> = pipeline
        .validate_phase()
        .lints()
        .map(|l| LintInfo {
            name: l.name().to_string(),
            description: l.description().to_string(),
        })
        .collect();

    let language = KotlinGenerator::new();
    let scanner = file.scanner();
    let compiled = Orchestrator::new(&language)
        .pipeline(pipeline)
        .compile(scanner.scan())
        .wrap_err("Pipeline failed")?;

    let analysis = match compiled {
        Err(miss) => Err(miss.to_string()),
        Ok(ctx) => {
            let holder = scanner
                .holder()
                .map(|d| d.name.clone())
                .unwrap_or_default();
            analyze(file, &language, holder, ctx)?
        }
    };

    Ok(ExplainReport {
        config_path: file.path().to_path_buf(),
        manifest: ManifestInfo {
            package: manifest.output.package.clone(),
            output_dir: file.output_dir().display().to_string(),
            owner: manifest.scanner.owner.clone(),
            suffix: manifest.scanner.suffix.clone(),
            declaration_count: manifest.declarations.len(),
        },
        phases,
        lints,
        classification_order: Category::CLASSIFICATION_ORDER
            .iter()
            .map(|c| format!("{} ({})", c.as_str(), c.marker()))
            .collect(),
        analysis,
    })
}

fn analyze(
    file: &StyleToml,
    language: &KotlinGenerator,
    holder: String,
    ctx: CompilationContext,
) -> Result<std::result::Result<Analysis, String>> {
    let Some(artifacts) = ctx.artifacts.as_ref().filter(|_| !ctx.has_errors()) else {
        let errors: Vec<String> = ctx.errors().map(|d| d.message.clone()).collect();
        return Ok(Err(format!("schema rejected: {}", errors.join("; "))));
    };

    let categories = Category::ALL
        .iter()
        .map(|&category| CategoryInfo {
            name: category.description().to_string(),
            properties: ctx.schema.properties.get(category).to_vec(),
        })
        .collect();

    let model = StyleModel::new(artifacts).wrap_err("Generated builders are inconsistent")?;
    let style = model.default_style();
    let mapper = KotlinTypeMapper;
    let defaults = [&style.properties, &style.colors, &style.dimensions]
        .into_iter()
        .flat_map(|record| record_defaults(record, &mapper))
        .collect();

    let target = file.target(None);
    let unit = language.unit(artifacts, &target.package);

    Ok(Ok(Analysis {
        holder,
        component: ctx.schema.name.clone(),
        categories,
        declarations: artifacts
            .names
            .declarations()
            .iter()
            .map(|name| name.to_string())
            .collect(),
        accessor: artifacts.accessor.name.clone(),
        defaults,
        unit_path: target.path_of(&unit).display().to_string(),
        notes: ctx
            .diagnostics
            .iter()
            .filter(|d| !d.severity.is_error())
            .map(|d| d.to_string())
            .collect(),
    }))
}

fn record_defaults(record: &Record, mapper: &KotlinTypeMapper) -> Vec<DefaultInfo> {
    record
        .iter()
        .map(|(name, value)| DefaultInfo {
            property: format!("{}.{}", record.type_name(), name),
            value: mapper.render_value(value),
        })
        .collect()
}
