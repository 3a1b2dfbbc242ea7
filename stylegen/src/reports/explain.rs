//! Explain command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from pipeline explanation.
#[derive(Debug)]
pub struct ExplainReport {
    pub config_path: PathBuf,
    pub manifest: ManifestInfo,
    pub phases: Vec<PhaseInfo>,
    pub lints: Vec<LintInfo>,
    /// Classification order of the scanner, highest priority first.
    pub classification_order: Vec<String>,
    /// Result of scanning and running the pipeline.
    pub analysis: Result<Analysis, String>,
}

/// Information extracted from the manifest.
#[derive(Debug)]
pub struct ManifestInfo {
    pub package: String,
    pub output_dir: String,
    pub owner: String,
    pub suffix: String,
    pub declaration_count: usize,
}

#[derive(Debug)]
pub struct PhaseInfo {
    pub name: String,
    pub description: String,
}

#[derive(Debug)]
pub struct LintInfo {
    pub name: String,
    pub description: String,
}

/// What the pipeline made of the scanned holder.
#[derive(Debug)]
pub struct Analysis {
    pub holder: String,
    pub component: String,
    pub categories: Vec<CategoryInfo>,
    /// Generated declaration names, in emission order.
    pub declarations: Vec<String>,
    pub accessor: String,
    /// Values an unconfigured builder resolves to.
    pub defaults: Vec<DefaultInfo>,
    pub unit_path: String,
    pub notes: Vec<String>,
}

#[derive(Debug)]
pub struct CategoryInfo {
    pub name: String,
    pub properties: Vec<String>,
}

#[derive(Debug)]
pub struct DefaultInfo {
    /// Owning record and property, e.g. `ButtonColors.background`.
    pub property: String,
    pub value: String,
}

impl Report for ExplainReport {
    fn render(&self, out: &mut dyn Output) {
        out.title("Stylegen Pipeline Explanation");
        out.newline();

        out.key_value("Input", &self.config_path.display().to_string());
        out.key_value_indented("Package", &self.manifest.package);
        out.key_value_indented("Output", &self.manifest.output_dir);
        out.key_value_indented("Owner", &self.manifest.owner);
        out.key_value_indented("Suffix", &self.manifest.suffix);
        out.key_value_indented(
            "Declarations",
            &self.manifest.declaration_count.to_string(),
        );
        out.newline();

        out.section("Classification Order");
        for (i, category) in self.classification_order.iter().enumerate() {
            out.numbered_item(i + 1, category);
        }
        out.newline();

        out.section("Pipeline Phases");
        for (i, phase) in self.phases.iter().enumerate() {
            out.numbered_item(i + 1, &format!("{} - {}", phase.name, phase.description));
        }
        out.newline();

        out.section("Validation Lints");
        for lint in &self.lints {
            out.list_item(&format!("{}: {}", lint.name, lint.description));
        }
        out.newline();

        let analysis = match &self.analysis {
            Ok(analysis) => analysis,
            Err(reason) => {
                out.section("Analysis Results");
                out.key_value_indented("Nothing to generate", reason);
                return;
            }
        };

        out.section("Analysis Results");
        out.key_value_indented("Holder", &analysis.holder);
        out.key_value_indented("Component", &analysis.component);
        for category in &analysis.categories {
            let props = if category.properties.is_empty() {
                "-".to_string()
            } else {
                category.properties.join(", ")
            };
            out.key_value_indented(&category.name, &props);
        }
        out.newline();

        if !analysis.notes.is_empty() {
            out.section("Notes");
            for note in &analysis.notes {
                out.list_item(note);
            }
            out.newline();
        }

        out.section("Declarations");
        for name in &analysis.declarations {
            out.list_item(name);
        }
        out.key_value_indented("Accessor", &analysis.accessor);
        out.newline();

        if !analysis.defaults.is_empty() {
            out.section("Defaults");
            for default in &analysis.defaults {
                out.list_item(&format!("{} = {}", default.property, default.value));
            }
            out.newline();
        }

        out.section("File to Generate");
        out.list_item(&analysis.unit_path);
    }
}
