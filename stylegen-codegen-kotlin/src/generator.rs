use stylegen_codegen::{generator::StyleArtifactSet, language::LanguageCodegen};

use crate::renderer::KotlinRenderer;

/// Kotlin code generator producing a Jetpack Compose style family.
#[derive(Debug, Clone, Copy, Default)]
pub struct KotlinGenerator;

impl KotlinGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl LanguageCodegen for KotlinGenerator {
    fn language(&self) -> &'static str {
        "kotlin"
    }

    fn file_extension(&self) -> &'static str {
        "kt"
    }

    fn render(&self, artifacts: &StyleArtifactSet, package: &str) -> String {
        KotlinRenderer::new().render_unit(artifacts, package)
    }
}
