use stylegen_core::SourceUnit;

use crate::generator::StyleArtifactSet;

/// Turns an assembled style family into source text for one language.
pub trait LanguageCodegen {
    /// e.g. `kotlin`
    fn language(&self) -> &'static str;

    /// Without the dot, e.g. `kt`.
    fn file_extension(&self) -> &'static str;

    /// The complete file, starting with the `package` declaration.
    fn render(&self, artifacts: &StyleArtifactSet, package: &str) -> String;

    fn unit(&self, artifacts: &StyleArtifactSet, package: &str) -> SourceUnit {
        SourceUnit::new(
            artifacts.names.file_stem(),
            package,
            self.file_extension(),
            self.render(artifacts, package),
        )
    }
}
