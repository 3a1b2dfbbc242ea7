//! Notes about empty colors/dimensions groups.

use stylegen_core::{Category, ComponentSchema};

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that notes when a component has no color or no dimension properties.
///
/// The family is still generated in full; the note only explains why an
/// empty `Colors`/`Dimensions` object shows up in the output.
pub struct EmptyGroupLint;

impl Lint for EmptyGroupLint {
    fn name(&self) -> &'static str {
        "empty-group"
    }

    fn description(&self) -> &'static str {
        "Note empty colors or dimensions groups"
    }

    fn check(&self, schema: &ComponentSchema, diagnostics: &mut Vec<Diagnostic>) {
        for (category, group) in [(Category::Color, "colors"), (Category::Dimension, "dimensions")] {
            if schema.properties.get(category).is_empty() {
                diagnostics.push(
                    Diagnostic::info(
                        "validate",
                        format!("no {} properties; {} will be empty", category, group),
                    )
                    .at(format!("{}_props", category)),
                );
            }
        }
    }
}
