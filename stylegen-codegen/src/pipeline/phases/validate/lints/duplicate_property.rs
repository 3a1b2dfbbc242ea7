//! Lint for repeated names within one category list.

use std::collections::HashSet;

use stylegen_core::{Category, ComponentSchema};

use super::{super::Lint, property_location};
use crate::pipeline::Diagnostic;

/// Lint that errors when a category list names the same property twice.
pub struct DuplicatePropertyLint;

impl Lint for DuplicatePropertyLint {
    fn name(&self) -> &'static str {
        "duplicate-property"
    }

    fn description(&self) -> &'static str {
        "Detect properties listed twice in one category"
    }

    fn check(&self, schema: &ComponentSchema, diagnostics: &mut Vec<Diagnostic>) {
        for category in Category::ALL {
            let mut seen = HashSet::new();
            for name in schema.properties.get(category) {
                if !seen.insert(name) {
                    diagnostics.push(
                        Diagnostic::error(
                            "validate",
                            format!("duplicate {} property '{}'", category, name),
                        )
                        .at(property_location(category, name)),
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_duplicates() {
        let schema = ComponentSchema::new("Button").with(Category::Color, ["a", "b"]);

        let mut diagnostics = Vec::new();
        DuplicatePropertyLint.check(&schema, &mut diagnostics);

        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_duplicate_in_one_list() {
        let schema = ComponentSchema::new("Button").with(Category::Dimension, ["padding", "padding"]);

        let mut diagnostics = Vec::new();
        DuplicatePropertyLint.check(&schema, &mut diagnostics);

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].message, "duplicate dimension property 'padding'");
        assert_eq!(
            diagnostics[0].location.as_deref(),
            Some("dimension_props.padding")
        );
    }
}
