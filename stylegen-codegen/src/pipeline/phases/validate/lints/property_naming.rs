//! Lint for property naming conventions.

use stylegen_core::{Category, ComponentSchema, is_identifier};

use super::{super::Lint, property_location};
use crate::pipeline::Diagnostic;

/// Lint that checks property names are identifiers in lowerCamelCase.
pub struct PropertyNamingLint;

impl Lint for PropertyNamingLint {
    fn name(&self) -> &'static str {
        "property-naming"
    }

    fn description(&self) -> &'static str {
        "Check that property names are valid identifiers"
    }

    fn check(&self, schema: &ComponentSchema, diagnostics: &mut Vec<Diagnostic>) {
        for category in Category::ALL {
            for name in schema.properties.get(category) {
                let location = property_location(category, name);
                if !is_identifier(name) {
                    diagnostics.push(
                        Diagnostic::error(
                            "validate",
                            format!("property name '{}' is not a valid identifier", name),
                        )
                        .at(location),
                    );
                } else if name.starts_with(|c: char| c.is_ascii_uppercase()) {
                    diagnostics.push(
                        Diagnostic::warning(
                            "validate",
                            format!("property name '{}' should start with a lowercase letter", name),
                        )
                        .at(location),
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(names: &[&str]) -> Vec<Diagnostic> {
        let schema = ComponentSchema::new("Button").with(Category::Shape, names.iter().copied());
        let mut diagnostics = Vec::new();
        PropertyNamingLint.check(&schema, &mut diagnostics);
        diagnostics
    }

    #[test]
    fn test_valid_names() {
        assert!(check(&["shape", "cornerShape", "shape2"]).is_empty());
    }

    #[test]
    fn test_invalid_identifier() {
        let diagnostics = check(&["corner-shape"]);
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].severity.is_error());
        assert_eq!(
            diagnostics[0].location.as_deref(),
            Some("shape_props.corner-shape")
        );
    }

    #[test]
    fn test_uppercase_is_warning() {
        let diagnostics = check(&["Shape"]);
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].severity.is_warning());
    }
}
