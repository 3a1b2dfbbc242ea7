//! Lint for the component base name.

use stylegen_core::{ComponentSchema, is_identifier};

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that errors on an empty or non-identifier component name.
pub struct ComponentNameLint;

impl Lint for ComponentNameLint {
    fn name(&self) -> &'static str {
        "component-name"
    }

    fn description(&self) -> &'static str {
        "Require a component name usable as a type name prefix"
    }

    fn check(&self, schema: &ComponentSchema, diagnostics: &mut Vec<Diagnostic>) {
        let name = &schema.name;
        if name.is_empty() {
            diagnostics.push(Diagnostic::error("validate", "component name is empty").at("name"));
        } else if !is_identifier(name) {
            diagnostics.push(
                Diagnostic::error(
                    "validate",
                    format!("component name '{}' is not a valid identifier", name),
                )
                .at("name"),
            );
        } else if name.starts_with(|c: char| c.is_ascii_lowercase()) {
            diagnostics.push(
                Diagnostic::warning(
                    "validate",
                    format!(
                        "component name '{}' starts with a lowercase letter; generated type names will too",
                        name
                    ),
                )
                .at("name"),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(name: &str) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        ComponentNameLint.check(&ComponentSchema::new(name), &mut diagnostics);
        diagnostics
    }

    #[test]
    fn test_valid_name() {
        assert!(check("IconButton").is_empty());
    }

    #[test]
    fn test_empty_name() {
        let diagnostics = check("");
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].severity.is_error());
        assert_eq!(diagnostics[0].message, "component name is empty");
    }

    #[test]
    fn test_invalid_identifier() {
        let diagnostics = check("Icon-Button");
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].severity.is_error());
    }

    #[test]
    fn test_lowercase_is_warning() {
        let diagnostics = check("button");
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].severity.is_warning());
    }
}
