//! Lint for properties listed under more than one category.

use std::collections::HashSet;

use stylegen_core::{Category, ComponentSchema};

use super::{super::Lint, property_location};
use crate::pipeline::Diagnostic;

/// Lint that errors when a property name appears in two category lists.
///
/// Such a name would produce two members with the same name but different
/// types, so the schema is rejected.
pub struct AmbiguousCategoryLint;

impl Lint for AmbiguousCategoryLint {
    fn name(&self) -> &'static str {
        "ambiguous-category"
    }

    fn description(&self) -> &'static str {
        "Detect properties assigned to more than one category"
    }

    fn check(&self, schema: &ComponentSchema, diagnostics: &mut Vec<Diagnostic>) {
        let mut reported = HashSet::new();

        for category in Category::ALL {
            for name in schema.properties.get(category) {
                let categories = schema.categories_of(name);
                if categories.len() < 2 || !reported.insert(name.as_str()) {
                    continue;
                }
                let listed: Vec<_> = categories.iter().map(|c| c.as_str()).collect();
                diagnostics.push(
                    Diagnostic::error(
                        "validate",
                        format!(
                            "property '{}' is listed under several categories: {}",
                            name,
                            listed.join(", ")
                        ),
                    )
                    .at(property_location(category, name)),
                );
            }
        }
    }
}
