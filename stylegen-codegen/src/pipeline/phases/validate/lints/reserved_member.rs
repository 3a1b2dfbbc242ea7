//! Lint for property names that collide with generated members.

use stylegen_core::{Category, ComponentSchema, STYLE_GROUP_ORDER};

use super::{super::Lint, property_location};
use crate::{
    naming::{BUILD_FN, COLORS_MEMBER, DIMENSIONS_MEMBER, builder_field},
    pipeline::Diagnostic,
};

/// Lint that errors when a property would shadow a generated member.
///
/// `build` is taken on every builder. On the style itself `colors`,
/// `dimensions` and the fields holding their builders are taken too.
pub struct ReservedMemberLint;

impl Lint for ReservedMemberLint {
    fn name(&self) -> &'static str {
        "reserved-member"
    }

    fn description(&self) -> &'static str {
        "Detect property names that collide with generated members"
    }

    fn check(&self, schema: &ComponentSchema, diagnostics: &mut Vec<Diagnostic>) {
        let style_reserved = [
            COLORS_MEMBER.to_string(),
            DIMENSIONS_MEMBER.to_string(),
            builder_field(COLORS_MEMBER),
            builder_field(DIMENSIONS_MEMBER),
        ];

        for category in Category::ALL {
            let on_style = STYLE_GROUP_ORDER.contains(&category);
            for name in schema.properties.get(category) {
                let collides =
                    name == BUILD_FN || (on_style && style_reserved.iter().any(|r| r == name));
                if collides {
                    diagnostics.push(
                        Diagnostic::error(
                            "validate",
                            format!(
                                "{} property '{}' collides with a generated member",
                                category, name
                            ),
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

    fn check(schema: ComponentSchema) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        ReservedMemberLint.check(&schema, &mut diagnostics);
        diagnostics
    }

    #[test]
    fn test_build_is_reserved_everywhere() {
        let diagnostics = check(
            ComponentSchema::new("Button")
                .with(Category::Color, ["build"])
                .with(Category::Shape, ["build"]),
        );
        assert_eq!(diagnostics.len(), 2);
    }

    #[test]
    fn test_colors_reserved_on_style_only() {
        let diagnostics = check(ComponentSchema::new("Button").with(Category::Shape, ["colors"]));
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(
            diagnostics[0].message,
            "shape property 'colors' collides with a generated member"
        );

        let diagnostics = check(ComponentSchema::new("Button").with(Category::Dimension, ["dimensions"]));
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_builder_fields_reserved_on_style() {
        let diagnostics =
            check(ComponentSchema::new("Button").with(Category::Typography, ["colorsBuilder"]));
        assert_eq!(diagnostics.len(), 1);
    }
}
