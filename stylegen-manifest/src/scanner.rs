//! Declaration scanning over manifest declarations.

use stylegen_core::{
    Category, ComponentSchema, DeclarationScanner, ScanNote, ScanOutcome, derive_base_name,
};

use crate::{Declaration, Manifest};

/// Finds the properties holder among the declarations of a manifest.
///
/// The holder is the first declaration listing the configured owner among
/// its supertypes. Each parameter is assigned the first category whose
/// marker its type contains, in [`Category::CLASSIFICATION_ORDER`].
/// Parameters matching no marker are skipped with a note.
#[derive(Debug, Clone, Copy)]
pub struct TomlScanner<'a> {
    manifest: &'a Manifest,
}

impl<'a> TomlScanner<'a> {
    pub fn new(manifest: &'a Manifest) -> Self {
        Self { manifest }
    }

    /// The declaration that would be scanned, if any.
    pub fn holder(&self) -> Option<&'a Declaration> {
        let owner = self.manifest.scanner.owner.trim();
        self.manifest.declarations.iter().find(|d| d.extends(owner))
    }

    fn classify(&self, declaration: &Declaration) -> (ComponentSchema, Vec<ScanNote>) {
        let mut schema = ComponentSchema::new("");
        let mut notes = Vec::new();

        for param in &declaration.params {
            let location = format!("{}.param.{}", declaration.name, param.name);
            let matches = Category::matching(&param.ty);

            match matches.as_slice() {
                [] => notes.push(
                    ScanNote::new(format!(
                        "parameter '{}' has type '{}' which matches no category, skipped",
                        param.name, param.ty
                    ))
                    .at(location),
                ),
                [category] => schema.properties.get_mut(*category).push(param.name.clone()),
                [first, rest @ ..] => {
                    let others: Vec<&str> = rest.iter().map(|c| c.as_str()).collect();
                    notes.push(
                        ScanNote::new(format!(
                            "type '{}' of parameter '{}' matches several categories, classified as {} over {}",
                            param.ty,
                            param.name,
                            first.as_str(),
                            others.join(", ")
                        ))
                        .at(location),
                    );
                    schema.properties.get_mut(*first).push(param.name.clone());
                }
            }
        }

        (schema, notes)
    }
}

impl DeclarationScanner for TomlScanner<'_> {
    fn scan(&self) -> ScanOutcome {
        let Some(declaration) = self.holder() else {
            return ScanOutcome::NoQualifyingDeclaration;
        };

        let suffix = &self.manifest.scanner.suffix;
        let Some(base) = derive_base_name(&declaration.name, suffix) else {
            return ScanOutcome::UnderivableName {
                declaration: declaration.name.clone(),
                suffix: suffix.clone(),
            };
        };

        let (mut schema, notes) = self.classify(declaration);
        schema.name = base.to_string();
        ScanOutcome::Found { schema, notes }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(src: &str) -> ScanOutcome {
        let manifest: Manifest = src.parse().unwrap();
        TomlScanner::new(&manifest).scan()
    }

    const BUTTON: &str = r#"
[[declaration]]
name = "ButtonColors"
supertypes = ["Colors"]

[[declaration]]
name = "ButtonProperties"
supertypes = ["Base", "PropertyOwner"]

[[declaration.param]]
name = "shape"
type = "ShapeProperty"

[[declaration.param]]
name = "background"
type = "ColorProperty"

[[declaration.param]]
name = "padding"
type = "DimensionProperty"

[[declaration.param]]
name = "label"
type = "TypographyProperty"

[[declaration.param]]
name = "alpha"
type = "FloatValueProperty"

[[declaration.param]]
name = "shadow"
type = "ShadowProperty"
"#;

    #[test]
    fn test_scan_button() {
        let ScanOutcome::Found { schema, notes } = scan(BUTTON) else {
            panic!("expected a schema");
        };

        assert_eq!(schema.name, "Button");
        assert_eq!(schema.properties.shape_props, vec!["shape"]);
        assert_eq!(schema.properties.color_props, vec!["background"]);
        assert_eq!(schema.properties.dimension_props, vec!["padding"]);
        assert_eq!(schema.properties.typography_props, vec!["label"]);
        assert_eq!(schema.properties.float_value_props, vec!["alpha"]);
        assert_eq!(schema.properties.shadow_props, vec!["shadow"]);
        assert!(notes.is_empty());
    }

    #[test]
    fn test_no_owner() {
        let src = r#"
[[declaration]]
name = "ButtonProperties"
supertypes = ["Something"]
"#;
        assert_eq!(scan(src), ScanOutcome::NoQualifyingDeclaration);
        assert_eq!(scan(""), ScanOutcome::NoQualifyingDeclaration);
    }

    #[test]
    fn test_underivable_name() {
        let src = r#"
[[declaration]]
name = "ButtonProps"
supertypes = ["PropertyOwner"]
"#;
        assert_eq!(
            scan(src),
            ScanOutcome::UnderivableName {
                declaration: "ButtonProps".to_string(),
                suffix: "Properties".to_string(),
            }
        );
    }

    #[test]
    fn test_custom_owner_and_suffix() {
        let src = r#"
[scanner]
owner = "StyleHolder"
suffix = "Spec"

[[declaration]]
name = "ChipSpec"
supertypes = ["StyleHolder"]

[[declaration.param]]
name = "content"
type = "ColorProperty"
"#;
        let ScanOutcome::Found { schema, .. } = scan(src) else {
            panic!("expected a schema");
        };
        assert_eq!(schema.name, "Chip");
        assert_eq!(schema.properties.color_props, vec!["content"]);
    }

    #[test]
    fn test_unclassified_param_is_noted() {
        let src = r#"
[[declaration]]
name = "IconProperties"
supertypes = ["PropertyOwner"]

[[declaration.param]]
name = "icon"
type = "Painter"
"#;
        let ScanOutcome::Found { schema, notes } = scan(src) else {
            panic!("expected a schema");
        };
        assert!(schema.properties.is_empty());
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].location.as_deref(), Some("IconProperties.param.icon"));
        assert!(notes[0].message.contains("matches no category"));
    }

    #[test]
    fn test_priority_classification_is_noted() {
        let src = r#"
[[declaration]]
name = "CardProperties"
supertypes = ["PropertyOwner"]

[[declaration.param]]
name = "shadowColor"
type = "ShadowColorProperty"
"#;
        let ScanOutcome::Found { schema, notes } = scan(src) else {
            panic!("expected a schema");
        };
        assert_eq!(schema.properties.color_props, vec!["shadowColor"]);
        assert!(schema.properties.shadow_props.is_empty());
        assert_eq!(notes.len(), 1);
        assert!(notes[0].message.contains("classified as color over shadow"));
    }

    #[test]
    fn test_first_holder_wins() {
        let src = r#"
[[declaration]]
name = "FirstProperties"
supertypes = ["PropertyOwner"]

[[declaration]]
name = "SecondProperties"
supertypes = ["PropertyOwner"]
"#;
        let manifest: Manifest = src.parse().unwrap();
        let scanner = TomlScanner::new(&manifest);
        assert_eq!(scanner.holder().map(|d| d.name.as_str()), Some("FirstProperties"));
    }
}
