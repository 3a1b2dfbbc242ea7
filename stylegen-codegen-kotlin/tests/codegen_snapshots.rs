//! Snapshot tests for Kotlin code generation.
//!
//! These tests verify that the generated Kotlin unit matches expected output.
//! Run `cargo insta review` to update snapshots when making intentional changes.

use stylegen_codegen::generator::assemble;
use stylegen_codegen_kotlin::{KotlinGenerator, LanguageCodegen};
use stylegen_core::{Category, ComponentSchema};

const PACKAGE: &str = "com.sdds.compose.uikit";

fn render(schema: &ComponentSchema) -> String {
    KotlinGenerator.render(&assemble(schema), PACKAGE)
}

#[test]
fn test_button_style() {
    let code = render(
        &ComponentSchema::new("Button")
            .with(Category::Shape, ["shape"])
            .with(Category::Color, ["background"])
            .with(Category::Dimension, ["padding"]),
    );
    insta::assert_snapshot!("button_style", code);
}

#[test]
fn test_empty_schema() {
    let code = render(&ComponentSchema::new("Divider"));
    insta::assert_snapshot!("divider_style", code);
}

#[test]
fn test_every_flat_category() {
    let code = render(
        &ComponentSchema::new("Card")
            .with(Category::Typography, ["titleStyle"])
            .with(Category::Shape, ["shape"])
            .with(Category::Shadow, ["shadow"])
            .with(Category::FloatValue, ["disabledAlpha"]),
    );

    // Style properties follow typography, shape, shadow, float order.
    let order: Vec<usize> = [
        "val titleStyle: TextStyle",
        "val shape: Shape",
        "val shadow: ShadowAppearance",
        "val disabledAlpha: Float",
        "val colors: CardColors",
        "val dimensions: CardDimensions",
    ]
    .iter()
    .map(|needle| code.find(needle).unwrap())
    .collect();
    assert!(order.windows(2).all(|w| w[0] < w[1]));

    assert!(code.contains("titleStyle = titleStyle ?: TextStyle.Default,"));
    assert!(code.contains("shape = shape ?: RectangleShape,"));
    assert!(code.contains("shadow = shadow ?: ShadowAppearance(),"));
    assert!(code.contains("disabledAlpha = disabledAlpha ?: 0.5f,"));
    // Colors are empty, so no plain-color overload and no color imports.
    assert!(!code.contains("asInteractive"));
    assert!(!code.contains("import androidx.compose.ui.graphics.Color\n"));
}

#[test]
fn test_one_setter_per_property_plus_color_overloads() {
    let code = render(
        &ComponentSchema::new("Chip")
            .with(Category::Color, ["background", "content"])
            .with(Category::Dimension, ["height", "paddingStart"]),
    );

    assert_eq!(code.matches("fun background(").count(), 3);
    assert_eq!(code.matches("fun content(").count(), 3);
    assert_eq!(code.matches("fun height(").count(), 2);
    assert_eq!(code.matches("fun paddingStart(").count(), 2);
    assert_eq!(code.matches("from a plain color").count(), 2);
}
