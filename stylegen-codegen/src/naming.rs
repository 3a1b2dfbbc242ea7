//! Names of the generated artifacts.

use serde::Serialize;

/// Name of the builder class nested in every default implementation.
pub const NESTED_BUILDER: &str = "Builder";

/// Terminal builder function.
pub const BUILD_FN: &str = "build";

/// Companion factory returning a fresh builder.
pub const FACTORY_FN: &str = "builder";

/// Style members that delegate to the nested colors/dimensions builders.
pub const COLORS_MEMBER: &str = "colors";
pub const DIMENSIONS_MEMBER: &str = "dimensions";

/// Every name derived from one component base name.
///
/// Pure and deterministic: the same base name always yields the same names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StyleNames {
    pub base: String,
    pub style: String,
    pub style_builder: String,
    pub default_style: String,
    pub colors: String,
    pub colors_builder: String,
    pub default_colors: String,
    pub dimensions: String,
    pub dimensions_builder: String,
    pub default_dimensions: String,
    pub accessor: String,
}

impl StyleNames {
    pub fn new(base: &str) -> Self {
        let style = format!("{}Style", base);
        let colors = format!("{}Colors", base);
        let dimensions = format!("{}Dimensions", base);
        Self {
            base: base.to_string(),
            style_builder: format!("{}Builder", style),
            default_style: format!("Default{}", style),
            colors_builder: format!("{}Builder", colors),
            default_colors: format!("Default{}", colors),
            dimensions_builder: format!("{}Builder", dimensions),
            default_dimensions: format!("Default{}", dimensions),
            accessor: format!("Local{}", style),
            style,
            colors,
            dimensions,
        }
    }

    /// Stem of the file the family is emitted into.
    pub fn file_stem(&self) -> &str {
        &self.style
    }

    /// The nine declaration names, in emission order.
    pub fn declarations(&self) -> [&str; 9] {
        [
            &self.style,
            &self.style_builder,
            &self.default_style,
            &self.colors,
            &self.colors_builder,
            &self.default_colors,
            &self.dimensions,
            &self.dimensions_builder,
            &self.default_dimensions,
        ]
    }
}

/// Field holding a delegated sub-builder (e.g., "colors" -> "colorsBuilder").
pub fn builder_field(member: &str) -> String {
    format!("{}Builder", member)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_names() {
        let names = StyleNames::new("Button");
        assert_eq!(
            names.declarations(),
            [
                "ButtonStyle",
                "ButtonStyleBuilder",
                "DefaultButtonStyle",
                "ButtonColors",
                "ButtonColorsBuilder",
                "DefaultButtonColors",
                "ButtonDimensions",
                "ButtonDimensionsBuilder",
                "DefaultButtonDimensions",
            ]
        );
        assert_eq!(names.accessor, "LocalButtonStyle");
        assert_eq!(names.file_stem(), "ButtonStyle");
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(StyleNames::new("IconButton"), StyleNames::new("IconButton"));
    }

    #[test]
    fn test_builder_field() {
        assert_eq!(builder_field("colors"), "colorsBuilder");
    }
}
