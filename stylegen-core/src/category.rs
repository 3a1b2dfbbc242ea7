//! Property categories and the default value policy.

use std::fmt;

use serde::Serialize;

use crate::value::{Color, Shadow, Shape, TextStyle, Value, ValueType};

/// The category a style property belongs to.
///
/// The category decides the property's value type, the value a builder
/// falls back to when the property is never set, and whether the property
/// lives on the style itself or on one of its nested colors/dimensions
/// builders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Shape,
    Shadow,
    Typography,
    FloatValue,
    Color,
    Dimension,
}

impl Category {
    /// Every category, in schema field order.
    pub const ALL: [Category; 6] = [
        Category::Shape,
        Category::Shadow,
        Category::Typography,
        Category::FloatValue,
        Category::Color,
        Category::Dimension,
    ];

    /// Order in which type markers are tried when classifying a parameter.
    /// The first match wins.
    pub const CLASSIFICATION_ORDER: [Category; 6] = [
        Category::Color,
        Category::Dimension,
        Category::Typography,
        Category::FloatValue,
        Category::Shape,
        Category::Shadow,
    ];

    /// Substring that marks a parameter type as belonging to this category.
    pub fn marker(self) -> &'static str {
        match self {
            Self::Shape => "Shape",
            Self::Shadow => "Shadow",
            Self::Typography => "Typography",
            Self::FloatValue => "FloatValue",
            Self::Color => "Color",
            Self::Dimension => "Dimension",
        }
    }

    /// Every category whose marker occurs in `type_text`, in classification order.
    pub fn matching(type_text: &str) -> Vec<Category> {
        Self::CLASSIFICATION_ORDER
            .into_iter()
            .filter(|category| type_text.contains(category.marker()))
            .collect()
    }

    pub fn value_type(self) -> ValueType {
        match self {
            Self::Shape => ValueType::Shape,
            Self::Shadow => ValueType::ShadowAppearance,
            Self::Typography => ValueType::TextStyle,
            Self::FloatValue => ValueType::Float,
            Self::Color => ValueType::InteractiveColor,
            Self::Dimension => ValueType::Dp,
        }
    }

    /// Value a builder resolves an unset property of this category to.
    pub fn default_value(self) -> Value {
        match self {
            Self::Shape => Value::Shape(Shape::Rectangle),
            Self::Shadow => Value::Shadow(Shadow::None),
            Self::Typography => Value::TextStyle(TextStyle::Default),
            Self::FloatValue => Value::Float(0.5),
            Self::Color => Value::Color(Color::BLACK.as_interactive()),
            Self::Dimension => Value::Dp(8.0),
        }
    }

    /// Whether properties of this category are set through a nested builder
    /// rather than a flat field on the style builder.
    pub fn is_delegated(self) -> bool {
        matches!(self, Self::Color | Self::Dimension)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Shape => "shape",
            Self::Shadow => "shadow",
            Self::Typography => "typography",
            Self::FloatValue => "float_value",
            Self::Color => "color",
            Self::Dimension => "dimension",
        }
    }

    /// Short human description, used for generated documentation.
    pub fn description(self) -> &'static str {
        match self {
            Self::Shape => "Shape",
            Self::Shadow => "Shadow",
            Self::Typography => "Text style",
            Self::FloatValue => "Value",
            Self::Color => "Color",
            Self::Dimension => "Dimension",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
