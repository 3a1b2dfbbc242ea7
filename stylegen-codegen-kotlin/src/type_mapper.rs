//! Kotlin type and value mapping.

use stylegen_codegen::builder::{TypeMapper, TypeRef};
use stylegen_core::{Color, InteractiveColor, Shadow, Shape, TextStyle, Value, ValueType};

pub(crate) const COMPOSE_RUNTIME: &str = "androidx.compose.runtime";
const COMPOSE_GRAPHICS: &str = "androidx.compose.ui.graphics";
const COMPOSE_SHAPES: &str = "androidx.compose.foundation.shape";
const COMPOSE_TEXT: &str = "androidx.compose.ui.text";
const COMPOSE_UNIT: &str = "androidx.compose.ui.unit";
pub(crate) const UIKIT_INTERACTIONS: &str = "com.sdds.compose.uikit.interactions";
const UIKIT_SHADOW: &str = "com.sdds.compose.uikit.shadow";
const UIKIT_STYLE: &str = "com.sdds.compose.uikit.style";

/// Extension promoting a plain `Color` to an `InteractiveColor`.
pub(crate) const AS_INTERACTIVE: &str = "asInteractive";

/// Kotlin type mapper.
///
/// Maps value types to the Compose and UI kit types they are declared with,
/// and values to the Kotlin expressions that construct them.
#[derive(Debug, Clone, Copy, Default)]
pub struct KotlinTypeMapper;

impl KotlinTypeMapper {
    /// `(package, symbol)` a value type must be imported from, if any.
    pub fn type_import(&self, ty: ValueType) -> Option<(&'static str, &'static str)> {
        match ty {
            ValueType::Shape => Some((COMPOSE_GRAPHICS, "Shape")),
            ValueType::ShadowAppearance => Some((UIKIT_SHADOW, "ShadowAppearance")),
            ValueType::TextStyle => Some((COMPOSE_TEXT, "TextStyle")),
            ValueType::Float => None,
            ValueType::InteractiveColor => Some((UIKIT_INTERACTIONS, "InteractiveColor")),
            ValueType::Color => Some((COMPOSE_GRAPHICS, "Color")),
            ValueType::Dp => Some((COMPOSE_UNIT, "Dp")),
        }
    }

    /// Every import the spelling of `ty` needs.
    pub fn type_ref_imports(&self, ty: &TypeRef) -> Vec<(&'static str, &'static str)> {
        let base = matches!(ty, TypeRef::StyleBase).then_some((UIKIT_STYLE, "Style"));
        ty.value_types()
            .into_iter()
            .filter_map(|value_type| self.type_import(value_type))
            .chain(base)
            .collect()
    }

    /// Imports needed by the expression [`render_value`](TypeMapper::render_value)
    /// produces for `value`.
    pub fn value_imports(&self, value: &Value) -> Vec<(&'static str, &'static str)> {
        match value {
            Value::Shape(Shape::Rectangle) => vec![(COMPOSE_GRAPHICS, "RectangleShape")],
            Value::Shape(Shape::Circle) => vec![(COMPOSE_SHAPES, "CircleShape")],
            Value::Shape(Shape::RoundedCorners(_)) => {
                vec![(COMPOSE_SHAPES, "RoundedCornerShape"), (COMPOSE_UNIT, "dp")]
            }
            Value::Shadow(Shadow::None) => vec![(UIKIT_SHADOW, "ShadowAppearance")],
            Value::Shadow(Shadow::Elevation(_)) => {
                vec![(UIKIT_SHADOW, "ShadowAppearance"), (COMPOSE_UNIT, "dp")]
            }
            Value::TextStyle(TextStyle::Default) => vec![(COMPOSE_TEXT, "TextStyle")],
            Value::TextStyle(TextStyle::Named(_)) | Value::Float(_) => Vec::new(),
            Value::Color(color) if color.is_uniform() => {
                vec![(COMPOSE_GRAPHICS, "Color"), (UIKIT_INTERACTIONS, AS_INTERACTIVE)]
            }
            Value::Color(_) => {
                vec![(COMPOSE_GRAPHICS, "Color"), (UIKIT_INTERACTIONS, "InteractiveColor")]
            }
            Value::Dp(_) => vec![(COMPOSE_UNIT, "dp")],
        }
    }

    fn render_color(&self, color: Color) -> String {
        match color {
            Color::BLACK => "Color.Black".to_string(),
            Color::WHITE => "Color.White".to_string(),
            Color::TRANSPARENT => "Color.Transparent".to_string(),
            Color(argb) => format!("Color(0x{:08X})", argb),
        }
    }

    fn render_interactive(&self, color: &InteractiveColor) -> String {
        if color.is_uniform() {
            return format!("{}.{}()", self.render_color(color.default), AS_INTERACTIVE);
        }
        format!(
            "InteractiveColor(default = {}, pressed = {}, disabled = {})",
            self.render_color(color.default),
            self.render_color(color.pressed),
            self.render_color(color.disabled)
        )
    }
}

impl TypeMapper for KotlinTypeMapper {
    fn map_value_type(&self, ty: ValueType) -> String {
        match ty {
            ValueType::Shape => "Shape",
            ValueType::ShadowAppearance => "ShadowAppearance",
            ValueType::TextStyle => "TextStyle",
            ValueType::Float => "Float",
            ValueType::InteractiveColor => "InteractiveColor",
            ValueType::Color => "Color",
            ValueType::Dp => "Dp",
        }
        .to_string()
    }

    fn map_optional(&self, inner: &str) -> String {
        // Function types need parentheses before the `?`.
        if inner.contains("->") {
            format!("({})?", inner)
        } else {
            format!("{}?", inner)
        }
    }

    fn map_lambda(&self, receiver: Option<&str>, returns: &str) -> String {
        match receiver {
            Some(receiver) => format!("{}.() -> {}", receiver, returns),
            None => format!("() -> {}", returns),
        }
    }

    fn map_style_base(&self) -> String {
        "Style".to_string()
    }

    fn map_any(&self) -> String {
        "Any".to_string()
    }

    fn map_unit(&self) -> String {
        "Unit".to_string()
    }

    fn render_value(&self, value: &Value) -> String {
        match value {
            Value::Shape(Shape::Rectangle) => "RectangleShape".to_string(),
            Value::Shape(Shape::Circle) => "CircleShape".to_string(),
            Value::Shape(Shape::RoundedCorners(radius)) => {
                format!("RoundedCornerShape({}.dp)", radius)
            }
            Value::Shadow(Shadow::None) => "ShadowAppearance()".to_string(),
            Value::Shadow(Shadow::Elevation(elevation)) => {
                format!("ShadowAppearance(elevation = {}.dp)", elevation)
            }
            Value::TextStyle(TextStyle::Default) => "TextStyle.Default".to_string(),
            Value::TextStyle(TextStyle::Named(name)) => name.clone(),
            Value::Float(v) => format!("{}f", v),
            Value::Color(color) => self.render_interactive(color),
            Value::Dp(v) => format!("{}.dp", v),
        }
    }
}
