//! Semantic property values.
//!
//! These are the values a style property can hold, independent of the
//! language the style family is rendered into. Code generators map them to
//! literal expressions; the evaluator stores them in builder slots.

use std::fmt;

use serde::Serialize;

/// The type a property value must have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueType {
    Shape,
    ShadowAppearance,
    TextStyle,
    Float,
    /// A color that varies with the interaction state.
    InteractiveColor,
    /// A plain ARGB color, accepted by the color convenience setters.
    Color,
    Dp,
}

impl ValueType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Shape => "shape",
            Self::ShadowAppearance => "shadow appearance",
            Self::TextStyle => "text style",
            Self::Float => "float",
            Self::InteractiveColor => "interactive color",
            Self::Color => "color",
            Self::Dp => "dp",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outline of a component.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "radius", rename_all = "snake_case")]
pub enum Shape {
    Rectangle,
    Circle,
    /// Rounded rectangle with the given corner radius in dp.
    RoundedCorners(f32),
}

/// Shadow cast by a component.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "elevation", rename_all = "snake_case")]
pub enum Shadow {
    None,
    /// Elevation in dp.
    Elevation(f32),
}

/// Text style of a component.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "name", rename_all = "snake_case")]
pub enum TextStyle {
    /// The UI library's default text style.
    Default,
    /// A named style from the design system's typography.
    Named(String),
}

/// A plain ARGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Color(pub u32);

impl Color {
    pub const BLACK: Color = Color(0xFF00_0000);
    pub const WHITE: Color = Color(0xFFFF_FFFF);
    pub const TRANSPARENT: Color = Color(0x0000_0000);

    /// Promote a plain color to an interactive one that looks the same in
    /// every interaction state.
    pub fn as_interactive(self) -> InteractiveColor {
        InteractiveColor {
            default: self,
            pressed: self,
            disabled: self,
        }
    }

    pub fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::BLACK => f.write_str("black"),
            Self::WHITE => f.write_str("white"),
            Self::TRANSPARENT => f.write_str("transparent"),
            Color(argb) => write!(f, "#{:08X}", argb),
        }
    }
}

/// Interaction states a component can be in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InteractionState {
    Default,
    Pressed,
    Disabled,
}

/// A color parameterized by interaction state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct InteractiveColor {
    pub default: Color,
    pub pressed: Color,
    pub disabled: Color,
}

impl InteractiveColor {
    pub fn with_pressed(mut self, color: Color) -> Self {
        self.pressed = color;
        self
    }

    pub fn with_disabled(mut self, color: Color) -> Self {
        self.disabled = color;
        self
    }

    /// Color for the given interaction state.
    pub fn for_state(&self, state: InteractionState) -> Color {
        match state {
            InteractionState::Default => self.default,
            InteractionState::Pressed => self.pressed,
            InteractionState::Disabled => self.disabled,
        }
    }

    /// Whether every state shares one color.
    pub fn is_uniform(&self) -> bool {
        self.default == self.pressed && self.default == self.disabled
    }
}

impl From<Color> for InteractiveColor {
    fn from(color: Color) -> Self {
        color.as_interactive()
    }
}

/// A property value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Value {
    Shape(Shape),
    Shadow(Shadow),
    TextStyle(TextStyle),
    Float(f32),
    Color(InteractiveColor),
    Dp(f32),
}

impl Value {
    pub fn value_type(&self) -> ValueType {
        match self {
            Self::Shape(_) => ValueType::Shape,
            Self::Shadow(_) => ValueType::ShadowAppearance,
            Self::TextStyle(_) => ValueType::TextStyle,
            Self::Float(_) => ValueType::Float,
            Self::Color(_) => ValueType::InteractiveColor,
            Self::Dp(_) => ValueType::Dp,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Shape(Shape::Rectangle) => f.write_str("rectangle"),
            Self::Shape(Shape::Circle) => f.write_str("circle"),
            Self::Shape(Shape::RoundedCorners(r)) => write!(f, "rounded corners ({}dp)", r),
            Self::Shadow(Shadow::None) => f.write_str("no shadow"),
            Self::Shadow(Shadow::Elevation(e)) => write!(f, "elevation {}dp", e),
            Self::TextStyle(TextStyle::Default) => f.write_str("default text style"),
            Self::TextStyle(TextStyle::Named(name)) => write!(f, "text style {}", name),
            Self::Float(v) => write!(f, "{}", v),
            Self::Color(c) if c.is_uniform() => write!(f, "{} (interactive)", c.default),
            Self::Color(c) => write!(
                f,
                "{} / pressed {} / disabled {}",
                c.default, c.pressed, c.disabled
            ),
            Self::Dp(v) => write!(f, "{}dp", v),
        }
    }
}
