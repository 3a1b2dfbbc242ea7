//! Language-agnostic type system for code generation.
//!
//! Types are represented semantically and rendered per target language via
//! the [`TypeMapper`] trait.

use serde::Serialize;
use stylegen_core::{Value, ValueType};

/// A language-agnostic type reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeRef {
    /// The type of a property value (shape, color, ...).
    Value(ValueType),
    /// A generated declaration, e.g. `ButtonColors`.
    Named(String),
    /// A nullable type.
    Optional(Box<TypeRef>),
    /// A function type, optionally with a receiver (`B.() -> Unit`).
    Lambda {
        receiver: Option<Box<TypeRef>>,
        returns: Box<TypeRef>,
    },
    /// The UI kit's common style contract.
    StyleBase,
    /// The top type.
    Any,
    /// Unit/void type.
    Unit,
}

impl TypeRef {
    pub fn value(ty: ValueType) -> Self {
        Self::Value(ty)
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    pub fn optional(inner: TypeRef) -> Self {
        Self::Optional(Box::new(inner))
    }

    /// A configuration callback run against `receiver`.
    pub fn configure(receiver: TypeRef) -> Self {
        Self::Lambda {
            receiver: Some(Box::new(receiver)),
            returns: Box::new(Self::Unit),
        }
    }

    pub fn is_optional(&self) -> bool {
        matches!(self, Self::Optional(_))
    }

    /// Value types referenced anywhere inside this type.
    pub fn value_types(&self) -> Vec<ValueType> {
        match self {
            Self::Value(ty) => vec![*ty],
            Self::Optional(inner) => inner.value_types(),
            Self::Lambda { receiver, returns } => receiver
                .iter()
                .flat_map(|r| r.value_types())
                .chain(returns.value_types())
                .collect(),
            Self::Named(_) | Self::StyleBase | Self::Any | Self::Unit => Vec::new(),
        }
    }
}

/// Visibility/access level for declarations and members.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    /// Visible everywhere (Kotlin: no modifier).
    #[default]
    Public,
    /// Visible in the declaring file or class only.
    Private,
}

impl Visibility {
    pub fn is_private(&self) -> bool {
        matches!(self, Self::Private)
    }
}

/// Trait for mapping types and values to language-specific representations.
///
/// Implement this trait to support a new target language.
pub trait TypeMapper {
    /// Map a value type to the target language.
    fn map_value_type(&self, ty: ValueType) -> String;

    /// Map an optional type (e.g., `T?`).
    fn map_optional(&self, inner: &str) -> String;

    /// Map a function type.
    fn map_lambda(&self, receiver: Option<&str>, returns: &str) -> String;

    /// Map the base type every generated style implements.
    fn map_style_base(&self) -> String;

    /// Map the top type.
    fn map_any(&self) -> String;

    /// Map the unit type.
    fn map_unit(&self) -> String;

    /// Render a literal expression for a value.
    fn render_value(&self, value: &Value) -> String;

    /// Render a complete TypeRef to a string.
    fn render_type(&self, ty: &TypeRef) -> String {
        match ty {
            TypeRef::Value(v) => self.map_value_type(*v),
            TypeRef::Named(name) => name.clone(),
            TypeRef::Optional(inner) => {
                let inner_str = self.render_type(inner);
                self.map_optional(&inner_str)
            }
            TypeRef::Lambda { receiver, returns } => {
                let receiver_str = receiver.as_ref().map(|r| self.render_type(r));
                let returns_str = self.render_type(returns);
                self.map_lambda(receiver_str.as_deref(), &returns_str)
            }
            TypeRef::StyleBase => self.map_style_base(),
            TypeRef::Any => self.map_any(),
            TypeRef::Unit => self.map_unit(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct PlainMapper;

    impl TypeMapper for PlainMapper {
        fn map_value_type(&self, ty: ValueType) -> String {
            ty.as_str().replace(' ', "_")
        }
        fn map_optional(&self, inner: &str) -> String {
            format!("Option<{}>", inner)
        }
        fn map_lambda(&self, receiver: Option<&str>, returns: &str) -> String {
            match receiver {
                Some(r) => format!("fn(&mut {}) -> {}", r, returns),
                None => format!("fn() -> {}", returns),
            }
        }
        fn map_style_base(&self) -> String {
            "dyn Style".into()
        }
        fn map_any(&self) -> String {
            "any".into()
        }
        fn map_unit(&self) -> String {
            "()".into()
        }
        fn render_value(&self, value: &Value) -> String {
            value.to_string()
        }
    }

    #[test]
    fn test_render_nested_types() {
        let mapper = PlainMapper;
        assert_eq!(
            mapper.render_type(&TypeRef::optional(TypeRef::value(ValueType::Dp))),
            "Option<dp>"
        );
        assert_eq!(
            mapper.render_type(&TypeRef::configure(TypeRef::named("ButtonColorsBuilder"))),
            "fn(&mut ButtonColorsBuilder) -> ()"
        );
    }

    #[test]
    fn test_value_types() {
        let ty = TypeRef::optional(TypeRef::value(ValueType::Shape));
        assert!(ty.is_optional());
        assert_eq!(ty.value_types(), vec![ValueType::Shape]);
        assert!(TypeRef::named("ButtonColors").value_types().is_empty());
    }
}
