//! Language-agnostic function definitions.
//!
//! Function bodies are not free-form statements: every generated member has
//! one of a handful of shapes, and [`Body`] names them. Renderers spell each
//! shape in their own syntax; the evaluator interprets them.

use serde::Serialize;
use stylegen_core::{Category, Value};

use super::types::TypeRef;

/// A declarative description of a function or method.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FunSpec {
    pub name: String,
    pub doc: Option<String>,
    pub params: Vec<ParamSpec>,
    pub returns: TypeRef,
    /// Whether the function implements a member of a supertype.
    pub is_override: bool,
    pub body: Body,
}

impl FunSpec {
    /// Create an abstract function.
    pub fn new(name: impl Into<String>, returns: TypeRef) -> Self {
        Self {
            name: name.into(),
            doc: None,
            params: Vec::new(),
            returns,
            is_override: false,
            body: Body::Abstract,
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn param(mut self, param: ParamSpec) -> Self {
        self.params.push(param);
        self
    }

    pub fn overriding(mut self) -> Self {
        self.is_override = true;
        self
    }

    pub fn body(mut self, body: Body) -> Self {
        self.body = body;
        self
    }

    pub fn is_abstract(&self) -> bool {
        matches!(self.body, Body::Abstract)
    }

    /// The same function as an override without documentation, as it
    /// appears in an implementing class.
    pub fn implementation(&self, body: Body) -> Self {
        Self {
            name: self.name.clone(),
            doc: None,
            params: self.params.clone(),
            returns: self.returns.clone(),
            is_override: true,
            body,
        }
    }
}

/// A function parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParamSpec {
    pub name: String,
    pub ty: TypeRef,
    /// Whether the parameter defaults to null when omitted.
    pub defaults_to_null: bool,
}

impl ParamSpec {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            defaults_to_null: false,
        }
    }

    /// Make the parameter nullable with a `null` default.
    pub fn nullable_default(mut self) -> Self {
        self.ty = TypeRef::optional(self.ty);
        self.defaults_to_null = true;
        self
    }
}

/// Conversion applied by a convenience overload before delegating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Conversion {
    /// Promote a plain color to an interactive color.
    Interactive,
}

/// One argument of a record construction in a builder's `build()`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ConstructArg {
    /// Use the builder field if set, else the category default.
    Resolve {
        property: String,
        field: String,
        category: Category,
        default: Value,
    },
    /// Build the held sub-builder.
    BuildDelegate {
        property: String,
        builder_field: String,
    },
}

impl ConstructArg {
    pub fn property(&self) -> &str {
        match self {
            Self::Resolve { property, .. } | Self::BuildDelegate { property, .. } => property,
        }
    }
}

/// The shape of a function body.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Body {
    /// No body; declared in an interface.
    Abstract,
    /// Store the parameter in the field and return the receiver.
    AssignField { field: String, param: String },
    /// Call `target` with the converted parameter and return its result.
    Convert {
        target: String,
        param: String,
        conversion: Conversion,
    },
    /// Run the callback against the held sub-builder and return the receiver.
    Configure {
        builder_field: String,
        callback: String,
    },
    /// Create an instance of a (possibly nested) class with no arguments.
    Instantiate { path: Vec<String> },
    /// Construct the record, one argument per property.
    Construct {
        class: String,
        args: Vec<ConstructArg>,
    },
    /// Return a singleton object.
    Singleton { object: String },
}
