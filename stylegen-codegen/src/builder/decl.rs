//! Language-agnostic declaration definitions.
//!
//! This module provides declarative specifications for interfaces, classes
//! and their members that can be rendered to any target language.

use serde::Serialize;

use super::{
    function::FunSpec,
    types::{TypeRef, Visibility},
};

/// Initial value of a stored property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Initializer {
    Null,
    /// A fresh builder obtained from the contract's factory.
    NewBuilder { contract: String },
}

/// A property of an interface or class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropertySpec {
    pub name: String,
    pub ty: TypeRef,
    pub doc: Option<String>,
    pub visibility: Visibility,
    pub mutable: bool,
    pub is_override: bool,
    pub initializer: Option<Initializer>,
}

impl PropertySpec {
    /// Create a public read-only property.
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            doc: None,
            visibility: Visibility::Public,
            mutable: false,
            is_override: false,
            initializer: None,
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn private(mut self) -> Self {
        self.visibility = Visibility::Private;
        self
    }

    pub fn mutable(mut self) -> Self {
        self.mutable = true;
        self
    }

    pub fn overriding(mut self) -> Self {
        self.is_override = true;
        self
    }

    pub fn initializer(mut self, init: Initializer) -> Self {
        self.initializer = Some(init);
        self
    }
}

/// Companion (static) members of an interface.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CompanionSpec {
    pub functions: Vec<FunSpec>,
}

/// An interface declaration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InterfaceSpec {
    pub name: String,
    pub doc: Option<String>,
    /// Marked as deeply immutable for the UI runtime.
    pub immutable: bool,
    pub supertypes: Vec<TypeRef>,
    pub properties: Vec<PropertySpec>,
    pub functions: Vec<FunSpec>,
    pub companion: Option<CompanionSpec>,
}

impl InterfaceSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            immutable: false,
            supertypes: Vec::new(),
            properties: Vec::new(),
            functions: Vec::new(),
            companion: None,
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn immutable(mut self) -> Self {
        self.immutable = true;
        self
    }

    pub fn extends(mut self, supertype: TypeRef) -> Self {
        self.supertypes.push(supertype);
        self
    }

    pub fn property(mut self, property: PropertySpec) -> Self {
        self.properties.push(property);
        self
    }

    pub fn function(mut self, function: FunSpec) -> Self {
        self.functions.push(function);
        self
    }

    pub fn functions(mut self, functions: impl IntoIterator<Item = FunSpec>) -> Self {
        self.functions.extend(functions);
        self
    }

    pub fn companion(mut self, companion: CompanionSpec) -> Self {
        self.companion = Some(companion);
        self
    }

    /// Find a function by name. Overloads return the first declaration.
    pub fn find_function(&self, name: &str) -> Option<&FunSpec> {
        self.functions.iter().find(|f| f.name == name)
    }
}

/// Kind of a class declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassKind {
    /// A plain class.
    Plain,
    /// A value record with structural equality.
    Data,
    /// A singleton record with structural equality.
    DataObject,
}

/// A class declaration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassSpec {
    pub name: String,
    pub doc: Option<String>,
    pub visibility: Visibility,
    pub kind: ClassKind,
    pub supertypes: Vec<String>,
    /// Properties declared in the primary constructor.
    pub constructor: Vec<PropertySpec>,
    /// Properties declared in the body.
    pub properties: Vec<PropertySpec>,
    pub functions: Vec<FunSpec>,
    pub nested: Vec<ClassSpec>,
}

impl ClassSpec {
    pub fn new(name: impl Into<String>, kind: ClassKind) -> Self {
        Self {
            name: name.into(),
            doc: None,
            visibility: Visibility::Public,
            kind,
            supertypes: Vec::new(),
            constructor: Vec::new(),
            properties: Vec::new(),
            functions: Vec::new(),
            nested: Vec::new(),
        }
    }

    pub fn private(mut self) -> Self {
        self.visibility = Visibility::Private;
        self
    }

    pub fn implements(mut self, supertype: impl Into<String>) -> Self {
        self.supertypes.push(supertype.into());
        self
    }

    pub fn constructor_property(mut self, property: PropertySpec) -> Self {
        self.constructor.push(property);
        self
    }

    pub fn property(mut self, property: PropertySpec) -> Self {
        self.properties.push(property);
        self
    }

    pub fn function(mut self, function: FunSpec) -> Self {
        self.functions.push(function);
        self
    }

    pub fn nested(mut self, class: ClassSpec) -> Self {
        self.nested.push(class);
        self
    }

    pub fn find_nested(&self, name: &str) -> Option<&ClassSpec> {
        self.nested.iter().find(|c| c.name == name)
    }

    pub fn find_function(&self, name: &str) -> Option<&FunSpec> {
        self.functions.iter().find(|f| f.name == name)
    }
}

/// A top-level, lazily computed, overridable default instance of a style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccessorSpec {
    pub name: String,
    pub doc: Option<String>,
    /// Type of the provided value.
    pub style: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::Body;

    #[test]
    fn test_property_builder() {
        let prop = PropertySpec::new("shape", TypeRef::named("Shape"))
            .private()
            .mutable()
            .initializer(Initializer::Null);
        assert!(prop.visibility.is_private());
        assert!(prop.mutable);
        assert_eq!(prop.initializer, Some(Initializer::Null));
    }

    #[test]
    fn test_find_members() {
        let builder = ClassSpec::new("Builder", ClassKind::Plain).function(
            FunSpec::new("build", TypeRef::named("ButtonStyle")).body(Body::Singleton {
                object: "DefaultButtonStyle".into(),
            }),
        );
        let class = ClassSpec::new("DefaultButtonStyle", ClassKind::DataObject)
            .private()
            .implements("ButtonStyle")
            .nested(builder);

        assert!(class.find_nested("Builder").is_some());
        assert!(class.find_nested("Other").is_none());
        assert!(
            class
                .find_nested("Builder")
                .and_then(|b| b.find_function("build"))
                .is_some()
        );
    }
}
