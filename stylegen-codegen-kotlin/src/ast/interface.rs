//! Kotlin interface builder.

use stylegen_codegen::builder::{CodeFragment, Renderable};

use super::{Fun, Property};

/// Builder for Kotlin interfaces with an optional companion object.
#[derive(Debug, Clone)]
pub struct Interface {
    name: String,
    doc: Option<String>,
    annotations: Vec<String>,
    supertypes: Vec<String>,
    properties: Vec<Property>,
    functions: Vec<Fun>,
    companion: Option<Vec<Fun>>,
}

impl Interface {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            annotations: Vec::new(),
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

    /// Add an annotation, without the leading `@`.
    pub fn annotation(mut self, annotation: impl Into<String>) -> Self {
        self.annotations.push(annotation.into());
        self
    }

    pub fn supertype(mut self, supertype: impl Into<String>) -> Self {
        self.supertypes.push(supertype.into());
        self
    }

    pub fn property(mut self, property: Property) -> Self {
        self.properties.push(property);
        self
    }

    pub fn function(mut self, function: Fun) -> Self {
        self.functions.push(function);
        self
    }

    pub fn companion(mut self, functions: Vec<Fun>) -> Self {
        self.companion = Some(functions);
        self
    }
}

impl Renderable for Interface {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();

        if let Some(doc) = &self.doc {
            fragments.push(CodeFragment::doc(doc));
        }
        for annotation in &self.annotations {
            fragments.push(CodeFragment::line(format!("@{}", annotation)));
        }

        // Members are separated by blank lines.
        let mut groups: Vec<Vec<CodeFragment>> = Vec::new();
        groups.extend(self.properties.iter().map(Renderable::to_fragments));
        groups.extend(self.functions.iter().map(Renderable::to_fragments));
        if let Some(companion) = &self.companion {
            groups.push(vec![CodeFragment::block(
                "companion object {",
                CodeFragment::separated(companion.iter().map(Renderable::to_fragments)),
            )]);
        }

        let supertypes = if self.supertypes.is_empty() {
            String::new()
        } else {
            format!(" : {}", self.supertypes.join(", "))
        };
        fragments.push(CodeFragment::block(
            format!("interface {}{} {{", self.name, supertypes),
            CodeFragment::separated(groups),
        ));
        fragments
    }
}
