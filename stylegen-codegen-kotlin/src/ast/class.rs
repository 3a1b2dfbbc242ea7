//! Kotlin class builder.

use stylegen_codegen::builder::{CodeFragment, Renderable};

use super::{Fun, Property};

/// Class flavor, rendered as the declaration keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassFlavor {
    Class,
    DataClass,
    DataObject,
}

impl ClassFlavor {
    fn keyword(self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::DataClass => "data class",
            Self::DataObject => "data object",
        }
    }
}

/// Builder for Kotlin classes and objects.
#[derive(Debug, Clone)]
pub struct Class {
    name: String,
    doc: Option<String>,
    flavor: ClassFlavor,
    is_private: bool,
    constructor: Vec<Property>,
    supertypes: Vec<String>,
    properties: Vec<Property>,
    functions: Vec<Fun>,
    nested: Vec<Class>,
}

impl Class {
    pub fn new(name: impl Into<String>, flavor: ClassFlavor) -> Self {
        Self {
            name: name.into(),
            doc: None,
            flavor,
            is_private: false,
            constructor: Vec::new(),
            supertypes: Vec::new(),
            properties: Vec::new(),
            functions: Vec::new(),
            nested: Vec::new(),
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn private(mut self) -> Self {
        self.is_private = true;
        self
    }

    pub fn constructor_property(mut self, property: Property) -> Self {
        self.constructor.push(property);
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

    pub fn nested(mut self, class: Class) -> Self {
        self.nested.push(class);
        self
    }

    fn supertype_clause(&self) -> String {
        if self.supertypes.is_empty() {
            String::new()
        } else {
            format!(" : {}", self.supertypes.join(", "))
        }
    }

    fn body(&self) -> Vec<CodeFragment> {
        let fields: Vec<CodeFragment> = self
            .properties
            .iter()
            .flat_map(Renderable::to_fragments)
            .collect();

        let mut groups = vec![fields];
        groups.extend(self.functions.iter().map(Renderable::to_fragments));
        groups.extend(self.nested.iter().map(Renderable::to_fragments));
        CodeFragment::separated(groups)
    }
}

impl Renderable for Class {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();
        if let Some(doc) = &self.doc {
            fragments.push(CodeFragment::doc(doc));
        }

        let visibility = if self.is_private { "private " } else { "" };
        let prefix = format!("{}{} {}", visibility, self.flavor.keyword(), self.name);
        let body = self.body();

        if self.constructor.is_empty() {
            let header = format!("{}{}", prefix, self.supertype_clause());
            if body.is_empty() {
                fragments.push(CodeFragment::line(header));
            } else {
                fragments.push(CodeFragment::block(format!("{} {{", header), body));
            }
            return fragments;
        }

        // Primary constructor, one property per line.
        fragments.push(CodeFragment::line(format!("{}(", prefix)));
        fragments.push(CodeFragment::indent(
            self.constructor
                .iter()
                .map(|p| CodeFragment::line(format!("{},", p.signature())))
                .collect(),
        ));
        let close = format!("){}", self.supertype_clause());
        if body.is_empty() {
            fragments.push(CodeFragment::line(close));
        } else {
            fragments.push(CodeFragment::block(format!("{} {{", close), body));
        }
        fragments
    }
}

#[cfg(test)]
mod tests {
    use stylegen_codegen::builder::CodeBuilder;

    use super::*;
    use crate::ast::FunBody;

    fn render(class: &Class) -> String {
        let mut builder = CodeBuilder::kotlin();
        builder.emit(class);
        builder.build()
    }

    #[test]
    fn test_data_class_with_nested_builder() {
        let builder = Class::new("Builder", ClassFlavor::Class)
            .supertype("ButtonDimensionsBuilder")
            .property(
                Property::new("padding", "Dp?")
                    .private()
                    .mutable()
                    .initializer("null"),
            )
            .function(
                Fun::new("build", "ButtonDimensions")
                    .overriding()
                    .body(FunBody::NamedCall {
                        callee: "DefaultButtonDimensions".into(),
                        args: vec![("padding".into(), "padding ?: 8.dp".into())],
                    }),
            );
        let class = Class::new("DefaultButtonDimensions", ClassFlavor::DataClass)
            .private()
            .constructor_property(Property::new("padding", "Dp").overriding())
            .supertype("ButtonDimensions")
            .nested(builder);

        assert_eq!(
            render(&class),
            "private data class DefaultButtonDimensions(
    override val padding: Dp,
) : ButtonDimensions {
    class Builder : ButtonDimensionsBuilder {
        private var padding: Dp? = null

        override fun build(): ButtonDimensions = DefaultButtonDimensions(
            padding = padding ?: 8.dp,
        )
    }
}
"
        );
    }

    #[test]
    fn test_data_object() {
        let class = Class::new("DefaultDividerColors", ClassFlavor::DataObject)
            .private()
            .supertype("DividerColors")
            .nested(
                Class::new("Builder", ClassFlavor::Class)
                    .supertype("DividerColorsBuilder")
                    .function(
                        Fun::new("build", "DividerColors")
                            .overriding()
                            .body(FunBody::Expr("DefaultDividerColors".into())),
                    ),
            );

        assert_eq!(
            render(&class),
            "private data object DefaultDividerColors : DividerColors {
    class Builder : DividerColorsBuilder {
        override fun build(): DividerColors = DefaultDividerColors
    }
}
"
        );
    }

    #[test]
    fn test_empty_class() {
        assert_eq!(render(&Class::new("Marker", ClassFlavor::Class)), "class Marker\n");
    }
}
