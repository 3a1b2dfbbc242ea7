//! Composition local declaration.

use stylegen_codegen::builder::{CodeFragment, Renderable};

/// A top-level `ProvidableCompositionLocal` with structural equality and a
/// lazily computed default.
#[derive(Debug, Clone)]
pub struct CompositionLocal {
    name: String,
    ty: String,
    doc: Option<String>,
    default: String,
}

impl CompositionLocal {
    pub fn new(name: impl Into<String>, ty: impl Into<String>, default: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            doc: None,
            default: default.into(),
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }
}

impl Renderable for CompositionLocal {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();
        if let Some(doc) = &self.doc {
            fragments.push(CodeFragment::doc(doc));
        }
        fragments.push(CodeFragment::line(format!(
            "val {}: ProvidableCompositionLocal<{}> =",
            self.name, self.ty
        )));
        fragments.push(CodeFragment::indent(vec![CodeFragment::line(format!(
            "compositionLocalOf(structuralEqualityPolicy()) {{ {} }}",
            self.default
        ))]));
        fragments
    }
}

#[cfg(test)]
mod tests {
    use stylegen_codegen::builder::CodeBuilder;

    use super::*;

    #[test]
    fn test_local() {
        let local = CompositionLocal::new(
            "LocalButtonStyle",
            "ButtonStyle",
            "ButtonStyle.builder().build()",
        );
        let mut builder = CodeBuilder::kotlin();
        builder.emit(&local);
        assert_eq!(
            builder.build(),
            "val LocalButtonStyle: ProvidableCompositionLocal<ButtonStyle> =\n    compositionLocalOf(structuralEqualityPolicy()) { ButtonStyle.builder().build() }\n"
        );
    }
}
