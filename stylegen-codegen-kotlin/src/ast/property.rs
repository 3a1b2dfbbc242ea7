//! Kotlin property builder.

use stylegen_codegen::builder::{CodeFragment, Renderable};

/// A `val`/`var` declaration, in a body or a primary constructor.
#[derive(Debug, Clone)]
pub struct Property {
    name: String,
    ty: String,
    doc: Option<String>,
    is_private: bool,
    is_override: bool,
    mutable: bool,
    initializer: Option<String>,
}

impl Property {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            doc: None,
            is_private: false,
            is_override: false,
            mutable: false,
            initializer: None,
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

    pub fn overriding(mut self) -> Self {
        self.is_override = true;
        self
    }

    pub fn mutable(mut self) -> Self {
        self.mutable = true;
        self
    }

    pub fn initializer(mut self, expr: impl Into<String>) -> Self {
        self.initializer = Some(expr.into());
        self
    }

    /// The declaration without doc or trailing separator.
    pub fn signature(&self) -> String {
        let mut out = String::new();
        if self.is_private {
            out.push_str("private ");
        }
        if self.is_override {
            out.push_str("override ");
        }
        out.push_str(if self.mutable { "var " } else { "val " });
        out.push_str(&self.name);
        out.push_str(": ");
        out.push_str(&self.ty);
        if let Some(init) = &self.initializer {
            out.push_str(" = ");
            out.push_str(init);
        }
        out
    }
}

impl Renderable for Property {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();
        if let Some(doc) = &self.doc {
            fragments.push(CodeFragment::doc(doc));
        }
        fragments.push(CodeFragment::line(self.signature()));
        fragments
    }
}
