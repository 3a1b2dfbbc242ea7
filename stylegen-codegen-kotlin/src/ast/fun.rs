//! Kotlin function builder.

use stylegen_codegen::builder::{CodeFragment, Renderable};

/// A function parameter.
#[derive(Debug, Clone)]
pub struct Param {
    pub name: String,
    pub ty: String,
    pub default: Option<String>,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            default: None,
        }
    }

    pub fn default(mut self, expr: impl Into<String>) -> Self {
        self.default = Some(expr.into());
        self
    }

    fn render(&self) -> String {
        match &self.default {
            Some(default) => format!("{}: {} = {}", self.name, self.ty, default),
            None => format!("{}: {}", self.name, self.ty),
        }
    }
}

/// The body of a function.
#[derive(Debug, Clone)]
pub enum FunBody {
    /// Abstract member.
    None,
    /// `= expr` on the signature line.
    Expr(String),
    /// `= Callee(` followed by one named argument per line and `)`.
    NamedCall {
        callee: String,
        args: Vec<(String, String)>,
    },
}

/// Builder for Kotlin functions.
#[derive(Debug, Clone)]
pub struct Fun {
    name: String,
    doc: Option<String>,
    params: Vec<Param>,
    returns: String,
    is_override: bool,
    body: FunBody,
}

impl Fun {
    pub fn new(name: impl Into<String>, returns: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            params: Vec::new(),
            returns: returns.into(),
            is_override: false,
            body: FunBody::None,
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    pub fn overriding(mut self) -> Self {
        self.is_override = true;
        self
    }

    pub fn body(mut self, body: FunBody) -> Self {
        self.body = body;
        self
    }

    fn signature(&self) -> String {
        let params = self
            .params
            .iter()
            .map(Param::render)
            .collect::<Vec<_>>()
            .join(", ");
        let modifier = if self.is_override { "override " } else { "" };
        format!("{}fun {}({}): {}", modifier, self.name, params, self.returns)
    }
}

impl Renderable for Fun {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();
        if let Some(doc) = &self.doc {
            fragments.push(CodeFragment::doc(doc));
        }

        let signature = self.signature();
        match &self.body {
            FunBody::None => fragments.push(CodeFragment::line(signature)),
            FunBody::Expr(expr) => {
                fragments.push(CodeFragment::line(format!("{} = {}", signature, expr)))
            }
            FunBody::NamedCall { callee, args } => fragments.push(CodeFragment::enclosed(
                format!("{} = {}(", signature, callee),
                args.iter()
                    .map(|(name, value)| CodeFragment::line(format!("{} = {},", name, value)))
                    .collect(),
                ")",
            )),
        }

        fragments
    }
}
