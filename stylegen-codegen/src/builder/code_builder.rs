use super::{CodeFragment, Indent, Renderable};

/// Accumulates indented source text.
///
/// Callers either push lines directly or hand over [`Renderable`] nodes,
/// whose fragments are written at the current depth.
///
/// ```
/// use stylegen_codegen::builder::{CodeBuilder, CodeFragment};
///
/// let mut builder = CodeBuilder::kotlin();
/// builder.push_line("package a").push_blank();
/// builder.emit(&vec![CodeFragment::block(
///     "interface ButtonStyle {",
///     vec![CodeFragment::line("val shape: Shape")],
/// )]);
///
/// assert_eq!(
///     builder.build(),
///     "package a\n\ninterface ButtonStyle {\n    val shape: Shape\n}\n"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct CodeBuilder {
    depth: usize,
    indent: Indent,
    out: String,
}

impl CodeBuilder {
    pub fn new(indent: Indent) -> Self {
        Self {
            depth: 0,
            indent,
            out: String::new(),
        }
    }

    pub fn kotlin() -> Self {
        Self::new(Indent::KOTLIN)
    }

    pub fn push_line(&mut self, s: &str) -> &mut Self {
        for _ in 0..self.depth {
            self.out.push_str(self.indent.unit());
        }
        self.out.push_str(s);
        self.out.push('\n');
        self
    }

    pub fn push_blank(&mut self) -> &mut Self {
        self.out.push('\n');
        self
    }

    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    pub fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(&s);
            }
            CodeFragment::Blank => {
                self.push_blank();
            }
            CodeFragment::Doc(text) => {
                self.push_line(&format!("/** {} */", text));
            }
            CodeFragment::Block { open, body, close } => {
                self.push_line(&open);
                self.nested(body);
                self.push_line(&close);
            }
            CodeFragment::Nested(body) => self.nested(body),
        }
    }

    fn nested(&mut self, body: Vec<CodeFragment>) {
        self.depth += 1;
        for fragment in body {
            self.apply_fragment(fragment);
        }
        self.depth -= 1;
    }

    pub fn as_str(&self) -> &str {
        &self.out
    }

    pub fn build(self) -> String {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(fragments: Vec<CodeFragment>) -> String {
        let mut builder = CodeBuilder::kotlin();
        builder.emit(&fragments);
        builder.build()
    }

    #[test]
    fn test_doc_and_block() {
        let code = render(vec![
            CodeFragment::doc("Style"),
            CodeFragment::block("interface Style {", vec![CodeFragment::line("val x: Int")]),
        ]);
        assert_eq!(code, "/** Style */\ninterface Style {\n    val x: Int\n}\n");
    }

    #[test]
    fn test_nested_blocks_indent_twice() {
        let code = render(vec![CodeFragment::block(
            "object Outer {",
            vec![CodeFragment::enclosed(
                "fun f() = g(",
                vec![CodeFragment::line("a = 1,")],
                ")",
            )],
        )]);
        assert_eq!(
            code,
            "object Outer {\n    fun f() = g(\n        a = 1,\n    )\n}\n"
        );
    }

    #[test]
    fn test_blank_has_no_indent() {
        let code = render(vec![CodeFragment::indent(vec![
            CodeFragment::line("a"),
            CodeFragment::blank(),
            CodeFragment::line("b"),
        ])]);
        assert_eq!(code, "    a\n\n    b\n");
    }

    #[test]
    fn test_tab_indent() {
        let mut builder = CodeBuilder::new(Indent::TAB);
        builder.apply_fragment(CodeFragment::block("a {", vec![CodeFragment::line("b")]));
        assert_eq!(builder.as_str(), "a {\n\tb\n}\n");
    }
}
