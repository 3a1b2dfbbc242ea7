use stylegen_codegen::builder::{CodeBuilder, CodeFragment, Indent, Renderable};

/// One `.kt` file: an optional leading comment, the package line, imports
/// and top-level declarations. Sections are separated by a single blank
/// line and empty sections leave no trace.
#[derive(Debug, Default)]
pub struct KotlinFile {
    header: Vec<CodeFragment>,
    package: String,
    imports: Vec<String>,
    declarations: Vec<Vec<CodeFragment>>,
}

impl KotlinFile {
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            ..Self::default()
        }
    }

    /// Comment lines written above the package declaration, verbatim.
    pub fn header(mut self, comment: &str) -> Self {
        self.header = comment.lines().map(CodeFragment::line).collect();
        self
    }

    /// Complete `import ...` lines, already sorted.
    pub fn imports(mut self, imports: impl IntoIterator<Item = String>) -> Self {
        self.imports.extend(imports);
        self
    }

    pub fn declaration(mut self, node: impl Renderable) -> Self {
        self.declarations.push(node.to_fragments());
        self
    }

    pub fn declarations<R: Renderable>(self, nodes: impl IntoIterator<Item = R>) -> Self {
        nodes.into_iter().fold(self, Self::declaration)
    }

    pub fn render(&self) -> String {
        let package = if self.package.is_empty() {
            Vec::new()
        } else {
            vec![CodeFragment::line(format!("package {}", self.package))]
        };
        let imports = self.imports.iter().map(CodeFragment::line).collect();

        let sections = [self.header.clone(), package, imports]
            .into_iter()
            .chain(self.declarations.iter().cloned());

        let mut builder = CodeBuilder::new(Indent::KOTLIN);
        builder.emit(&CodeFragment::separated(sections));
        builder.build()
    }
}
