//! Fragments: the line-oriented form every AST node lowers to.

/// A piece of generated source, not yet indented.
#[derive(Debug, Clone, PartialEq)]
pub enum CodeFragment {
    Line(String),
    /// Always written without indentation.
    Blank,
    /// `/** text */` on one line.
    Doc(String),
    /// `open`, then `body` one level deeper, then `close` at the level of `open`.
    Block {
        open: String,
        body: Vec<CodeFragment>,
        close: String,
    },
    /// Fragments one level deeper, without surrounding lines.
    Nested(Vec<CodeFragment>),
}

impl CodeFragment {
    pub fn line(s: impl Into<String>) -> Self {
        Self::Line(s.into())
    }

    pub fn blank() -> Self {
        Self::Blank
    }

    pub fn doc(s: impl Into<String>) -> Self {
        Self::Doc(s.into())
    }

    /// A brace-delimited block; `open` is expected to end with `{`.
    pub fn block(open: impl Into<String>, body: Vec<CodeFragment>) -> Self {
        Self::enclosed(open, body, "}")
    }

    /// A block closed by an arbitrary line, e.g. `)` for multi-line calls.
    pub fn enclosed(
        open: impl Into<String>,
        body: Vec<CodeFragment>,
        close: impl Into<String>,
    ) -> Self {
        Self::Block {
            open: open.into(),
            body,
            close: close.into(),
        }
    }

    pub fn indent(fragments: Vec<CodeFragment>) -> Self {
        Self::Nested(fragments)
    }

    /// Concatenates the non-empty groups with one blank line between each.
    pub fn separated(groups: impl IntoIterator<Item = Vec<CodeFragment>>) -> Vec<CodeFragment> {
        groups
            .into_iter()
            .filter(|group| !group.is_empty())
            .enumerate()
            .flat_map(|(i, group)| (i > 0).then_some(Self::Blank).into_iter().chain(group))
            .collect()
    }
}

/// Anything that lowers to fragments. AST nodes implement this so they can be
/// emitted into a [`CodeBuilder`](super::CodeBuilder) or nested in each other.
pub trait Renderable {
    fn to_fragments(&self) -> Vec<CodeFragment>;
}

impl<T: Renderable + ?Sized> Renderable for &T {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        (**self).to_fragments()
    }
}

impl<T: Renderable + ?Sized> Renderable for Box<T> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        (**self).to_fragments()
    }
}

impl Renderable for [CodeFragment] {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.to_vec()
    }
}

impl Renderable for Vec<CodeFragment> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.clone()
    }
}
