/// Whitespace written once per nesting level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indent(&'static str);

impl Indent {
    /// Four spaces, as in the Kotlin coding conventions.
    pub const KOTLIN: Self = Self("    ");
    pub const TAB: Self = Self("\t");

    pub fn unit(&self) -> &'static str {
        self.0
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::KOTLIN
    }
}
