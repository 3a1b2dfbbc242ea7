//! Name checks with error spans pointing into the manifest.

use miette::SourceSpan;

use crate::{Result, SourceContext};

/// Validation state for one manifest: its source plus the path of the
/// declaration currently being checked, so messages can say where a bad
/// name lives.
#[derive(Debug, Clone)]
pub struct ParseContext<'a> {
    source: &'a SourceContext,
    path: Vec<&'a str>,
}

impl<'a> ParseContext<'a> {
    pub fn new(source: &'a SourceContext) -> Self {
        Self {
            source,
            path: Vec::new(),
        }
    }

    pub fn source(&self) -> &'a SourceContext {
        self.source
    }

    pub fn push(&self, segment: &'a str) -> Self {
        let mut path = self.path.clone();
        path.push(segment);
        Self {
            source: self.source,
            path,
        }
    }

    /// e.g. `parameter in 'ButtonProperties'`, or just `kind` at the root.
    pub fn context_for(&self, kind: &str) -> String {
        if self.path.is_empty() {
            return kind.to_string();
        }
        format!("{} in '{}'", kind, self.path.join("."))
    }

    pub fn span_of(&self, name: &str) -> Option<SourceSpan> {
        find_name_span(self.source.src(), name)
    }

    pub fn validate_name(&self, name: &str, kind: &str) -> Result<()> {
        let Some(reason) = validate_identifier(name) else {
            return Ok(());
        };
        Err(self
            .source
            .invalid_identifier(name, self.context_for(kind), reason, self.span_of(name)))
    }

    pub fn validate_package(&self, package: &str) -> Result<()> {
        let reason = if package.is_empty() {
            Some("package cannot be empty")
        } else if package.split('.').any(str::is_empty) {
            Some("package contains an empty segment")
        } else {
            package.split('.').find_map(validate_identifier)
        };

        match reason {
            Some(reason) => Err(self
                .source
                .invalid_package(package, reason, self.span_of(package))),
            None => Ok(()),
        }
    }
}

/// Span of `name` as a quoted TOML string, without the quotes. Prefers a
/// key assignment over an array element, and falls back to a bare match.
pub(crate) fn find_name_span(src: &str, name: &str) -> Option<SourceSpan> {
    find_name_span_from(src, name, 0)
}

/// [`find_name_span`] starting at byte offset `from`.
pub(crate) fn find_name_span_from(src: &str, name: &str, from: usize) -> Option<SourceSpan> {
    let haystack = src.get(from..)?;
    let quoted = format!("\"{}\"", name);
    let offset = [" = ", "="]
        .iter()
        .find_map(|eq| {
            let pattern = format!("{}{}", eq, quoted);
            haystack.find(&pattern).map(|pos| pos + eq.len() + 1)
        })
        .or_else(|| haystack.find(&quoted).map(|pos| pos + 1))
        .or_else(|| haystack.find(name))?;

    Some(SourceSpan::from((from + offset, name.len())))
}

/// Why `name` is not a plain identifier, if it isn't.
pub(crate) fn validate_identifier(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    match chars.next() {
        None => return Some("name cannot be empty"),
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        Some(_) => return Some("name must start with a letter or underscore"),
    }

    if chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        None
    } else {
        Some("name must contain only letters, numbers, and underscores")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_valid_identifiers() {
        assert!(validate_identifier("background").is_none());
        assert!(validate_identifier("ButtonProperties").is_none());
        assert!(validate_identifier("_hidden").is_none());
        assert!(validate_identifier("padding2").is_none());
    }

    #[test]
    fn test_invalid_identifiers() {
        assert_eq!(validate_identifier(""), Some("name cannot be empty"));
        assert_eq!(
            validate_identifier("2x"),
            Some("name must start with a letter or underscore")
        );
        assert_eq!(
            validate_identifier("padding-start"),
            Some("name must contain only letters, numbers, and underscores")
        );
    }

    #[test]
    fn test_find_name_span() {
        let src = "[[declaration]]\nname = \"ButtonProperties\"\n";
        let span = find_name_span(src, "ButtonProperties").unwrap();
        assert_eq!(span.offset(), 24);
        assert_eq!(span.len(), 16);
        assert_eq!(&src[24..40], "ButtonProperties");
    }

    #[test]
    fn test_find_name_span_in_array() {
        let src = "supertypes = [\"Base\", \"PropertyOwner\"]";
        let span = find_name_span(src, "PropertyOwner").unwrap();
        assert_eq!(&src[span.offset()..span.offset() + span.len()], "PropertyOwner");
    }

    #[test]
    fn test_find_name_span_from_offset() {
        let src = "name = \"shape\"\nname = \"shape\"\n";
        let first = find_name_span(src, "shape").unwrap();
        let second = find_name_span_from(src, "shape", first.offset() + first.len()).unwrap();
        assert_eq!(first.offset(), 8);
        assert_eq!(second.offset(), 23);
        assert!(find_name_span_from(src, "shape", src.len()).is_none());
    }

    #[test]
    fn test_parse_context_context_for() {
        let source = SourceContext::new("", "stylegen.toml");
        let ctx = ParseContext::new(&source);
        assert_eq!(ctx.context_for("declaration"), "declaration");
        assert_eq!(
            ctx.push("ButtonProperties").context_for("parameter"),
            "parameter in 'ButtonProperties'"
        );
    }

    #[test]
    fn test_parse_context_validate_name() {
        let source = SourceContext::new("name = \"with space\"", "stylegen.toml");
        let ctx = ParseContext::new(&source);
        assert!(ctx.validate_name("shape", "parameter").is_ok());

        let err = ctx.validate_name("with space", "parameter").unwrap_err();
        match err.as_ref() {
            Error::InvalidIdentifier { span, context, .. } => {
                assert_eq!(context, "parameter");
                assert_eq!(span.as_ref().map(|s| s.offset()), Some(8));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_validate_package() {
        let source = SourceContext::new("", "stylegen.toml");
        let ctx = ParseContext::new(&source);
        assert!(ctx.validate_package("com.sdds.compose.uikit").is_ok());
        assert!(ctx.validate_package("").is_err());
        assert!(ctx.validate_package("com..uikit").is_err());
        assert!(ctx.validate_package("com.9lives").is_err());
    }
}
