//! Manifest parsing from files and strings.

use std::{collections::HashSet, path::Path, str::FromStr};

use miette::SourceSpan;

use super::{Declaration, Manifest};
use crate::{
    Error, Result, SourceContext,
    validate::{ParseContext, find_name_span_from},
};

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, "stylegen.toml")
    }
}

impl Manifest {
    /// Read and parse the manifest at `path`.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_manifest(&content, &path.display().to_string())
    }

    /// Parse `content`, naming it `filename` in errors.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_manifest(content, filename)
    }
}

/// Parse and validate manifest `content`; `filename` only labels errors.
pub fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let source = SourceContext::new(content, filename);
    let manifest: Manifest = toml::from_str(content).map_err(|e| source.parse_error(e))?;
    validate_manifest(&manifest, &source)?;
    Ok(manifest)
}

fn validate_manifest(manifest: &Manifest, source: &SourceContext) -> Result<()> {
    let ctx = ParseContext::new(source);
    ctx.validate_package(&manifest.output.package)?;

    if manifest.scanner.owner.trim().is_empty() {
        return Err(source.validation_error("scanner.owner cannot be empty", None));
    }

    let mut seen = HashSet::new();
    for declaration in &manifest.declarations {
        ctx.validate_name(&declaration.name, "declaration")?;

        if !seen.insert(declaration.name.as_str()) {
            let (_, again) = occurrences(source.src(), &declaration.name, 0);
            return Err(source.validation_error(
                format!("declaration '{}' is defined twice", declaration.name),
                again,
            ));
        }

        validate_declaration(declaration, &ctx.push(&declaration.name))?;
    }
    Ok(())
}

fn validate_declaration(declaration: &Declaration, ctx: &ParseContext<'_>) -> Result<()> {
    let source = ctx.source();
    // Parameters are looked up after the declaration's own name.
    let base = ctx
        .span_of(&declaration.name)
        .map_or(0, |span| span.offset() + span.len());

    let mut seen = HashSet::new();
    for param in &declaration.params {
        ctx.validate_name(&param.name, "parameter")?;

        if param.ty.trim().is_empty() {
            return Err(source.validation_error(
                format!(
                    "parameter '{}' of '{}' has an empty type",
                    param.name, declaration.name
                ),
                find_name_span_from(source.src(), &param.name, base),
            ));
        }

        if !seen.insert(param.name.as_str()) {
            return Err(source.duplicate_param(
                &param.name,
                &declaration.name,
                occurrences(source.src(), &param.name, base),
            ));
        }
    }
    Ok(())
}

/// Spans of the first two occurrences of `name` at or after `from`.
fn occurrences(src: &str, name: &str, from: usize) -> (Option<SourceSpan>, Option<SourceSpan>) {
    let first = find_name_span_from(src, name, from);
    let second = first
        .as_ref()
        .and_then(|span| find_name_span_from(src, name, span.offset() + span.len()));
    (first, second)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::manifest::{DEFAULT_DIR, DEFAULT_OWNER, DEFAULT_PACKAGE, DEFAULT_SUFFIX};

    const BUTTON: &str = r#"
[output]
package = "com.example.ui"
dir = "generated"

[[declaration]]
name = "ButtonProperties"
supertypes = ["PropertyOwner"]

[[declaration.param]]
name = "shape"
type = "ShapeProperty"

[[declaration.param]]
name = "background"
type = "ColorProperty"
"#;

    #[test]
    fn test_parse_full_manifest() {
        let manifest: Manifest = BUTTON.parse().unwrap();

        assert_eq!(manifest.output.package, "com.example.ui");
        assert_eq!(manifest.output.dir, PathBuf::from("generated"));
        assert_eq!(manifest.scanner.owner, DEFAULT_OWNER);
        assert_eq!(manifest.declarations.len(), 1);

        let declaration = &manifest.declarations[0];
        assert!(declaration.extends("PropertyOwner"));
        assert_eq!(declaration.params[1].name, "background");
        assert_eq!(declaration.params[1].ty, "ColorProperty");
    }

    #[test]
    fn test_defaults() {
        let manifest: Manifest = "".parse().unwrap();

        assert_eq!(manifest.output.package, DEFAULT_PACKAGE);
        assert_eq!(manifest.output.dir, PathBuf::from(DEFAULT_DIR));
        assert_eq!(manifest.scanner.owner, DEFAULT_OWNER);
        assert_eq!(manifest.scanner.suffix, DEFAULT_SUFFIX);
        assert!(manifest.declarations.is_empty());
    }

    #[test]
    fn test_unknown_field_is_parse_error() {
        let err = "[output]\npackages = \"x\"\n".parse::<Manifest>().unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_invalid_package() {
        let err = "[output]\npackage = \"com..example\"\n"
            .parse::<Manifest>()
            .unwrap_err();
        assert!(matches!(*err, Error::InvalidPackage { .. }));
    }

    #[test]
    fn test_invalid_param_name() {
        let src = r#"
[[declaration]]
name = "ChipProperties"

[[declaration.param]]
name = "padding-start"
type = "DimensionProperty"
"#;
        let err = src.parse::<Manifest>().unwrap_err();
        match err.as_ref() {
            Error::InvalidIdentifier { name, context, .. } => {
                assert_eq!(name, "padding-start");
                assert_eq!(context, "parameter in 'ChipProperties'");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_duplicate_param_points_at_both() {
        let src = r#"
[[declaration]]
name = "ChipProperties"

[[declaration.param]]
name = "shape"
type = "ShapeProperty"

[[declaration.param]]
name = "shape"
type = "ShapeProperty"
"#;
        let err = src.parse::<Manifest>().unwrap_err();
        match err.as_ref() {
            Error::DuplicateParam {
                first_span,
                second_span,
                param,
                ..
            } => {
                assert_eq!(param, "shape");
                let first = first_span.as_ref().unwrap().offset();
                let second = second_span.as_ref().unwrap().offset();
                assert!(first < second);
                assert_eq!(&src[second..second + 5], "shape");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_duplicate_declaration() {
        let src = r#"
[[declaration]]
name = "ChipProperties"

[[declaration]]
name = "ChipProperties"
"#;
        let err = src.parse::<Manifest>().unwrap_err();
        assert!(matches!(*err, Error::Validation { span: Some(_), .. }));
    }

    #[test]
    fn test_empty_type() {
        let src = r#"
[[declaration]]
name = "ChipProperties"

[[declaration.param]]
name = "shape"
type = " "
"#;
        let err = src.parse::<Manifest>().unwrap_err();
        assert!(err.to_string().contains("empty type"));
    }

    #[test]
    fn test_from_file_missing() {
        let err = Manifest::from_file("/definitely/not/here/stylegen.toml").unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }
}
