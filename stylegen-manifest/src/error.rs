use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Boxed, since the miette variants carry the whole manifest text.
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// The manifest text and its display name, kept together so every error
/// raised while reading one manifest can quote it.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        Box::new(Error::Parse {
            src: self.named_source(),
            span: source.span().map(SourceSpan::from),
            source,
        })
    }

    pub fn validation_error(
        &self,
        message: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span,
            message: message.into(),
        })
    }

    pub fn invalid_identifier(
        &self,
        name: &str,
        context: String,
        reason: &str,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::InvalidIdentifier {
            src: self.named_source(),
            span,
            name: name.to_string(),
            context,
            reason: reason.to_string(),
        })
    }

    pub fn invalid_package(
        &self,
        package: &str,
        reason: &str,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::InvalidPackage {
            src: self.named_source(),
            span,
            package: package.to_string(),
            reason: reason.to_string(),
        })
    }

    pub fn duplicate_param(
        &self,
        param: &str,
        declaration: &str,
        spans: (Option<SourceSpan>, Option<SourceSpan>),
    ) -> Box<Error> {
        let (first_span, second_span) = spans;
        Box::new(Error::DuplicateParam {
            src: self.named_source(),
            first_span,
            second_span,
            param: param.to_string(),
            declaration: declaration.to_string(),
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(
        code(stylegen::io),
        help("pass the manifest location with '--config <path>'")
    )]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("'{}' is not valid TOML for a manifest", src.name())]
    #[diagnostic(code(stylegen::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("{message}")]
    #[diagnostic(code(stylegen::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("'{name}' is not a valid {context} name")]
    #[diagnostic(
        code(stylegen::invalid_identifier),
        help("{reason}; names are ASCII letters, digits and '_', not starting with a digit")
    )]
    InvalidIdentifier {
        #[source_code]
        src: NamedSource<String>,
        #[label("{reason}")]
        span: Option<SourceSpan>,
        name: String,
        context: String,
        reason: String,
    },

    #[error("'{package}' is not a valid package")]
    #[diagnostic(
        code(stylegen::invalid_package),
        help("write the package as dot-separated identifiers, e.g. 'com.sdds.compose.uikit'")
    )]
    InvalidPackage {
        #[source_code]
        src: NamedSource<String>,
        #[label("{reason}")]
        span: Option<SourceSpan>,
        package: String,
        reason: String,
    },

    #[error("'{declaration}' declares parameter '{param}' twice")]
    #[diagnostic(code(stylegen::duplicate_param))]
    DuplicateParam {
        #[source_code]
        src: NamedSource<String>,
        #[label("first declared here")]
        first_span: Option<SourceSpan>,
        #[label("declared again here")]
        second_span: Option<SourceSpan>,
        param: String,
        declaration: String,
    },
}
