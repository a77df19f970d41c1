use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for manifest operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Encapsulates the source content and filename, reducing parameter passing
/// in error factory functions.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        &self.src
    }

    /// Get the filename.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error from a toml error.
    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a validation error, optionally pointing at a span.
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

    /// Create a reserved keyword error.
    pub fn reserved_keyword_error(
        &self,
        name: impl Into<String>,
        context: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::ReservedKeyword {
            src: self.named_source(),
            span,
            name: name.into(),
            context: context.into(),
        })
    }

    /// Create an invalid identifier error.
    pub fn invalid_identifier_error(
        &self,
        name: impl Into<String>,
        context: impl Into<String>,
        reason: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::InvalidIdentifier {
            src: self.named_source(),
            span,
            name: name.into(),
            context: context.into(),
            reason: reason.into(),
        })
    }

    /// Create a duplicate name error.
    pub fn duplicate_error(
        &self,
        name: impl Into<String>,
        context: impl Into<String>,
        first_span: Option<SourceSpan>,
        second_span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::DuplicateName {
            src: self.named_source(),
            first_span,
            second_span,
            name: name.into(),
            context: context.into(),
        })
    }

    /// Create an invalid option value error.
    pub fn invalid_option_error(
        &self,
        option: impl Into<String>,
        field: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::InvalidOptionValue {
            src: self.named_source(),
            span,
            option: option.into(),
            field: field.into(),
        })
    }

    /// Create an error for a relation marker whose target is not a model name.
    pub fn relation_target_error(
        &self,
        marker: impl Into<String>,
        field: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::InvalidRelationTarget {
            src: self.named_source(),
            span,
            marker: marker.into(),
            field: field.into(),
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("create a modelsmith.toml or pass its path with --config"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse manifest")]
    #[diagnostic(code(modelsmith::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("{message}")]
    #[diagnostic(code(modelsmith::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("'{name}' is a Python reserved keyword")]
    #[diagnostic(
        code(modelsmith::reserved_keyword),
        help("rename the {context} '{name}' to something else, e.g. '{name}_value'")
    )]
    ReservedKeyword {
        #[source_code]
        src: NamedSource<String>,
        #[label("reserved keyword used here")]
        span: Option<SourceSpan>,
        name: String,
        context: String,
    },

    #[error("invalid {context} name '{name}'")]
    #[diagnostic(
        code(modelsmith::invalid_identifier),
        help(
            "{reason}. Use only letters, numbers, and underscores, starting with a letter or underscore."
        )
    )]
    InvalidIdentifier {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid identifier")]
        span: Option<SourceSpan>,
        name: String,
        context: String,
        reason: String,
    },

    #[error("duplicate {context} '{name}'")]
    #[diagnostic(code(modelsmith::duplicate_name), help("each {context} name must be unique"))]
    DuplicateName {
        #[source_code]
        src: NamedSource<String>,
        #[label("first declared here")]
        first_span: Option<SourceSpan>,
        #[label("declared again here")]
        second_span: Option<SourceSpan>,
        name: String,
        context: String,
    },

    #[error("option '{option}' on field '{field}' has an unsupported value")]
    #[diagnostic(
        code(modelsmith::invalid_option),
        help("option values must be strings, numbers, booleans, dates or arrays of those")
    )]
    InvalidOptionValue {
        #[source_code]
        src: NamedSource<String>,
        #[label("tables are not allowed here")]
        span: Option<SourceSpan>,
        option: String,
        field: String,
    },

    #[error("relation '{marker}' on field '{field}' must name a model")]
    #[diagnostic(
        code(modelsmith::invalid_relation_target),
        help("write the target model as a string, e.g. {marker} = \"RocketEngine\"")
    )]
    InvalidRelationTarget {
        #[source_code]
        src: NamedSource<String>,
        #[label("expected a model name")]
        span: Option<SourceSpan>,
        marker: String,
        field: String,
    },
}
