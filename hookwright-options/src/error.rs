use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for option handling (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("run 'hookwright defaults > hookwright.toml' to start from the defaults"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse options file")]
    #[diagnostic(code(hookwright::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to parse JSON options")]
    #[diagnostic(code(hookwright::json_error))]
    Json {
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid option '{field}': {requirement}")]
    #[diagnostic(code(hookwright::configuration))]
    Configuration { field: String, requirement: String },
}

impl Error {
    /// Create a parse error from a toml error with source context
    pub fn parse(source: toml::de::Error, src: &str, filename: &str) -> Box<Self> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        })
    }

    /// Create a configuration error naming the offending field and the unmet requirement
    pub fn configuration(field: impl Into<String>, requirement: impl Into<String>) -> Box<Self> {
        Box::new(Error::Configuration {
            field: field.into(),
            requirement: requirement.into(),
        })
    }

    /// The offending field, if this is a configuration error.
    pub fn field(&self) -> Option<&str> {
        match self {
            Error::Configuration { field, .. } => Some(field),
            _ => None,
        }
    }
}
