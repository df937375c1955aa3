use hookwright_options::Error as OptionsError;
use miette::Diagnostic;
use thiserror::Error;

/// Result type for contract generation.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    /// The caller's options are inconsistent. Recoverable by fixing the input.
    #[error(transparent)]
    Configuration(#[from] Box<OptionsError>),

    /// The registry's parent graph contains a cycle.
    #[error("cannot linearize components: cycle through {}", .cycle.join(" -> "))]
    #[diagnostic(
        code(hookwright::linearization),
        help("this is a defect in the component registry, not in the options")
    )]
    Linearization { cycle: Vec<String> },

    /// The registry is malformed: missing component, duplicate id, unbound
    /// template placeholder or conflicting constructor parameter.
    #[error("component registry integrity violated: {message}")]
    #[diagnostic(code(hookwright::registry))]
    Registry { message: String },

    /// A phase ran before the phase that produces its input.
    #[error("phase '{phase}' requires the {missing}, which no earlier phase produced")]
    #[diagnostic(code(hookwright::pipeline))]
    Pipeline {
        phase: &'static str,
        missing: &'static str,
    },
}

impl Error {
    /// Create a configuration error naming the offending field and the unmet requirement.
    pub fn configuration(field: impl Into<String>, requirement: impl Into<String>) -> Self {
        Error::Configuration(OptionsError::configuration(field, requirement))
    }

    /// Create a registry-integrity error.
    pub fn registry(message: impl Into<String>) -> Self {
        Error::Registry {
            message: message.into(),
        }
    }

    /// Whether the error stems from the caller's options rather than from a
    /// defect in the component registry.
    pub fn is_user_error(&self) -> bool {
        matches!(self, Error::Configuration(_))
    }
}
