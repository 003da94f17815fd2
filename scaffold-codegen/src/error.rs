//! Error types for scaffold-codegen

use thiserror::Error;

use crate::codegen::{ArtifactKind, Placeholder};

/// Result type alias for scaffold-codegen operations
pub type Result<T> = std::result::Result<T, ScaffoldError>;

/// Errors that can occur during scaffold generation
#[derive(Error, Debug)]
pub enum ScaffoldError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid namespace '{0}': expected at least two dot-separated segments")]
    InvalidNamespace(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Missing value for {placeholder} while rendering {kind}")]
    MissingValue {
        kind: ArtifactKind,
        placeholder: Placeholder,
    },

    #[error("Template error: {0}")]
    TemplateError(String),

    #[error("Unresolved placeholder {token} in {kind} template")]
    UnresolvedPlaceholder { kind: ArtifactKind, token: String },
}

impl From<config::ConfigError> for ScaffoldError {
    fn from(err: config::ConfigError) -> Self {
        ScaffoldError::ConfigError(err.to_string())
    }
}
