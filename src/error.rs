//! Error types for the Hackpack project generator.

use crate::generator::GeneratorStep;
use thiserror::Error;

/// Generation flow errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("Project name too short: slug '{slug}' has {len} characters, need at least {min}")]
    NameTooShort { slug: String, len: usize, min: usize },

    #[error("Cannot {action} while in '{step}' step")]
    InvalidTransition {
        action: &'static str,
        step: GeneratorStep,
    },

    #[error("Generation is in progress and cannot be interrupted")]
    NotInterruptible,

    #[error("No async runtime available to play the generation script")]
    NoRuntime,
}

/// Template catalog errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    #[error("Unknown category: {0} (must be one of All, Web, Mobile, API, Data)")]
    UnknownCategory(String),
}

/// Top-level errors surfaced to callers and the CLI
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Generation failed: {0}")]
    Generator(#[from] GeneratorError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Prompt failed: {0}")]
    Prompt(String),

    #[error("Generation task failed: {0}")]
    TaskFailed(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Serialization(err.to_string())
    }
}

impl From<toml::ser::Error> for ApiError {
    fn from(err: toml::ser::Error) -> Self {
        ApiError::Serialization(err.to_string())
    }
}
