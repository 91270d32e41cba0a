//! Configuration System
//!
//! Layered configuration for the generator flow: built-in defaults, then the
//! global user file, then workspace files, then `HACKPACK_*` environment
//! variables. Validation collects every problem instead of stopping at the
//! first one.

use crate::catalog::{Template, TemplateCatalog};
use crate::error::ApiError;
use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub use crate::generator::GeneratorConfig;
pub use crate::toast::ToastConfig;

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HackpackConfig {
    /// Generation timing and URL settings
    #[serde(default)]
    pub generator: GeneratorConfig,

    /// Toast defaults
    #[serde(default)]
    pub toasts: ToastConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Template catalog, in display order
    #[serde(default)]
    pub templates: Vec<Template>,
}

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Generator(String),
    Toasts(String),
    Logging(String),
    Template(String, String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Generator(msg) => write!(f, "Generator: {}", msg),
            ValidationError::Toasts(msg) => write!(f, "Toasts: {}", msg),
            ValidationError::Logging(msg) => write!(f, "Logging: {}", msg),
            ValidationError::Template(id, msg) => write!(f, "Template '{}': {}", id, msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl HackpackConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(e) = self.generator.validate() {
            errors.push(ValidationError::Generator(e));
        }
        if let Err(e) = self.toasts.validate() {
            errors.push(ValidationError::Toasts(e));
        }
        if let Err(e) = self.logging.validate() {
            errors.push(ValidationError::Logging(e));
        }

        let mut seen: HashMap<&str, usize> = HashMap::new();
        for (index, template) in self.templates.iter().enumerate() {
            if let Err(e) = template.validate() {
                errors.push(ValidationError::Template(template.id.clone(), e));
            }
            if let Some(first) = seen.insert(template.id.as_str(), index) {
                errors.push(ValidationError::Template(
                    template.id.clone(),
                    format!("Duplicate template id (entries {} and {})", first, index),
                ));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Validate and fold all problems into one error.
    pub fn validated(self) -> Result<Self, ApiError> {
        self.validate().map_err(|errors| {
            let error_msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            ApiError::ConfigError(format!(
                "Configuration validation failed:\n{}",
                error_msgs.join("\n")
            ))
        })?;
        Ok(self)
    }

    pub fn catalog(&self) -> TemplateCatalog {
        TemplateCatalog::new(self.templates.clone())
    }

    pub fn to_toml_string(&self) -> Result<String, ApiError> {
        Ok(toml::to_string_pretty(self)?)
    }
}
