//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::{ApiError, CatalogError, GeneratorError};

/// Map domain/service errors to a string for CLI output, with a hint where
/// the next step is obvious.
pub fn map_error(e: &ApiError) -> String {
    match e {
        ApiError::Catalog(CatalogError::TemplateNotFound(_)) => format!(
            "{}. Run `hackpack templates` to list available templates.",
            e
        ),
        ApiError::Generator(GeneratorError::NameTooShort { min, .. }) => format!(
            "{}. Use a name with at least {} letters or numbers.",
            e, min
        ),
        _ => e.to_string(),
    }
}
