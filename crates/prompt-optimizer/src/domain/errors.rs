//! Domain Errors
//!
//! Error types for domain operations.

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("Category '{0}' not found")]
    CategoryNotFound(String),

    #[error("Template '{template}' not found in category '{category}'")]
    TemplateNotFound { category: String, template: String },

    #[error("Missing required variable: {0}")]
    MissingVariable(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("Repository error: {0}")]
    Repository(String),
}

impl DomainError {
    pub fn template_not_found<C: AsRef<str>, T: AsRef<str>>(category: C, template: T) -> Self {
        Self::TemplateNotFound {
            category: category.as_ref().to_string(),
            template: template.as_ref().to_string(),
        }
    }

    /// True for lookups that missed a category or template
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::CategoryNotFound(_) | Self::TemplateNotFound { .. }
        )
    }
}
