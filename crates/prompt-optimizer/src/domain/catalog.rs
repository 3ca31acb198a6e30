//! Catalog - Read-only, ordered collection of template categories
//!
//! Built once at startup, either from the built-in data or from a JSON
//! file, and never mutated afterwards.

use std::collections::{BTreeSet, HashSet};

use crate::domain::builtin;
use crate::domain::entities::{Category, Template};
use crate::domain::errors::DomainError;
use crate::domain::services::placeholders;

/// Ordered template catalog
#[derive(Debug, Clone)]
pub struct Catalog {
    categories: Vec<Category>,
}

/// Kind of mismatch between a template's text and its declared variables
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogIssueKind {
    /// Placeholder used in the text but not listed in `variables`
    UndeclaredPlaceholder,
    /// Listed in `variables` but never used in the text
    UnusedVariable,
}

/// A lint finding for one template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogIssue {
    pub category: String,
    pub template: String,
    pub variable: String,
    pub kind: CatalogIssueKind,
}

impl std::fmt::Display for CatalogIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            CatalogIssueKind::UndeclaredPlaceholder => write!(
                f,
                "{}/{}: placeholder '{}' is not declared in variables",
                self.category, self.template, self.variable
            ),
            CatalogIssueKind::UnusedVariable => write!(
                f,
                "{}/{}: variable '{}' is never used in the template",
                self.category, self.template, self.variable
            ),
        }
    }
}

impl Catalog {
    /// Build a catalog, rejecting duplicate category or template keys
    pub fn new(categories: Vec<Category>) -> Result<Self, DomainError> {
        let mut category_keys = HashSet::new();
        for category in &categories {
            if !category_keys.insert(category.key.as_str()) {
                return Err(DomainError::Catalog(format!(
                    "duplicate category key '{}'",
                    category.key
                )));
            }

            let mut template_keys = HashSet::new();
            for template in &category.templates {
                if !template_keys.insert(template.key.as_str()) {
                    return Err(DomainError::Catalog(format!(
                        "duplicate template key '{}' in category '{}'",
                        template.key, category.key
                    )));
                }
            }
        }

        Ok(Self { categories })
    }

    /// The catalog shipped with the service
    pub fn builtin() -> Self {
        Self {
            categories: builtin::categories(),
        }
    }

    /// Parse a catalog from a JSON array of categories
    pub fn from_json(json: &str) -> Result<Self, DomainError> {
        let categories: Vec<Category> = serde_json::from_str(json)
            .map_err(|e| DomainError::Catalog(format!("invalid catalog document: {}", e)))?;
        Self::new(categories)
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category(&self, key: &str) -> Result<&Category, DomainError> {
        self.categories
            .iter()
            .find(|c| c.key == key)
            .ok_or_else(|| DomainError::CategoryNotFound(key.to_string()))
    }

    /// Resolve a template by category and template key
    pub fn lookup(
        &self,
        category: &str,
        template_key: &str,
    ) -> Result<(&Category, &Template), DomainError> {
        let category = self.category(category)?;
        let template = category
            .template(template_key)
            .ok_or_else(|| DomainError::template_not_found(&category.key, template_key))?;
        Ok((category, template))
    }

    /// Every (category, template) pair in catalog order
    pub fn templates(&self) -> impl Iterator<Item = (&Category, &Template)> {
        self.categories
            .iter()
            .flat_map(|c| c.templates.iter().map(move |t| (c, t)))
    }

    /// Compare each template's placeholders with its declared variables
    pub fn lint(&self) -> Vec<CatalogIssue> {
        let mut issues = Vec::new();

        for (category, template) in self.templates() {
            let used: BTreeSet<&str> = placeholders(&template.template).into_iter().collect();
            let declared: BTreeSet<&str> = template.variables.iter().map(String::as_str).collect();

            let undeclared = used
                .difference(&declared)
                .map(|v| (*v, CatalogIssueKind::UndeclaredPlaceholder));
            let unused = declared
                .difference(&used)
                .map(|v| (*v, CatalogIssueKind::UnusedVariable));

            for (variable, kind) in undeclared.chain(unused) {
                issues.push(CatalogIssue {
                    category: category.key.clone(),
                    template: template.key.clone(),
                    variable: variable.to_string(),
                    kind,
                });
            }
        }

        issues
    }
}
