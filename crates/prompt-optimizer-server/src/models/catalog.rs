//! Catalog Models - Categories, templates and examples

use std::collections::BTreeMap;

use serde::{Serialize, Serializer};
use utoipa::ToSchema;

use prompt_optimizer::{Category, Template};

/// Category with its templates keyed by template key, in catalog order
#[derive(Debug, Serialize, ToSchema)]
pub struct CategoryResponse {
    pub name: String,
    #[serde(serialize_with = "serialize_keyed")]
    #[schema(value_type = Object)]
    pub templates: Vec<TemplateResponse>,
}

/// Template record as exposed over HTTP
#[derive(Debug, Serialize, ToSchema)]
pub struct TemplateResponse {
    #[serde(skip)]
    pub key: String,
    pub name: String,
    pub description: String,
    pub template: String,
    pub variables: Vec<String>,
    pub examples: Vec<BTreeMap<String, String>>,
}

/// Examples and variable names of a template
#[derive(Debug, Serialize, ToSchema)]
pub struct ExamplesResponse {
    pub examples: Vec<BTreeMap<String, String>>,
    pub variables: Vec<String>,
}

fn serialize_keyed<S: Serializer>(
    templates: &[TemplateResponse],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_map(templates.iter().map(|t| (&t.key, t)))
}

impl From<&Template> for TemplateResponse {
    fn from(template: &Template) -> Self {
        Self {
            key: template.key.clone(),
            name: template.name.clone(),
            description: template.description.clone(),
            template: template.template.clone(),
            variables: template.variables.clone(),
            examples: template.examples.clone(),
        }
    }
}

impl From<&Category> for CategoryResponse {
    fn from(category: &Category) -> Self {
        Self {
            name: category.name.clone(),
            templates: category.templates.iter().map(TemplateResponse::from).collect(),
        }
    }
}

impl From<&Template> for ExamplesResponse {
    fn from(template: &Template) -> Self {
        Self {
            examples: template.examples.clone(),
            variables: template.variables.clone(),
        }
    }
}
