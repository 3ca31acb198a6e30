//! Prompt Generation Models

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use prompt_optimizer::{DomainError, RenderResult};

/// Generate prompt request
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct GenerateRequest {
    /// Category key, e.g. `development`
    pub category: Option<String>,
    /// Template key within the category, e.g. `create_project`
    pub template: Option<String>,
    /// Placeholder values. Non-string JSON values are used as their JSON text.
    #[serde(default)]
    #[schema(value_type = Object)]
    pub variables: BTreeMap<String, serde_json::Value>,
}

/// A validated generate request
#[derive(Debug, PartialEq, Eq)]
pub struct GenerateCommand {
    pub category: String,
    pub template: String,
    /// Values as placeholder text
    pub variables: BTreeMap<String, String>,
    /// Values exactly as sent, echoed back in the response
    pub sent_variables: BTreeMap<String, serde_json::Value>,
}

impl GenerateRequest {
    /// Require category and template, and flatten variable values to text
    pub fn into_command(self) -> Result<GenerateCommand, DomainError> {
        let category = self.category.filter(|c| !c.is_empty());
        let template = self.template.filter(|t| !t.is_empty());

        let (Some(category), Some(template)) = (category, template) else {
            return Err(DomainError::Validation(
                "Category and template are required".to_string(),
            ));
        };

        let variables = self
            .variables
            .iter()
            .map(|(name, value)| {
                let text = match value {
                    serde_json::Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                (name.clone(), text)
            })
            .collect();

        Ok(GenerateCommand {
            category,
            template,
            variables,
            sent_variables: self.variables,
        })
    }
}

/// Generate prompt response
#[derive(Debug, Serialize, ToSchema)]
pub struct GenerateResponse {
    pub success: bool,
    pub prompt: String,
    pub template_info: TemplateInfo,
    pub metadata: GenerateMetadata,
}

/// Display information about the rendered template
#[derive(Debug, Serialize, ToSchema)]
pub struct TemplateInfo {
    pub name: String,
    pub description: String,
    /// Category display name
    pub category: String,
}

/// Render metadata
#[derive(Debug, Serialize, ToSchema)]
pub struct GenerateMetadata {
    pub generated_at: DateTime<Utc>,
    /// Variables as the caller sent them
    #[schema(value_type = Object)]
    pub variables_used: BTreeMap<String, serde_json::Value>,
    pub total_prompts_generated: u64,
}

impl GenerateResponse {
    pub fn new(result: RenderResult, variables_used: BTreeMap<String, serde_json::Value>) -> Self {
        Self {
            success: true,
            prompt: result.prompt,
            template_info: TemplateInfo {
                name: result.template_name,
                description: result.template_description,
                category: result.category_name,
            },
            metadata: GenerateMetadata {
                generated_at: result.generated_at,
                variables_used,
                total_prompts_generated: result.total_prompts,
            },
        }
    }
}
