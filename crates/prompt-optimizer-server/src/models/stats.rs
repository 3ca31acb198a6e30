//! Usage Statistics Models

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use prompt_optimizer::{PopularTemplate, UsageEntry, UsageStats};

/// Full usage statistics document
#[derive(Debug, Serialize, ToSchema)]
pub struct UsageStatsResponse {
    pub total_prompts: u64,
    pub categories: BTreeMap<String, u64>,
    /// Always empty
    #[schema(value_type = Vec<Object>)]
    pub popular_templates: Vec<serde_json::Value>,
    pub last_used: Vec<UsageEntryResponse>,
}

/// One recent render
#[derive(Debug, Serialize, ToSchema)]
pub struct UsageEntryResponse {
    pub category: String,
    pub template: String,
    pub timestamp: DateTime<Utc>,
    pub variables: BTreeMap<String, String>,
}

/// Ranked template
#[derive(Debug, Serialize, ToSchema)]
pub struct PopularTemplateResponse {
    pub category: String,
    pub template_key: String,
    pub name: String,
    pub description: String,
    pub usage_count: usize,
}

/// Query parameters for the popularity endpoint
#[derive(Debug, Deserialize, IntoParams)]
pub struct PopularQuery {
    /// Number of templates to return (default: 5)
    pub limit: Option<usize>,
}

impl From<UsageEntry> for UsageEntryResponse {
    fn from(entry: UsageEntry) -> Self {
        Self {
            category: entry.category,
            template: entry.template_key,
            timestamp: entry.timestamp,
            variables: entry.variables,
        }
    }
}

impl From<UsageStats> for UsageStatsResponse {
    fn from(stats: UsageStats) -> Self {
        Self {
            total_prompts: stats.total_prompts,
            categories: stats.categories,
            popular_templates: stats.popular_templates,
            last_used: stats.last_used.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<PopularTemplate> for PopularTemplateResponse {
    fn from(popular: PopularTemplate) -> Self {
        Self {
            category: popular.category,
            template_key: popular.template_key,
            name: popular.name,
            description: popular.description,
            usage_count: popular.usage_count,
        }
    }
}
