//! RenderResult - Outcome of rendering a template

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A rendered prompt with the metadata of the template it came from
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RenderResult {
    pub prompt: String,
    pub template_name: String,
    pub template_description: String,
    pub category_name: String,
    pub generated_at: DateTime<Utc>,
    pub variables_used: BTreeMap<String, String>,
    /// Running total after this render was counted
    pub total_prompts: u64,
}
