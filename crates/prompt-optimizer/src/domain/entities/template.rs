//! Category and Template - Catalog records
//!
//! Pure domain entities without infrastructure dependencies.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Template - A named prompt pattern with placeholder variables
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Template {
    pub key: String,
    pub name: String,
    pub description: String,
    /// Pattern text containing `{variable}` placeholders
    pub template: String,
    /// Variable names the pattern expects, in display order
    #[serde(default)]
    pub variables: Vec<String>,
    /// Example bindings shown to users; never validated
    #[serde(default)]
    pub examples: Vec<BTreeMap<String, String>>,
}

/// Category - A named grouping of templates, kept in author order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub key: String,
    pub name: String,
    #[serde(default)]
    pub templates: Vec<Template>,
}

impl Template {
    pub fn new(
        key: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        template: impl Into<String>,
        variables: &[&str],
        examples: &[&[(&str, &str)]],
    ) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            description: description.into(),
            template: template.into(),
            variables: variables.iter().map(|v| v.to_string()).collect(),
            examples: examples
                .iter()
                .map(|pairs| {
                    pairs
                        .iter()
                        .map(|(k, v)| (k.to_string(), v.to_string()))
                        .collect()
                })
                .collect(),
        }
    }
}

impl Category {
    pub fn new(key: impl Into<String>, name: impl Into<String>, templates: Vec<Template>) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            templates,
        }
    }

    /// Find a template of this category by key
    pub fn template(&self, key: &str) -> Option<&Template> {
        self.templates.iter().find(|t| t.key == key)
    }
}
