//! Usage Statistics - The persisted record of successful renders

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Number of entries kept in the recent-usage history
pub const MAX_RECENT_USAGE: usize = 10;

/// Default size of the popularity ranking
pub const DEFAULT_POPULAR_LIMIT: usize = 5;

/// UsageStats - Counters and recent history, persisted as one JSON document
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UsageStats {
    #[serde(default)]
    pub total_prompts: u64,
    /// Successful renders per category key
    #[serde(default)]
    pub categories: BTreeMap<String, u64>,
    /// Kept for document compatibility; nothing writes to it
    #[serde(default)]
    pub popular_templates: Vec<serde_json::Value>,
    /// Most recent first, at most `MAX_RECENT_USAGE` entries
    #[serde(default)]
    pub last_used: Vec<UsageEntry>,
}

/// UsageEntry - One successful render
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UsageEntry {
    pub category: String,
    #[serde(rename = "template")]
    pub template_key: String,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub timestamp: DateTime<Utc>,
    #[serde(default, deserialize_with = "deserialize_variables")]
    pub variables: BTreeMap<String, String>,
}

/// Parse an ISO-8601 timestamp. A value without an offset is taken as UTC.
fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .or_else(|_| raw.parse::<NaiveDateTime>().map(|naive| naive.and_utc()))
}

fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw)
        .map_err(|e| serde::de::Error::custom(format!("invalid timestamp {:?}: {}", raw, e)))
}

// Older documents keep variable values as the caller sent them
fn deserialize_variables<'de, D>(deserializer: D) -> Result<BTreeMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = BTreeMap::<String, serde_json::Value>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .map(|(name, value)| match value {
            serde_json::Value::String(s) => (name, s),
            other => (name, other.to_string()),
        })
        .collect())
}

/// PopularTemplate - A template with its count in the recent history
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PopularTemplate {
    pub category: String,
    pub template_key: String,
    pub name: String,
    pub description: String,
    pub usage_count: usize,
}

impl UsageEntry {
    pub fn new(
        category: impl Into<String>,
        template_key: impl Into<String>,
        timestamp: DateTime<Utc>,
        variables: BTreeMap<String, String>,
    ) -> Self {
        Self {
            category: category.into(),
            template_key: template_key.into(),
            timestamp,
            variables,
        }
    }
}

impl UsageStats {
    /// Count one render: bump counters and push the entry to the front of the history
    pub fn record(&mut self, entry: UsageEntry) {
        self.total_prompts += 1;
        *self.categories.entry(entry.category.clone()).or_insert(0) += 1;
        self.last_used.insert(0, entry);
        self.last_used.truncate(MAX_RECENT_USAGE);
    }

    /// Occurrences of a template in the recent history
    pub fn usage_count(&self, category: &str, template_key: &str) -> usize {
        self.last_used
            .iter()
            .filter(|u| u.category == category && u.template_key == template_key)
            .count()
    }

    pub fn category_count(&self, category: &str) -> u64 {
        self.categories.get(category).copied().unwrap_or(0)
    }
}
