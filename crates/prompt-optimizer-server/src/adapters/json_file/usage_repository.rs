//! JSON file implementation of UsageRepository

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use prompt_optimizer::{DomainError, UsageRepository, UsageStats};

const USAGE_FILE: &str = "usage_stats.json";

/// Stores the usage document as pretty-printed JSON, overwritten on every save
pub struct JsonFileUsageRepository {
    path: PathBuf,
}

impl JsonFileUsageRepository {
    /// Repository for `<data_dir>/usage_stats.json`
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            path: data_dir.as_ref().join(USAGE_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl UsageRepository for JsonFileUsageRepository {
    async fn load(&self) -> Result<UsageStats, DomainError> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("No usage file at {:?}, starting empty", self.path);
                return Ok(UsageStats::default());
            }
            Err(e) => {
                return Err(DomainError::Repository(format!(
                    "Failed to read {:?}: {}",
                    self.path, e
                )))
            }
        };

        let stats: UsageStats = serde_json::from_str(&content).map_err(|e| {
            DomainError::Repository(format!("Failed to parse {:?}: {}", self.path, e))
        })?;

        tracing::debug!(
            "Loaded usage stats from {:?} ({} prompts)",
            self.path,
            stats.total_prompts
        );
        Ok(stats)
    }

    async fn save(&self, stats: &UsageStats) -> Result<(), DomainError> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).await.map_err(|e| {
                DomainError::Repository(format!("Failed to create directory {:?}: {}", dir, e))
            })?;
        }

        let content = serde_json::to_string_pretty(stats)
            .map_err(|e| DomainError::Repository(format!("Failed to serialize stats: {}", e)))?;

        fs::write(&self.path, content).await.map_err(|e| {
            DomainError::Repository(format!("Failed to write {:?}: {}", self.path, e))
        })?;

        tracing::debug!("Saved usage stats to {:?}", self.path);
        Ok(())
    }
}
