//! Usage Repository Port
//!
//! Abstract interface for persisting the usage statistics document.

use async_trait::async_trait;

use crate::domain::{errors::DomainError, UsageStats};

/// Repository interface for the usage statistics document
#[async_trait]
pub trait UsageRepository: Send + Sync {
    /// Load the stored document, or an empty one if nothing was stored yet
    async fn load(&self) -> Result<UsageStats, DomainError>;

    /// Replace the stored document with `stats`
    async fn save(&self, stats: &UsageStats) -> Result<(), DomainError>;
}
