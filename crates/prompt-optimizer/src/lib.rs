//! Prompt Optimizer Domain Library
//!
//! Core domain types and interfaces for serving a catalog of prompt
//! templates and tracking how they are used.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Catalog records (Category, Template) and usage records
//!   - `catalog`: Ordered, read-only template catalog with lookup and lint
//!   - `services/`: Placeholder rendering and popularity ranking
//!   - `errors`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `repositories/`: Usage statistics persistence
//!
//! # Usage
//!
//! ```rust,ignore
//! use prompt_optimizer::{Catalog, render_template};
//!
//! let catalog = Catalog::builtin();
//! let (_, template) = catalog.lookup("development", "create_project")?;
//! let prompt = render_template(&template.template, &variables)?;
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    rank_popular, render_template, Catalog, CatalogIssue, CatalogIssueKind, Category, DomainError,
    PopularTemplate, RenderResult, Template, UsageEntry, UsageStats, DEFAULT_POPULAR_LIMIT,
    MAX_RECENT_USAGE,
};
pub use ports::UsageRepository;
