//! Prompt Application Service (Use Case)
//!
//! Renders catalog templates and keeps the usage statistics current.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::Mutex;

use prompt_optimizer::{
    rank_popular, render_template, Catalog, DomainError, PopularTemplate, RenderResult,
    UsageEntry, UsageRepository, UsageStats,
};

/// Application service for prompt generation and usage statistics
pub struct PromptService<R: UsageRepository> {
    catalog: Arc<Catalog>,
    repo: Arc<R>,
    /// Guards the whole load-modify-save sequence of a render
    stats: Mutex<UsageStats>,
}

impl<R: UsageRepository> PromptService<R> {
    /// Create the service, loading the stored usage document once
    pub async fn load(catalog: Arc<Catalog>, repo: Arc<R>) -> Result<Self, DomainError> {
        let stats = repo.load().await?;
        tracing::info!(
            "Usage stats loaded: {} prompts generated so far",
            stats.total_prompts
        );

        Ok(Self {
            catalog,
            repo,
            stats: Mutex::new(stats),
        })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Render a template and record the usage.
    ///
    /// Lookup and substitution happen before the stats are touched. The
    /// updated document is saved before it replaces the in-memory copy, so
    /// a failed save leaves the counters as they were.
    pub async fn generate(
        &self,
        category: &str,
        template_key: &str,
        variables: BTreeMap<String, String>,
    ) -> Result<RenderResult, DomainError> {
        let (category, template) = self.catalog.lookup(category, template_key)?;
        let prompt = render_template(&template.template, &variables)?;
        let generated_at = Utc::now();

        let total_prompts = {
            let mut stats = self.stats.lock().await;
            let mut updated = stats.clone();
            updated.record(UsageEntry::new(
                &category.key,
                &template.key,
                generated_at,
                variables.clone(),
            ));

            self.repo.save(&updated).await?;
            *stats = updated;
            stats.total_prompts
        };

        tracing::info!(
            "Generated prompt {}/{} (total: {})",
            category.key,
            template.key,
            total_prompts
        );

        Ok(RenderResult {
            prompt,
            template_name: template.name.clone(),
            template_description: template.description.clone(),
            category_name: category.name.clone(),
            generated_at,
            variables_used: variables,
            total_prompts,
        })
    }

    /// Snapshot of the current usage document
    pub async fn stats(&self) -> UsageStats {
        self.stats.lock().await.clone()
    }

    /// Most used templates in the recent history
    pub async fn popular(&self, limit: usize) -> Vec<PopularTemplate> {
        let stats = self.stats.lock().await;
        rank_popular(&self.catalog, &stats, limit)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, Ordering};

    use async_trait::async_trait;
    use prompt_optimizer::{DEFAULT_POPULAR_LIMIT, MAX_RECENT_USAGE};
    use tempfile::tempdir;

    use super::*;
    use crate::adapters::JsonFileUsageRepository;

    /// Repository whose saves can be switched to fail
    #[derive(Default)]
    struct FlakyRepository {
        fail_saves: AtomicBool,
    }

    #[async_trait]
    impl UsageRepository for FlakyRepository {
        async fn load(&self) -> Result<UsageStats, DomainError> {
            Ok(UsageStats::default())
        }

        async fn save(&self, _stats: &UsageStats) -> Result<(), DomainError> {
            if self.fail_saves.load(Ordering::SeqCst) {
                Err(DomainError::Repository("disk full".to_string()))
            } else {
                Ok(())
            }
        }
    }

    fn vars(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn create_project_vars() -> BTreeMap<String, String> {
        vars(&[
            ("project_name", "meu-app"),
            ("project_type", "web_app"),
            ("framework", "flask"),
        ])
    }

    async fn file_service(
        dir: &std::path::Path,
    ) -> PromptService<JsonFileUsageRepository> {
        PromptService::load(
            Arc::new(Catalog::builtin()),
            Arc::new(JsonFileUsageRepository::new(dir)),
        )
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn test_generate_create_project() {
        let temp = tempdir().unwrap();
        let service = file_service(temp.path()).await;

        let result = service
            .generate("development", "create_project", create_project_vars())
            .await
            .unwrap();

        assert!(result.prompt.contains("meu-app"));
        assert!(result.prompt.contains("web_app"));
        assert!(result.prompt.contains("flask"));
        assert!(!result.prompt.contains("{project_name}"));
        assert_eq!(result.template_name, "Criar Projeto");
        assert_eq!(result.category_name, "Desenvolvimento");
        assert_eq!(result.total_prompts, 1);
        assert_eq!(result.variables_used, create_project_vars());
        assert_eq!(service.stats().await.total_prompts, 1);
    }

    #[tokio::test]
    async fn test_failures_do_not_touch_stats() {
        let temp = tempdir().unwrap();
        let service = file_service(temp.path()).await;

        let err = service
            .generate("marketing", "create_project", create_project_vars())
            .await
            .unwrap_err();
        assert_eq!(err, DomainError::CategoryNotFound("marketing".to_string()));

        let err = service
            .generate("development", "launch_rocket", create_project_vars())
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::TemplateNotFound { .. }));

        let mut missing = create_project_vars();
        missing.remove("framework");
        let err = service
            .generate("development", "create_project", missing)
            .await
            .unwrap_err();
        assert_eq!(err, DomainError::MissingVariable("framework".to_string()));

        assert_eq!(service.stats().await, UsageStats::default());
        // Nothing was ever saved
        assert!(!temp.path().join("usage_stats.json").exists());
    }

    #[tokio::test]
    async fn test_category_counts() {
        let temp = tempdir().unwrap();
        let service = file_service(temp.path()).await;

        for _ in 0..3 {
            service
                .generate("development", "create_project", create_project_vars())
                .await
                .unwrap();
        }
        service
            .generate(
                "development",
                "debug_issue",
                vars(&[
                    ("file_path", "src/main.rs"),
                    ("symptom", "panic"),
                    ("priority", "high"),
                ]),
            )
            .await
            .unwrap();

        let stats = service.stats().await;
        assert_eq!(stats.total_prompts, 4);
        assert_eq!(stats.category_count("development"), 4);
    }

    #[tokio::test]
    async fn test_history_keeps_ten_most_recent() {
        let temp = tempdir().unwrap();
        let service = file_service(temp.path()).await;

        for i in 0..15 {
            let mut variables = create_project_vars();
            variables.insert("project_name".to_string(), format!("app-{}", i));
            service
                .generate("development", "create_project", variables)
                .await
                .unwrap();
        }

        let stats = service.stats().await;
        assert_eq!(stats.total_prompts, 15);
        assert_eq!(stats.last_used.len(), MAX_RECENT_USAGE);
        let names: Vec<String> = stats
            .last_used
            .iter()
            .map(|u| u.variables["project_name"].clone())
            .collect();
        let expected: Vec<String> = (5..15).rev().map(|i| format!("app-{}", i)).collect();
        assert_eq!(names, expected);
    }

    #[tokio::test]
    async fn test_persisted_stats_survive_restart() {
        let temp = tempdir().unwrap();
        let service = file_service(temp.path()).await;
        service
            .generate("development", "create_project", create_project_vars())
            .await
            .unwrap();
        service
            .generate(
                "security",
                "security_audit",
                vars(&[
                    ("audit_scope", "web_app"),
                    ("compliance_reqs", "LGPD"),
                    ("priority", "high"),
                ]),
            )
            .await
            .unwrap();
        let before = service.stats().await;

        let restarted = file_service(temp.path()).await;
        let after = restarted.stats().await;
        assert_eq!(after.total_prompts, before.total_prompts);
        assert_eq!(after.categories, before.categories);
        assert_eq!(after.last_used, before.last_used);
    }

    #[tokio::test]
    async fn test_failed_save_is_reported_and_not_counted() {
        let repo = Arc::new(FlakyRepository::default());
        let service = PromptService::load(Arc::new(Catalog::builtin()), repo.clone())
            .await
            .unwrap();

        service
            .generate("development", "create_project", create_project_vars())
            .await
            .unwrap();

        repo.fail_saves.store(true, Ordering::SeqCst);
        let err = service
            .generate("development", "create_project", create_project_vars())
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Repository(_)));

        let stats = service.stats().await;
        assert_eq!(stats.total_prompts, 1);
        assert_eq!(stats.last_used.len(), 1);
    }

    #[tokio::test]
    async fn test_concurrent_renders_are_all_counted() {
        let temp = tempdir().unwrap();
        let service = Arc::new(file_service(temp.path()).await);

        let handles: Vec<_> = (0..20)
            .map(|_| {
                let service = service.clone();
                tokio::spawn(async move {
                    service
                        .generate("development", "create_project", create_project_vars())
                        .await
                })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        assert_eq!(service.stats().await.total_prompts, 20);
        let reloaded = JsonFileUsageRepository::new(temp.path()).load().await.unwrap();
        assert_eq!(reloaded.total_prompts, 20);
    }

    #[tokio::test]
    async fn test_popular_reflects_history() {
        let temp = tempdir().unwrap();
        let service = file_service(temp.path()).await;
        service
            .generate(
                "deployment",
                "setup_cicd",
                vars(&[
                    ("platform", "GitHub Actions"),
                    ("environments", "prod"),
                    ("test_types", "unit"),
                ]),
            )
            .await
            .unwrap();

        let popular = service.popular(DEFAULT_POPULAR_LIMIT).await;
        assert_eq!(popular.len(), DEFAULT_POPULAR_LIMIT);
        assert_eq!(popular[0].template_key, "setup_cicd");
        assert_eq!(popular[0].usage_count, 1);
    }
}
