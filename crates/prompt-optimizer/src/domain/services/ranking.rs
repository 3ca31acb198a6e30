//! Popularity ranking over the recent-usage history

use crate::domain::catalog::Catalog;
use crate::domain::entities::{PopularTemplate, UsageStats};

/// Rank every catalog template by its count in `stats.last_used`.
///
/// The sort is stable, so equal counts keep catalog order (category, then
/// template). Templates that were never used are included with a count of 0.
pub fn rank_popular(catalog: &Catalog, stats: &UsageStats, limit: usize) -> Vec<PopularTemplate> {
    let mut ranked: Vec<PopularTemplate> = catalog
        .templates()
        .map(|(category, template)| PopularTemplate {
            category: category.key.clone(),
            template_key: template.key.clone(),
            name: template.name.clone(),
            description: template.description.clone(),
            usage_count: stats.usage_count(&category.key, &template.key),
        })
        .collect();

    ranked.sort_by(|a, b| b.usage_count.cmp(&a.usage_count));
    ranked.truncate(limit);
    ranked
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use chrono::Utc;

    use super::*;
    use crate::domain::entities::UsageEntry;
    use crate::DEFAULT_POPULAR_LIMIT;

    fn used(stats: &mut UsageStats, category: &str, template: &str) {
        stats.record(UsageEntry::new(
            category,
            template,
            Utc::now(),
            BTreeMap::new(),
        ));
    }

    #[test]
    fn test_unused_catalog_keeps_catalog_order() {
        let catalog = Catalog::builtin();
        let ranked = rank_popular(&catalog, &UsageStats::default(), DEFAULT_POPULAR_LIMIT);

        let keys: Vec<&str> = ranked.iter().map(|p| p.template_key.as_str()).collect();
        assert_eq!(
            keys,
            vec![
                "create_project",
                "debug_issue",
                "optimize_performance",
                "compliance_audit",
                "erp_integration"
            ]
        );
        assert!(ranked.iter().all(|p| p.usage_count == 0));
    }

    #[test]
    fn test_sorted_by_usage_then_catalog_order() {
        let catalog = Catalog::builtin();
        let mut stats = UsageStats::default();
        used(&mut stats, "security", "security_audit");
        used(&mut stats, "deployment", "setup_cicd");
        used(&mut stats, "security", "security_audit");
        used(&mut stats, "development", "debug_issue");

        let ranked = rank_popular(&catalog, &stats, DEFAULT_POPULAR_LIMIT);

        assert_eq!(ranked.len(), DEFAULT_POPULAR_LIMIT);
        assert_eq!(ranked[0].template_key, "security_audit");
        assert_eq!(ranked[0].usage_count, 2);
        // Ties at 1: debug_issue comes before setup_cicd in the catalog
        assert_eq!(ranked[1].template_key, "debug_issue");
        assert_eq!(ranked[2].template_key, "setup_cicd");
        assert_eq!(ranked[3].template_key, "create_project");
        assert!(ranked
            .windows(2)
            .all(|w| w[0].usage_count >= w[1].usage_count));
    }

    #[test]
    fn test_limit_larger_than_catalog() {
        let catalog = Catalog::builtin();
        let ranked = rank_popular(&catalog, &UsageStats::default(), 100);
        assert_eq!(ranked.len(), catalog.templates().count());
    }

    #[test]
    fn test_unknown_history_entries_are_not_ranked() {
        let catalog = Catalog::builtin();
        let mut stats = UsageStats::default();
        used(&mut stats, "retired", "old_template");

        let ranked = rank_popular(&catalog, &stats, 100);
        assert!(ranked.iter().all(|p| p.template_key != "old_template"));
    }
}
