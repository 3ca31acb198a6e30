//! Catalog loading from a JSON file

use std::path::Path;

use tokio::fs;

use prompt_optimizer::{Catalog, DomainError};

/// Read a catalog document: a JSON array of categories in display order
pub async fn load_catalog(path: &Path) -> Result<Catalog, DomainError> {
    let content = fs::read_to_string(path)
        .await
        .map_err(|e| DomainError::Catalog(format!("Failed to read {:?}: {}", path, e)))?;

    let catalog = Catalog::from_json(&content)?;
    tracing::info!(
        "Loaded catalog from {:?} ({} categories)",
        path,
        catalog.categories().len()
    );
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_load_catalog_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("catalog.json");
        std::fs::write(
            &path,
            r#"[{"key": "writing", "name": "Writing", "templates": [
                {"key": "summary", "name": "Summary", "description": "Summarize a text",
                 "template": "Summarize {text} in {words} words",
                 "variables": ["text", "words"],
                 "examples": [{"text": "README.md", "words": "50"}]}
            ]}]"#,
        )
        .unwrap();

        let catalog = load_catalog(&path).await.unwrap();
        let (category, template) = catalog.lookup("writing", "summary").unwrap();
        assert_eq!(category.name, "Writing");
        assert_eq!(template.examples[0]["words"], "50");
    }

    #[tokio::test]
    async fn test_missing_catalog_file() {
        let temp = tempdir().unwrap();
        let result = load_catalog(&temp.path().join("absent.json")).await;
        assert!(matches!(result, Err(DomainError::Catalog(_))));
    }
}
