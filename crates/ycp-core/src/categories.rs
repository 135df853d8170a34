//! Category catalog for the browse filter.
//!
//! The set of browsable categories ships as a YAML file and is validated at
//! startup; the slug doubles as the backend query value.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryConfig {
    pub name: String,
    pub description: Option<String>,
}

impl CategoryConfig {
    /// Generate a URL-safe slug from the category name.
    #[must_use]
    pub fn slug(&self) -> String {
        self.name
            .to_lowercase()
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' {
                    c
                } else if c == ' ' {
                    '-'
                } else {
                    '\0'
                }
            })
            .filter(|&c| c != '\0')
            .collect::<String>()
            .split('-')
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join("-")
    }
}

#[derive(Debug, Deserialize)]
pub struct CategoriesFile {
    pub categories: Vec<CategoryConfig>,
}

/// Load and validate the category catalog from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails
/// validation.
pub fn load_categories(path: &Path) -> Result<CategoriesFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::CatalogIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let catalog: CategoriesFile =
        serde_yaml::from_str(&content).map_err(ConfigError::CatalogParse)?;

    validate_categories(&catalog)?;

    Ok(catalog)
}

fn validate_categories(catalog: &CategoriesFile) -> Result<(), ConfigError> {
    if catalog.categories.is_empty() {
        return Err(ConfigError::Validation(
            "category catalog must not be empty".to_string(),
        ));
    }

    let mut seen_slugs = HashSet::new();
    for category in &catalog.categories {
        if category.name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "category name must be non-empty".to_string(),
            ));
        }

        let slug = category.slug();
        if !seen_slugs.insert(slug.clone()) {
            return Err(ConfigError::Validation(format!(
                "duplicate category slug: '{slug}' (from category '{}')",
                category.name
            )));
        }
    }

    Ok(())
}
