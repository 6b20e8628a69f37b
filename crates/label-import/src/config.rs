//! Configuration for the label pipeline.

use std::env::{self, VarError};

use crate::category::Category;
use crate::error::ConfigError;
use crate::spec::LabelSpec;

/// Environment variable selecting the categories to extract.
pub const ENV_CATEGORIES: &str = "LABEL_IMPORT_CATEGORIES";

/// Categories extracted when nothing else is configured.
///
/// Version and status are known but left out: versions explode the label
/// catalog and status is carried by the issue state instead.
pub const DEFAULT_CATEGORIES: [Category; 4] = [
    Category::Priority,
    Category::Resolution,
    Category::Component,
    Category::Type,
];

/// Label pipeline configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Categories to extract, in application order. Never contains duplicates.
    pub categories: Vec<Category>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            categories: DEFAULT_CATEGORIES.to_vec(),
        }
    }
}

impl PipelineConfig {
    /// Build a configuration from explicit categories, dropping repeats.
    #[must_use]
    pub fn with_categories(categories: impl IntoIterator<Item = Category>) -> Self {
        let mut unique = Vec::new();
        for category in categories {
            if !unique.contains(&category) {
                unique.push(category);
            }
        }
        Self { categories: unique }
    }

    /// Parse a comma-separated category list. Blank input means the default.
    pub fn parse(list: &str) -> Result<Self, ConfigError> {
        let names: Vec<&str> = list
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();
        if names.is_empty() {
            return Ok(Self::default());
        }
        let categories = names
            .into_iter()
            .map(str::parse)
            .collect::<Result<Vec<Category>, _>>()?;
        Ok(Self::with_categories(categories))
    }

    /// Load from `LABEL_IMPORT_CATEGORIES`, falling back to the default.
    pub fn from_env() -> Result<Self, ConfigError> {
        match env::var(ENV_CATEGORIES) {
            Ok(list) => Self::parse(&list),
            Err(VarError::NotPresent) => Ok(Self::default()),
            Err(VarError::NotUnicode(_)) => Err(ConfigError::NotUnicode(ENV_CATEGORIES)),
        }
    }

    /// Rules for the configured categories.
    pub fn specs(&self) -> impl Iterator<Item = &'static LabelSpec> + '_ {
        self.categories.iter().map(|c| LabelSpec::for_category(*c))
    }
}
