//! Feed, category, and listing configuration.

use serde::{Deserialize, Serialize};

/// Settings that shape the recipe feed and the category catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipesConfig {
    /// Number of cards per page on the public feed and "my recipes".
    #[serde(default = "default_page_size")]
    pub feed_page_size: u64,
    /// Lifetime of a cached public feed page in seconds.
    #[serde(default = "default_feed_ttl")]
    pub feed_cache_ttl_seconds: u64,
    /// Maximum number of categories that may exist.
    #[serde(default = "default_max_categories")]
    pub max_categories: i64,
    /// Categories created on first use when none exist.
    #[serde(default = "default_categories")]
    pub default_categories: Vec<String>,
    /// Default item count for the recent and popular lists.
    #[serde(default = "default_list_limit")]
    pub default_list_limit: i64,
}

impl Default for RecipesConfig {
    fn default() -> Self {
        Self {
            feed_page_size: default_page_size(),
            feed_cache_ttl_seconds: default_feed_ttl(),
            max_categories: default_max_categories(),
            default_categories: default_categories(),
            default_list_limit: default_list_limit(),
        }
    }
}

fn default_page_size() -> u64 {
    10
}

fn default_feed_ttl() -> u64 {
    20
}

fn default_max_categories() -> i64 {
    20
}

fn default_categories() -> Vec<String> {
    vec!["Drinks".to_string(), "Food".to_string(), "Dessert".to_string()]
}

fn default_list_limit() -> i64 {
    6
}
