//! Remote catalog configuration (`app-config.json`)

use std::collections::HashMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Versioned API configuration served by the catalog host.
///
/// Loaded lazily on first use and memoized; the TTLs under `caching` drive
/// expiry of the memoized values and the response cache.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Config schema version
    #[serde(default)]
    pub version: Option<String>,

    /// Base URL the catalog recommends for subsequent fetches
    #[serde(default)]
    pub base_url: Option<String>,

    /// Feature flags keyed by feature name
    #[serde(default)]
    pub features: HashMap<String, bool>,

    /// Cache policy per resource type
    #[serde(default)]
    pub caching: CachePolicy,
}

/// Cache policy block of the remote config
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CachePolicy {
    /// TTLs in seconds per resource type
    #[serde(default)]
    pub ttl: TtlSettings,
}

/// Per-resource TTLs in seconds. Missing fields fall back to the
/// compiled-in defaults in [`crate::cache::CacheTtl`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TtlSettings {
    #[serde(default)]
    pub config: Option<u64>,

    #[serde(default)]
    pub categories: Option<u64>,

    #[serde(default)]
    pub products: Option<u64>,

    #[serde(default)]
    pub search_index: Option<u64>,
}

impl CatalogConfig {
    /// TTL for the memoized config itself
    pub fn config_ttl(&self) -> Option<Duration> {
        self.caching.ttl.config.map(Duration::from_secs)
    }

    /// TTL for the memoized category index
    pub fn categories_ttl(&self) -> Option<Duration> {
        self.caching.ttl.categories.map(Duration::from_secs)
    }

    /// TTL for per-category and per-product responses
    pub fn products_ttl(&self) -> Option<Duration> {
        self.caching.ttl.products.map(Duration::from_secs)
    }

    /// TTL for the search index
    pub fn search_index_ttl(&self) -> Option<Duration> {
        self.caching.ttl.search_index.map(Duration::from_secs)
    }

    /// Look up a feature flag. Flags act as kill switches: a surface is
    /// enabled unless the config explicitly disables it.
    pub fn feature_enabled(&self, name: &str) -> bool {
        self.features.get(name).copied().unwrap_or(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_decodes_snake_case() {
        let json = r#"{
            "version": "3",
            "base_url": "https://catalog.example.com/v1",
            "features": { "featured_content": true },
            "caching": { "ttl": { "config": 3600, "categories": 600, "search_index": 1800 } }
        }"#;

        let config: CatalogConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.version.as_deref(), Some("3"));
        assert_eq!(
            config.base_url.as_deref(),
            Some("https://catalog.example.com/v1")
        );
        assert!(config.feature_enabled("featured_content"));
        // Absent flags leave the surface enabled
        assert!(config.feature_enabled("unknown_flag"));
        assert_eq!(config.config_ttl(), Some(Duration::from_secs(3600)));
        assert_eq!(config.categories_ttl(), Some(Duration::from_secs(600)));
        assert_eq!(config.products_ttl(), None);
        assert_eq!(config.search_index_ttl(), Some(Duration::from_secs(1800)));
    }

    #[test]
    fn test_config_all_fields_optional() {
        let config: CatalogConfig = serde_json::from_str("{}").unwrap();
        assert!(config.version.is_none());
        assert!(config.config_ttl().is_none());
    }

    #[test]
    fn test_feature_flag_explicitly_disabled() {
        let json = r#"{ "features": { "featured_content": false } }"#;
        let config: CatalogConfig = serde_json::from_str(json).unwrap();
        assert!(!config.feature_enabled("featured_content"));
    }
}
