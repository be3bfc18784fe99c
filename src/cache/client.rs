//! Cached wrapper for the catalog API client
//!
//! The two hot responses (app config, category index) are memoized in
//! memory with TTLs taken from the remote config itself; everything else
//! goes through the SQLite response cache. The fresh-fetch path bypasses
//! both layers.

use async_trait::async_trait;
use serde::{Serialize, de::DeserializeOwned};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::cache::{CacheStorage, CacheTtl, Clock, Memo, SystemClock, cache_key};
use crate::client::CatalogApi;
use crate::client::models::{
    Category, CategoryIndex, CatalogConfig, FeaturedContent, ProductDetail, SearchIndex,
};
use crate::error::Result;

/// Caching wrapper for any [`CatalogApi`] implementation.
///
/// Caching can be disabled via the `enabled` flag (for `--no-cache`); the
/// memo layer stays active either way since it only spans one process.
pub struct CachedCatalogClient<C: CatalogApi> {
    inner: Arc<C>,
    storage: Option<Mutex<CacheStorage>>,
    config_memo: Memo<CatalogConfig>,
    index_memo: Memo<CategoryIndex>,
    clock: Arc<dyn Clock>,
}

impl<C: CatalogApi + 'static> CachedCatalogClient<C> {
    /// Create a new cached client wrapper.
    ///
    /// # Arguments
    /// * `inner` - The underlying API client to wrap
    /// * `enabled` - Whether the response cache is enabled (false for --no-cache)
    pub fn new(inner: C, enabled: bool) -> Self {
        let storage = if enabled {
            CacheStorage::open().ok().map(Mutex::new)
        } else {
            None
        };
        Self::with_parts(inner, storage, Arc::new(SystemClock))
    }

    /// Assemble from explicit parts (for tests: temp-dir storage, manual clock)
    pub fn with_parts(
        inner: C,
        storage: Option<Mutex<CacheStorage>>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            inner: Arc::new(inner),
            storage,
            config_memo: Memo::new(),
            index_memo: Memo::new(),
            clock,
        }
    }

    /// Get the inner client
    #[allow(dead_code)]
    pub fn inner(&self) -> &C {
        &self.inner
    }

    /// Drop both memoized values and purge the response cache entirely
    pub async fn clear_cache(&self) -> Result<usize> {
        self.config_memo.clear().await;
        self.index_memo.clear().await;

        let mut removed = 0;
        if let Some(ref storage) = self.storage
            && let Ok(guard) = storage.lock()
        {
            removed = guard.clear_all()?.entries_removed;
        }
        Ok(removed)
    }

    /// Clear only the category-index memo, then re-fetch the index
    pub async fn refresh_categories(&self) -> Result<CategoryIndex> {
        self.index_memo.clear().await;
        self.fetch_category_summaries().await
    }

    /// Response-cache statistics, when the cache is enabled
    pub fn cache_stats(&self) -> Option<crate::cache::storage::CacheStats> {
        let storage = self.storage.as_ref()?;
        let guard = storage.lock().ok()?;
        guard.stats().ok()
    }

    /// Try to get cached data from storage
    fn get_cached<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let storage = self.storage.as_ref()?;
        let guard = storage.lock().ok()?;
        guard
            .get(key)
            .ok()
            .flatten()
            .and_then(|data| serde_json::from_slice(&data).ok())
    }

    /// Store data in the response cache
    fn set_cached<T: Serialize>(
        &self,
        key: &str,
        data: &T,
        endpoint: &str,
        resource: Option<&str>,
        ttl: Duration,
    ) {
        if let Some(ref storage) = self.storage
            && let Ok(guard) = storage.lock()
            && let Ok(json) = serde_json::to_vec(data)
        {
            let _ = guard.put(key, &json, endpoint, resource, ttl);
        }
    }

    /// TTL for per-category/per-product responses, preferring the remote
    /// config when it has already been fetched
    async fn products_ttl(&self) -> Duration {
        match self.config_memo.peek().await {
            Some(config) => config.products_ttl().unwrap_or(CacheTtl::PRODUCTS),
            None => CacheTtl::PRODUCTS,
        }
    }

    async fn search_index_ttl(&self) -> Duration {
        match self.config_memo.peek().await {
            Some(config) => config.search_index_ttl().unwrap_or(CacheTtl::SEARCH_INDEX),
            None => CacheTtl::SEARCH_INDEX,
        }
    }
}

#[async_trait]
impl<C: CatalogApi + 'static> CatalogApi for CachedCatalogClient<C> {
    async fn fetch_config(&self) -> Result<CatalogConfig> {
        let inner = self.inner.clone();
        self.config_memo
            .get_or_fetch(
                self.clock.now(),
                |config: &CatalogConfig| Some(config.config_ttl().unwrap_or(CacheTtl::CONFIG)),
                || async move {
                    log::debug!("Memo miss: fetch_config");
                    inner.fetch_config().await
                },
            )
            .await
    }

    async fn fetch_category_summaries(&self) -> Result<CategoryIndex> {
        // The index TTL lives in the config; use it when already known
        let ttl = match self.config_memo.peek().await {
            Some(config) => config.categories_ttl().unwrap_or(CacheTtl::CATEGORIES),
            None => CacheTtl::CATEGORIES,
        };

        let inner = self.inner.clone();
        self.index_memo
            .get_or_fetch(
                self.clock.now(),
                move |_| Some(ttl),
                || async move {
                    log::debug!("Memo miss: fetch_category_summaries");
                    inner.fetch_category_summaries().await
                },
            )
            .await
    }

    async fn fetch_category(&self, slug: &str) -> Result<Category> {
        let key = cache_key("category", Some(slug), &[]);

        if let Some(cached) = self.get_cached(&key) {
            log::debug!("Cache hit: category {slug}");
            return Ok(cached);
        }

        let result = self.inner.fetch_category(slug).await?;
        let ttl = self.products_ttl().await;
        self.set_cached(&key, &result, "category", Some(slug), ttl);
        Ok(result)
    }

    /// Fresh path: straight through to the transport, never read from or
    /// written to any cache layer
    async fn fetch_category_fresh(&self, slug: &str) -> Result<Category> {
        self.inner.fetch_category_fresh(slug).await
    }

    async fn fetch_product_detail(&self, id: &str) -> Result<ProductDetail> {
        let key = cache_key("product_detail", Some(id), &[]);

        if let Some(cached) = self.get_cached(&key) {
            log::debug!("Cache hit: product_detail {id}");
            return Ok(cached);
        }

        let result = self.inner.fetch_product_detail(id).await?;
        let ttl = self.products_ttl().await;
        self.set_cached(&key, &result, "product_detail", Some(id), ttl);
        Ok(result)
    }

    async fn fetch_search_index(&self) -> Result<SearchIndex> {
        let key = cache_key("search_index", None, &[]);

        if let Some(cached) = self.get_cached(&key) {
            log::debug!("Cache hit: search_index");
            return Ok(cached);
        }

        let result = self.inner.fetch_search_index().await?;
        let ttl = self.search_index_ttl().await;
        self.set_cached(&key, &result, "search_index", None, ttl);
        Ok(result)
    }

    async fn fetch_featured_content(&self) -> Result<FeaturedContent> {
        let key = cache_key("featured_content", None, &[]);

        if let Some(cached) = self.get_cached(&key) {
            log::debug!("Cache hit: featured_content");
            return Ok(cached);
        }

        let result = self.inner.fetch_featured_content().await?;
        self.set_cached(&key, &result, "featured_content", None, CacheTtl::FEATURED);
        Ok(result)
    }
}
