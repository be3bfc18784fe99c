//! Mock catalog client for testing
//!
//! Implements [`CatalogApi`] without network access: responses are
//! configured up front, errors can be injected one-shot, and per-operation
//! call counts are tracked so tests can verify caching behavior.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

use super::CatalogApi;
use super::models::{
    Category, CategoryIndex, CatalogConfig, FeaturedContent, ProductDetail, SearchIndex,
};
use crate::error::{CatalogError, Result};

/// Mock catalog client.
///
/// # Example
/// ```ignore
/// let mock = MockCatalogClient::new()
///     .with_category(Category { id: "c1".into(), ... })
///     .await;
///
/// let category = mock.fetch_category("drills").await?;
/// assert_eq!(mock.call_counts().await.fetch_category, 1);
/// ```
pub struct MockCatalogClient {
    config: Arc<Mutex<Option<CatalogConfig>>>,
    index: Arc<Mutex<Option<CategoryIndex>>>,
    categories: Arc<Mutex<Vec<Category>>>,
    details: Arc<Mutex<Vec<ProductDetail>>>,
    search_index: Arc<Mutex<Option<SearchIndex>>>,
    featured: Arc<Mutex<Option<FeaturedContent>>>,
    /// Error to return (if any) - consumed on first use
    error: Arc<Mutex<Option<CatalogError>>>,
    call_count: Arc<Mutex<CallCounts>>,
}

impl Default for MockCatalogClient {
    fn default() -> Self {
        Self {
            config: Arc::new(Mutex::new(None)),
            index: Arc::new(Mutex::new(None)),
            categories: Arc::new(Mutex::new(Vec::new())),
            details: Arc::new(Mutex::new(Vec::new())),
            search_index: Arc::new(Mutex::new(None)),
            featured: Arc::new(Mutex::new(None)),
            error: Arc::new(Mutex::new(None)),
            call_count: Arc::new(Mutex::new(CallCounts::default())),
        }
    }
}

/// Tracks transport call counts for test verification
#[derive(Default, Debug, Clone)]
pub struct CallCounts {
    pub fetch_config: usize,
    pub fetch_category_summaries: usize,
    pub fetch_category: usize,
    pub fetch_category_fresh: usize,
    pub fetch_product_detail: usize,
    pub fetch_search_index: usize,
    pub fetch_featured_content: usize,
}

impl CallCounts {
    /// Total number of transport calls made
    pub fn total(&self) -> usize {
        self.fetch_config
            + self.fetch_category_summaries
            + self.fetch_category
            + self.fetch_category_fresh
            + self.fetch_product_detail
            + self.fetch_search_index
            + self.fetch_featured_content
    }
}

impl MockCatalogClient {
    /// Create a new mock client with empty responses
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the config payload
    pub async fn with_config(self, config: CatalogConfig) -> Self {
        *self.config.lock().await = Some(config);
        self
    }

    /// Configure the category index
    pub async fn with_index(self, index: CategoryIndex) -> Self {
        *self.index.lock().await = Some(index);
        self
    }

    /// Add a resolvable category
    pub async fn with_category(self, category: Category) -> Self {
        self.categories.lock().await.push(category);
        self
    }

    /// Add a resolvable product detail
    pub async fn with_product_detail(self, detail: ProductDetail) -> Self {
        self.details.lock().await.push(detail);
        self
    }

    /// Configure the search index
    pub async fn with_search_index(self, index: SearchIndex) -> Self {
        *self.search_index.lock().await = Some(index);
        self
    }

    /// Configure featured content
    pub async fn with_featured(self, content: FeaturedContent) -> Self {
        *self.featured.lock().await = Some(content);
        self
    }

    /// Configure an error to return on the next call (consumed after one use)
    pub async fn with_error(self, error: CatalogError) -> Self {
        *self.error.lock().await = Some(error);
        self
    }

    /// Get the call counts for verification in tests
    pub async fn call_counts(&self) -> CallCounts {
        self.call_count.lock().await.clone()
    }

    /// Check for a pending injected error and consume it
    async fn check_error(&self) -> Result<()> {
        let mut error = self.error.lock().await;
        if let Some(e) = error.take() {
            return Err(e.into());
        }
        Ok(())
    }

    fn default_config() -> CatalogConfig {
        CatalogConfig {
            version: Some("mock".to_string()),
            base_url: None,
            features: Default::default(),
            caching: Default::default(),
        }
    }
}

#[async_trait]
impl CatalogApi for MockCatalogClient {
    async fn fetch_config(&self) -> Result<CatalogConfig> {
        self.check_error().await?;
        self.call_count.lock().await.fetch_config += 1;

        let config = self.config.lock().await;
        Ok(config.clone().unwrap_or_else(Self::default_config))
    }

    async fn fetch_category_summaries(&self) -> Result<CategoryIndex> {
        self.check_error().await?;
        self.call_count.lock().await.fetch_category_summaries += 1;

        let index = self.index.lock().await;
        Ok(index.clone().unwrap_or(CategoryIndex {
            categories: vec![],
            last_updated: None,
            version: None,
            total_categories: None,
            total_products: None,
        }))
    }

    async fn fetch_category(&self, slug: &str) -> Result<Category> {
        self.check_error().await?;
        self.call_count.lock().await.fetch_category += 1;

        let categories = self.categories.lock().await;
        categories
            .iter()
            .find(|c| c.slug == slug)
            .cloned()
            .ok_or_else(|| CatalogError::NotFound(format!("categories/{slug}")).into())
    }

    async fn fetch_category_fresh(&self, slug: &str) -> Result<Category> {
        self.check_error().await?;
        self.call_count.lock().await.fetch_category_fresh += 1;

        let categories = self.categories.lock().await;
        categories
            .iter()
            .find(|c| c.slug == slug)
            .cloned()
            .ok_or_else(|| CatalogError::NotFound(format!("categories/{slug}")).into())
    }

    async fn fetch_product_detail(&self, id: &str) -> Result<ProductDetail> {
        self.check_error().await?;
        self.call_count.lock().await.fetch_product_detail += 1;

        let details = self.details.lock().await;
        details
            .iter()
            .find(|d| d.id == id)
            .cloned()
            .ok_or_else(|| CatalogError::NotFound(format!("products/{id}")).into())
    }

    async fn fetch_search_index(&self) -> Result<SearchIndex> {
        self.check_error().await?;
        self.call_count.lock().await.fetch_search_index += 1;

        let index = self.search_index.lock().await;
        Ok(index.clone().unwrap_or(SearchIndex {
            products: vec![],
            last_updated: None,
        }))
    }

    async fn fetch_featured_content(&self) -> Result<FeaturedContent> {
        self.check_error().await?;
        self.call_count.lock().await.fetch_featured_content += 1;

        let featured = self.featured.lock().await;
        Ok(featured
            .clone()
            .unwrap_or(FeaturedContent { sections: None }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(slug: &str) -> Category {
        Category {
            id: format!("id-{slug}"),
            name: slug.to_string(),
            slug: slug.to_string(),
            products: None,
            product_ids: None,
            total_products: None,
        }
    }

    #[tokio::test]
    async fn test_mock_default_empty() {
        let mock = MockCatalogClient::new();

        let index = mock.fetch_category_summaries().await.unwrap();
        assert!(index.categories.is_empty());

        let search = mock.fetch_search_index().await.unwrap();
        assert!(search.products.is_empty());
    }

    #[tokio::test]
    async fn test_mock_category_lookup_by_slug() {
        let mock = MockCatalogClient::new()
            .with_category(category("drills"))
            .await;

        let found = mock.fetch_category("drills").await.unwrap();
        assert_eq!(found.slug, "drills");

        let missing = mock.fetch_category("saws").await;
        assert!(missing.is_err());
    }

    #[tokio::test]
    async fn test_mock_error_consumed_after_one_use() {
        let mock = MockCatalogClient::new()
            .with_error(CatalogError::NoData)
            .await;

        assert!(mock.fetch_config().await.is_err());
        assert!(mock.fetch_config().await.is_ok());
    }

    #[tokio::test]
    async fn test_mock_call_counts() {
        let mock = MockCatalogClient::new();

        mock.fetch_config().await.unwrap();
        mock.fetch_config().await.unwrap();
        mock.fetch_search_index().await.unwrap();

        let counts = mock.call_counts().await;
        assert_eq!(counts.fetch_config, 2);
        assert_eq!(counts.fetch_search_index, 1);
        assert_eq!(counts.total(), 3);
    }

    #[tokio::test]
    async fn test_fetch_products_default_method() {
        let mut with_products = category("drills");
        with_products.products = Some(vec![]);

        let mock = MockCatalogClient::new()
            .with_category(with_products)
            .await;

        // Embedded empty list and legacy None both collapse to empty
        let products = mock.fetch_products("drills").await.unwrap();
        assert!(products.is_empty());
    }
}
