//! Catalog API client

use async_trait::async_trait;

pub mod http;
#[cfg(test)]
pub mod mock;
pub mod models;

pub use http::HttpCatalogClient;
#[cfg(test)]
#[allow(unused_imports)]
pub use mock::MockCatalogClient;

use crate::error::Result;
use models::{Category, CategoryIndex, CatalogConfig, FeaturedContent, Product, ProductDetail, SearchIndex};

/// Catalog API operations.
///
/// The sole network boundary to the remote catalog. Implemented by the raw
/// HTTP client, the caching wrapper, and the test mock. All endpoints are
/// read-only JSON GETs.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// Fetch the versioned app configuration
    async fn fetch_config(&self) -> Result<CatalogConfig>;

    /// Fetch the full category index
    async fn fetch_category_summaries(&self) -> Result<CategoryIndex>;

    /// Fetch one resolved category. The slug may contain `/` for nested
    /// paths, e.g. `appliances/refrigerators`.
    async fn fetch_category(&self, slug: &str) -> Result<Category>;

    /// Fetch one category bypassing every cache layer. Distinct request
    /// path from [`fetch_category`](CatalogApi::fetch_category), for
    /// explicit refresh flows.
    async fn fetch_category_fresh(&self, slug: &str) -> Result<Category>;

    /// Fetch the detail payload for one product
    async fn fetch_product_detail(&self, id: &str) -> Result<ProductDetail>;

    /// Fetch the compact client-side search index
    async fn fetch_search_index(&self) -> Result<SearchIndex>;

    /// Fetch featured/editorial content sections
    async fn fetch_featured_content(&self) -> Result<FeaturedContent>;

    /// Convenience wrapper: the embedded products of a category, or empty
    /// when the category carries no product data
    async fn fetch_products(&self, category_slug: &str) -> Result<Vec<Product>> {
        let category = self.fetch_category(category_slug).await?;
        Ok(category.products.unwrap_or_default())
    }
}
