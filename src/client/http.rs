//! HTTP catalog client implementation

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client as HttpClient, StatusCode, Url};
use serde::de::DeserializeOwned;

use super::CatalogApi;
use super::models::{
    Category, CategoryIndex, CatalogConfig, FeaturedContent, ProductDetail, SearchIndex,
};
use crate::error::{CatalogError, Result};

/// Fixed request timeout; no per-call override exists
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Raw HTTP client for the catalog API.
///
/// Performs no caching and no retries; retry policy, if any, is the
/// caller's responsibility.
pub struct HttpCatalogClient {
    http: HttpClient,
    base_url: String,
}

impl HttpCatalogClient {
    /// Create a client rooted at the given base URL
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Build and validate the absolute URL for a resource path
    fn url_for(&self, path: &str) -> Result<Url> {
        let raw = format!("{}/{}", self.base_url, path);
        Url::parse(&raw).map_err(|_| CatalogError::InvalidUrl(raw).into())
    }

    /// GET a JSON resource, mapping status codes to the catalog error
    /// taxonomy: 404 -> NotFound, other non-2xx -> Server, empty body ->
    /// NoData, parse failure -> Decode.
    async fn get_json<T: DeserializeOwned>(&self, path: &str, no_cache: bool) -> Result<T> {
        let url = self.url_for(path)?;

        let mut request = self.http.get(url);
        if no_cache {
            // Fresh path: ask intermediaries to skip their caches too
            request = request
                .header("Cache-Control", "no-cache")
                .header("Pragma", "no-cache");
        }

        let response = request.send().await.map_err(CatalogError::from)?;

        let status = response.status();
        match status {
            s if s.is_success() => {
                let body = response.bytes().await.map_err(CatalogError::from)?;
                if body.is_empty() {
                    return Err(CatalogError::NoData.into());
                }
                serde_json::from_slice(&body)
                    .map_err(|e| CatalogError::Decode(e.to_string()).into())
            }
            StatusCode::NOT_FOUND => Err(CatalogError::NotFound(path.to_string()).into()),
            s => Err(CatalogError::Server(s.as_u16()).into()),
        }
    }
}

#[async_trait]
impl CatalogApi for HttpCatalogClient {
    async fn fetch_config(&self) -> Result<CatalogConfig> {
        self.get_json("app-config.json", false).await
    }

    async fn fetch_category_summaries(&self) -> Result<CategoryIndex> {
        self.get_json("categories/index.json", false).await
    }

    async fn fetch_category(&self, slug: &str) -> Result<Category> {
        self.get_json(&format!("categories/{slug}/_all.json"), false)
            .await
    }

    async fn fetch_category_fresh(&self, slug: &str) -> Result<Category> {
        self.get_json(&format!("categories/{slug}/_all.json"), true)
            .await
    }

    async fn fetch_product_detail(&self, id: &str) -> Result<ProductDetail> {
        self.get_json(&format!("products/{id}/details.json"), false)
            .await
    }

    async fn fetch_search_index(&self) -> Result<SearchIndex> {
        self.get_json("search-index-compact.json", false).await
    }

    async fn fetch_featured_content(&self) -> Result<FeaturedContent> {
        self.get_json("featured-content.json", false).await
    }
}
