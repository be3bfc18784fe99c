//! Category wire models (`categories/index.json`, `categories/{slug}/_all.json`)

use serde::{Deserialize, Serialize};

use super::product::Product;

/// Top-level category index response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryIndex {
    /// Root of the category tree
    pub categories: Vec<CategorySummary>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_categories: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_products: Option<u32>,
}

/// One node of the recursive category tree
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySummary {
    pub id: String,
    pub name: String,
    pub slug: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_count: Option<u32>,

    /// Slash-separated path for nested categories, e.g. `appliances/refrigerators`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    #[serde(default)]
    pub subcategories: Vec<CategorySummary>,
}

/// A resolved category.
///
/// New-format responses embed `products`; legacy responses carry only
/// `productIds`/`totalProducts`. Callers must branch on
/// [`Category::has_product_data`] before rendering a product grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    pub slug: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub products: Option<Vec<Product>>,

    /// Legacy format: product ids without embedded data
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_ids: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_products: Option<u32>,
}

impl Category {
    /// True only when the response embeds a non-empty product list
    pub fn has_product_data(&self) -> bool {
        self.products.as_ref().is_some_and(|p| !p.is_empty())
    }
}
