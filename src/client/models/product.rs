//! Product wire models (`products/{id}/details.json` and embedded list items)

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Product list item as embedded in category responses
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_number: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,

    pub title: String,

    /// Subcategory tag used by browse filters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<Rating>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    /// Free-text badge strings, e.g. "Best Seller"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badges: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability: Option<Availability>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Price>,
}

impl Product {
    /// Percentage saved against the original price, when discounted
    pub fn savings_percentage(&self) -> Option<u32> {
        self.price.as_ref().and_then(Price::savings_percentage)
    }

    /// Whether the product is marked in stock (absent availability counts as unknown/false)
    pub fn in_stock(&self) -> bool {
        self.availability.as_ref().is_some_and(|a| a.in_stock)
    }
}

/// Star rating with review count
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rating {
    pub average: f64,
    pub count: u32,
}

/// Stock availability
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Availability {
    pub in_stock: bool,
}

/// Current/original pricing
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Price {
    pub current: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

impl Price {
    /// `round((original - current) / original * 100)`, present only when
    /// `original > current`.
    pub fn savings_percentage(&self) -> Option<u32> {
        match self.original {
            Some(original) if original > self.current => {
                Some((((original - self.current) / original) * 100.0).round() as u32)
            }
            _ => None,
        }
    }
}

/// Rich product record keyed by the same id as the list item
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetail {
    pub id: String,
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Price>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<Rating>,

    #[serde(default)]
    pub media: ProductMedia,

    /// String-keyed specification map
    #[serde(default)]
    pub specifications: BTreeMap<String, String>,

    #[serde(default)]
    pub features: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability: Option<Availability>,
}

impl ProductDetail {
    /// Specifications sorted lexicographically by key.
    ///
    /// Consumers rely on this ordering for stable display.
    pub fn specifications_list(&self) -> Vec<(&str, &str)> {
        self.specifications
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect()
    }
}

/// Ordered media attached to a product detail
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductMedia {
    #[serde(default)]
    pub images: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub videos: Option<Vec<String>>,
}
