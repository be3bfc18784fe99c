//! Search index wire models (`search-index-compact.json`) and the
//! view-facing result projection

use serde::{Deserialize, Serialize};

/// Compact client-side search index
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchIndex {
    pub products: Vec<SearchIndexEntry>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
}

/// One compact index record. Snake_case on the wire, unlike the
/// category/product payloads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchIndexEntry {
    pub id: String,
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// View-facing projection of an index entry
#[derive(Debug, Clone, Serialize)]
pub struct SearchResult {
    pub id: String,
    pub name: String,
    pub brand: Option<String>,
    pub category: Option<String>,
    pub price: Option<f64>,
    pub image_url: Option<String>,
}

impl From<&SearchIndexEntry> for SearchResult {
    fn from(entry: &SearchIndexEntry) -> Self {
        Self {
            id: entry.id.clone(),
            name: entry.name.clone(),
            brand: entry.brand.clone(),
            category: entry.category.clone(),
            price: entry.price,
            image_url: entry.image_url.clone(),
        }
    }
}

impl SearchResult {
    /// Price formatted for display
    pub fn formatted_price(&self) -> Option<String> {
        self.price.map(|p| format!("${p:.2}"))
    }

    /// Brand for display, falling back to the first space-delimited token
    /// of the name when no brand field is present. A heuristic, not a
    /// guaranteed-correct parse.
    pub fn brand_name(&self) -> String {
        if let Some(ref brand) = self.brand {
            return brand.clone();
        }
        self.name
            .split_whitespace()
            .next()
            .unwrap_or_default()
            .to_string()
    }

    /// Name with the brand prefix stripped when present, else with its
    /// first word dropped. Best-effort cosmetic derivation; lossy for
    /// multi-word brands missing from the `brand` field.
    pub fn product_description(&self) -> String {
        // `get` rejects a brand length that falls inside a multi-byte char
        // of the name, which case folding can produce.
        if let Some(ref brand) = self.brand
            && let Some(prefix) = self.name.get(..brand.len())
            && prefix.to_lowercase() == brand.to_lowercase()
        {
            return self.name[brand.len()..].trim_start().to_string();
        }
        let mut words = self.name.split_whitespace();
        words.next();
        words.collect::<Vec<_>>().join(" ")
    }
}
