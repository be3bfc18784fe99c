//! Featured content wire models (`featured-content.json`)

use serde::{Deserialize, Serialize};

use super::product::Product;

/// Editorial sections for the storefront landing surface
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeaturedContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sections: Option<Vec<ContentSection>>,
}

impl FeaturedContent {
    /// Sections or empty when the payload omits them
    pub fn sections(&self) -> &[ContentSection] {
        self.sections.as_deref().unwrap_or_default()
    }
}

/// One editorial section with optional embedded products
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,

    #[serde(default)]
    pub products: Vec<Product>,
}
