//! Category browse view model

use std::sync::Arc;

use crate::client::CatalogApi;
use crate::client::models::{CategorySummary, Product};
use crate::viewmodel::filter::contains_fold;

/// Browse state: the category tree, one loaded category's products, and
/// the subcategory/text filters applied on top.
pub struct CatalogViewModel<C: CatalogApi> {
    client: Arc<C>,

    pub categories: Vec<CategorySummary>,
    pub products: Vec<Product>,
    pub selected_subcategory: Option<String>,
    pub filter_text: String,
    pub error_message: Option<String>,
    pub is_loading: bool,
}

impl<C: CatalogApi> CatalogViewModel<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self {
            client,
            categories: Vec::new(),
            products: Vec::new(),
            selected_subcategory: None,
            filter_text: String::new(),
            error_message: None,
            is_loading: false,
        }
    }

    /// Load the category tree
    pub async fn load_categories(&mut self) {
        self.is_loading = true;
        self.error_message = None;

        match self.client.fetch_category_summaries().await {
            Ok(index) => self.categories = index.categories,
            Err(e) => self.error_message = Some(e.to_string()),
        }
        self.is_loading = false;
    }

    /// Load one category's products.
    ///
    /// The subcategory filter is reset on every load - filters do not
    /// persist across category switches. Legacy-format categories without
    /// embedded product data yield an empty list plus an error message
    /// rather than silently showing nothing.
    pub async fn load_products(&mut self, slug: &str) {
        self.selected_subcategory = None;
        self.is_loading = true;
        self.error_message = None;

        match self.client.fetch_category(slug).await {
            Ok(category) => self.apply_category(category),
            Err(e) => {
                self.products = Vec::new();
                self.error_message = Some(e.to_string());
            }
        }
        self.is_loading = false;
    }

    /// Refresh one category's products bypassing every cache layer
    pub async fn refresh_products(&mut self, slug: &str) {
        self.selected_subcategory = None;
        self.is_loading = true;
        self.error_message = None;

        match self.client.fetch_category_fresh(slug).await {
            Ok(category) => self.apply_category(category),
            Err(e) => {
                self.products = Vec::new();
                self.error_message = Some(e.to_string());
            }
        }
        self.is_loading = false;
    }

    fn apply_category(&mut self, category: crate::client::models::Category) {
        if category.has_product_data() {
            self.products = category.products.unwrap_or_default();
        } else {
            self.products = Vec::new();
            self.error_message = Some(format!(
                "Category '{}' has no embedded product data",
                category.name
            ));
        }
    }

    /// Toggle the subcategory filter: selecting the current selection
    /// clears it (radio-button-with-deselect)
    pub fn select_subcategory(&mut self, tag: &str) {
        if self.selected_subcategory.as_deref() == Some(tag) {
            self.selected_subcategory = None;
        } else {
            self.selected_subcategory = Some(tag.to_string());
        }
    }

    /// Distinct subcategory tags in product order
    pub fn subcategories(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for product in &self.products {
            if let Some(ref tag) = product.subcategory
                && !seen.contains(&tag.as_str())
            {
                seen.push(tag.as_str());
            }
        }
        seen
    }

    /// Products passing both filters.
    ///
    /// The subcategory filter (exact tag match) is applied first, then the
    /// case/diacritic-insensitive text filter on title or brand. The
    /// filters intersect, so application order does not change the result.
    pub fn filtered_products(&self) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| match self.selected_subcategory {
                Some(ref tag) => p.subcategory.as_deref() == Some(tag.as_str()),
                None => true,
            })
            .filter(|p| {
                if self.filter_text.is_empty() {
                    return true;
                }
                contains_fold(&p.title, &self.filter_text)
                    || p.brand
                        .as_deref()
                        .is_some_and(|b| contains_fold(b, &self.filter_text))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::MockCatalogClient;
    use crate::client::models::Category;

    fn product(id: &str, title: &str, brand: Option<&str>, subcategory: Option<&str>) -> Product {
        Product {
            id: id.to_string(),
            model_number: None,
            brand: brand.map(str::to_string),
            title: title.to_string(),
            subcategory: subcategory.map(str::to_string),
            rating: None,
            image_url: None,
            badges: None,
            availability: None,
            price: None,
        }
    }

    fn tools_category() -> Category {
        Category {
            id: "c1".to_string(),
            name: "Tools".to_string(),
            slug: "tools".to_string(),
            products: Some(vec![
                product("p1", "DEWALT 20V Drill", Some("DEWALT"), Some("Drills")),
                product("p2", "Makita Circular Saw", Some("Makita"), Some("Saws")),
                product("p3", "DEWALT Jigsaw", Some("DEWALT"), Some("Saws")),
            ]),
            product_ids: None,
            total_products: None,
        }
    }

    async fn loaded_vm() -> CatalogViewModel<MockCatalogClient> {
        let mock = MockCatalogClient::new().with_category(tools_category()).await;
        let mut vm = CatalogViewModel::new(Arc::new(mock));
        vm.load_products("tools").await;
        vm
    }

    #[tokio::test]
    async fn test_load_products() {
        let vm = loaded_vm().await;
        assert_eq!(vm.products.len(), 3);
        assert!(vm.error_message.is_none());
        assert!(!vm.is_loading);
    }

    #[tokio::test]
    async fn test_subcategory_toggle_deselects() {
        let mut vm = loaded_vm().await;

        vm.select_subcategory("Saws");
        assert_eq!(vm.selected_subcategory.as_deref(), Some("Saws"));

        vm.select_subcategory("Saws");
        assert_eq!(vm.selected_subcategory, None);
    }

    #[tokio::test]
    async fn test_subcategory_switch() {
        let mut vm = loaded_vm().await;

        vm.select_subcategory("Saws");
        vm.select_subcategory("Drills");
        assert_eq!(vm.selected_subcategory.as_deref(), Some("Drills"));
    }

    #[tokio::test]
    async fn test_filters_are_intersected() {
        let mut vm = loaded_vm().await;

        vm.select_subcategory("Saws");
        vm.filter_text = "dewalt".to_string();

        let filtered = vm.filtered_products();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "p3");
    }

    #[tokio::test]
    async fn test_text_filter_matches_title_or_brand() {
        let mut vm = loaded_vm().await;

        vm.filter_text = "makita".to_string();
        assert_eq!(vm.filtered_products().len(), 1);

        vm.filter_text = "saw".to_string();
        assert_eq!(vm.filtered_products().len(), 2);
    }

    #[tokio::test]
    async fn test_load_resets_subcategory_selection() {
        let mut vm = loaded_vm().await;

        vm.select_subcategory("Saws");
        vm.load_products("tools").await;
        assert_eq!(vm.selected_subcategory, None);
    }

    #[tokio::test]
    async fn test_legacy_category_signals_data_gap() {
        let legacy = Category {
            id: "c2".to_string(),
            name: "Legacy".to_string(),
            slug: "legacy".to_string(),
            products: None,
            product_ids: Some(vec!["p9".to_string()]),
            total_products: Some(1),
        };
        let mock = MockCatalogClient::new().with_category(legacy).await;
        let mut vm = CatalogViewModel::new(Arc::new(mock));

        vm.load_products("legacy").await;

        assert!(vm.products.is_empty());
        assert!(vm.error_message.is_some());
        assert!(!vm.is_loading);
    }

    #[tokio::test]
    async fn test_fetch_error_surfaces_message() {
        let mock = MockCatalogClient::new();
        let mut vm = CatalogViewModel::new(Arc::new(mock));

        vm.load_products("missing").await;

        assert!(vm.products.is_empty());
        assert!(vm.error_message.as_deref().unwrap().contains("not found"));
        assert!(!vm.is_loading);
    }

    #[tokio::test]
    async fn test_subcategories_in_product_order() {
        let vm = loaded_vm().await;
        assert_eq!(vm.subcategories(), vec!["Drills", "Saws"]);
    }
}
