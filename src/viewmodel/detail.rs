//! Product detail view model
//!
//! Loads one product's full detail record and tracks which gallery image
//! is selected. The selection resets to the first image on every load,
//! including loads that fail.

use std::sync::Arc;

use crate::client::CatalogApi;
use crate::client::models::ProductDetail;

/// Detail page state for a single product
pub struct ProductDetailViewModel<C: CatalogApi> {
    client: Arc<C>,
    detail: Option<ProductDetail>,
    selected_image_index: usize,
    error_message: Option<String>,
    is_loading: bool,
}

impl<C: CatalogApi> ProductDetailViewModel<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self {
            client,
            detail: None,
            selected_image_index: 0,
            error_message: None,
            is_loading: false,
        }
    }

    /// Load the detail record for `id`, replacing any previous product.
    /// The gallery selection is reset before the fetch so a failed load
    /// never leaves a stale index pointing into the old product's images.
    pub async fn load_product_detail(&mut self, id: &str) {
        self.is_loading = true;
        self.error_message = None;
        self.selected_image_index = 0;

        match self.client.fetch_product_detail(id).await {
            Ok(detail) => {
                self.detail = Some(detail);
            }
            Err(e) => {
                self.detail = None;
                self.error_message = Some(e.to_string());
            }
        }
        self.is_loading = false;
    }

    fn image_count(&self) -> usize {
        self.detail.as_ref().map_or(0, |d| d.media.images.len())
    }

    /// Advance the gallery selection, wrapping past the last image.
    /// No-op with fewer than two images.
    pub fn next_image(&mut self) {
        let count = self.image_count();
        if count > 1 {
            self.selected_image_index = (self.selected_image_index + 1) % count;
        }
    }

    /// Step the gallery selection back, wrapping before the first image.
    /// No-op with fewer than two images.
    pub fn previous_image(&mut self) {
        let count = self.image_count();
        if count > 1 {
            self.selected_image_index = (self.selected_image_index + count - 1) % count;
        }
    }

    /// Jump directly to an image. Out-of-range indices are ignored.
    pub fn select_image(&mut self, index: usize) {
        if index < self.image_count() {
            self.selected_image_index = index;
        }
    }

    pub fn detail(&self) -> Option<&ProductDetail> {
        self.detail.as_ref()
    }

    pub fn selected_image_index(&self) -> usize {
        self.selected_image_index
    }

    /// URL of the currently selected image, if the product has any
    pub fn selected_image(&self) -> Option<&str> {
        self.detail
            .as_ref()
            .and_then(|d| d.media.images.get(self.selected_image_index))
            .map(String::as_str)
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }
}
