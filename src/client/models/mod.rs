//! Wire models for the catalog API
//!
//! Field-name casing is inherited from the upstream data source and must be
//! preserved exactly: config and search-index payloads use `snake_case`,
//! category/product/content payloads use `camelCase`.

pub mod category;
pub mod config;
pub mod content;
pub mod product;
pub mod search;

pub use category::{Category, CategoryIndex, CategorySummary};
pub use config::CatalogConfig;
pub use content::FeaturedContent;
pub use product::{Availability, Price, Product, ProductDetail, Rating};
pub use search::{SearchIndex, SearchIndexEntry, SearchResult};
