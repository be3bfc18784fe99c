//! View models for the catalog UI surfaces
//!
//! Each view model owns its transient state (filters, selections, result
//! lists) and is the sole mutator of that state. Service errors are caught
//! at the call site and surfaced through `error_message`; no retries.

pub mod browse;
pub mod detail;
pub mod filter;
pub mod history;
pub mod search;

pub use browse::CatalogViewModel;
pub use detail::ProductDetailViewModel;
pub use search::CatalogSearchViewModel;

/// Capacity of the recent-searches and recently-viewed lists
pub const RECENT_CAPACITY: usize = 10;

/// Maximum number of search results surfaced per query
pub const MAX_SEARCH_RESULTS: usize = 50;
