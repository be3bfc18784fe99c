//! Caching for catalog responses
//!
//! Two layers: in-memory memo cells for the two hot responses (app config,
//! category index) and a SQLite-backed response cache for everything else.
//! TTLs come from the remote config when present, with the defaults below
//! as fallback.

pub mod client;
pub mod clock;
pub mod key;
pub mod memo;
pub mod storage;

use std::time::Duration;

/// Fallback cache TTLs per resource type, used when the remote
/// `CatalogConfig.caching.ttl` block omits a value.
pub struct CacheTtl;

impl CacheTtl {
    /// App configuration - effectively stable for a process lifetime
    pub const CONFIG: Duration = Duration::from_secs(60 * 60); // 1 hr

    /// Category index - changes when the catalog is re-published
    pub const CATEGORIES: Duration = Duration::from_secs(30 * 60); // 30 min

    /// Per-category and per-product payloads
    pub const PRODUCTS: Duration = Duration::from_secs(10 * 60); // 10 min

    /// Compact search index
    pub const SEARCH_INDEX: Duration = Duration::from_secs(30 * 60); // 30 min

    /// Featured/editorial content
    pub const FEATURED: Duration = Duration::from_secs(10 * 60); // 10 min
}

// Re-export main types
pub use client::CachedCatalogClient;
pub use clock::{Clock, SystemClock};
pub use key::cache_key;
pub use memo::Memo;
pub use storage::CacheStorage;
