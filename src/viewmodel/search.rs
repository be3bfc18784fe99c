//! Typeahead search view model
//!
//! Keystrokes schedule a debounced search over a client-side index that is
//! loaded at most once per process lifetime. Each keystroke supersedes the
//! pending search and bumps a generation counter; a completed search only
//! applies its results if its generation is still current, so a slow early
//! query can never clobber a faster later one.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;

use crate::client::CatalogApi;
use crate::client::models::{SearchIndexEntry, SearchResult};
use crate::viewmodel::filter::{contains_ci, contains_fold};
use crate::viewmodel::history::RecentList;
use crate::viewmodel::{MAX_SEARCH_RESULTS, RECENT_CAPACITY};

/// Quiet period after the last keystroke before a search fires
const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// Fixed pool for synthetic related-search suggestions; only the first
/// two are used
const RELATED_TERMS: [&str; 5] = ["kit", "set", "accessories", "parts", "bundle"];

const MAX_PRODUCT_SUGGESTIONS: usize = 5;
const MAX_RELATED_SUGGESTIONS: usize = 2;

/// One entry of the suggestion list
#[derive(Debug, Clone)]
pub struct SearchSuggestion {
    pub text: String,
    /// Category annotation, carried by the literal-query suggestion when
    /// any match exists
    pub category: Option<String>,
    /// Backing product for product suggestions
    pub product: Option<SearchResult>,
}

struct SearchState {
    search_text: String,
    results: Vec<SearchResult>,
    index: Vec<SearchIndexEntry>,
    index_loaded: bool,
    is_loading: bool,
    error_message: Option<String>,
    recent_searches: RecentList<String>,
    recently_viewed: RecentList<SearchResult>,
}

impl SearchState {
    fn new() -> Self {
        Self {
            search_text: String::new(),
            results: Vec::new(),
            index: Vec::new(),
            index_loaded: false,
            is_loading: false,
            error_message: None,
            recent_searches: RecentList::with_capacity(RECENT_CAPACITY),
            recently_viewed: RecentList::with_capacity(RECENT_CAPACITY),
        }
    }
}

/// Typeahead search over the compact product index
pub struct CatalogSearchViewModel<C: CatalogApi> {
    client: Arc<C>,
    state: Arc<Mutex<SearchState>>,
    generation: Arc<AtomicU64>,
    pending: Mutex<Option<JoinHandle<()>>>,
    debounce: Duration,
}

impl<C: CatalogApi + 'static> CatalogSearchViewModel<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self::with_debounce(client, SEARCH_DEBOUNCE)
    }

    /// Override the debounce window (tests use zero)
    pub fn with_debounce(client: Arc<C>, debounce: Duration) -> Self {
        Self {
            client,
            state: Arc::new(Mutex::new(SearchState::new())),
            generation: Arc::new(AtomicU64::new(0)),
            pending: Mutex::new(None),
            debounce,
        }
    }

    /// Record a keystroke.
    ///
    /// Empty text clears results immediately; otherwise a debounced search
    /// is scheduled, superseding any pending one.
    pub async fn set_search_text(&self, text: &str) {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        {
            let mut state = self.state.lock().await;
            state.search_text = text.to_string();
            if text.is_empty() {
                state.results.clear();
            }
        }

        let mut pending = self.pending.lock().await;
        if let Some(handle) = pending.take() {
            handle.abort();
        }
        if text.is_empty() {
            return;
        }

        let client = self.client.clone();
        let state = self.state.clone();
        let gen_counter = self.generation.clone();
        let query = text.to_string();
        let debounce = self.debounce;

        *pending = Some(tokio::spawn(async move {
            tokio::time::sleep(debounce).await;
            let results = run_search(client.as_ref(), &state, &query).await;
            apply_results(&state, &gen_counter, generation, results).await;
        }));
    }

    /// Wait for the pending debounced search, if any, to finish
    pub async fn settle(&self) {
        let handle = self.pending.lock().await.take();
        if let Some(handle) = handle {
            // Aborted tasks resolve with a JoinError; that is fine here
            let _ = handle.await;
        }
    }

    /// One-shot search, bypassing the debounce (CLI path). Results are
    /// applied under the current generation.
    pub async fn perform_search(&self, query: &str) -> Vec<SearchResult> {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        {
            let mut state = self.state.lock().await;
            state.search_text = query.to_string();
        }

        let results = run_search(self.client.as_ref(), &self.state, query).await;
        apply_results(&self.state, &self.generation, generation, results.clone()).await;
        results
    }

    /// Ordered suggestion list for the current text: the literal query
    /// (annotated with the top match's category when any match exists),
    /// up to 5 product-backed suggestions, then up to 2 synthetic related
    /// searches from the fixed term pool.
    pub async fn search_suggestions(&self) -> Vec<SearchSuggestion> {
        let state = self.state.lock().await;
        if state.search_text.is_empty() {
            return Vec::new();
        }

        let mut suggestions = Vec::new();

        suggestions.push(SearchSuggestion {
            text: state.search_text.clone(),
            category: state.results.first().and_then(|r| r.category.clone()),
            product: None,
        });

        for result in state.results.iter().take(MAX_PRODUCT_SUGGESTIONS) {
            suggestions.push(SearchSuggestion {
                text: result.name.clone(),
                category: result.category.clone(),
                product: Some(result.clone()),
            });
        }

        for term in RELATED_TERMS.iter().take(MAX_RELATED_SUGGESTIONS) {
            suggestions.push(SearchSuggestion {
                text: format!("{} {}", state.search_text, term),
                category: None,
                product: None,
            });
        }

        suggestions
    }

    /// Record a chosen suggestion: its text becomes a recent search, and
    /// either its backing product or the current top match becomes a
    /// recently viewed item.
    pub async fn select_search_suggestion(&self, suggestion: &SearchSuggestion) {
        self.add_recent_search(&suggestion.text).await;

        let viewed = match suggestion.product {
            Some(ref product) => Some(product.clone()),
            None => self.state.lock().await.results.first().cloned(),
        };
        if let Some(product) = viewed {
            self.add_recently_viewed(&product).await;
        }
    }

    /// Insert a recent search: case-insensitive dedupe, most-recent-first,
    /// bounded at capacity
    pub async fn add_recent_search(&self, text: &str) {
        let text = text.trim();
        if text.is_empty() {
            return;
        }
        let mut state = self.state.lock().await;
        let lowered = text.to_lowercase();
        state
            .recent_searches
            .insert(text.to_string(), |existing| {
                existing.to_lowercase() == lowered
            });
    }

    pub async fn remove_recent_search(&self, text: &str) {
        let mut state = self.state.lock().await;
        state.recent_searches.remove(|existing| existing == text);
    }

    pub async fn clear_all_recent_searches(&self) {
        self.state.lock().await.recent_searches.clear();
    }

    /// Insert a recently viewed product: id dedupe, most-recent-first,
    /// bounded at capacity
    pub async fn add_recently_viewed(&self, product: &SearchResult) {
        let mut state = self.state.lock().await;
        let id = product.id.clone();
        state
            .recently_viewed
            .insert(product.clone(), |existing| existing.id == id);
    }

    pub async fn search_results(&self) -> Vec<SearchResult> {
        self.state.lock().await.results.clone()
    }

    pub async fn search_text(&self) -> String {
        self.state.lock().await.search_text.clone()
    }

    pub async fn recent_searches(&self) -> Vec<String> {
        self.state.lock().await.recent_searches.items().to_vec()
    }

    pub async fn recently_viewed(&self) -> Vec<SearchResult> {
        self.state.lock().await.recently_viewed.items().to_vec()
    }

    pub async fn is_loading(&self) -> bool {
        self.state.lock().await.is_loading
    }

    pub async fn error_message(&self) -> Option<String> {
        self.state.lock().await.error_message.clone()
    }
}

/// Load the index if needed, then match the query against it
async fn run_search<C: CatalogApi>(
    client: &C,
    state: &Mutex<SearchState>,
    query: &str,
) -> Vec<SearchResult> {
    ensure_index_loaded(client, state).await;
    let state = state.lock().await;
    match_index(&state.index, query)
}

/// Load the search index at most once per process lifetime.
///
/// `is_loading` is set only around this load, never per keystroke.
async fn ensure_index_loaded<C: CatalogApi>(client: &C, state: &Mutex<SearchState>) {
    {
        let mut state = state.lock().await;
        if state.index_loaded {
            return;
        }
        state.is_loading = true;
    }

    match client.fetch_search_index().await {
        Ok(index) => {
            let mut state = state.lock().await;
            state.index = index.products;
            state.index_loaded = true;
            state.is_loading = false;
        }
        Err(e) => {
            let mut state = state.lock().await;
            state.error_message = Some(e.to_string());
            state.is_loading = false;
        }
    }
}

/// Apply results only when the generation is still current - last request
/// wins by generation counter
async fn apply_results(
    state: &Mutex<SearchState>,
    gen_counter: &AtomicU64,
    generation: u64,
    results: Vec<SearchResult>,
) {
    if gen_counter.load(Ordering::SeqCst) != generation {
        log::debug!("Discarding stale search results (generation {generation})");
        return;
    }
    let mut state = state.lock().await;
    state.results = results;
}

/// First `MAX_SEARCH_RESULTS` matches in index-scan order; no relevance
/// ranking
fn match_index(index: &[SearchIndexEntry], query: &str) -> Vec<SearchResult> {
    index
        .iter()
        .filter(|entry| entry_matches(entry, query))
        .take(MAX_SEARCH_RESULTS)
        .map(SearchResult::from)
        .collect()
}

/// A product matches when the query is a case/diacritic-insensitive
/// substring of its name, brand, or category, or a case-insensitive
/// substring of any keyword
fn entry_matches(entry: &SearchIndexEntry, query: &str) -> bool {
    contains_fold(&entry.name, query)
        || entry
            .brand
            .as_deref()
            .is_some_and(|brand| contains_fold(brand, query))
        || entry
            .category
            .as_deref()
            .is_some_and(|category| contains_fold(category, query))
        || entry
            .keywords
            .as_ref()
            .is_some_and(|keywords| keywords.iter().any(|k| contains_ci(k, query)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::MockCatalogClient;
    use crate::client::models::SearchIndex;
    use crate::error::CatalogError;

    fn entry(id: &str, name: &str, brand: Option<&str>, keywords: &[&str]) -> SearchIndexEntry {
        SearchIndexEntry {
            id: id.to_string(),
            name: name.to_string(),
            brand: brand.map(str::to_string),
            category: Some("Power Tools".to_string()),
            price: Some(129.0),
            rating: None,
            keywords: if keywords.is_empty() {
                None
            } else {
                Some(keywords.iter().map(|k| k.to_string()).collect())
            },
            image_url: None,
        }
    }

    fn dewalt_index() -> SearchIndex {
        SearchIndex {
            products: vec![
                entry("1", "DEWALT Drill", Some("DEWALT"), &["power tool", "cordless"]),
                entry("2", "Makita Circular Saw", Some("Makita"), &[]),
                SearchIndexEntry {
                    category: Some("Kitchen".to_string()),
                    ..entry("3", "Café Press", None, &[])
                },
            ],
            last_updated: None,
        }
    }

    async fn vm_with_index(index: SearchIndex) -> CatalogSearchViewModel<MockCatalogClient> {
        let mock = MockCatalogClient::new().with_search_index(index).await;
        CatalogSearchViewModel::with_debounce(Arc::new(mock), Duration::ZERO)
    }

    #[tokio::test]
    async fn test_debounced_search_finds_match() {
        let vm = vm_with_index(dewalt_index()).await;

        vm.set_search_text("drill").await;
        vm.settle().await;

        let results = vm.search_results().await;
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "1");
    }

    #[tokio::test]
    async fn test_query_matches_brand_category_and_keywords() {
        let vm = vm_with_index(dewalt_index()).await;

        assert_eq!(vm.perform_search("makita").await.len(), 1);
        // Category match hits every entry carrying it
        assert_eq!(vm.perform_search("power tools").await.len(), 2);
        // Keyword match is case-insensitive and independent of the
        // name/brand/category channels
        assert_eq!(vm.perform_search("CORDLESS").await.len(), 1);
    }

    #[tokio::test]
    async fn test_diacritic_insensitive_name_match() {
        let vm = vm_with_index(dewalt_index()).await;
        let results = vm.perform_search("cafe").await;
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "3");
    }

    #[tokio::test]
    async fn test_results_capped_at_fifty_in_index_order() {
        let products: Vec<SearchIndexEntry> = (0..60)
            .map(|i| entry(&format!("p{i}"), &format!("Drill {i}"), None, &[]))
            .collect();
        let vm = vm_with_index(SearchIndex {
            products,
            last_updated: None,
        })
        .await;

        let results = vm.perform_search("drill").await;
        assert_eq!(results.len(), MAX_SEARCH_RESULTS);
        assert_eq!(results[0].id, "p0");
        assert_eq!(results[49].id, "p49");
    }

    #[tokio::test]
    async fn test_empty_text_clears_results() {
        let vm = vm_with_index(dewalt_index()).await;

        vm.set_search_text("drill").await;
        vm.settle().await;
        assert!(!vm.search_results().await.is_empty());

        vm.set_search_text("").await;
        vm.settle().await;
        assert!(vm.search_results().await.is_empty());
    }

    #[tokio::test]
    async fn test_index_loaded_once() {
        let vm = vm_with_index(dewalt_index()).await;

        vm.perform_search("drill").await;
        vm.perform_search("saw").await;
        vm.perform_search("makita").await;

        // Reach into the mock for transport counts
        let counts = vm.client.call_counts().await;
        assert_eq!(counts.fetch_search_index, 1);
        assert!(!vm.is_loading().await);
    }

    #[tokio::test]
    async fn test_index_load_error_surfaces_message() {
        let mock = MockCatalogClient::new()
            .with_error(CatalogError::Server(500))
            .await;
        let vm = CatalogSearchViewModel::with_debounce(Arc::new(mock), Duration::ZERO);

        let results = vm.perform_search("drill").await;
        assert!(results.is_empty());
        assert!(vm.error_message().await.unwrap().contains("500"));
        assert!(!vm.is_loading().await);
    }

    #[tokio::test]
    async fn test_stale_generation_discarded() {
        let vm = vm_with_index(dewalt_index()).await;

        let generation = vm.generation.fetch_add(1, Ordering::SeqCst) + 1;
        // A newer keystroke arrives before the old search completes
        vm.generation.fetch_add(1, Ordering::SeqCst);

        let stale = vec![SearchResult {
            id: "stale".to_string(),
            name: "Stale".to_string(),
            brand: None,
            category: None,
            price: None,
            image_url: None,
        }];
        apply_results(&vm.state, &vm.generation, generation, stale).await;

        assert!(vm.search_results().await.is_empty());
    }

    #[tokio::test]
    async fn test_new_keystroke_supersedes_pending_search() {
        let mock = MockCatalogClient::new()
            .with_search_index(dewalt_index())
            .await;
        // Long debounce: the first search never gets to run
        let vm = CatalogSearchViewModel::with_debounce(
            Arc::new(mock),
            Duration::from_secs(30),
        );

        vm.set_search_text("drill").await;
        vm.set_search_text("").await;
        vm.settle().await;

        assert!(vm.search_results().await.is_empty());
        assert_eq!(vm.client.call_counts().await.fetch_search_index, 0);
    }

    #[tokio::test]
    async fn test_recent_searches_bounded_most_recent_first() {
        let vm = vm_with_index(dewalt_index()).await;

        for i in 0..15 {
            vm.add_recent_search(&format!("query {i}")).await;
        }

        let recents = vm.recent_searches().await;
        assert_eq!(recents.len(), RECENT_CAPACITY);
        assert_eq!(recents[0], "query 14");
        assert_eq!(recents[9], "query 5");
    }

    #[tokio::test]
    async fn test_recent_search_dedupe_case_insensitive() {
        let vm = vm_with_index(dewalt_index()).await;

        vm.add_recent_search("drill").await;
        vm.add_recent_search("saw").await;
        vm.add_recent_search("DRILL").await;

        let recents = vm.recent_searches().await;
        assert_eq!(recents.len(), 2);
        assert_eq!(recents[0], "DRILL");
    }

    #[tokio::test]
    async fn test_remove_and_clear_recent_searches() {
        let vm = vm_with_index(dewalt_index()).await;

        vm.add_recent_search("drill").await;
        vm.add_recent_search("saw").await;

        vm.remove_recent_search("drill").await;
        assert_eq!(vm.recent_searches().await, vec!["saw".to_string()]);

        vm.clear_all_recent_searches().await;
        assert!(vm.recent_searches().await.is_empty());
    }

    #[tokio::test]
    async fn test_recently_viewed_dedupe_by_id() {
        let vm = vm_with_index(dewalt_index()).await;
        let results = vm.perform_search("power tools").await;

        vm.add_recently_viewed(&results[0]).await;
        vm.add_recently_viewed(&results[1]).await;
        vm.add_recently_viewed(&results[0]).await;

        let viewed = vm.recently_viewed().await;
        assert_eq!(viewed.len(), 2);
        assert_eq!(viewed[0].id, results[0].id);
    }

    #[tokio::test]
    async fn test_suggestions_shape() {
        let vm = vm_with_index(dewalt_index()).await;
        vm.perform_search("drill").await;

        let suggestions = vm.search_suggestions().await;

        // Literal query first, annotated with the top match's category
        assert_eq!(suggestions[0].text, "drill");
        assert_eq!(suggestions[0].category.as_deref(), Some("Power Tools"));
        assert!(suggestions[0].product.is_none());

        // One product-backed suggestion for the single match
        assert_eq!(suggestions[1].text, "DEWALT Drill");
        assert!(suggestions[1].product.is_some());

        // Two synthetic related searches from the fixed pool
        let texts: Vec<&str> = suggestions.iter().map(|s| s.text.as_str()).collect();
        assert!(texts.contains(&"drill kit"));
        assert!(texts.contains(&"drill set"));
        assert_eq!(suggestions.len(), 4);
    }

    #[tokio::test]
    async fn test_suggestions_empty_without_text() {
        let vm = vm_with_index(dewalt_index()).await;
        assert!(vm.search_suggestions().await.is_empty());
    }

    #[tokio::test]
    async fn test_suggestions_cap_product_entries_at_five() {
        let products: Vec<SearchIndexEntry> = (0..8)
            .map(|i| entry(&format!("p{i}"), &format!("Drill {i}"), None, &[]))
            .collect();
        let vm = vm_with_index(SearchIndex {
            products,
            last_updated: None,
        })
        .await;
        vm.perform_search("drill").await;

        let suggestions = vm.search_suggestions().await;
        let product_backed = suggestions.iter().filter(|s| s.product.is_some()).count();
        assert_eq!(product_backed, MAX_PRODUCT_SUGGESTIONS);
    }

    #[tokio::test]
    async fn test_select_suggestion_records_history() {
        let vm = vm_with_index(dewalt_index()).await;
        vm.perform_search("drill").await;

        let suggestions = vm.search_suggestions().await;

        // Literal-query suggestion: falls back to the top match for viewed
        vm.select_search_suggestion(&suggestions[0]).await;
        assert_eq!(vm.recent_searches().await[0], "drill");
        assert_eq!(vm.recently_viewed().await[0].id, "1");

        // Product-backed suggestion records its own product
        vm.select_search_suggestion(&suggestions[1]).await;
        assert_eq!(vm.recent_searches().await[0], "DEWALT Drill");
    }
}
