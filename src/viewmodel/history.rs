//! Bounded most-recent-first lists for search history and recently viewed

/// A bounded, most-recent-first list with caller-defined deduplication.
///
/// Inserting an item equal to an existing entry (per the dedup predicate)
/// moves it to the front without growing the list; the list never exceeds
/// its capacity. In-memory only - nothing here persists.
#[derive(Debug, Clone)]
pub struct RecentList<T> {
    items: Vec<T>,
    capacity: usize,
}

impl<T> RecentList<T> {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::new(),
            capacity,
        }
    }

    /// Insert at the front, dropping any existing entry matching `is_dup`
    /// and truncating to capacity
    pub fn insert<F: Fn(&T) -> bool>(&mut self, item: T, is_dup: F) {
        self.items.retain(|existing| !is_dup(existing));
        self.items.insert(0, item);
        self.items.truncate(self.capacity);
    }

    /// Remove every entry matching the predicate
    pub fn remove<F: Fn(&T) -> bool>(&mut self, matches: F) {
        self.items.retain(|existing| !matches(existing));
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
