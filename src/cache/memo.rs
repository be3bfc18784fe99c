//! In-memory memo cell with TTL and cold-start coalescing

use chrono::{DateTime, Utc};
use std::future::Future;
use std::time::Duration;
use tokio::sync::Mutex;

use crate::error::Result;

/// A memoized value with its fetch timestamp.
///
/// The slot is guarded by an async mutex held across the fetch, so
/// concurrent cold-start callers are coalesced: the first caller performs
/// the fetch while the rest wait on the lock and then see the stored
/// value. Memo reads and writes are linearizable.
pub struct Memo<T> {
    slot: Mutex<Option<MemoEntry<T>>>,
}

struct MemoEntry<T> {
    value: T,
    fetched_at: DateTime<Utc>,
}

impl<T> Default for Memo<T> {
    fn default() -> Self {
        Self {
            slot: Mutex::new(None),
        }
    }
}

impl<T: Clone> Memo<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the memoized value, fetching when absent or expired.
    ///
    /// `ttl_of` derives the TTL from the stored value itself (the remote
    /// config carries its own TTL); `None` means the value never expires
    /// within the process lifetime.
    pub async fn get_or_fetch<F, Fut, TtlFn>(
        &self,
        now: DateTime<Utc>,
        ttl_of: TtlFn,
        fetch: F,
    ) -> Result<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T>>,
        TtlFn: Fn(&T) -> Option<Duration>,
    {
        let mut slot = self.slot.lock().await;

        if let Some(entry) = slot.as_ref() {
            let fresh = match ttl_of(&entry.value) {
                None => true,
                Some(ttl) => {
                    let age = now.signed_duration_since(entry.fetched_at);
                    age.to_std().map(|age| age < ttl).unwrap_or(true)
                }
            };
            if fresh {
                return Ok(entry.value.clone());
            }
        }

        let value = fetch().await?;
        *slot = Some(MemoEntry {
            value: value.clone(),
            fetched_at: now,
        });
        Ok(value)
    }

    /// Peek at the memoized value without fetching
    pub async fn peek(&self) -> Option<T> {
        self.slot.lock().await.as_ref().map(|e| e.value.clone())
    }

    /// Drop the memoized value
    pub async fn clear(&self) {
        *self.slot.lock().await = None;
    }
}
