//! Staleness-window query cache
//!
//! A small, explicit cache mapping a query key to its last fetched value,
//! the time it was fetched, and its refresh bookkeeping. One cache instance
//! covers one query family (e.g. the tickets list, or tickets by id) with a
//! single staleness window configured at construction.
//!
//! The cache never evicts: entries live for the lifetime of the owning
//! process. Time is measured with [`tokio::time::Instant`] so staleness
//! behaviour can be driven by the paused test clock.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::time::Instant;

/// Outcome of a cache read
///
/// `Stale` hands the caller the last-known value together with the
/// obligation to start exactly one background refresh for the key: the
/// in-flight flag is already set when `Stale` is returned, so the refresh
/// must end in [`QueryCache::store`] or [`QueryCache::end_refresh`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup<V> {
    /// Value is within its staleness window; no fetch needed
    Fresh(V),
    /// Value expired; serve it and refresh in the background
    Stale(V),
    /// A refresh for this key is already in flight; serve the last value
    Pending(V),
    /// Nothing usable cached; the caller must fetch in the foreground
    Miss,
}

#[derive(Debug)]
struct CacheEntry<V> {
    value: V,
    fetched_at: Instant,
    invalidated: bool,
    refreshing: bool,
}

/// Cache for one query family, keyed by `K`
#[derive(Debug)]
pub struct QueryCache<K, V> {
    stale_after: Duration,
    entries: Mutex<HashMap<K, CacheEntry<V>>>,
}

impl<K, V> QueryCache<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    /// Create a cache whose entries go stale `stale_after` after each store
    #[must_use]
    pub fn new(stale_after: Duration) -> Self {
        Self {
            stale_after,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Read the entry for `key`
    ///
    /// Explicitly invalidated entries are never served as fresh: with no
    /// refresh in flight they read as [`Lookup::Miss`], forcing a foreground
    /// fetch; with one in flight the last-known value is returned so the
    /// caller does not issue a duplicate call.
    pub fn lookup(&self, key: &K) -> Lookup<V> {
        let mut entries = self.lock();
        let Some(entry) = entries.get_mut(key) else {
            return Lookup::Miss;
        };

        if entry.invalidated {
            if entry.refreshing {
                return Lookup::Pending(entry.value.clone());
            }
            return Lookup::Miss;
        }

        if entry.fetched_at.elapsed() < self.stale_after {
            return Lookup::Fresh(entry.value.clone());
        }

        if entry.refreshing {
            return Lookup::Pending(entry.value.clone());
        }

        entry.refreshing = true;
        Lookup::Stale(entry.value.clone())
    }

    /// Record a freshly fetched value, restarting its staleness window
    ///
    /// Clears any invalidation and ends an in-flight refresh for the key.
    pub fn store(&self, key: K, value: V) {
        let mut entries = self.lock();
        entries.insert(
            key,
            CacheEntry {
                value,
                fetched_at: Instant::now(),
                invalidated: false,
                refreshing: false,
            },
        );
    }

    /// Mark the entry for `key` as invalid, forcing the next read to refetch
    ///
    /// No-op for keys never stored.
    pub fn invalidate(&self, key: &K) {
        let mut entries = self.lock();
        if let Some(entry) = entries.get_mut(key) {
            entry.invalidated = true;
        }
    }

    /// Claim the refresh slot for `key`
    ///
    /// Returns `true` when the caller should go ahead and fetch; `false`
    /// when another refresh is already in flight or nothing was ever cached
    /// under the key (a later read will fetch in the foreground instead).
    pub fn begin_refresh(&self, key: &K) -> bool {
        let mut entries = self.lock();
        match entries.get_mut(key) {
            Some(entry) if !entry.refreshing => {
                entry.refreshing = true;
                true
            },
            _ => false,
        }
    }

    /// Release the refresh slot without storing a value (failure path)
    pub fn end_refresh(&self, key: &K) {
        let mut entries = self.lock();
        if let Some(entry) = entries.get_mut(key) {
            entry.refreshing = false;
        }
    }

    /// Whether the entry for `key` is currently marked invalid
    #[must_use]
    pub fn is_invalidated(&self, key: &K) -> bool {
        self.lock().get(key).is_some_and(|entry| entry.invalidated)
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<K, CacheEntry<V>>> {
        // A poisoned guard still holds coherent data; writes are plain stores.
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: Duration = Duration::from_secs(300);

    fn cache() -> QueryCache<&'static str, Vec<u32>> {
        QueryCache::new(WINDOW)
    }

    #[tokio::test(start_paused = true)]
    async fn miss_then_fresh_within_window() {
        let cache = cache();
        assert_eq!(cache.lookup(&"list"), Lookup::Miss);

        cache.store("list", vec![1, 2]);
        assert_eq!(cache.lookup(&"list"), Lookup::Fresh(vec![1, 2]));

        tokio::time::advance(WINDOW - Duration::from_secs(1)).await;
        assert_eq!(cache.lookup(&"list"), Lookup::Fresh(vec![1, 2]));
    }

    #[tokio::test(start_paused = true)]
    async fn expired_entry_serves_stale_once_then_pending() {
        let cache = cache();
        cache.store("list", vec![1]);
        tokio::time::advance(WINDOW).await;

        // First reader takes the refresh obligation, later readers dedup.
        assert_eq!(cache.lookup(&"list"), Lookup::Stale(vec![1]));
        assert_eq!(cache.lookup(&"list"), Lookup::Pending(vec![1]));

        cache.store("list", vec![2]);
        assert_eq!(cache.lookup(&"list"), Lookup::Fresh(vec![2]));
    }

    #[tokio::test(start_paused = true)]
    async fn failed_refresh_releases_the_slot() {
        let cache = cache();
        cache.store("list", vec![1]);
        tokio::time::advance(WINDOW).await;

        assert_eq!(cache.lookup(&"list"), Lookup::Stale(vec![1]));
        cache.end_refresh(&"list");
        // The next reader can retry.
        assert_eq!(cache.lookup(&"list"), Lookup::Stale(vec![1]));
    }

    #[tokio::test(start_paused = true)]
    async fn invalidated_entry_is_never_served_as_fresh() {
        let cache = cache();
        cache.store("list", vec![1]);
        cache.invalidate(&"list");
        assert!(cache.is_invalidated(&"list"));

        assert_eq!(cache.lookup(&"list"), Lookup::Miss);

        // With an enqueued refetch in flight, readers get the old value
        // instead of issuing a duplicate call.
        assert!(cache.begin_refresh(&"list"));
        assert_eq!(cache.lookup(&"list"), Lookup::Pending(vec![1]));

        cache.store("list", vec![2]);
        assert!(!cache.is_invalidated(&"list"));
        assert_eq!(cache.lookup(&"list"), Lookup::Fresh(vec![2]));
    }

    #[tokio::test(start_paused = true)]
    async fn begin_refresh_claims_the_slot_exactly_once() {
        let cache = cache();
        assert!(!cache.begin_refresh(&"list"), "nothing cached yet");

        cache.store("list", vec![1]);
        cache.invalidate(&"list");
        assert!(cache.begin_refresh(&"list"));
        assert!(!cache.begin_refresh(&"list"), "already in flight");

        cache.end_refresh(&"list");
        assert!(cache.begin_refresh(&"list"));
    }

    #[tokio::test(start_paused = true)]
    async fn invalidate_unknown_key_is_a_no_op() {
        let cache = cache();
        cache.invalidate(&"detail");
        assert_eq!(cache.lookup(&"detail"), Lookup::Miss);
        assert!(!cache.is_invalidated(&"detail"));
    }
}
