// ABOUTME: In-memory response cache with LRU eviction and per-entry expiry
// ABOUTME: Used by the catalog client to avoid refetching recipes and lists
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Barkeep Contributors

use std::hash::Hash;
use std::num::NonZeroUsize;
use std::time::Duration;

use lru::LruCache;
use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::debug;

/// Cache entry with expiration
#[derive(Debug, Clone)]
struct CacheEntry<V> {
    data: V,
    expires_at: Instant,
}

impl<V> CacheEntry<V> {
    fn new(data: V, ttl: Duration) -> Self {
        Self {
            data,
            expires_at: Instant::now() + ttl,
        }
    }

    fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// Bounded cache of cloned values
///
/// `LruCache::get` updates recency, so reads take the lock exclusively.
/// Expired entries are dropped lazily when read or purged.
#[derive(Debug)]
pub struct TtlCache<K: Hash + Eq, V> {
    store: Mutex<LruCache<K, CacheEntry<V>>>,
    ttl: Duration,
}

impl<K: Hash + Eq, V: Clone> TtlCache<K, V> {
    /// Capacity used when zero entries are requested
    const DEFAULT_CAPACITY: NonZeroUsize = match NonZeroUsize::new(1000) {
        Some(n) => n,
        None => unreachable!(),
    };

    /// Create a cache holding at most `capacity` entries for `ttl` each
    #[must_use]
    pub fn new(capacity: usize, ttl: Duration) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(Self::DEFAULT_CAPACITY);
        Self {
            store: Mutex::new(LruCache::new(capacity)),
            ttl,
        }
    }

    /// Cached value for `key`, if present and fresh
    pub async fn get(&self, key: &K) -> Option<V> {
        let mut store = self.store.lock().await;
        match store.get(key) {
            Some(entry) if !entry.is_expired() => Some(entry.data.clone()),
            Some(_) => {
                store.pop(key);
                None
            }
            None => None,
        }
    }

    /// Store `value` under `key`, evicting the least recently used entry when full
    pub async fn insert(&self, key: K, value: V) {
        self.store
            .lock()
            .await
            .put(key, CacheEntry::new(value, self.ttl));
    }

    /// Drop every expired entry, returning how many were removed
    pub async fn purge_expired(&self) -> usize
    where
        K: Clone,
    {
        let mut store = self.store.lock().await;
        let expired: Vec<K> = store
            .iter()
            .filter(|(_, entry)| entry.is_expired())
            .map(|(key, _)| key.clone())
            .collect();
        for key in &expired {
            store.pop(key);
        }
        drop(store);
        if !expired.is_empty() {
            debug!(purged = expired.len(), "Purged expired cache entries");
        }
        expired.len()
    }

    /// Number of entries, fresh or not
    pub async fn len(&self) -> usize {
        self.store.lock().await.len()
    }

    /// Whether the cache holds no entries
    pub async fn is_empty(&self) -> bool {
        self.store.lock().await.is_empty()
    }

    /// Remove every entry
    pub async fn clear(&self) {
        self.store.lock().await.clear();
    }
}
