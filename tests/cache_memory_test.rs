// ABOUTME: Integration tests for the LRU/TTL response cache
// ABOUTME: Expiry under paused time, refresh on overwrite, capacity, and clearing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Barkeep Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::time::Duration;

use barkeep::cache::TtlCache;
use tokio::time::advance;

#[tokio::test(start_paused = true)]
async fn test_overwrite_restarts_lifetime() {
    let cache = TtlCache::new(10, Duration::from_secs(10));
    cache.insert("i:Gin".to_owned(), vec!["17222"]).await;

    advance(Duration::from_secs(8)).await;
    cache.insert("i:Gin".to_owned(), vec!["17222", "11001"]).await;
    advance(Duration::from_secs(8)).await;

    assert_eq!(
        cache.get(&"i:Gin".to_owned()).await,
        Some(vec!["17222", "11001"])
    );
}

#[tokio::test(start_paused = true)]
async fn test_purge_keeps_fresh_entries() {
    let cache = TtlCache::new(10, Duration::from_secs(5));
    cache.insert(1_u32, "old").await;
    advance(Duration::from_secs(3)).await;
    cache.insert(2_u32, "new").await;
    advance(Duration::from_secs(3)).await;

    assert_eq!(cache.purge_expired().await, 1);
    assert_eq!(cache.len().await, 1);
    assert_eq!(cache.get(&2).await, Some("new"));
}

#[tokio::test]
async fn test_capacity_bounds_entries() {
    let cache = TtlCache::new(3, Duration::from_secs(60));
    for id in 0..10_u32 {
        cache.insert(id, id * 2).await;
    }
    assert_eq!(cache.len().await, 3);
    assert_eq!(cache.get(&0).await, None);
    assert_eq!(cache.get(&9).await, Some(18));
}

#[tokio::test]
async fn test_clear() {
    let cache = TtlCache::new(3, Duration::from_secs(60));
    cache.insert("a", 1).await;
    cache.clear().await;
    assert!(cache.is_empty().await);
}
