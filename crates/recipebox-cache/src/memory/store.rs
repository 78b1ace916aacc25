//! In-memory cache implementation using the moka crate.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use dashmap::DashMap;
use moka::Expiry;
use moka::future::Cache;
use moka::notification::RemovalCause;
use tracing::debug;

use recipebox_core::config::cache::MemoryCacheConfig;
use recipebox_core::result::AppResult;
use recipebox_core::traits::cache::CacheProvider;

/// A cached value together with its own time to live and the tags it is
/// indexed under.
#[derive(Debug, Clone)]
struct Entry {
    value: String,
    ttl: Duration,
    tags: Arc<[String]>,
}

type TagIndex = DashMap<String, HashSet<String>>;

/// Drops `key` from each of `tags`, removing sets that become empty.
fn unindex(index: &TagIndex, key: &str, tags: &[String]) {
    for tag in tags {
        if let Some(mut keys) = index.get_mut(tag) {
            keys.remove(key);
        }
        index.remove_if(tag, |_, keys| keys.is_empty());
    }
}

/// Expires each entry after the TTL it was written with.
struct PerEntryTtl;

impl Expiry<String, Entry> for PerEntryTtl {
    fn expire_after_create(&self, _key: &String, value: &Entry, _created_at: Instant) -> Option<Duration> {
        Some(value.ttl)
    }

    fn expire_after_update(
        &self,
        _key: &String,
        value: &Entry,
        _updated_at: Instant,
        _duration_until_expiry: Option<Duration>,
    ) -> Option<Duration> {
        Some(value.ttl)
    }
}

/// In-memory cache provider using moka.
#[derive(Debug, Clone)]
pub struct MemoryCacheProvider {
    /// The underlying moka cache.
    cache: Cache<String, Entry>,
    /// Tag name to the live keys stored under it.
    tags: Arc<TagIndex>,
}

impl MemoryCacheProvider {
    /// Create a new in-memory cache from configuration.
    ///
    /// Expired and size-evicted entries are dropped from the tag index by
    /// the eviction listener. Replacements are skipped because the new
    /// entry carries its own tags.
    pub fn new(config: &MemoryCacheConfig) -> Self {
        let tags: Arc<TagIndex> = Arc::new(DashMap::new());
        let index = Arc::clone(&tags);

        let cache = Cache::builder()
            .max_capacity(config.max_capacity)
            .expire_after(PerEntryTtl)
            .eviction_listener(move |key: Arc<String>, entry: Entry, cause| {
                if cause != RemovalCause::Replaced {
                    unindex(&index, &key, &entry.tags);
                }
            })
            .build();

        Self { cache, tags }
    }

    async fn insert(&self, key: &str, value: &str, ttl: Duration, tags: Arc<[String]>) {
        let entry = Entry {
            value: value.to_string(),
            ttl,
            tags,
        };
        self.cache.insert(key.to_string(), entry).await;
    }

    #[cfg(test)]
    fn indexed_keys(&self, tag: &str) -> usize {
        self.tags.get(tag).map_or(0, |keys| keys.len())
    }
}

#[async_trait]
impl CacheProvider for MemoryCacheProvider {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.cache.get(key).await.map(|entry| entry.value))
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> AppResult<()> {
        self.insert(key, value, ttl, Arc::from([])).await;
        Ok(())
    }

    async fn set_tagged(
        &self,
        key: &str,
        value: &str,
        ttl: Duration,
        tags: &[&str],
    ) -> AppResult<()> {
        let owned: Arc<[String]> = tags.iter().map(|t| (*t).to_string()).collect();
        // Index after the write so the removal notice for a replaced
        // expired entry cannot unindex the new one.
        self.insert(key, value, ttl, owned).await;
        for tag in tags {
            self.tags
                .entry((*tag).to_string())
                .or_default()
                .insert(key.to_string());
        }
        Ok(())
    }

    async fn delete(&self, key: &str) -> AppResult<()> {
        self.cache.remove(key).await;
        Ok(())
    }

    async fn invalidate_tag(&self, tag: &str) -> AppResult<u64> {
        let Some((_, keys)) = self.tags.remove(tag) else {
            return Ok(0);
        };

        let mut count = 0u64;
        for key in keys {
            if self.cache.remove(&key).await.is_some() {
                count += 1;
            }
        }

        debug!(tag, count, "Invalidated tagged cache entries");
        Ok(count)
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }
}
