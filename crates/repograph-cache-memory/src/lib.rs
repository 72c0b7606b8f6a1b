//! In-memory tree cache.

#![warn(missing_docs)]
#![warn(clippy::all)]

use std::{
    sync::{Mutex, MutexGuard},
    time::Duration,
};

use async_trait::async_trait;
use indexmap::IndexMap;
use repograph_cache_interface::{CacheError, TreeCacheService};
use repograph_models::RepoTree;
use tokio::time::Instant;
use tracing::debug;

#[derive(Debug, Clone)]
struct CacheEntry {
    tree: RepoTree,
    created_at: Instant,
}

/// Bounded in-memory tree cache.
///
/// Entries are kept in recency order, least recently used first.
/// A stale entry is reported as a miss but stays in place until it is
/// overwritten or evicted.
#[derive(Debug)]
pub struct MemoryTreeCache {
    capacity: usize,
    ttl: Duration,
    entries: Mutex<IndexMap<String, CacheEntry>>,
}

impl MemoryTreeCache {
    /// Creates a cache holding at most `capacity` trees, fresh for `ttl`.
    pub fn new(capacity: usize, ttl: Duration) -> Self {
        Self {
            capacity: capacity.max(1),
            ttl,
            entries: Mutex::new(IndexMap::with_capacity(capacity.min(1024))),
        }
    }

    /// Number of stored entries, fresh or not.
    pub fn len(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or(0)
    }

    /// Checks if the cache stores nothing.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> Result<MutexGuard<'_, IndexMap<String, CacheEntry>>, CacheError> {
        self.entries.lock().map_err(|_| CacheError::LockPoisoned)
    }
}

#[async_trait]
impl TreeCacheService for MemoryTreeCache {
    #[tracing::instrument(skip(self))]
    async fn get_tree(&self, key: &str) -> Result<Option<RepoTree>, CacheError> {
        let mut entries = self.lock()?;

        let Some((index, _, entry)) = entries.get_full(key) else {
            return Ok(None);
        };

        if entry.created_at.elapsed() >= self.ttl {
            debug!(message = "Stale cache entry");
            return Ok(None);
        }

        let tree = entry.tree.clone();
        // Move to the most recently used end.
        let last = entries.len() - 1;
        entries.move_index(index, last);

        Ok(Some(tree))
    }

    #[tracing::instrument(skip(self, tree))]
    async fn put_tree(&self, key: &str, tree: RepoTree) -> Result<(), CacheError> {
        let mut entries = self.lock()?;

        entries.shift_remove(key);
        entries.insert(
            key.to_string(),
            CacheEntry {
                tree,
                created_at: Instant::now(),
            },
        );

        while entries.len() > self.capacity {
            if let Some((evicted, _)) = entries.shift_remove_index(0) {
                debug!(evicted = evicted, message = "Evicted least recently used entry");
            }
        }

        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn health_check(&self) -> Result<(), CacheError> {
        self.lock().map(|_| ())
    }
}
