//! Null tree cache.

#![warn(missing_docs)]
#![warn(clippy::all)]

use async_trait::async_trait;
use repograph_cache_interface::{CacheError, TreeCacheService};
use repograph_models::RepoTree;

/// Null tree cache, never hits.
#[derive(Clone, Default)]
pub struct NullTreeCache {
    _private: (),
}

impl NullTreeCache {
    /// Creates a null tree cache.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

#[async_trait]
impl TreeCacheService for NullTreeCache {
    #[tracing::instrument(skip(self), ret)]
    async fn get_tree(&self, key: &str) -> Result<Option<RepoTree>, CacheError> {
        Ok(None)
    }

    #[tracing::instrument(skip(self, _tree))]
    async fn put_tree(&self, key: &str, _tree: RepoTree) -> Result<(), CacheError> {
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn health_check(&self) -> Result<(), CacheError> {
        Ok(())
    }
}
