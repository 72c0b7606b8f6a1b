//! Cache interfaces.

use async_trait::async_trait;
use repograph_models::RepoTree;

use crate::CacheError;

/// Repository tree cache adapter trait.
///
/// Keys are repository full names (`owner/name`).
#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait TreeCacheService: Send + Sync {
    /// Gets a fresh tree, if any.
    async fn get_tree(&self, key: &str) -> Result<Option<RepoTree>, CacheError>;
    /// Stores a tree, replacing any previous entry.
    async fn put_tree(&self, key: &str, tree: RepoTree) -> Result<(), CacheError>;
    /// Health check
    async fn health_check(&self) -> Result<(), CacheError>;
}
