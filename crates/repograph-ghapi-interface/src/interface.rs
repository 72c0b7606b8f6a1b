use async_trait::async_trait;

use crate::{
    types::{GhCommit, GhGitRef, GhRepository},
    Result,
};

/// GitHub API Adapter interface.
///
/// Every method is a single read-only call returning at most one page.
/// Implementations do not retry.
#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait ApiService: Send + Sync {
    /// List branch head references of a repository.
    async fn git_refs_heads_list(&self, owner: &str, name: &str) -> Result<Vec<GhGitRef>>;
    /// List the first `per_page` commits reachable from `sha`, newest first.
    async fn commits_list(
        &self,
        owner: &str,
        name: &str,
        sha: &str,
        per_page: u32,
    ) -> Result<Vec<GhCommit>>;
    /// Get repository metadata.
    async fn repository_get(&self, owner: &str, name: &str) -> Result<GhRepository>;
    /// Count repository contributors.
    async fn contributors_count(&self, owner: &str, name: &str) -> Result<u64>;
    /// Count open pull requests.
    async fn pulls_open_count(&self, owner: &str, name: &str) -> Result<u64>;
}
