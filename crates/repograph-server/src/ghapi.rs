//! GitHub Api wrappers.

use async_trait::async_trait;
use repograph_config::Config;
use repograph_ghapi_github::{GitHubError, GithubApiService};
use repograph_ghapi_interface::{
    types::{GhCommit, GhGitRef, GhRepository},
    ApiService, Result,
};

use crate::metrics::{GITHUB_API_CALLS, GITHUB_API_ERRORS};

/// GitHub Api Service with metrics.
pub struct MetricsApiService<T = GithubApiService> {
    inner: T,
}

impl MetricsApiService {
    /// Creates a new service.
    pub fn new(config: Config) -> core::result::Result<Self, GitHubError> {
        Ok(Self {
            inner: GithubApiService::new(config)?,
        })
    }
}

impl<T: ApiService> MetricsApiService<T> {
    /// Wraps an existing service.
    pub fn wrap(inner: T) -> Self {
        Self { inner }
    }
}

fn record<T>(result: Result<T>) -> Result<T> {
    GITHUB_API_CALLS.inc();
    if result.is_err() {
        GITHUB_API_ERRORS.inc();
    }
    result
}

#[async_trait]
impl<T: ApiService> ApiService for MetricsApiService<T> {
    async fn git_refs_heads_list(&self, owner: &str, name: &str) -> Result<Vec<GhGitRef>> {
        record(self.inner.git_refs_heads_list(owner, name).await)
    }

    async fn commits_list(
        &self,
        owner: &str,
        name: &str,
        sha: &str,
        per_page: u32,
    ) -> Result<Vec<GhCommit>> {
        record(self.inner.commits_list(owner, name, sha, per_page).await)
    }

    async fn repository_get(&self, owner: &str, name: &str) -> Result<GhRepository> {
        record(self.inner.repository_get(owner, name).await)
    }

    async fn contributors_count(&self, owner: &str, name: &str) -> Result<u64> {
        record(self.inner.contributors_count(owner, name).await)
    }

    async fn pulls_open_count(&self, owner: &str, name: &str) -> Result<u64> {
        record(self.inner.pulls_open_count(owner, name).await)
    }
}
