//! Null driver for GH API.

#![warn(missing_docs)]
#![warn(clippy::all)]

use async_trait::async_trait;
use repograph_ghapi_interface::{
    types::{GhCommit, GhGitRef, GhRepository},
    ApiService, Result,
};

/// Null API service.
///
/// Every repository exists and has no branch.
#[derive(Clone, Default)]
pub struct NullApiService {
    _private: (),
}

impl NullApiService {
    /// Build a null API service.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

#[async_trait]
impl ApiService for NullApiService {
    #[tracing::instrument(skip(self), ret)]
    async fn git_refs_heads_list(&self, owner: &str, name: &str) -> Result<Vec<GhGitRef>> {
        Ok(vec![])
    }

    #[tracing::instrument(skip(self), ret)]
    async fn commits_list(
        &self,
        owner: &str,
        name: &str,
        sha: &str,
        per_page: u32,
    ) -> Result<Vec<GhCommit>> {
        Ok(vec![])
    }

    #[tracing::instrument(skip(self), ret)]
    async fn repository_get(&self, owner: &str, name: &str) -> Result<GhRepository> {
        Ok(GhRepository {
            name: name.into(),
            full_name: format!("{owner}/{name}"),
            ..Default::default()
        })
    }

    #[tracing::instrument(skip(self), ret)]
    async fn contributors_count(&self, owner: &str, name: &str) -> Result<u64> {
        Ok(0)
    }

    #[tracing::instrument(skip(self), ret)]
    async fn pulls_open_count(&self, owner: &str, name: &str) -> Result<u64> {
        Ok(0)
    }
}
