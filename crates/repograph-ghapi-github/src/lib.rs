//! GitHub API driver.

#![warn(clippy::all)]

mod auth;
mod errors;
mod pagination;

use async_trait::async_trait;
pub use auth::{
    build_github_url, get_anonymous_client_builder, get_authenticated_client_builder,
    get_client_builder,
};
pub use errors::GitHubError;
use http::{header, StatusCode};
use repograph_config::Config;
use repograph_ghapi_interface::{
    types::{GhCommit, GhGitRef, GhRepository},
    ApiService, Result,
};
use reqwest::{Client, Response};
use serde::de::IgnoredAny;
use tracing::{debug, warn};
use url::Url;

use crate::pagination::page_count_from_link;

/// GitHub API adapter implementation.
#[derive(Clone)]
pub struct GithubApiService {
    config: Config,
    client: Client,
}

impl GithubApiService {
    /// Creates new GitHub API adapter.
    pub fn new(config: Config) -> Result<Self, GitHubError> {
        let client = get_client_builder(&config)?.build()?;
        Ok(Self { config, client })
    }

    fn repository_url(&self, owner: &str, name: &str, tail: &[&str]) -> Result<Url, GitHubError> {
        let mut segments = vec!["repos", owner, name];
        segments.extend_from_slice(tail);
        build_github_url(&self.config, &segments)
    }

    async fn get(&self, url: Url, query: &[(&str, String)]) -> Result<Response, GitHubError> {
        let path = url.path().to_owned();
        let response = self.client.get(url).query(query).send().await?;

        check_status(response, &path)
    }

    /// Count items of a listing from its pagination, one item per page.
    async fn count_items(&self, url: Url, query: &[(&str, String)]) -> Result<u64, GitHubError> {
        let mut query = query.to_vec();
        query.push(("per_page", "1".into()));

        let response = self.get(url, &query).await?;
        if response.status() == StatusCode::NO_CONTENT {
            return Ok(0);
        }

        let link = response
            .headers()
            .get(header::LINK)
            .and_then(|v| v.to_str().ok())
            .and_then(page_count_from_link);

        match link {
            Some(count) => Ok(count),
            None => Ok(response.json::<Vec<IgnoredAny>>().await?.len() as u64),
        }
    }
}

fn check_status(response: Response, path: &str) -> Result<Response, GitHubError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    if status == StatusCode::FORBIDDEN || status == StatusCode::TOO_MANY_REQUESTS {
        let remaining = response
            .headers()
            .get("x-ratelimit-remaining")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("?");
        warn!(
            path = path,
            remaining = remaining,
            message = "GitHub API rate limit exceeded"
        );
    }

    Err(GitHubError::StatusError {
        status: status.as_u16(),
        path: path.into(),
    })
}

/// On repository endpoints, a 404 means the repository itself is missing.
fn missing_repository(error: GitHubError, owner: &str, name: &str) -> GitHubError {
    match error {
        GitHubError::StatusError { status, .. } if status == StatusCode::NOT_FOUND.as_u16() => {
            GitHubError::RepositoryNotFound {
                owner: owner.into(),
                name: name.into(),
            }
        }
        e => e,
    }
}

fn is_empty_repository(error: &GitHubError) -> bool {
    matches!(error, GitHubError::StatusError { status, .. } if *status == StatusCode::CONFLICT.as_u16())
}

#[async_trait]
impl ApiService for GithubApiService {
    #[tracing::instrument(skip(self))]
    async fn git_refs_heads_list(&self, owner: &str, name: &str) -> Result<Vec<GhGitRef>> {
        let url = self.repository_url(owner, name, &["git", "refs", "heads"])?;
        let response = match self.get(url, &[]).await {
            Ok(response) => response,
            // GitHub answers 409 on repositories without any commit.
            Err(e) if is_empty_repository(&e) => {
                debug!(message = "Empty repository, no branch head");
                return Ok(vec![]);
            }
            Err(e) => return Err(missing_repository(e, owner, name).into()),
        };

        let refs = response
            .json::<Vec<GhGitRef>>()
            .await
            .map_err(GitHubError::from)?;
        debug!(count = refs.len(), message = "Listed branch heads");
        Ok(refs)
    }

    #[tracing::instrument(skip(self))]
    async fn commits_list(
        &self,
        owner: &str,
        name: &str,
        sha: &str,
        per_page: u32,
    ) -> Result<Vec<GhCommit>> {
        let url = self.repository_url(owner, name, &["commits"])?;
        let query = [("sha", sha.to_string()), ("per_page", per_page.to_string())];
        // A 404 here is a vanished branch head, not a missing repository.
        let response = match self.get(url, &query).await {
            Ok(response) => response,
            Err(e) if is_empty_repository(&e) => return Ok(vec![]),
            Err(e) => return Err(e.into()),
        };

        let commits = response
            .json::<Vec<GhCommit>>()
            .await
            .map_err(GitHubError::from)?;
        debug!(count = commits.len(), message = "Listed commits");
        Ok(commits)
    }

    #[tracing::instrument(skip(self))]
    async fn repository_get(&self, owner: &str, name: &str) -> Result<GhRepository> {
        let url = self.repository_url(owner, name, &[])?;
        Ok(self
            .get(url, &[])
            .await
            .map_err(|e| missing_repository(e, owner, name))?
            .json::<GhRepository>()
            .await
            .map_err(GitHubError::from)?)
    }

    #[tracing::instrument(skip(self), ret)]
    async fn contributors_count(&self, owner: &str, name: &str) -> Result<u64> {
        let url = self.repository_url(owner, name, &["contributors"])?;
        Ok(self
            .count_items(url, &[])
            .await
            .map_err(|e| missing_repository(e, owner, name))?)
    }

    #[tracing::instrument(skip(self), ret)]
    async fn pulls_open_count(&self, owner: &str, name: &str) -> Result<u64> {
        let url = self.repository_url(owner, name, &["pulls"])?;
        Ok(self
            .count_items(url, &[("state", "open".into())])
            .await
            .map_err(|e| missing_repository(e, owner, name))?)
    }
}
