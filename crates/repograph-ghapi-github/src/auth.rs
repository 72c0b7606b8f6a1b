//! Auth.

use std::time::Duration;

use http::{header, HeaderMap, HeaderValue};
use repograph_config::Config;
use reqwest::ClientBuilder;
use url::Url;

use crate::errors::GitHubError;

const GITHUB_ACCEPT_HEADER: &str = "application/vnd.github.v3+json";

/// Get a GitHub client builder, authenticated when a token is configured.
pub fn get_client_builder(config: &Config) -> Result<ClientBuilder, GitHubError> {
    if config.api.github.token.is_empty() {
        get_anonymous_client_builder(config)
    } else {
        get_authenticated_client_builder(config)
    }
}

/// Get an authenticated GitHub client builder.
pub fn get_authenticated_client_builder(config: &Config) -> Result<ClientBuilder, GitHubError> {
    let mut authorization =
        HeaderValue::from_str(&format!("Bearer {}", config.api.github.token))
            .map_err(|e| GitHubError::InvalidTokenError { source: e })?;
    authorization.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert(
        header::ACCEPT,
        HeaderValue::from_static(GITHUB_ACCEPT_HEADER),
    );
    headers.insert(header::AUTHORIZATION, authorization);

    Ok(base_client_builder(config).default_headers(headers))
}

/// Get anonymous GitHub client builder.
pub fn get_anonymous_client_builder(config: &Config) -> Result<ClientBuilder, GitHubError> {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::ACCEPT,
        HeaderValue::from_static(GITHUB_ACCEPT_HEADER),
    );

    Ok(base_client_builder(config).default_headers(headers))
}

fn base_client_builder(config: &Config) -> ClientBuilder {
    ClientBuilder::new()
        .connect_timeout(Duration::from_millis(config.api.github.connect_timeout))
        .timeout(Duration::from_millis(config.api.github.request_timeout))
        .user_agent(format!("repograph/{}", config.version))
}

/// Build a GitHub URL below the configured root, one encoded path segment per item.
pub fn build_github_url(config: &Config, segments: &[&str]) -> Result<Url, GitHubError> {
    let root_url = &config.api.github.root_url;
    let mut url = Url::parse(root_url)?;
    url.path_segments_mut()
        .map_err(|()| GitHubError::InvalidRootUrl {
            url: root_url.clone(),
        })?
        .pop_if_empty()
        .extend(segments);

    Ok(url)
}
