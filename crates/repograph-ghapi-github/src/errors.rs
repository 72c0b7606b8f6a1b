use repograph_ghapi_interface::ApiError;

#[derive(Debug, thiserror::Error)]
#[allow(clippy::enum_variant_names)]
pub enum GitHubError {
    #[error(transparent)]
    HttpError { source: reqwest::Error },

    #[error("Invalid authorization token: {source}")]
    InvalidTokenError {
        source: http::header::InvalidHeaderValue,
    },

    #[error("Invalid GitHub URL: {source}")]
    InvalidUrlError { source: url::ParseError },

    #[error("GitHub root URL cannot hold a path: {}", url)]
    InvalidRootUrl { url: String },

    #[error("Repository {}/{} not found", owner, name)]
    RepositoryNotFound { owner: String, name: String },

    #[error("GitHub answered with status {} on {}", status, path)]
    StatusError { status: u16, path: String },
}

impl From<reqwest::Error> for GitHubError {
    fn from(e: reqwest::Error) -> Self {
        GitHubError::HttpError { source: e }
    }
}

impl From<url::ParseError> for GitHubError {
    fn from(e: url::ParseError) -> Self {
        GitHubError::InvalidUrlError { source: e }
    }
}

impl From<GitHubError> for ApiError {
    fn from(e: GitHubError) -> Self {
        match e {
            GitHubError::RepositoryNotFound { owner, name } => {
                ApiError::RepositoryNotFound { owner, name }
            }
            GitHubError::StatusError { status, path } => ApiError::UpstreamStatus { status, path },
            e => ApiError::implementation(e),
        }
    }
}
