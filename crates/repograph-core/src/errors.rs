//! Domain errors.

use repograph_cache_interface::CacheError;
use repograph_ghapi_interface::ApiError;
use repograph_models::RepositoryPath;
use thiserror::Error;

/// Domain error.
///
/// Cloneable, so one failed fetch can be handed to every waiting request.
#[allow(missing_docs)]
#[derive(Debug, Clone, Error)]
pub enum DomainError {
    #[error("Repository not found: {repository_path}")]
    RepositoryNotFound { repository_path: RepositoryPath },

    /// Wraps [`repograph_ghapi_interface::ApiError`].
    #[error("Upstream error: {source}")]
    UpstreamError { source: ApiError },

    /// Wraps [`repograph_cache_interface::CacheError`].
    #[error("Cache error: {source}")]
    CacheError { source: CacheError },
}

impl From<ApiError> for DomainError {
    fn from(e: ApiError) -> Self {
        match e {
            ApiError::RepositoryNotFound { owner, name } => Self::RepositoryNotFound {
                repository_path: RepositoryPath::new_from_components(&owner, &name),
            },
            e => Self::UpstreamError { source: e },
        }
    }
}

impl From<CacheError> for DomainError {
    fn from(e: CacheError) -> Self {
        Self::CacheError { source: e }
    }
}

/// Result alias for `DomainError`.
pub type Result<T> = core::result::Result<T, DomainError>;
