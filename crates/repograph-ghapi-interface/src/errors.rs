//! API errors.

use std::sync::Arc;

use thiserror::Error;

/// API error.
///
/// Cloneable, so one failed upstream call can be reported to every waiter.
#[allow(missing_docs)]
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// Upstream does not know the repository.
    #[error("Repository {}/{} not found", owner, name)]
    RepositoryNotFound { owner: String, name: String },

    /// Upstream answered with an unexpected status.
    #[error("Upstream API answered with status {} on {}", status, path)]
    UpstreamStatus { status: u16, path: String },

    #[error(transparent)]
    ImplementationError {
        source: Arc<dyn std::error::Error + Send + Sync + 'static>,
    },
}

impl ApiError {
    /// Wraps an implementation-specific error.
    pub fn implementation<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ImplementationError {
            source: Arc::new(error),
        }
    }
}

/// Result alias for `ApiError`.
pub type Result<T, E = ApiError> = core::result::Result<T, E>;
