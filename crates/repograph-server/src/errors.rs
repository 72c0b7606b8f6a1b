//! Server errors.

use actix_http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use repograph_core::DomainError;
use repograph_models::RepositoryPathError;
use thiserror::Error;

/// Server error.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("I/O error: {source}")]
    IoError { source: std::io::Error },

    #[error("{source}")]
    DomainError { source: DomainError },

    #[error("Metrics error: {source}")]
    MetricsError {
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },

    #[error("Invalid request: {message}")]
    BadRequest { message: String },
}

impl From<DomainError> for ServerError {
    fn from(e: DomainError) -> Self {
        Self::DomainError { source: e }
    }
}

impl From<RepositoryPathError> for ServerError {
    fn from(e: RepositoryPathError) -> Self {
        Self::BadRequest {
            message: e.to_string(),
        }
    }
}

impl ResponseError for ServerError {
    fn status_code(&self) -> StatusCode {
        match &self {
            ServerError::DomainError { source } => match source {
                DomainError::RepositoryNotFound { .. } => StatusCode::NOT_FOUND,
                DomainError::UpstreamError { .. } => StatusCode::BAD_GATEWAY,
                DomainError::CacheError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            },
            ServerError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            ServerError::IoError { .. } | ServerError::MetricsError { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(serde_json::json!({
            "success": false,
            "message": self.to_string()
        }))
    }
}

/// Result alias for `ServerError`.
pub type Result<T> = core::result::Result<T, ServerError>;

#[cfg(test)]
mod tests {
    use repograph_cache_interface::CacheError;
    use repograph_ghapi_interface::ApiError;
    use repograph_models::RepositoryPath;

    use super::*;

    #[test]
    fn status_codes() {
        let not_found: ServerError = DomainError::RepositoryNotFound {
            repository_path: RepositoryPath::new_from_components("me", "test"),
        }
        .into();
        assert_eq!(not_found.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(not_found.to_string(), "Repository not found: me/test");

        let upstream: ServerError = DomainError::UpstreamError {
            source: ApiError::UpstreamStatus {
                status: 500,
                path: "/repos/me/test".into(),
            },
        }
        .into();
        assert_eq!(upstream.status_code(), StatusCode::BAD_GATEWAY);

        let cache: ServerError = DomainError::CacheError {
            source: CacheError::LockPoisoned,
        }
        .into();
        assert_eq!(cache.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

        let invalid: ServerError = RepositoryPathError::InvalidRepositoryPath {
            path: "me/te st".into(),
        }
        .into();
        assert_eq!(invalid.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            invalid.to_string(),
            "Invalid request: Invalid repository path: me/te st"
        );
    }
}
