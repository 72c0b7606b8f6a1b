//! Validation utilities.

use std::fmt::Write;

use repograph_config::{ApiDriver, Config};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Errors on environment variables:\n{}", errors)]
    EnvVarsError { errors: String },
}

fn validate_env_vars(config: &Config) -> Result<(), ValidationError> {
    #[inline]
    fn _missing(error: &mut String, name: &str) {
        error.push('\n');
        let _ = write!(error, "  - Missing env. var.: {}", name);
    }

    #[inline]
    fn _invalid(error: &mut String, name: &str, reason: &str) {
        error.push('\n');
        let _ = write!(error, "  - Invalid env. var.: {} ({})", name, reason);
    }

    let mut error = String::new();

    // Check server configuration
    if config.server.bind_ip.is_empty() {
        _missing(&mut error, "REPOGRAPH_SERVER_BIND_IP");
    }
    if config.server.bind_port == 0 {
        _missing(&mut error, "REPOGRAPH_SERVER_BIND_PORT");
    }

    // Check API configuration
    if config.api.driver == ApiDriver::GitHub {
        let root_url = &config.api.github.root_url;
        if root_url.is_empty() {
            _missing(&mut error, "REPOGRAPH_API_GITHUB_ROOT_URL");
        } else if !root_url.starts_with("http://") && !root_url.starts_with("https://") {
            _invalid(
                &mut error,
                "REPOGRAPH_API_GITHUB_ROOT_URL",
                "should be an HTTP URL",
            );
        }
    }
    if config.api.github.request_timeout == 0 {
        _invalid(
            &mut error,
            "REPOGRAPH_API_GITHUB_REQUEST_TIMEOUT",
            "should be positive",
        );
    }

    // Check cache configuration
    if config.cache.capacity == 0 {
        _invalid(&mut error, "REPOGRAPH_CACHE_CAPACITY", "should be positive");
    }

    // Check tree configuration
    if config.tree.max_branches == 0 {
        _invalid(&mut error, "REPOGRAPH_TREE_MAX_BRANCHES", "should be positive");
    }
    if config.tree.max_commits_per_branch == 0 {
        _invalid(
            &mut error,
            "REPOGRAPH_TREE_MAX_COMMITS_PER_BRANCH",
            "should be positive",
        );
    }
    if config.tree.default_commits_per_branch == 0
        || config.tree.default_commits_per_branch > config.tree.max_commits_per_branch
    {
        _invalid(
            &mut error,
            "REPOGRAPH_TREE_DEFAULT_COMMITS_PER_BRANCH",
            "should be between 1 and the max commits per branch",
        );
    }

    if error.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::EnvVarsError { errors: error })
    }
}

pub fn validate_configuration(config: &Config) -> Result<(), ValidationError> {
    validate_env_vars(config)
}
