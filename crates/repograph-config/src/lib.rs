//! Config module.

mod drivers;

use std::{env, str::FromStr};

pub use drivers::{ApiDriver, CacheDriver, DriverError};

#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// API driver.
    pub driver: ApiDriver,
    /// GitHub options.
    pub github: ApiGitHubConfig,
}

#[derive(Debug, Clone)]
pub struct ApiGitHubConfig {
    /// GitHub API connect timeout (in milliseconds).
    pub connect_timeout: u64,
    /// GitHub API total request timeout (in milliseconds).
    pub request_timeout: u64,
    /// GitHub API root URL.
    pub root_url: String,
    /// GitHub API personal token. Empty means anonymous calls.
    pub token: String,
}

#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Cache driver.
    pub driver: CacheDriver,
    /// Freshness window (in seconds).
    pub ttl: u64,
    /// Maximum number of cached repositories.
    pub capacity: usize,
}

#[derive(Debug, Clone)]
pub struct TreeConfig {
    /// Maximum number of branches walked per repository.
    pub max_branches: usize,
    /// Commits fetched per branch when the caller gives no limit.
    pub default_commits_per_branch: u32,
    /// Upper bound accepted from callers.
    pub max_commits_per_branch: u32,
}

impl TreeConfig {
    /// Commits per branch for a caller-provided limit.
    ///
    /// Missing or zero limits fall back to the default; others are clamped
    /// to `[1, max]`.
    pub fn commit_limit(&self, requested: Option<i64>) -> u32 {
        match requested {
            None | Some(0) => self.default_commits_per_branch,
            Some(l) => l.clamp(1, i64::from(self.max_commits_per_branch.max(1))) as u32,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Use bunyan logging.
    pub use_bunyan: bool,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Server bind IP.
    pub bind_ip: String,
    /// Server bind port.
    pub bind_port: u16,
    /// Server workers count.
    pub workers_count: Option<u16>,
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// API options.
    pub api: ApiConfig,
    /// Tree cache options.
    pub cache: CacheConfig,
    /// Commit graph options.
    pub tree: TreeConfig,
    /// Logging options.
    pub logging: LoggingConfig,
    /// Server options.
    pub server: ServerConfig,
    /// App version
    pub version: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                driver: ApiDriver::GitHub,
                github: ApiGitHubConfig {
                    connect_timeout: 5000,
                    request_timeout: 30000,
                    root_url: "https://api.github.com".into(),
                    token: String::new(),
                },
            },
            cache: CacheConfig {
                driver: CacheDriver::Memory,
                ttl: 60,
                capacity: 1000,
            },
            tree: TreeConfig {
                max_branches: 5,
                default_commits_per_branch: 50,
                max_commits_per_branch: 200,
            },
            logging: LoggingConfig { use_bunyan: false },
            server: ServerConfig {
                bind_ip: "127.0.0.1".into(),
                bind_port: 3001,
                workers_count: None,
            },
            version: "0.0.0".into(),
        }
    }
}

impl Config {
    /// Create configuration from environment.
    pub fn from_env(version: String) -> Result<Config, DriverError> {
        let defaults = Config::default();

        Ok(Config {
            api: ApiConfig {
                driver: ApiDriver::from_str(&env_to_str("REPOGRAPH_API_DRIVER", "github"))?,
                github: ApiGitHubConfig {
                    connect_timeout: env_to_u64(
                        "REPOGRAPH_API_GITHUB_CONNECT_TIMEOUT",
                        defaults.api.github.connect_timeout,
                    ),
                    request_timeout: env_to_u64(
                        "REPOGRAPH_API_GITHUB_REQUEST_TIMEOUT",
                        defaults.api.github.request_timeout,
                    ),
                    root_url: env_to_str(
                        "REPOGRAPH_API_GITHUB_ROOT_URL",
                        &defaults.api.github.root_url,
                    ),
                    token: env_to_str("REPOGRAPH_API_GITHUB_TOKEN", ""),
                },
            },
            cache: CacheConfig {
                driver: CacheDriver::from_str(&env_to_str("REPOGRAPH_CACHE_DRIVER", "memory"))?,
                ttl: env_to_u64("REPOGRAPH_CACHE_TTL", defaults.cache.ttl),
                capacity: env_to_usize("REPOGRAPH_CACHE_CAPACITY", defaults.cache.capacity),
            },
            tree: TreeConfig {
                max_branches: env_to_usize(
                    "REPOGRAPH_TREE_MAX_BRANCHES",
                    defaults.tree.max_branches,
                ),
                default_commits_per_branch: env_to_u32(
                    "REPOGRAPH_TREE_DEFAULT_COMMITS_PER_BRANCH",
                    defaults.tree.default_commits_per_branch,
                ),
                max_commits_per_branch: env_to_u32(
                    "REPOGRAPH_TREE_MAX_COMMITS_PER_BRANCH",
                    defaults.tree.max_commits_per_branch,
                ),
            },
            logging: LoggingConfig {
                use_bunyan: env_to_bool("REPOGRAPH_LOGGING_USE_BUNYAN", false),
            },
            server: ServerConfig {
                bind_ip: env_to_str("REPOGRAPH_SERVER_BIND_IP", &defaults.server.bind_ip),
                bind_port: env_to_u16("REPOGRAPH_SERVER_BIND_PORT", defaults.server.bind_port),
                workers_count: env_to_optional_u16("REPOGRAPH_SERVER_WORKERS_COUNT", None),
            },
            version,
        })
    }
}

fn env_to_u16(name: &str, default: u16) -> u16 {
    env::var(name)
        .map(|e| e.parse().unwrap_or(default))
        .unwrap_or(default)
}

fn env_to_optional_u16(name: &str, default: Option<u16>) -> Option<u16> {
    env::var(name)
        .map(|e| e.parse::<u16>().map(Some).unwrap_or(default))
        .unwrap_or(default)
}

fn env_to_u32(name: &str, default: u32) -> u32 {
    env::var(name)
        .map(|e| e.parse().unwrap_or(default))
        .unwrap_or(default)
}

fn env_to_u64(name: &str, default: u64) -> u64 {
    env::var(name)
        .map(|e| e.parse().unwrap_or(default))
        .unwrap_or(default)
}

fn env_to_usize(name: &str, default: usize) -> usize {
    env::var(name)
        .map(|e| e.parse().unwrap_or(default))
        .unwrap_or(default)
}

fn env_to_bool(name: &str, default: bool) -> bool {
    env::var(name).map(|e| !e.is_empty()).unwrap_or(default)
}

fn env_to_str(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_e| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values() {
        let config = Config::default();
        assert_eq!(config.cache.ttl, 60);
        assert_eq!(config.tree.max_branches, 5);
        assert_eq!(config.tree.default_commits_per_branch, 50);
        assert_eq!(config.tree.max_commits_per_branch, 200);
        assert_eq!(config.api.github.request_timeout, 30000);
    }

    #[test]
    fn commit_limit() {
        let tree = Config::default().tree;
        assert_eq!(tree.commit_limit(None), 50);
        assert_eq!(tree.commit_limit(Some(0)), 50);
        assert_eq!(tree.commit_limit(Some(10)), 10);
        assert_eq!(tree.commit_limit(Some(5000)), 200);
        assert_eq!(tree.commit_limit(Some(-3)), 1);
    }
}
