use serde::Serialize;

/// Tracked metrics of a repository.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RepositoryStats {
    /// Owner.
    pub owner: String,
    /// Name.
    pub name: String,
    /// Full name, as reported by upstream.
    pub full_name: String,
    /// Description.
    pub description: Option<String>,
    /// Web URL.
    pub html_url: String,
    /// Main language.
    pub language: Option<String>,
    /// Stargazers count.
    pub stars: u64,
    /// Forks count.
    pub forks: u64,
    /// Open issues count.
    pub open_issues: u64,
    /// Contributors count.
    pub contributors: u64,
    /// Open pull requests count.
    pub open_pull_requests: u64,
    /// Last update timestamp.
    pub updated_at: String,
}
