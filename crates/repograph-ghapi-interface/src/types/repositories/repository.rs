use serde::{Deserialize, Serialize};

/// GitHub Repository.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhRepository {
    /// ID.
    pub id: u64,
    /// Name.
    pub name: String,
    /// Full name.
    pub full_name: String,
    /// Description.
    pub description: Option<String>,
    /// Web URL.
    pub html_url: String,
    /// Stargazers count.
    pub stargazers_count: u64,
    /// Forks count.
    pub forks_count: u64,
    /// Open issues count.
    pub open_issues_count: u64,
    /// Main language.
    pub language: Option<String>,
    /// Last update timestamp.
    pub updated_at: String,
}
