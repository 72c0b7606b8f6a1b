use serde::{Deserialize, Serialize};

use crate::types::GhUser;

/// GitHub Commit, as listed by the commits API.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhCommit {
    /// SHA.
    pub sha: String,
    /// Git commit data.
    pub commit: GhCommitDetails,
    /// Linked GitHub account of the author.
    pub author: Option<GhUser>,
    /// Parents.
    #[serde(default)]
    pub parents: Vec<GhCommitParent>,
}

/// Git commit data.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhCommitDetails {
    /// Message.
    #[serde(default)]
    pub message: String,
    /// Author signature.
    pub author: Option<GhCommitSignature>,
}

/// Git signature.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhCommitSignature {
    /// Name.
    pub name: Option<String>,
    /// Timestamp.
    pub date: Option<String>,
}

/// Parent commit.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhCommitParent {
    /// SHA.
    pub sha: String,
}

impl GhCommit {
    /// Parent SHAs, in order.
    pub fn parent_shas(&self) -> impl Iterator<Item = &str> {
        self.parents.iter().map(|p| p.sha.as_str())
    }

    /// Author display name: commit author name, then account login.
    pub fn author_name(&self) -> Option<&str> {
        self.commit
            .author
            .as_ref()
            .and_then(|a| a.name.as_deref())
            .filter(|n| !n.is_empty())
            .or_else(|| {
                self.author
                    .as_ref()
                    .map(|u| u.login.as_str())
                    .filter(|l| !l.is_empty())
            })
    }

    /// Author timestamp.
    pub fn author_date(&self) -> Option<&str> {
        self.commit.author.as_ref().and_then(|a| a.date.as_deref())
    }
}
