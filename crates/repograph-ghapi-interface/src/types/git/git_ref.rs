use serde::{Deserialize, Serialize};

/// Prefix of branch head references.
pub const BRANCH_HEADS_PREFIX: &str = "refs/heads/";

/// GitHub Git reference.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhGitRef {
    /// Full reference name (e.g. `refs/heads/main`).
    #[serde(rename = "ref")]
    pub reference: String,
    /// Target object.
    pub object: GhGitObject,
}

impl GhGitRef {
    /// Build a branch head reference.
    pub fn branch<N: AsRef<str>, S: Into<String>>(name: N, sha: S) -> Self {
        Self {
            reference: format!("{}{}", BRANCH_HEADS_PREFIX, name.as_ref()),
            object: GhGitObject {
                sha: sha.into(),
                kind: "commit".into(),
            },
        }
    }

    /// Branch name, if the reference is a branch head.
    pub fn branch_name(&self) -> Option<&str> {
        self.reference.strip_prefix(BRANCH_HEADS_PREFIX)
    }
}

/// GitHub Git object.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhGitObject {
    /// SHA.
    pub sha: String,
    /// Object type.
    #[serde(rename = "type", default)]
    pub kind: String,
}
