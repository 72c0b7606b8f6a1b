/// Branch head, as listed by the upstream ref API.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BranchRef {
    /// Bare branch name (without `refs/heads/`).
    pub name: String,
    /// Head commit SHA.
    pub head_sha: String,
}

impl BranchRef {
    /// Creates a branch ref.
    pub fn new<N: Into<String>, S: Into<String>>(name: N, head_sha: S) -> Self {
        Self {
            name: name.into(),
            head_sha: head_sha.into(),
        }
    }
}
