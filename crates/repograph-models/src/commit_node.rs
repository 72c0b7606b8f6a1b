use serde::Serialize;

/// Length of the short commit label.
pub const SHORT_LABEL_LEN: usize = 7;

/// Commit graph node.
///
/// One node exists per distinct commit SHA; `branch` is the branch under which
/// the commit was first discovered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CommitNode {
    /// Commit SHA.
    pub id: String,
    /// Short SHA.
    pub label: String,
    /// Branch the commit was first seen on.
    pub branch: String,
    /// Commit message.
    pub message: String,
    /// Author display name.
    pub author: String,
    /// Author timestamp, as given by upstream.
    pub date: String,
}

impl CommitNode {
    /// Short label for a commit SHA.
    pub fn short_label(sha: &str) -> String {
        sha.chars().take(SHORT_LABEL_LEN).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_label() {
        assert_eq!(
            CommitNode::short_label("0123456789abcdef0123456789abcdef01234567"),
            "0123456"
        );
        assert_eq!(CommitNode::short_label("a1"), "a1");
    }
}
