use serde::Serialize;

use crate::{CommitEdge, CommitNode};

/// Commit graph of a repository, across its selected branches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RepoTree {
    /// Selected branch names, in processing order.
    pub branches: Vec<String>,
    /// Deduplicated commits, in discovery order.
    pub nodes: Vec<CommitNode>,
    /// Parent links, one per observation.
    pub edges: Vec<CommitEdge>,
}

impl RepoTree {
    /// Checks if the tree has no branch.
    pub fn is_empty(&self) -> bool {
        self.branches.is_empty() && self.nodes.is_empty() && self.edges.is_empty()
    }

    /// Get a node from its commit SHA.
    pub fn node(&self, sha: &str) -> Option<&CommitNode> {
        self.nodes.iter().find(|n| n.id == sha)
    }

    /// Commits with more than one parent edge.
    pub fn merge_commits(&self) -> Vec<&CommitNode> {
        self.nodes
            .iter()
            .filter(|n| {
                let mut parents: Vec<_> = self
                    .edges
                    .iter()
                    .filter(|e| e.source == n.id)
                    .map(|e| e.target.as_str())
                    .collect();
                parents.sort_unstable();
                parents.dedup();
                parents.len() > 1
            })
            .collect()
    }
}
