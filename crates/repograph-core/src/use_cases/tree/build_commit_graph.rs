use std::collections::HashSet;

use repograph_ghapi_interface::types::GhCommit;
use repograph_models::{CommitEdge, CommitNode, RepoTree};
use shaku::{Component, Interface};

const UNKNOWN_AUTHOR: &str = "unknown";

/// Commits listed for one branch, newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BranchCommits {
    pub branch: String,
    pub commits: Vec<GhCommit>,
}

impl BranchCommits {
    pub fn new<B: Into<String>>(branch: B, commits: Vec<GhCommit>) -> Self {
        Self {
            branch: branch.into(),
            commits,
        }
    }
}

/// Merges per-branch commit listings into one commit graph.
#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
pub trait BuildCommitGraphInterface: Interface {
    fn run(&self, listings: &[BranchCommits]) -> RepoTree;
}

#[derive(Component)]
#[shaku(interface = BuildCommitGraphInterface)]
pub(crate) struct BuildCommitGraph;

impl BuildCommitGraphInterface for BuildCommitGraph {
    #[tracing::instrument(skip_all, fields(branches_count = listings.len()))]
    fn run(&self, listings: &[BranchCommits]) -> RepoTree {
        let mut tree = RepoTree {
            branches: listings.iter().map(|l| l.branch.clone()).collect(),
            ..Default::default()
        };
        let mut seen = HashSet::new();

        for listing in listings {
            for commit in &listing.commits {
                // First branch to list a commit owns it.
                if seen.insert(commit.sha.as_str()) {
                    tree.nodes.push(CommitNode {
                        id: commit.sha.clone(),
                        label: CommitNode::short_label(&commit.sha),
                        branch: listing.branch.clone(),
                        message: commit.commit.message.clone(),
                        author: commit.author_name().unwrap_or(UNKNOWN_AUTHOR).to_string(),
                        date: commit.author_date().unwrap_or_default().to_string(),
                    });
                }

                tree.edges.extend(
                    commit
                        .parent_shas()
                        .map(|parent| CommitEdge::new(commit.sha.as_str(), parent)),
                );
            }
        }

        tree
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use repograph_ghapi_interface::types::{
        GhCommitDetails, GhCommitParent, GhCommitSignature, GhUser,
    };

    use super::*;

    fn commit(sha: &str, parents: &[&str]) -> GhCommit {
        GhCommit {
            sha: sha.into(),
            commit: GhCommitDetails {
                message: format!("commit {sha}"),
                author: Some(GhCommitSignature {
                    name: Some("Me".into()),
                    date: Some("2024-01-01T00:00:00Z".into()),
                }),
            },
            author: None,
            parents: parents
                .iter()
                .map(|p| GhCommitParent {
                    sha: (*p).into(),
                })
                .collect(),
        }
    }

    fn main_dev_listings() -> Vec<BranchCommits> {
        vec![
            BranchCommits::new("main", vec![commit("a1", &["a0"]), commit("a0", &[])]),
            BranchCommits::new("dev", vec![commit("a1", &["a0"]), commit("d1", &["a1"])]),
        ]
    }

    #[test]
    fn main_and_dev() {
        let tree = BuildCommitGraph.run(&main_dev_listings());

        assert_eq!(tree.branches, vec!["main", "dev"]);

        let nodes: Vec<_> = tree
            .nodes
            .iter()
            .map(|n| (n.id.as_str(), n.branch.as_str()))
            .collect();
        assert_eq!(nodes, vec![("a1", "main"), ("a0", "main"), ("d1", "dev")]);

        // Edges are recorded on every observation.
        let edges: Vec<_> = tree.edges.iter().map(|e| e.id()).collect();
        assert_eq!(edges, vec!["a1-a0", "a1-a0", "d1-a1"]);
    }

    #[test]
    fn deterministic() {
        let listings = main_dev_listings();
        assert_eq!(
            BuildCommitGraph.run(&listings),
            BuildCommitGraph.run(&listings)
        );
    }

    #[test]
    fn first_seen_branch_wins() {
        let listings = vec![
            BranchCommits::new("dev", vec![commit("a1", &[])]),
            BranchCommits::new("main", vec![commit("a1", &[])]),
        ];

        let tree = BuildCommitGraph.run(&listings);
        assert_eq!(tree.nodes.len(), 1);
        assert_eq!(tree.nodes[0].branch, "dev");
    }

    #[test]
    fn one_edge_per_parent_in_order() {
        let listings = vec![BranchCommits::new("main", vec![commit("m1", &["a1", "b1"])])];

        let tree = BuildCommitGraph.run(&listings);
        assert_eq!(
            tree.edges,
            vec![CommitEdge::new("m1", "a1"), CommitEdge::new("m1", "b1")]
        );
        assert_eq!(tree.merge_commits().len(), 1);
    }

    #[test]
    fn node_fields() {
        let mut c = commit("0123456789abcdef", &[]);
        c.commit.author = None;
        c.author = Some(GhUser {
            login: "me-login".into(),
        });

        let tree = BuildCommitGraph.run(&[BranchCommits::new("main", vec![c])]);
        let node = &tree.nodes[0];
        assert_eq!(node.label, "0123456");
        assert_eq!(node.message, "commit 0123456789abcdef");
        assert_eq!(node.author, "me-login");
        assert_eq!(node.date, "");
    }

    #[test]
    fn unknown_author() {
        let mut c = commit("a1", &[]);
        c.commit.author = None;

        let tree = BuildCommitGraph.run(&[BranchCommits::new("main", vec![c])]);
        assert_eq!(tree.nodes[0].author, "unknown");
    }

    #[test]
    fn empty_branches() {
        let tree = BuildCommitGraph.run(&[BranchCommits::new("main", vec![])]);
        assert_eq!(tree.branches, vec!["main"]);
        assert!(tree.nodes.is_empty());
        assert!(tree.edges.is_empty());
    }
}
