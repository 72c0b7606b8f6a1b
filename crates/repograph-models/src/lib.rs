//! Domain models.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod branch_ref;
mod commit_edge;
mod commit_node;
mod repo_tree;
mod repository_path;
mod repository_stats;

pub use branch_ref::BranchRef;
pub use commit_edge::CommitEdge;
pub use commit_node::CommitNode;
pub use repo_tree::RepoTree;
pub use repository_path::{RepositoryPath, RepositoryPathError};
pub use repository_stats::RepositoryStats;
