pub(crate) mod build_commit_graph;
pub(crate) mod get_repository_tree;
mod in_flight;
pub(crate) mod select_branches;

pub use build_commit_graph::{BranchCommits, BuildCommitGraphInterface};
pub use get_repository_tree::GetRepositoryTreeInterface;
pub use select_branches::SelectBranchesInterface;

#[cfg(any(test, feature = "testkit"))]
pub use self::{
    build_commit_graph::MockBuildCommitGraphInterface,
    get_repository_tree::MockGetRepositoryTreeInterface,
    select_branches::MockSelectBranchesInterface,
};
