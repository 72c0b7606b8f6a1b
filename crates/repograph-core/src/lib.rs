//! Core module.

#![warn(clippy::all)]
#![allow(clippy::new_without_default)]

mod context;
pub mod errors;
pub mod use_cases;

pub use context::CoreContext;
pub use errors::{DomainError, Result};
use shaku::module;
use use_cases::{
    stats::get_repository_stats::GetRepositoryStats,
    tree::{
        build_commit_graph::BuildCommitGraph, get_repository_tree::GetRepositoryTree,
        select_branches::SelectBranches,
    },
};

module! {
    pub CoreModule {
        components = [
            SelectBranches, BuildCommitGraph, GetRepositoryTree,
            GetRepositoryStats
        ],
        providers = []
    }
}
