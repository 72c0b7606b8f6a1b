//! GitHub types.

mod commits;
mod common;
mod git;
mod repositories;

pub use commits::{GhCommit, GhCommitDetails, GhCommitParent, GhCommitSignature};
pub use common::GhUser;
pub use git::{GhGitObject, GhGitRef, BRANCH_HEADS_PREFIX};
pub use repositories::GhRepository;
