mod git_ref;

pub use git_ref::{GhGitObject, GhGitRef, BRANCH_HEADS_PREFIX};
