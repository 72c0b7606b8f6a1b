use repograph_ghapi_interface::types::GhGitRef;
use repograph_models::BranchRef;
use shaku::{Component, Interface};

/// Picks the branches to walk from the listed branch heads.
#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
pub trait SelectBranchesInterface: Interface {
    fn run(&self, refs: &[GhGitRef], max_branches: usize) -> Vec<BranchRef>;
}

#[derive(Component)]
#[shaku(interface = SelectBranchesInterface)]
pub(crate) struct SelectBranches;

impl SelectBranchesInterface for SelectBranches {
    #[tracing::instrument(skip(self, refs), fields(refs_count = refs.len()), ret)]
    fn run(&self, refs: &[GhGitRef], max_branches: usize) -> Vec<BranchRef> {
        refs.iter()
            .filter_map(|r| {
                r.branch_name()
                    .map(|name| BranchRef::new(name, r.object.sha.clone()))
            })
            .take(max_branches)
            .collect()
    }
}
