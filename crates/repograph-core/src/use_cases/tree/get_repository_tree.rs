use async_trait::async_trait;
use futures::future::try_join_all;
use repograph_models::{RepoTree, RepositoryPath};
use shaku::{Component, HasComponent, Interface};
use tracing::{debug, info};

use super::{
    build_commit_graph::{BranchCommits, BuildCommitGraphInterface},
    in_flight::{InFlightRole, InFlightTable},
    select_branches::SelectBranchesInterface,
};
use crate::{CoreContext, Result};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait GetRepositoryTreeInterface: Interface {
    /// Get the commit graph of a repository, walking at most
    /// `max_commits_per_branch` commits per branch.
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        repository_path: &RepositoryPath,
        max_commits_per_branch: Option<u32>,
    ) -> Result<RepoTree>;
}

#[derive(Component, Default)]
#[shaku(interface = GetRepositoryTreeInterface)]
pub(crate) struct GetRepositoryTree {
    #[shaku(default)]
    in_flight: InFlightTable,
}

#[async_trait]
impl GetRepositoryTreeInterface for GetRepositoryTree {
    #[tracing::instrument(skip(self, ctx), fields(repository_path = %repository_path))]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        repository_path: &RepositoryPath,
        max_commits_per_branch: Option<u32>,
    ) -> Result<RepoTree> {
        let key = repository_path.full_name();
        if let Some(tree) = ctx.cache_service.get_tree(&key).await? {
            debug!(message = "Cache hit");
            return Ok(tree);
        }

        loop {
            match self.in_flight.join(&key) {
                InFlightRole::Follower(follower) => {
                    debug!(message = "Waiting for running fetch");
                    if let Some(outcome) = follower.outcome().await {
                        return outcome;
                    }
                    // Leader went away without outcome, try again.
                }
                InFlightRole::Leader(leader) => {
                    let outcome = self
                        .fetch(ctx, repository_path, &key, max_commits_per_branch)
                        .await;
                    leader.publish(outcome.clone());
                    return outcome;
                }
            }
        }
    }
}

impl GetRepositoryTree {
    async fn fetch(
        &self,
        ctx: &CoreContext<'_>,
        repository_path: &RepositoryPath,
        key: &str,
        max_commits_per_branch: Option<u32>,
    ) -> Result<RepoTree> {
        // Another leader may have filled the cache since the first lookup.
        if let Some(tree) = ctx.cache_service.get_tree(key).await? {
            return Ok(tree);
        }

        let (owner, name) = repository_path.components();
        let refs = ctx.api_service.git_refs_heads_list(owner, name).await?;

        let select_branches: &dyn SelectBranchesInterface = ctx.core_module.resolve_ref();
        let branches = select_branches.run(&refs, ctx.config.tree.max_branches);

        let per_page = match max_commits_per_branch {
            Some(limit) if limit > 0 => limit,
            _ => ctx.config.tree.default_commits_per_branch,
        };

        let listings = try_join_all(branches.iter().map(|branch| async move {
            let commits = ctx
                .api_service
                .commits_list(owner, name, &branch.name, per_page)
                .await?;
            Ok::<_, crate::DomainError>(BranchCommits::new(branch.name.clone(), commits))
        }))
        .await?;

        let build_commit_graph: &dyn BuildCommitGraphInterface = ctx.core_module.resolve_ref();
        let tree = build_commit_graph.run(&listings);

        ctx.cache_service.put_tree(key, tree.clone()).await?;
        info!(
            branches = tree.branches.len(),
            nodes = tree.nodes.len(),
            edges = tree.edges.len(),
            message = "Fetched repository tree"
        );

        Ok(tree)
    }
}
