use async_trait::async_trait;
use repograph_models::{RepositoryPath, RepositoryStats};
use shaku::{Component, Interface};
use tracing::warn;

use crate::{CoreContext, Result};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait GetRepositoryStatsInterface: Interface {
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        repository_path: &RepositoryPath,
    ) -> Result<RepositoryStats>;
}

#[derive(Component)]
#[shaku(interface = GetRepositoryStatsInterface)]
pub(crate) struct GetRepositoryStats;

#[async_trait]
impl GetRepositoryStatsInterface for GetRepositoryStats {
    #[tracing::instrument(skip(self, ctx), fields(repository_path = %repository_path), ret)]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        repository_path: &RepositoryPath,
    ) -> Result<RepositoryStats> {
        let (owner, name) = repository_path.components();

        let (repository, contributors, open_pull_requests) = tokio::join!(
            ctx.api_service.repository_get(owner, name),
            ctx.api_service.contributors_count(owner, name),
            ctx.api_service.pulls_open_count(owner, name)
        );
        let repository = repository?;

        let contributors = contributors.unwrap_or_else(|e| {
            warn!(error = %e, message = "Could not count contributors");
            0
        });
        let open_pull_requests = open_pull_requests.unwrap_or_else(|e| {
            warn!(error = %e, message = "Could not count open pull requests");
            0
        });

        Ok(RepositoryStats {
            owner: owner.into(),
            name: repository.name,
            full_name: repository.full_name,
            description: repository.description,
            html_url: repository.html_url,
            language: repository.language,
            stars: repository.stargazers_count,
            forks: repository.forks_count,
            open_issues: repository.open_issues_count,
            contributors,
            open_pull_requests,
            updated_at: repository.updated_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use repograph_ghapi_interface::{types::GhRepository, ApiError};

    use super::*;
    use crate::{context::tests::CoreContextTest, DomainError};

    fn repository() -> GhRepository {
        GhRepository {
            id: 1,
            name: "test".into(),
            full_name: "me/test".into(),
            description: Some("Test repository".into()),
            html_url: "https://github.com/me/test".into(),
            stargazers_count: 12,
            forks_count: 3,
            open_issues_count: 4,
            language: Some("Rust".into()),
            updated_at: "2024-01-01T00:00:00Z".into(),
        }
    }

    fn path() -> RepositoryPath {
        RepositoryPath::new_from_components("me", "test")
    }

    #[tokio::test]
    async fn run() {
        let mut ctx = CoreContextTest::new();
        ctx.api_service
            .expect_repository_get()
            .times(1)
            .returning(|_, _| Ok(repository()));
        ctx.api_service
            .expect_contributors_count()
            .times(1)
            .returning(|_, _| Ok(7));
        ctx.api_service
            .expect_pulls_open_count()
            .times(1)
            .returning(|_, _| Ok(2));

        let stats = GetRepositoryStats
            .run(&ctx.as_context(), &path())
            .await
            .unwrap();

        assert_eq!(
            stats,
            RepositoryStats {
                owner: "me".into(),
                name: "test".into(),
                full_name: "me/test".into(),
                description: Some("Test repository".into()),
                html_url: "https://github.com/me/test".into(),
                language: Some("Rust".into()),
                stars: 12,
                forks: 3,
                open_issues: 4,
                contributors: 7,
                open_pull_requests: 2,
                updated_at: "2024-01-01T00:00:00Z".into(),
            }
        );
    }

    #[tokio::test]
    async fn count_failures_are_zero() {
        let mut ctx = CoreContextTest::new();
        ctx.api_service
            .expect_repository_get()
            .returning(|_, _| Ok(repository()));
        ctx.api_service.expect_contributors_count().returning(|_, _| {
            Err(ApiError::UpstreamStatus {
                status: 403,
                path: "/repos/me/test/contributors".into(),
            })
        });
        ctx.api_service.expect_pulls_open_count().returning(|_, _| {
            Err(ApiError::UpstreamStatus {
                status: 500,
                path: "/repos/me/test/pulls".into(),
            })
        });

        let stats = GetRepositoryStats
            .run(&ctx.as_context(), &path())
            .await
            .unwrap();

        assert_eq!(stats.contributors, 0);
        assert_eq!(stats.open_pull_requests, 0);
        assert_eq!(stats.stars, 12);
    }

    #[tokio::test]
    async fn unknown_repository() {
        let mut ctx = CoreContextTest::new();
        ctx.api_service
            .expect_repository_get()
            .returning(|owner, name| {
                Err(ApiError::RepositoryNotFound {
                    owner: owner.into(),
                    name: name.into(),
                })
            });
        ctx.api_service
            .expect_contributors_count()
            .returning(|_, _| Ok(0));
        ctx.api_service
            .expect_pulls_open_count()
            .returning(|_, _| Ok(0));

        let result = GetRepositoryStats.run(&ctx.as_context(), &path()).await;
        assert!(matches!(
            result,
            Err(DomainError::RepositoryNotFound { .. })
        ));
    }
}
