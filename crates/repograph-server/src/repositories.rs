//! Repository handlers.

use actix_web::{web, HttpResponse};
use repograph_config::TreeConfig;
use repograph_core::use_cases::{
    stats::GetRepositoryStatsInterface, tree::GetRepositoryTreeInterface,
};
use repograph_models::RepositoryPath;
use serde::Deserialize;
use shaku::HasComponent;

use crate::{server::AppContext, Result};

#[derive(Debug, Deserialize)]
pub(crate) struct TreeQuery {
    limit: Option<String>,
}

/// Commits per branch asked by a query string; unparsable limits count as missing.
pub(crate) fn commit_limit_from_query(limit: Option<&str>, config: &TreeConfig) -> u32 {
    config.commit_limit(limit.and_then(|l| l.trim().parse::<i64>().ok()))
}

fn success(data: impl serde::Serialize) -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "data": data
    }))
}

#[tracing::instrument(skip(ctx))]
pub(crate) async fn repository_tree(
    ctx: web::Data<AppContext>,
    path: web::Path<(String, String)>,
    query: web::Query<TreeQuery>,
) -> Result<HttpResponse> {
    let (owner, name) = path.into_inner();
    let repository_path = RepositoryPath::try_from_components(&owner, &name)?;
    let limit = commit_limit_from_query(query.limit.as_deref(), &ctx.config.tree);

    let get_repository_tree: &dyn GetRepositoryTreeInterface = ctx.core_module.resolve_ref();
    let tree = get_repository_tree
        .run(&ctx.as_core_context(), &repository_path, Some(limit))
        .await?;

    Ok(success(tree))
}

#[tracing::instrument(skip(ctx))]
pub(crate) async fn repository_stats(
    ctx: web::Data<AppContext>,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse> {
    let (owner, name) = path.into_inner();
    let repository_path = RepositoryPath::try_from_components(&owner, &name)?;

    let get_repository_stats: &dyn GetRepositoryStatsInterface = ctx.core_module.resolve_ref();
    let stats = get_repository_stats
        .run(&ctx.as_core_context(), &repository_path)
        .await?;

    Ok(success(stats))
}

#[cfg(test)]
mod tests {
    use actix_web::{http::StatusCode, test};
    use mockall::predicate;
    use pretty_assertions::assert_eq;
    use repograph_core::{
        use_cases::{stats::MockGetRepositoryStatsInterface, tree::MockGetRepositoryTreeInterface},
        CoreModule, DomainError,
    };
    use repograph_ghapi_interface::ApiError;
    use repograph_models::{CommitEdge, CommitNode, RepoTree, RepositoryStats};

    use super::*;
    use crate::testutils::AppContextTest;

    #[::core::prelude::v1::test]
    fn commit_limits() {
        let config = TreeConfig {
            max_branches: 5,
            default_commits_per_branch: 50,
            max_commits_per_branch: 200,
        };

        assert_eq!(commit_limit_from_query(None, &config), 50);
        assert_eq!(commit_limit_from_query(Some("abc"), &config), 50);
        assert_eq!(commit_limit_from_query(Some("0"), &config), 50);
        assert_eq!(commit_limit_from_query(Some("10"), &config), 10);
        assert_eq!(commit_limit_from_query(Some("500"), &config), 200);
        assert_eq!(commit_limit_from_query(Some("-3"), &config), 1);
    }

    fn tree() -> RepoTree {
        RepoTree {
            branches: vec!["main".into()],
            nodes: vec![CommitNode {
                id: "a1".into(),
                label: "a1".into(),
                branch: "main".into(),
                message: "init".into(),
                author: "me".into(),
                date: "2024-01-01T00:00:00Z".into(),
            }],
            edges: vec![CommitEdge::new("a1", "a0")],
        }
    }

    fn with_tree_mock(
        ctx: &mut AppContextTest,
        limit: u32,
        result: std::result::Result<RepoTree, DomainError>,
    ) {
        let mut get_repository_tree = MockGetRepositoryTreeInterface::new();
        get_repository_tree
            .expect_run()
            .withf(move |_, path, l| path.full_name() == "me/test" && *l == Some(limit))
            .times(1)
            .return_once(move |_, _, _| result);

        ctx.core_module = CoreModule::builder()
            .with_component_override::<dyn GetRepositoryTreeInterface>(Box::new(
                get_repository_tree,
            ))
            .build();
    }

    #[actix_web::test]
    async fn get_tree() {
        let mut ctx = AppContextTest::new();
        with_tree_mock(&mut ctx, 50, Ok(tree()));
        let app = test::init_service(ctx.into_app()).await;

        let resp = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/repos/me/test/tree")
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(
            body,
            serde_json::json!({
                "success": true,
                "data": {
                    "branches": ["main"],
                    "nodes": [{
                        "id": "a1",
                        "label": "a1",
                        "branch": "main",
                        "message": "init",
                        "author": "me",
                        "date": "2024-01-01T00:00:00Z"
                    }],
                    "edges": [{"id": "a1-a0", "source": "a1", "target": "a0"}]
                }
            })
        );
    }

    #[actix_web::test]
    async fn get_tree_clamps_limit() {
        let mut ctx = AppContextTest::new();
        with_tree_mock(&mut ctx, 200, Ok(tree()));
        let app = test::init_service(ctx.into_app()).await;

        let resp = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/repos/me/test/tree?limit=1000")
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn get_tree_unknown_repository() {
        let mut ctx = AppContextTest::new();
        with_tree_mock(
            &mut ctx,
            50,
            Err(DomainError::RepositoryNotFound {
                repository_path: RepositoryPath::new_from_components("me", "test"),
            }),
        );
        let app = test::init_service(ctx.into_app()).await;

        let resp = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/repos/me/test/tree?limit=nope")
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(
            body,
            serde_json::json!({
                "success": false,
                "message": "Repository not found: me/test"
            })
        );
    }

    #[actix_web::test]
    async fn get_tree_upstream_failure() {
        let mut ctx = AppContextTest::new();
        with_tree_mock(
            &mut ctx,
            50,
            Err(DomainError::UpstreamError {
                source: ApiError::UpstreamStatus {
                    status: 403,
                    path: "/repos/me/test/git/refs/heads".into(),
                },
            }),
        );
        let app = test::init_service(ctx.into_app()).await;

        let resp = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/repos/me/test/tree")
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    }

    #[actix_web::test]
    async fn get_tree_rejects_invalid_repository_name() {
        let ctx = AppContextTest::new();
        let app = test::init_service(ctx.into_app()).await;

        for uri in [
            "/repos/me/test%3Fx=1%23/tree",
            "/repos/me/te%20st/tree",
            "/repos/m%40e/test/stats",
        ] {
            let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{uri}");

            let body: serde_json::Value = test::read_body_json(resp).await;
            assert_eq!(body["success"], false);
        }

        let resp = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/repos/me/test%3Fx=1%23/tree")
                .to_request(),
        )
        .await;
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(
            body["message"],
            "Invalid request: Invalid repository path: me/test?x=1#"
        );
    }

    #[actix_web::test]
    async fn get_tree_end_to_end() {
        let mut ctx = AppContextTest::new();
        ctx.api_service
            .expect_git_refs_heads_list()
            .times(1)
            .returning(|_, _| Ok(vec![]));
        let app = test::init_service(ctx.into_app()).await;

        for _ in 0..2 {
            let resp = test::call_service(
                &app,
                test::TestRequest::get()
                    .uri("/repos/me/empty/tree")
                    .to_request(),
            )
            .await;
            assert_eq!(resp.status(), StatusCode::OK);

            let body: serde_json::Value = test::read_body_json(resp).await;
            assert_eq!(
                body["data"],
                serde_json::json!({"branches": [], "nodes": [], "edges": []})
            );
        }
    }

    #[actix_web::test]
    async fn get_stats() {
        let mut ctx = AppContextTest::new();
        let mut get_repository_stats = MockGetRepositoryStatsInterface::new();
        get_repository_stats
            .expect_run()
            .with(
                predicate::always(),
                predicate::eq(RepositoryPath::new_from_components("me", "test")),
            )
            .times(1)
            .return_once(|_, _| {
                Ok(RepositoryStats {
                    owner: "me".into(),
                    name: "test".into(),
                    full_name: "me/test".into(),
                    stars: 5,
                    contributors: 2,
                    ..Default::default()
                })
            });
        ctx.core_module = CoreModule::builder()
            .with_component_override::<dyn GetRepositoryStatsInterface>(Box::new(
                get_repository_stats,
            ))
            .build();
        let app = test::init_service(ctx.into_app()).await;

        let resp = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/repos/me/test/stats")
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["full_name"], "me/test");
        assert_eq!(body["data"]["stars"], 5);
        assert_eq!(body["data"]["contributors"], 2);
    }
}
