use actix_http::StatusCode;
use actix_web::{web, HttpResponse, Responder};
use time::{format_description::well_known::Rfc3339, OffsetDateTime};

use crate::server::AppContext;

pub(crate) async fn health_check_route(ctx: web::Data<AppContext>) -> impl Responder {
    let cache_status = ctx.cache_service.health_check().await.is_ok();
    let (status_code, status, message) = if cache_status {
        (StatusCode::OK, "healthy", "Service is healthy")
    } else {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "degraded",
            "Service is degraded",
        )
    };

    let timestamp = OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_default();

    HttpResponse::build(status_code).json(serde_json::json!({
        "success": cache_status,
        "data": {
            "status": status,
            "timestamp": timestamp,
            "uptime": ctx.started_at.elapsed().as_secs_f64(),
            "cache": cache_status,
        },
        "message": message,
    }))
}

#[cfg(test)]
mod tests {
    use actix_web::test;
    use repograph_cache_interface::{CacheError, MockTreeCacheService};

    use super::*;
    use crate::testutils::AppContextTest;

    #[actix_web::test]
    async fn healthy() {
        let app = test::init_service(AppContextTest::new().into_app()).await;

        let resp = test::call_service(
            &app,
            test::TestRequest::get().uri("/health").to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["status"], "healthy");
        assert_eq!(body["data"]["cache"], true);
        assert!(OffsetDateTime::parse(body["data"]["timestamp"].as_str().unwrap(), &Rfc3339).is_ok());
    }

    #[actix_web::test]
    async fn degraded() {
        let mut ctx = AppContextTest::new();
        let mut cache = MockTreeCacheService::new();
        cache
            .expect_health_check()
            .returning(|| Err(CacheError::LockPoisoned));
        ctx.cache_service = Box::new(cache);
        let app = test::init_service(ctx.into_app()).await;

        let resp = test::call_service(
            &app,
            test::TestRequest::get().uri("/health").to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["status"], "degraded");
        assert_eq!(body["data"]["cache"], false);
    }
}
