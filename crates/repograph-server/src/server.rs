//! Server module.

use std::time::Instant;

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    error,
    middleware::Logger,
    web::{self, Data},
    App, HttpResponse, HttpServer,
};
use actix_web_prom::PrometheusMetrics;
use repograph_cache_interface::TreeCacheService;
use repograph_config::Config;
use repograph_core::{CoreContext, CoreModule};
use repograph_ghapi_interface::ApiService;
use tracing::info;

use crate::{
    health::health_check_route,
    metrics::build_metrics_handler,
    repositories::{repository_stats, repository_tree},
    Result, ServerError,
};

/// App context.
pub struct AppContext {
    /// Config.
    pub config: Config,
    /// Core module.
    pub core_module: CoreModule,
    /// API adapter
    pub api_service: Box<dyn ApiService>,
    /// Tree cache adapter
    pub cache_service: Box<dyn TreeCacheService>,
    /// Startup instant, for uptime reporting.
    pub started_at: Instant,
}

impl AppContext {
    /// Create new app context using adapters.
    pub fn new_with_adapters(
        config: Config,
        core_module: CoreModule,
        api_service: Box<dyn ApiService + Send + Sync>,
        cache_service: Box<dyn TreeCacheService + Send + Sync>,
    ) -> Self {
        Self {
            config,
            core_module,
            api_service,
            cache_service,
            started_at: Instant::now(),
        }
    }

    /// Convert the context for the core module.
    pub fn as_core_context(&self) -> CoreContext {
        CoreContext {
            config: &self.config,
            core_module: &self.core_module,
            api_service: self.api_service.as_ref(),
            cache_service: self.cache_service.as_ref(),
        }
    }
}

fn bad_request(message: String) -> error::Error {
    error::InternalError::from_response(
        "",
        HttpResponse::BadRequest().json(serde_json::json!({
            "success": false,
            "message": message
        })),
    )
    .into()
}

/// Build Actix app.
pub fn build_actix_app(
    context: Data<AppContext>,
    prometheus: PrometheusMetrics,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(context)
        .wrap(prometheus)
        .wrap(Logger::default())
        .service(
            web::scope("/repos/{owner}/{repo}")
                .route("/tree", web::get().to(repository_tree))
                .route("/stats", web::get().to(repository_stats)),
        )
        .route("/health", web::get().to(health_check_route))
        .route(
            "/",
            web::get().to(|| async {
                HttpResponse::Ok().json(serde_json::json!({
                    "success": true,
                    "message": "Welcome on repograph!"
                }))
            }),
        )
        .app_data(
            web::JsonConfig::default().error_handler(|err, _req| bad_request(err.to_string())),
        )
        .app_data(
            web::QueryConfig::default().error_handler(|err, _req| bad_request(err.to_string())),
        )
}

/// Run server.
pub async fn run_server(context: AppContext) -> Result<()> {
    let address = get_bind_address(&context.config);

    info!(
        version = context.config.version,
        address = %address,
        message = "Starting server",
    );

    run_server_internal(address, context).await
}

fn get_bind_address(config: &Config) -> String {
    format!("{}:{}", config.server.bind_ip, config.server.bind_port)
}

async fn run_server_internal(ip_with_port: String, context: AppContext) -> Result<()> {
    let prometheus = build_metrics_handler()?;
    let context = Data::new(context);
    let workers_count = context.config.server.workers_count;

    let mut server =
        HttpServer::new(move || build_actix_app(context.clone(), prometheus.clone()));

    if let Some(workers) = workers_count {
        server = server.workers(workers as usize);
    }

    server
        .bind(ip_with_port)
        .map_err(|e| ServerError::IoError { source: e })?
        .run()
        .await
        .map_err(|e| ServerError::IoError { source: e })
}
