use std::time::Duration;

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    web::Data,
    App,
};
use repograph_cache_interface::TreeCacheService;
use repograph_cache_memory::MemoryTreeCache;
use repograph_config::Config;
use repograph_core::CoreModule;
use repograph_ghapi_interface::MockApiService;

use crate::{
    metrics::build_metrics_handler,
    server::{build_actix_app, AppContext},
};

pub(crate) struct AppContextTest {
    pub config: Config,
    pub core_module: CoreModule,
    pub api_service: MockApiService,
    pub cache_service: Box<dyn TreeCacheService>,
}

impl AppContextTest {
    pub fn new() -> Self {
        let config = Config::default();
        let cache_service = Box::new(MemoryTreeCache::new(
            config.cache.capacity,
            Duration::from_secs(config.cache.ttl),
        ));

        Self {
            config,
            core_module: CoreModule::builder().build(),
            api_service: MockApiService::new(),
            cache_service,
        }
    }

    pub fn into_app(
        self,
    ) -> App<
        impl ServiceFactory<
            ServiceRequest,
            Config = (),
            Response = ServiceResponse<impl MessageBody>,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        let context = AppContext::new_with_adapters(
            self.config,
            self.core_module,
            Box::new(self.api_service),
            self.cache_service,
        );

        build_actix_app(Data::new(context), build_metrics_handler().unwrap())
    }
}
