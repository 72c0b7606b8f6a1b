use repograph_cache_interface::TreeCacheService;
use repograph_config::Config;
use repograph_ghapi_interface::ApiService;

use crate::CoreModule;

pub struct CoreContext<'a> {
    pub config: &'a Config,
    pub core_module: &'a CoreModule,
    pub api_service: &'a (dyn ApiService + 'a),
    pub cache_service: &'a (dyn TreeCacheService + 'a),
}

#[cfg(any(test, feature = "testkit"))]
pub(crate) mod tests {
    use std::time::Duration;

    use repograph_cache_memory::MemoryTreeCache;
    use repograph_config::Config;
    use repograph_ghapi_interface::MockApiService;

    use crate::{CoreContext, CoreModule};

    #[allow(dead_code)]
    pub struct CoreContextTest {
        pub config: Config,
        pub core_module: CoreModule,
        pub api_service: MockApiService,
        pub cache_service: MemoryTreeCache,
    }

    impl CoreContextTest {
        #[allow(dead_code)]
        pub fn new() -> Self {
            let config = Config::default();
            let cache_service = MemoryTreeCache::new(
                config.cache.capacity,
                Duration::from_secs(config.cache.ttl),
            );

            Self {
                config,
                core_module: CoreModule::builder().build(),
                api_service: MockApiService::new(),
                cache_service,
            }
        }

        #[allow(dead_code)]
        pub fn as_context(&self) -> CoreContext {
            CoreContext {
                config: &self.config,
                core_module: &self.core_module,
                api_service: &self.api_service,
                cache_service: &self.cache_service,
            }
        }
    }
}
