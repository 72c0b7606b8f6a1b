use std::{sync::Arc, time::Duration};

use anyhow::Result;
use clap::Parser;
use repograph_cache_interface::TreeCacheService;
use repograph_cache_memory::MemoryTreeCache;
use repograph_cache_null::NullTreeCache;
use repograph_config::{ApiDriver, CacheDriver, Config};
use repograph_core::CoreModule;
use repograph_ghapi_interface::ApiService;
use repograph_ghapi_null::NullApiService;
use repograph_server::ghapi::MetricsApiService;
use tokio::sync::RwLock;
use tracing::info;

use crate::commands::{Command, CommandContext, SubCommand};

#[derive(Parser)]
#[command(version, about = "Commit graph explorer for GitHub repositories", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    cmd: SubCommand,
}

pub struct CommandExecutor;

impl CommandExecutor {
    pub fn parse_args(config: Config, args: Args) -> Result<()> {
        let sync = |config: Config, args: Args| async move {
            let core_module = CoreModule::builder().build();

            let api_service: Box<dyn ApiService + Send + Sync + 'static> = {
                if config.api.driver == ApiDriver::GitHub {
                    info!("Using MetricsApiService API driver");
                    Box::new(MetricsApiService::new(config.clone())?)
                } else {
                    info!("Using NullApiService API driver");
                    Box::new(NullApiService::new())
                }
            };

            let cache_service: Box<dyn TreeCacheService + Send + Sync + 'static> = {
                if config.cache.driver == CacheDriver::Memory {
                    info!("Using MemoryTreeCache cache driver");
                    Box::new(MemoryTreeCache::new(
                        config.cache.capacity,
                        Duration::from_secs(config.cache.ttl),
                    ))
                } else {
                    info!("Using NullTreeCache cache driver");
                    Box::new(NullTreeCache::new())
                }
            };

            let ctx = CommandContext {
                config,
                core_module,
                api_service,
                cache_service,
                writer: Arc::new(RwLock::new(std::io::stdout())),
            };

            Self::parse_args_async(args, ctx).await
        };

        actix_rt::System::with_tokio_rt(|| {
            tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()
                .expect("tokio runtime should build")
        })
        .block_on(sync(config, args))
    }

    pub(crate) async fn parse_args_async(args: Args, ctx: CommandContext) -> Result<()> {
        args.cmd.execute(ctx).await
    }
}
