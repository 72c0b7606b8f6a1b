use std::{io::Write, sync::Arc, time::Duration};

use clap::Parser;
use repograph_cache_memory::MemoryTreeCache;
use repograph_config::Config;
use repograph_core::CoreModule;
use repograph_ghapi_interface::MockApiService;
use tokio::sync::RwLock;

use crate::{
    args::{Args, CommandExecutor},
    commands::CommandContext,
};

pub(crate) struct CommandContextTest {
    pub config: Config,
    pub core_module: CoreModule,
    pub api_service: MockApiService,
    pub cache_service: MemoryTreeCache,
}

impl CommandContextTest {
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

    pub fn into_context(self, writer: Arc<RwLock<dyn Write + Send + Sync>>) -> CommandContext {
        CommandContext {
            config: self.config,
            core_module: self.core_module,
            api_service: Box::new(self.api_service),
            cache_service: Box::new(self.cache_service),
            writer,
        }
    }
}

pub(crate) async fn test_command(ctx: CommandContextTest, command_args: &[&str]) -> String {
    let buf = Arc::new(RwLock::new(Vec::new()));

    {
        let command_args = {
            let mut tmp_args = vec!["repograph"];
            tmp_args.extend(command_args);
            tmp_args
        };

        let args = Args::try_parse_from(command_args);
        match args {
            Ok(args) => CommandExecutor::parse_args_async(args, ctx.into_context(buf.clone()))
                .await
                .unwrap(),
            Err(e) => {
                eprintln!("{}", e);
                panic!("Parse error.")
            }
        }
    }

    let vec = buf.read().await.to_vec();
    std::str::from_utf8(&vec).unwrap().to_string()
}
