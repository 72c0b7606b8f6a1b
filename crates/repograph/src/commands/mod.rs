//! Commands.

use std::{io::Write, sync::Arc};

use anyhow::Result;
use async_trait::async_trait;
use clap::Subcommand;
use repograph_cache_interface::TreeCacheService;
use repograph_config::Config;
use repograph_core::{CoreContext, CoreModule};
use repograph_ghapi_interface::ApiService;
use tokio::sync::RwLock;

use self::{server::ServerCommand, stats::StatsCommand, tree::TreeCommand};

mod server;
mod stats;
mod tree;

pub(crate) struct CommandContext {
    pub config: Config,
    pub core_module: CoreModule,
    pub api_service: Box<dyn ApiService + Send + Sync>,
    pub cache_service: Box<dyn TreeCacheService + Send + Sync>,
    pub writer: Arc<RwLock<dyn Write + Send + Sync>>,
}

impl CommandContext {
    pub fn as_core_context(&self) -> CoreContext {
        CoreContext {
            config: &self.config,
            core_module: &self.core_module,
            api_service: self.api_service.as_ref(),
            cache_service: self.cache_service.as_ref(),
        }
    }
}

#[async_trait]
pub(crate) trait Command {
    async fn execute(self, ctx: CommandContext) -> Result<()>;
}

/// Command
#[derive(Subcommand)]
pub(crate) enum SubCommand {
    Server(ServerCommand),
    Tree(TreeCommand),
    Stats(StatsCommand),
}

#[async_trait]
impl Command for SubCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        match self {
            Self::Server(sub) => sub.execute(ctx).await,
            Self::Tree(sub) => sub.execute(ctx).await,
            Self::Stats(sub) => sub.execute(ctx).await,
        }
    }
}
