use anyhow::Result;
use async_trait::async_trait;
use clap::Parser;
use repograph_core::use_cases::stats::GetRepositoryStatsInterface;
use repograph_models::RepositoryPath;
use shaku::HasComponent;

use super::{Command, CommandContext};

/// Show repository statistics
#[derive(Parser)]
pub(crate) struct StatsCommand {
    /// Repository path (e.g. `MyOrganization/my-project`)
    repository_path: RepositoryPath,
}

#[async_trait]
impl Command for StatsCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        let get_repository_stats: &dyn GetRepositoryStatsInterface =
            ctx.core_module.resolve_ref();
        let stats = get_repository_stats
            .run(&ctx.as_core_context(), &self.repository_path)
            .await?;

        let mut writer = ctx.writer.write().await;
        writeln!(writer, "Statistics of {}", stats.full_name)?;
        if let Some(description) = &stats.description {
            writeln!(writer, "  {}", description)?;
        }
        writeln!(writer, "  URL: {}", stats.html_url)?;
        writeln!(
            writer,
            "  Language: {}",
            stats.language.as_deref().unwrap_or("unknown")
        )?;
        writeln!(writer, "  Stars: {}", stats.stars)?;
        writeln!(writer, "  Forks: {}", stats.forks)?;
        writeln!(writer, "  Open issues: {}", stats.open_issues)?;
        writeln!(writer, "  Open pull requests: {}", stats.open_pull_requests)?;
        writeln!(writer, "  Contributors: {}", stats.contributors)?;
        writeln!(writer, "  Updated at: {}", stats.updated_at)?;

        Ok(())
    }
}
