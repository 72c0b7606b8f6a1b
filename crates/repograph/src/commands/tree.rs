use anyhow::Result;
use async_trait::async_trait;
use clap::Parser;
use repograph_core::use_cases::tree::GetRepositoryTreeInterface;
use repograph_models::{RepoTree, RepositoryPath};
use shaku::HasComponent;

use super::{Command, CommandContext};

/// Show the commit graph of a repository
#[derive(Parser)]
pub(crate) struct TreeCommand {
    /// Repository path (e.g. `MyOrganization/my-project`)
    repository_path: RepositoryPath,
    /// Commits walked per branch, clamped to the configured maximum
    #[clap(short, long, allow_negative_numbers = true)]
    limit: Option<i64>,
    /// Output the graph as JSON
    #[clap(long)]
    json: bool,
}

#[async_trait]
impl Command for TreeCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        let get_repository_tree: &dyn GetRepositoryTreeInterface = ctx.core_module.resolve_ref();
        let limit = ctx.config.tree.commit_limit(self.limit);
        let tree = get_repository_tree
            .run(&ctx.as_core_context(), &self.repository_path, Some(limit))
            .await?;

        let mut writer = ctx.writer.write().await;
        if self.json {
            writeln!(writer, "{}", serde_json::to_string_pretty(&tree)?)?;
        } else {
            write_summary(&mut *writer, &self.repository_path, &tree)?;
        }

        Ok(())
    }
}

fn write_summary<W: std::io::Write + ?Sized>(
    writer: &mut W,
    repository_path: &RepositoryPath,
    tree: &RepoTree,
) -> Result<()> {
    if tree.is_empty() {
        writeln!(writer, "Repository {} has no branch.", repository_path)?;
        return Ok(());
    }

    writeln!(writer, "Commit graph of {}", repository_path)?;
    writeln!(writer, "  Branches: {}", tree.branches.join(", "))?;
    writeln!(writer, "  Commits: {}", tree.nodes.len())?;
    writeln!(writer, "  Edges: {}", tree.edges.len())?;
    writeln!(writer, "  Merge commits: {}", tree.merge_commits().len())?;
    writeln!(writer)?;

    for node in &tree.nodes {
        writeln!(
            writer,
            "{} [{}] {}: {}",
            node.label,
            node.branch,
            node.author,
            node.message.lines().next().unwrap_or_default()
        )?;
    }

    Ok(())
}
