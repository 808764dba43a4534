use clap::ArgMatches;
use colored::*;

use crate::cli_context::CliContext;
use crate::error::GraphResult;
use crate::graph_error;

pub async fn handle_delete(matches: &ArgMatches) -> GraphResult<()> {
    let id = matches
        .get_one::<String>("id")
        .ok_or_else(|| graph_error!(InvalidArgument, "Project ID is required"))?;

    let resolvers = CliContext::load()?.authenticated_resolvers()?;
    let payload = resolvers.delete_project(id).await?;

    if payload.success {
        println!("{} {}", "✅".green(), "Project deleted successfully!".green().bold());
        println!("Project ID: {}", id);
    }
    Ok(())
}
