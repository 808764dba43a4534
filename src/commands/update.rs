use clap::ArgMatches;
use colored::*;

use super::{print_json, project_fields_from};
use crate::cli_context::CliContext;
use crate::error::GraphResult;
use crate::graph_error;

pub async fn handle_update(matches: &ArgMatches) -> GraphResult<()> {
    let id = project_id(matches)?;
    let input = project_fields_from(matches)?;

    let resolvers = CliContext::load()?.authenticated_resolvers()?;
    let payload = resolvers.update_project(id, &input).await?;

    eprintln!("{} {}", "✅".green(), "Project updated successfully!".green().bold());
    print_json(&payload)
}

pub async fn handle_fork(matches: &ArgMatches) -> GraphResult<()> {
    let id = project_id(matches)?;
    let input = project_fields_from(matches)?;
    let input = (!input.is_empty()).then_some(input);

    let resolvers = CliContext::load()?.authenticated_resolvers()?;
    let payload = resolvers.fork_project(id, input.as_ref()).await?;

    eprintln!("{} {}", "✅".green(), "Project forked successfully!".green().bold());
    print_json(&payload)
}

fn project_id(matches: &ArgMatches) -> GraphResult<&String> {
    matches
        .get_one::<String>("id")
        .ok_or_else(|| graph_error!(InvalidArgument, "Project ID is required"))
}
