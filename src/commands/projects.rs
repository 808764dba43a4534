use clap::ArgMatches;
use colored::*;

use super::{filters_from, pagination_from, print_json};
use crate::cli_context::CliContext;
use crate::error::GraphResult;
use crate::graph_error;

pub async fn handle_projects(matches: &ArgMatches) -> GraphResult<()> {
    let resolvers = CliContext::load()?.resolvers();
    let filters = filters_from(matches);
    let pagination = pagination_from(matches);

    let connection = resolvers
        .projects(filters.as_ref(), pagination.as_ref())
        .await?;

    if connection.is_empty() {
        eprintln!("{}", "No projects found.".yellow());
    }
    print_json(&connection)
}

pub async fn handle_project(matches: &ArgMatches) -> GraphResult<()> {
    let id = project_id(matches)?;
    let resolvers = CliContext::load()?.resolvers();

    match resolvers.project(id).await? {
        Some(project) => print_json(&project),
        None => {
            println!("{}", format!("{} is not a project id", id).yellow());
            Ok(())
        }
    }
}

pub async fn handle_owner(matches: &ArgMatches) -> GraphResult<()> {
    let id = project_id(matches)?;
    let resolvers = CliContext::load()?.resolvers();

    let project = resolvers
        .project(id)
        .await?
        .ok_or_else(|| graph_error!(InvalidIdentifier, "{} is not a project id", id))?;
    let owner = resolvers.project_owner(&project).await?;
    print_json(&owner)
}

fn project_id(matches: &ArgMatches) -> GraphResult<&String> {
    matches
        .get_one::<String>("id")
        .ok_or_else(|| graph_error!(InvalidArgument, "Project ID is required"))
}
