use clap::ArgMatches;
use colored::*;

use super::{filters_from, pagination_from, print_json};
use crate::cli_context::CliContext;
use crate::error::GraphResult;
use crate::graph_error;

pub async fn handle_users(matches: &ArgMatches) -> GraphResult<()> {
    let resolvers = CliContext::load()?.resolvers();
    let pagination = pagination_from(matches);

    let connection = resolvers.users(pagination.as_ref()).await?;
    print_json(&connection)
}

pub async fn handle_user(matches: &ArgMatches) -> GraphResult<()> {
    let id = user_id(matches)?;
    let resolvers = CliContext::load()?.resolvers();

    match resolvers.user(id).await? {
        Some(user) => print_json(&user),
        None => {
            println!("{}", format!("{} is not a user id", id).yellow());
            Ok(())
        }
    }
}

pub async fn handle_user_projects(matches: &ArgMatches) -> GraphResult<()> {
    let id = user_id(matches)?;
    let resolvers = CliContext::load()?.resolvers();

    let user = resolvers
        .user(id)
        .await?
        .ok_or_else(|| graph_error!(InvalidIdentifier, "{} is not a user id", id))?;
    let filters = filters_from(matches);
    let pagination = pagination_from(matches);

    let connection = resolvers
        .user_projects(&user, filters.as_ref(), pagination.as_ref())
        .await?;
    print_json(&connection)
}

fn user_id(matches: &ArgMatches) -> GraphResult<&String> {
    matches
        .get_one::<String>("id")
        .ok_or_else(|| graph_error!(InvalidArgument, "User ID is required"))
}
