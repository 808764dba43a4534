use clap::ArgMatches;
use colored::*;

use super::print_json;
use crate::cli_context::CliContext;
use crate::error::GraphResult;
use crate::graph_error;

pub async fn handle_node(matches: &ArgMatches) -> GraphResult<()> {
    let id = matches
        .get_one::<String>("id")
        .ok_or_else(|| graph_error!(InvalidArgument, "Node ID is required"))?;

    let resolvers = CliContext::load()?.resolvers();
    match resolvers.node(id).await? {
        Some(node) => print_json(&node),
        None => {
            println!("{}", format!("No node found for {}", id).yellow());
            Ok(())
        }
    }
}
