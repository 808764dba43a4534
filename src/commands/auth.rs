use clap::ArgMatches;
use colored::*;

use crate::cli_context::CliContext;
use crate::error::GraphResult;

pub async fn handle_auth(matches: &ArgMatches) -> GraphResult<()> {
    let mut context = CliContext::load()?;

    if let Some(api_key) = matches.get_one::<String>("api-key") {
        context.set_api_key(api_key.clone())?;
        println!("{} {}", "✅".green(), "API key saved successfully!".green().bold());
    } else if matches.get_flag("show") {
        match &context.source_config().api_key {
            Some(key) if key.len() > 12 => {
                println!("API Key: {}...{}", &key[..8], &key[key.len() - 4..])
            }
            Some(_) => println!("API Key: (set)"),
            None => println!("No API key configured"),
        }
    } else {
        println!("Usage: sbgraph auth --api-key <KEY> or sbgraph auth --show");
    }
    Ok(())
}
