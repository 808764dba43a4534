use clap::ArgMatches;
use colored::*;

use super::{print_json, project_fields_from};
use crate::cli_context::CliContext;
use crate::error::GraphResult;
use crate::models::CreateProjectInput;

pub async fn handle_create(matches: &ArgMatches) -> GraphResult<()> {
    let fields = project_fields_from(matches)?;
    let input = CreateProjectInput {
        title: fields.title,
        description: fields.description,
        files: fields.files,
        template: matches.get_one::<String>("template").cloned(),
        dependencies: fields.dependencies,
        settings: fields.settings,
        tags: fields.tags,
        open_file: fields.open_file,
    };

    let resolvers = CliContext::load()?.authenticated_resolvers()?;
    let payload = resolvers.create_project(&input).await?;

    eprintln!("{} {}", "✅".green(), "Project created successfully!".green().bold());
    print_json(&payload)
}
