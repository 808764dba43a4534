pub mod auth;
pub mod create;
pub mod delete;
pub mod ids;
pub mod node;
pub mod projects;
pub mod update;
pub mod users;

use std::collections::BTreeMap;
use std::fs;

use clap::ArgMatches;
use serde::Serialize;

use crate::error::{ErrorContext, GraphResult};
use crate::graph_error;
use crate::models::{PaginationInput, ProjectFilters, UpdateProjectInput};

pub fn print_json<T: Serialize>(value: &T) -> GraphResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn pagination_from(matches: &ArgMatches) -> Option<PaginationInput> {
    let first = matches.get_one::<u32>("first").copied();
    let after = matches.get_one::<String>("after").cloned();
    (first.is_some() || after.is_some()).then(|| PaginationInput::new(first, after))
}

pub fn filters_from(matches: &ArgMatches) -> Option<ProjectFilters> {
    let filters = ProjectFilters {
        user_id: matches.get_one::<String>("user-id").cloned(),
        tag: matches.get_one::<String>("tag").cloned(),
        search: matches.get_one::<String>("search").cloned(),
        template: matches.get_one::<String>("template").cloned(),
    };
    (filters != ProjectFilters::default()).then_some(filters)
}

/// Optional project fields shared by `create`, `update` and `fork`.
pub fn project_fields_from(matches: &ArgMatches) -> GraphResult<UpdateProjectInput> {
    let files = match matches.get_many::<String>("file") {
        Some(paths) => Some(read_files(paths.map(String::as_str))?),
        None => None,
    };
    let dependencies = match matches.get_many::<String>("dependency") {
        Some(specs) => Some(
            specs
                .map(|spec| parse_dependency(spec))
                .collect::<GraphResult<BTreeMap<_, _>>>()?,
        ),
        None => None,
    };

    Ok(UpdateProjectInput {
        title: matches.get_one::<String>("title").cloned(),
        description: matches.get_one::<String>("description").cloned(),
        files,
        dependencies,
        settings: None,
        tags: matches
            .get_many::<String>("project-tag")
            .map(|tags| tags.cloned().collect()),
        open_file: matches.get_one::<String>("open-file").cloned(),
    })
}

pub fn read_files<'a>(paths: impl Iterator<Item = &'a str>) -> GraphResult<BTreeMap<String, String>> {
    paths
        .map(|path| -> GraphResult<(String, String)> {
            let content = fs::read_to_string(path).with_context(|| format!("Reading {}", path))?;
            Ok((path.to_string(), content))
        })
        .collect()
}

/// `name@version`; the last `@` splits, so scoped names like `@scope/pkg@1.0` work.
pub fn parse_dependency(spec: &str) -> GraphResult<(String, String)> {
    match spec.rsplit_once('@') {
        Some((name, version)) if !name.is_empty() && !version.is_empty() => {
            Ok((name.to_string(), version.to_string()))
        }
        _ => Err(graph_error!(
            InvalidArgument,
            "dependency '{}' must look like name@version",
            spec
        )),
    }
}
