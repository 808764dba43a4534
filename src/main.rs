use std::process;

use clap::{Arg, ArgAction, Command};
use colored::*;

use stackblitz_graph::commands::{auth, create, delete, ids, node, projects, update, users};
use stackblitz_graph::error::GraphError;
use stackblitz_graph::logging::{init_logging, log_error, log_panic_info};

fn id_arg(value_name: &'static str, help: &'static str) -> Arg {
    Arg::new("id")
        .value_name(value_name)
        .help(help)
        .required(true)
        .index(1)
}

fn pagination_args() -> [Arg; 2] {
    [
        Arg::new("first")
            .long("first")
            .short('n')
            .value_name("COUNT")
            .help("Page size")
            .value_parser(clap::value_parser!(u32)),
        Arg::new("after")
            .long("after")
            .value_name("CURSOR")
            .help("Cursor of the last edge from the previous page"),
    ]
}

fn filter_args() -> [Arg; 4] {
    [
        Arg::new("user-id")
            .long("user-id")
            .value_name("USER_ID")
            .help("Only projects of this user"),
        Arg::new("tag")
            .long("tag")
            .value_name("TAG")
            .help("Only projects with this tag"),
        Arg::new("search")
            .long("search")
            .short('s')
            .value_name("TEXT")
            .help("Free-text search"),
        Arg::new("template")
            .long("template")
            .value_name("TEMPLATE")
            .help("Only projects using this template"),
    ]
}

fn project_field_args() -> [Arg; 6] {
    [
        Arg::new("title")
            .long("title")
            .short('t')
            .value_name("TITLE")
            .help("Project title"),
        Arg::new("description")
            .long("description")
            .short('d')
            .value_name("DESCRIPTION")
            .help("Project description"),
        Arg::new("file")
            .long("file")
            .short('f')
            .value_name("PATH")
            .help("Local file to include (repeatable)")
            .action(ArgAction::Append),
        Arg::new("dependency")
            .long("dependency")
            .value_name("NAME@VERSION")
            .help("npm dependency (repeatable)")
            .action(ArgAction::Append),
        Arg::new("project-tag")
            .long("tag")
            .value_name("TAG")
            .help("Project tag (repeatable)")
            .action(ArgAction::Append),
        Arg::new("open-file")
            .long("open-file")
            .value_name("PATH")
            .help("File to open by default"),
    ]
}

fn cli() -> Command {
    Command::new("sbgraph")
        .about("Query StackBlitz projects and users through global ids and connections")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("auth")
                .about("Configure the StackBlitz API key")
                .arg(
                    Arg::new("api-key")
                        .long("api-key")
                        .value_name("KEY")
                        .help("Set your StackBlitz API key"),
                )
                .arg(
                    Arg::new("show")
                        .long("show")
                        .help("Show current API key")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("id")
                .about("Encode or decode global ids")
                .subcommand_required(true)
                .subcommand(
                    Command::new("encode")
                        .arg(Arg::new("kind").value_name("KIND").required(true).index(1))
                        .arg(Arg::new("local-id").value_name("LOCAL_ID").required(true).index(2)),
                )
                .subcommand(
                    Command::new("decode")
                        .arg(Arg::new("token").value_name("GLOBAL_ID").required(true).index(1)),
                ),
        )
        .subcommand(
            Command::new("node")
                .about("Resolve any global id")
                .arg(id_arg("GLOBAL_ID", "Global id of a project or user")),
        )
        .subcommand(
            Command::new("projects")
                .about("List projects")
                .args(pagination_args())
                .args(filter_args()),
        )
        .subcommand(
            Command::new("project")
                .about("Show a project")
                .arg(id_arg("PROJECT_ID", "Global project id")),
        )
        .subcommand(
            Command::new("owner")
                .about("Show the owner of a project")
                .arg(id_arg("PROJECT_ID", "Global project id")),
        )
        .subcommand(
            Command::new("users")
                .about("List users")
                .args(pagination_args()),
        )
        .subcommand(
            Command::new("user")
                .about("Show a user")
                .arg(id_arg("USER_ID", "Global user id")),
        )
        .subcommand(
            Command::new("user-projects")
                .about("List a user's projects")
                .arg(id_arg("USER_ID", "Global user id"))
                .args(pagination_args())
                .args(filter_args()),
        )
        .subcommand(
            Command::new("create")
                .about("Create a project")
                .args(project_field_args())
                .arg(
                    Arg::new("template")
                        .long("template")
                        .value_name("TEMPLATE")
                        .help("Project template (e.g. node, javascript)")
                        .required(true),
                ),
        )
        .subcommand(
            Command::new("update")
                .about("Update a project")
                .arg(id_arg("PROJECT_ID", "Global project id"))
                .args(project_field_args()),
        )
        .subcommand(
            Command::new("delete")
                .about("Delete a project")
                .arg(id_arg("PROJECT_ID", "Global project id")),
        )
        .subcommand(
            Command::new("fork")
                .about("Fork a project, optionally overriding fields")
                .arg(id_arg("PROJECT_ID", "Global project id"))
                .args(project_field_args()),
        )
}

#[tokio::main]
async fn main() {
    if init_logging().is_ok() {
        std::panic::set_hook(Box::new(|info| log_panic_info(info)));
    }

    let matches = cli().get_matches();

    let result: Result<(), GraphError> = match matches.subcommand() {
        Some(("auth", sub_matches)) => auth::handle_auth(sub_matches).await,
        Some(("id", sub_matches)) => ids::handle_id(sub_matches),
        Some(("node", sub_matches)) => node::handle_node(sub_matches).await,
        Some(("projects", sub_matches)) => projects::handle_projects(sub_matches).await,
        Some(("project", sub_matches)) => projects::handle_project(sub_matches).await,
        Some(("owner", sub_matches)) => projects::handle_owner(sub_matches).await,
        Some(("users", sub_matches)) => users::handle_users(sub_matches).await,
        Some(("user", sub_matches)) => users::handle_user(sub_matches).await,
        Some(("user-projects", sub_matches)) => users::handle_user_projects(sub_matches).await,
        Some(("create", sub_matches)) => create::handle_create(sub_matches).await,
        Some(("update", sub_matches)) => update::handle_update(sub_matches).await,
        Some(("delete", sub_matches)) => delete::handle_delete(sub_matches).await,
        Some(("fork", sub_matches)) => update::handle_fork(sub_matches).await,
        _ => {
            eprintln!("Unknown command. Use 'sbgraph --help' for available commands.");
            process::exit(1);
        }
    };

    if let Err(e) = result {
        log_error(&e.to_string());
        eprintln!("{} {}", "Error:".red().bold(), e);
        process::exit(1);
    }
}
