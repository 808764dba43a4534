use clap::ArgMatches;
use serde_json::json;

use super::print_json;
use crate::error::GraphResult;
use crate::global_id::{decode, encode};
use crate::graph_error;

pub fn handle_id(matches: &ArgMatches) -> GraphResult<()> {
    match matches.subcommand() {
        Some(("encode", sub_matches)) => {
            let kind = required(sub_matches, "kind")?;
            let local_id = required(sub_matches, "local-id")?;
            println!("{}", encode(kind, local_id)?);
            Ok(())
        }
        Some(("decode", sub_matches)) => {
            let decoded = decode(required(sub_matches, "token")?)?;
            print_json(&json!({ "kind": decoded.kind, "localId": decoded.local_id }))
        }
        _ => Err(graph_error!(InvalidArgument, "expected 'encode' or 'decode'")),
    }
}

fn required<'a>(matches: &'a ArgMatches, name: &str) -> GraphResult<&'a str> {
    matches
        .get_one::<String>(name)
        .map(String::as_str)
        .ok_or_else(|| graph_error!(InvalidArgument, "{} is required", name))
}
