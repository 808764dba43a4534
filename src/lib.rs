// Module declarations
pub mod cli_context;
pub mod client;
pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod global_id;
pub mod logging;
pub mod models;
pub mod resolvers;

#[cfg(test)]
mod tests;

// Re-export commonly used items
pub use client::{Fetcher, HttpFetcher, StackBlitzSource};
pub use config::{get_api_key, load_config, save_config, Config, SourceConfig};
pub use error::{GraphError, GraphResult};
pub use global_id::{decode, encode, DecodedId, NodeKind};
pub use models::*;
pub use resolvers::Resolvers;
