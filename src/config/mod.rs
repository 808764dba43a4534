pub mod config;
pub mod source;

pub use config::{get_api_key, load_config, load_config_from, save_config, Config};
pub use source::SourceConfig;
