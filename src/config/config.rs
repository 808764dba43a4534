use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants::{API_KEY_ENV, CONFIG_FILE};
use crate::error::{GraphError, GraphResult};

#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    pub api_url: Option<String>,
    pub api_key: Option<String>,
    pub timeout_secs: Option<u64>,
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
}

fn config_path() -> GraphResult<PathBuf> {
    let home_dir = dirs::home_dir()
        .ok_or_else(|| GraphError::ConfigError("Could not find home directory".to_string()))?;
    Ok(home_dir.join(CONFIG_FILE))
}

pub fn load_config() -> GraphResult<Config> {
    load_config_from(&config_path()?)
}

/// Missing file means defaults; an unreadable or invalid file is an error.
pub fn load_config_from(path: &Path) -> GraphResult<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let config_str = fs::read_to_string(path)?;
    serde_json::from_str(&config_str)
        .map_err(|e| GraphError::ConfigError(format!("{}: {}", path.display(), e)))
}

pub fn save_config(config: &Config) -> GraphResult<()> {
    save_config_to(config, &config_path()?)
}

pub fn save_config_to(config: &Config, path: &Path) -> GraphResult<()> {
    let config_str = serde_json::to_string_pretty(config)?;
    fs::write(path, config_str)?;
    Ok(())
}

pub fn get_api_key() -> GraphResult<String> {
    // First check environment variable
    if let Ok(key) = env::var(API_KEY_ENV) {
        return Ok(key);
    }

    // Then check config file
    load_config()?.api_key.ok_or(GraphError::ApiKeyNotFound)
}
