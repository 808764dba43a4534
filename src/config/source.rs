use std::collections::BTreeMap;
use std::env;
use std::time::Duration;

use super::Config;
use crate::client::RequestOptions;
use crate::constants::{API_KEY_ENV, API_URL_ENV, DEFAULT_TIMEOUT_SECS, STACKBLITZ_API_URL};

/// Connection settings for the REST backend. Built once and only read
/// afterwards; every request derives its options from it.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceConfig {
    pub api_url: String,
    pub api_key: Option<String>,
    pub timeout: Duration,
    pub headers: BTreeMap<String, String>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            api_url: STACKBLITZ_API_URL.to_string(),
            api_key: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            headers: BTreeMap::new(),
        }
    }
}

impl SourceConfig {
    pub fn from_config(config: &Config) -> Self {
        let defaults = Self::default();
        Self {
            api_url: config.api_url.clone().unwrap_or(defaults.api_url),
            api_key: config.api_key.clone(),
            timeout: config
                .timeout_secs
                .map(Duration::from_secs)
                .unwrap_or(defaults.timeout),
            headers: config.headers.clone(),
        }
    }

    /// Like `from_config`, with `STACKBLITZ_API_URL` / `STACKBLITZ_API_KEY` taking precedence.
    pub fn from_env(config: &Config) -> Self {
        let mut source = Self::from_config(config);
        if let Ok(url) = env::var(API_URL_ENV) {
            source.api_url = url;
        }
        if let Ok(key) = env::var(API_KEY_ENV) {
            source.api_key = Some(key);
        }
        source
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Per-request shaping: static headers, then the bearer credential, then the timeout.
    pub fn request_options(&self) -> RequestOptions {
        let mut headers = self.headers.clone();
        if let Some(key) = &self.api_key {
            headers.retain(|name, _| !name.eq_ignore_ascii_case("authorization"));
            headers.insert("Authorization".to_string(), format!("Bearer {}", key));
        }

        RequestOptions {
            headers,
            timeout: self.timeout,
        }
    }
}
