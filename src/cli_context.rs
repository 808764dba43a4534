use std::sync::Arc;

use crate::client::{HttpFetcher, StackBlitzSource};
use crate::config::{load_config, save_config, Config, SourceConfig};
use crate::error::{GraphError, GraphResult};
use crate::resolvers::Resolvers;

pub type HttpResolvers = Resolvers<HttpFetcher>;

/// Central context for CLI operations, managing configuration and the resolver stack
pub struct CliContext {
    source: SourceConfig,
    resolvers: Option<Arc<HttpResolvers>>,
}

impl CliContext {
    pub fn new() -> Self {
        Self::with_source(SourceConfig::default())
    }

    pub fn with_source(source: SourceConfig) -> Self {
        Self {
            source,
            resolvers: None,
        }
    }

    /// Load context from the config file, with environment overrides
    pub fn load() -> GraphResult<Self> {
        let config = load_config()?;
        Ok(Self::with_source(SourceConfig::from_env(&config)))
    }

    pub fn source_config(&self) -> &SourceConfig {
        &self.source
    }

    /// Get or create the resolvers. The source config is frozen into them on
    /// first use.
    pub fn resolvers(&mut self) -> Arc<HttpResolvers> {
        if let Some(resolvers) = &self.resolvers {
            return resolvers.clone();
        }

        let fetcher = HttpFetcher::new(&self.source);
        let resolvers = Arc::new(Resolvers::new(StackBlitzSource::new(fetcher, self.source.clone())));
        self.resolvers = Some(resolvers.clone());
        resolvers
    }

    /// Like `resolvers`, but requires an API key (write operations).
    pub fn authenticated_resolvers(&mut self) -> GraphResult<Arc<HttpResolvers>> {
        if !self.has_api_key() {
            return Err(GraphError::ApiKeyNotFound);
        }
        Ok(self.resolvers())
    }

    /// Set and save a new API key
    pub fn set_api_key(&mut self, api_key: String) -> GraphResult<()> {
        let mut config = load_config()?;
        config.api_key = Some(api_key.clone());
        save_config(&config)?;
        self.source = self.source.clone().with_api_key(api_key);
        self.resolvers = None;
        Ok(())
    }

    pub fn has_api_key(&self) -> bool {
        self.source.api_key.is_some()
    }
}

impl Default for CliContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder pattern for creating CLI contexts with specific configurations
pub struct CliContextBuilder {
    config: Option<Config>,
    api_key: Option<String>,
    api_url: Option<String>,
}

impl CliContextBuilder {
    pub fn new() -> Self {
        Self {
            config: None,
            api_key: None,
            api_url: None,
        }
    }

    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    pub fn with_api_key(mut self, api_key: String) -> Self {
        self.api_key = Some(api_key);
        self
    }

    pub fn with_api_url(mut self, api_url: String) -> Self {
        self.api_url = Some(api_url);
        self
    }

    pub fn build(self) -> GraphResult<CliContext> {
        let mut source = match self.config {
            Some(config) => SourceConfig::from_config(&config),
            None => CliContext::load()?.source,
        };

        if let Some(api_key) = self.api_key {
            source = source.with_api_key(api_key);
        }
        if let Some(api_url) = self.api_url {
            source.api_url = api_url;
        }

        Ok(CliContext::with_source(source))
    }
}

impl Default for CliContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
