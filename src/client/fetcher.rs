use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde_json::Value;

use crate::config::SourceConfig;
use crate::error::{GraphError, GraphResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Headers and timeout applied to a single outbound request.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestOptions {
    pub headers: BTreeMap<String, String>,
    pub timeout: Duration,
}

/// One REST call. `segments` are raw path components; each one is
/// percent-encoded as a single segment when the URL is built.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub segments: Vec<String>,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
    pub options: RequestOptions,
}

impl ApiRequest {
    pub fn new<I, S>(method: Method, segments: I, options: RequestOptions) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            method,
            segments: segments.into_iter().map(Into::into).collect(),
            query: Vec::new(),
            body: None,
            options,
        }
    }

    pub fn query(mut self, pairs: Vec<(String, String)>) -> Self {
        self.query.extend(pairs);
        self
    }

    pub fn body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Unencoded path, for logs and error messages.
    pub fn path(&self) -> String {
        format!("/{}", self.segments.join("/"))
    }
}

/// Transport to the REST backend. Implementations issue exactly one request
/// per call and never retry.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn execute(&self, request: ApiRequest) -> GraphResult<Value>;
}

/// `Fetcher` backed by `reqwest`.
pub struct HttpFetcher {
    client: Client,
    api_url: String,
}

impl HttpFetcher {
    pub fn new(config: &SourceConfig) -> Self {
        Self {
            client: Client::new(),
            api_url: config.api_url.trim_end_matches('/').to_string(),
        }
    }

    /// Full URL for `request`, appending its segments to the API URL's path.
    pub fn url(&self, request: &ApiRequest) -> GraphResult<Url> {
        let mut url = Url::parse(&self.api_url)
            .map_err(|e| GraphError::ConfigError(format!("invalid API URL '{}': {}", self.api_url, e)))?;
        url.path_segments_mut()
            .map_err(|_| GraphError::ConfigError(format!("API URL '{}' cannot take a path", self.api_url)))?
            .pop_if_empty()
            .extend(&request.segments);
        Ok(url)
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn execute(&self, request: ApiRequest) -> GraphResult<Value> {
        let url = self.url(&request)?;
        let mut builder = match request.method {
            Method::Get => self.client.get(url),
            Method::Post => self.client.post(url),
            Method::Patch => self.client.patch(url),
            Method::Delete => self.client.delete(url),
        };

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        for (name, value) in &request.options.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.timeout(request.options.timeout).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(GraphError::ApiError(format!(
                "{} {} failed with status {}: {}",
                request.method,
                request.path(),
                status,
                error_text
            )));
        }

        // DELETE and friends may answer with an empty body
        let text = response.text().await?;
        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&text)?)
    }
}
