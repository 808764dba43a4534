#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use stackblitz_graph::client::{ApiRequest, Fetcher};
use stackblitz_graph::config::SourceConfig;
use stackblitz_graph::error::{GraphError, GraphResult};
use stackblitz_graph::{Resolvers, StackBlitzSource};

/// In-memory backend: records every request and answers from a queue.
#[derive(Default)]
pub struct RecordingFetcher {
    requests: Mutex<Vec<ApiRequest>>,
    responses: Mutex<VecDeque<GraphResult<Value>>>,
}

impl RecordingFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, value: Value) -> Self {
        self.responses.lock().unwrap().push_back(Ok(value));
        self
    }

    pub fn fail(self, error: GraphError) -> Self {
        self.responses.lock().unwrap().push_back(Err(error));
        self
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl Fetcher for RecordingFetcher {
    async fn execute(&self, request: ApiRequest) -> GraphResult<Value> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(GraphError::ApiError("no response queued".to_string())))
    }
}

pub fn source(fetcher: RecordingFetcher) -> StackBlitzSource<RecordingFetcher> {
    StackBlitzSource::new(fetcher, SourceConfig::default())
}

pub fn resolvers(fetcher: RecordingFetcher) -> Resolvers<RecordingFetcher> {
    Resolvers::new(source(fetcher))
}

pub fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
    items
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
