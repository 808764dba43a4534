use serde_json::{json, Value};

use super::fetcher::{ApiRequest, Fetcher, Method};
use super::normalize::{normalize_project, normalize_user};
use super::pagination::RawPage;
use crate::config::SourceConfig;
use crate::error::{GraphResult, OperationContext};
use crate::graph_error;
use crate::logging::{log_request, log_request_failure};
use crate::models::*;

/// REST adapter for projects and users. Methods take backend-local ids and
/// return normalized entities carrying global ids.
pub struct StackBlitzSource<F> {
    fetcher: F,
    config: SourceConfig,
}

impl<F: Fetcher> StackBlitzSource<F> {
    pub fn new(fetcher: F, config: SourceConfig) -> Self {
        Self { fetcher, config }
    }

    pub fn config(&self) -> &SourceConfig {
        &self.config
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    async fn send(
        &self,
        operation: &'static str,
        method: Method,
        segments: Vec<String>,
        query: Vec<(String, String)>,
        body: Option<Value>,
    ) -> GraphResult<Value> {
        let mut request = ApiRequest::new(method, segments, self.config.request_options()).query(query);
        if let Some(body) = body {
            request = request.body(body);
        }

        log_request(operation, &request);
        let summary = request.clone();

        self.fetcher
            .execute(request)
            .await
            .map_err(|e| {
                log_request_failure(operation, &summary, &e);
                e
            })
            .in_operation(operation)
    }

    /// `/{collection}/{id}/{rest..}`. The id always travels as one segment,
    /// and ids the URL layer would collapse are refused.
    fn entity_path(collection: &str, id: &str, rest: &[&str]) -> GraphResult<Vec<String>> {
        if id.is_empty() || id == "." || id == ".." {
            return Err(graph_error!(InvalidIdentifier, "'{}' cannot be used as an id under /{}", id, collection));
        }
        let mut segments = vec![collection.to_string(), id.to_string()];
        segments.extend(rest.iter().map(|segment| segment.to_string()));
        Ok(segments)
    }

    fn list_query(
        filters: Option<&ProjectFilters>,
        pagination: Option<&PaginationInput>,
    ) -> Vec<(String, String)> {
        let mut query = pagination.map(PaginationInput::to_query_pairs).unwrap_or_default();
        if let Some(filters) = filters {
            query.extend(filters.to_query_pairs());
        }
        query
    }

    pub async fn fetch_project(&self, id: &str) -> GraphResult<Project> {
        let raw = self
            .send("fetchProject", Method::Get, Self::entity_path("projects", id, &[])?, Vec::new(), None)
            .await?;
        normalize_project(&raw)
    }

    pub async fn fetch_projects(
        &self,
        filters: Option<&ProjectFilters>,
        pagination: Option<&PaginationInput>,
    ) -> GraphResult<ProjectConnection> {
        let query = Self::list_query(filters, pagination);
        let raw = self
            .send("fetchProjects", Method::Get, vec!["projects".to_string()], query, None)
            .await?;
        RawPage::from_value(raw)?.into_connection(normalize_project)
    }

    pub async fn fetch_user(&self, id: &str) -> GraphResult<User> {
        let raw = self
            .send("fetchUser", Method::Get, Self::entity_path("users", id, &[])?, Vec::new(), None)
            .await?;
        normalize_user(&raw)
    }

    pub async fn fetch_users(&self, pagination: Option<&PaginationInput>) -> GraphResult<UserConnection> {
        let query = Self::list_query(None, pagination);
        let raw = self
            .send("fetchUsers", Method::Get, vec!["users".to_string()], query, None)
            .await?;
        RawPage::from_value(raw)?.into_connection(normalize_user)
    }

    pub async fn fetch_user_projects(
        &self,
        user_id: &str,
        filters: Option<&ProjectFilters>,
        pagination: Option<&PaginationInput>,
    ) -> GraphResult<ProjectConnection> {
        let query = Self::list_query(filters, pagination);
        let raw = self
            .send(
                "fetchUserProjects",
                Method::Get,
                Self::entity_path("users", user_id, &["projects"])?,
                query,
                None,
            )
            .await?;
        RawPage::from_value(raw)?.into_connection(normalize_project)
    }

    /// Rejects inputs missing `title`, `files` or `template` before any request.
    pub async fn create_project(&self, input: &CreateProjectInput) -> GraphResult<ProjectPayload> {
        input.validate()?;
        let body = serde_json::to_value(input)?;
        let raw = self
            .send("createProject", Method::Post, vec!["projects".to_string()], Vec::new(), Some(body))
            .await?;
        Ok(ProjectPayload {
            project: normalize_project(&raw)?,
        })
    }

    /// An input with nothing to change is rejected before any request.
    pub async fn update_project(&self, id: &str, input: &UpdateProjectInput) -> GraphResult<ProjectPayload> {
        if input.is_empty() {
            return Err(graph_error!(ValidationError, "updateProject requires at least one field to change"));
        }
        let body = serde_json::to_value(input)?;
        let raw = self
            .send("updateProject", Method::Patch, Self::entity_path("projects", id, &[])?, Vec::new(), Some(body))
            .await?;
        Ok(ProjectPayload {
            project: normalize_project(&raw)?,
        })
    }

    pub async fn delete_project(&self, id: &str) -> GraphResult<DeletePayload> {
        self.send("deleteProject", Method::Delete, Self::entity_path("projects", id, &[])?, Vec::new(), None)
            .await?;
        Ok(DeletePayload { success: true })
    }

    pub async fn fork_project(
        &self,
        id: &str,
        input: Option<&UpdateProjectInput>,
    ) -> GraphResult<ProjectPayload> {
        let body = match input {
            Some(input) => serde_json::to_value(input)?,
            None => json!({}),
        };
        let raw = self
            .send("forkProject", Method::Post, Self::entity_path("projects", id, &["fork"])?, Vec::new(), Some(body))
            .await?;
        Ok(ProjectPayload {
            project: normalize_project(&raw)?,
        })
    }
}
