//! Graph-field operations over the REST adapter.
//!
//! Inbound global ids are decoded here and only backend-local ids reach
//! `StackBlitzSource`. `node` dispatches on the decoded kind.

use crate::client::{Fetcher, StackBlitzSource};
use crate::error::GraphResult;
use crate::global_id::{decode, decode_as, NodeKind};
use crate::graph_error;
use crate::logging::log_debug;
use crate::models::*;

pub struct Resolvers<F> {
    source: StackBlitzSource<F>,
}

impl<F: Fetcher> Resolvers<F> {
    pub fn new(source: StackBlitzSource<F>) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &StackBlitzSource<F> {
        &self.source
    }

    /// Resolve any global id. A well-formed id of an unsupported kind is a
    /// miss (`None`); a malformed id is `InvalidIdentifier`.
    pub async fn node(&self, id: &str) -> GraphResult<Option<Node>> {
        let decoded = decode(id)?;

        match decoded.node_kind() {
            Some(NodeKind::Project) => {
                let project = self.source.fetch_project(&decoded.local_id).await?;
                Ok(Some(Node::Project(project)))
            }
            Some(NodeKind::User) => {
                let user = self.source.fetch_user(&decoded.local_id).await?;
                Ok(Some(Node::User(user)))
            }
            None => {
                log_debug(&format!("node: unsupported kind '{}' in {}", decoded.kind, id));
                Ok(None)
            }
        }
    }

    pub async fn projects(
        &self,
        filters: Option<&ProjectFilters>,
        pagination: Option<&PaginationInput>,
    ) -> GraphResult<ProjectConnection> {
        self.source.fetch_projects(filters, pagination).await
    }

    pub async fn project(&self, id: &str) -> GraphResult<Option<Project>> {
        match local_id_of(id, NodeKind::Project)? {
            Some(local_id) => Ok(Some(self.source.fetch_project(&local_id).await?)),
            None => Ok(None),
        }
    }

    pub async fn users(&self, pagination: Option<&PaginationInput>) -> GraphResult<UserConnection> {
        self.source.fetch_users(pagination).await
    }

    pub async fn user(&self, id: &str) -> GraphResult<Option<User>> {
        match local_id_of(id, NodeKind::User)? {
            Some(local_id) => Ok(Some(self.source.fetch_user(&local_id).await?)),
            None => Ok(None),
        }
    }

    pub async fn create_project(&self, input: &CreateProjectInput) -> GraphResult<ProjectPayload> {
        self.source.create_project(input).await
    }

    pub async fn update_project(&self, id: &str, input: &UpdateProjectInput) -> GraphResult<ProjectPayload> {
        let local_id = decode_as(id, NodeKind::Project)?;
        self.source.update_project(&local_id, input).await
    }

    pub async fn delete_project(&self, id: &str) -> GraphResult<DeletePayload> {
        let local_id = decode_as(id, NodeKind::Project)?;
        self.source.delete_project(&local_id).await
    }

    pub async fn fork_project(
        &self,
        id: &str,
        input: Option<&UpdateProjectInput>,
    ) -> GraphResult<ProjectPayload> {
        let local_id = decode_as(id, NodeKind::Project)?;
        self.source.fork_project(&local_id, input).await
    }

    /// `Project.owner`: the embedded owner when the backend sent one,
    /// otherwise a lookup by `ownerId`.
    pub async fn project_owner(&self, project: &Project) -> GraphResult<User> {
        if let Some(owner) = &project.owner {
            return Ok(owner.as_ref().clone());
        }

        match &project.owner_id {
            Some(owner_id) => self.source.fetch_user(owner_id).await,
            None => Err(graph_error!(
                InvalidEntity,
                "cannot resolve owner for project {}",
                project.id
            )),
        }
    }

    /// `User.projects`
    pub async fn user_projects(
        &self,
        user: &User,
        filters: Option<&ProjectFilters>,
        pagination: Option<&PaginationInput>,
    ) -> GraphResult<ProjectConnection> {
        let local_id = decode_as(&user.id, NodeKind::User)?;
        self.source
            .fetch_user_projects(&local_id, filters, pagination)
            .await
    }
}

/// Local id when `id` names `expected`, `None` when it names another kind.
fn local_id_of(id: &str, expected: NodeKind) -> GraphResult<Option<String>> {
    let decoded = decode(id)?;
    if decoded.node_kind() == Some(expected) {
        Ok(Some(decoded.local_id))
    } else {
        Ok(None)
    }
}
