//! Raw REST payloads to entity shapes. Every entity gets its global id here.

use std::collections::{BTreeMap, BTreeSet};

use serde::Deserialize;
use serde_json::Value;

use crate::error::GraphResult;
use crate::global_id::NodeKind;
use crate::graph_error;
use crate::models::{Project, ProjectSettings, User};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawProject {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    files: Option<BTreeMap<String, String>>,
    #[serde(default)]
    template: Option<String>,
    #[serde(default)]
    dependencies: Option<BTreeMap<String, String>>,
    #[serde(default)]
    settings: Option<ProjectSettings>,
    #[serde(default)]
    tags: Option<Vec<String>>,
    #[serde(default)]
    created_at: Option<String>,
    #[serde(default)]
    updated_at: Option<String>,
    #[serde(default)]
    open_file: Option<String>,
    #[serde(default)]
    owner_id: Option<Value>,
    #[serde(default)]
    owner: Option<Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawUser {
    #[serde(default)]
    username: Option<String>,
    #[serde(default)]
    display_name: Option<String>,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    avatar_url: Option<String>,
}

/// The backend's own id of a raw entity. Strings and integers are accepted.
pub fn local_id(raw: &Value) -> GraphResult<String> {
    let object = raw
        .as_object()
        .ok_or_else(|| graph_error!(MalformedResponse, "expected an entity object, got {}", raw))?;

    match object.get("id") {
        Some(id) => id_text(id)
            .ok_or_else(|| graph_error!(InvalidEntity, "entity has an unusable id: {}", id)),
        None => Err(graph_error!(InvalidEntity, "entity has no id")),
    }
}

pub fn normalize_project(raw: &Value) -> GraphResult<Project> {
    let local = local_id(raw)?;
    let fields = RawProject::deserialize(raw)
        .map_err(|e| graph_error!(MalformedResponse, "project {}: {}", local, e))?;

    let owner_id = match &fields.owner_id {
        None | Some(Value::Null) => None,
        Some(value) => Some(id_text(value).ok_or_else(|| {
            graph_error!(MalformedResponse, "project {}: unusable ownerId {}", local, value)
        })?),
    };
    let owner = match &fields.owner {
        None | Some(Value::Null) => None,
        Some(value) => Some(Box::new(normalize_user(value)?)),
    };

    Ok(Project {
        id: entity_global_id(NodeKind::Project, &local)?,
        title: fields.title.unwrap_or_default(),
        description: fields.description,
        files: fields.files.unwrap_or_default(),
        template: fields.template.unwrap_or_default(),
        dependencies: fields.dependencies,
        settings: fields.settings,
        tags: fields.tags.map(|tags| tags.into_iter().collect::<BTreeSet<_>>()),
        created_at: fields.created_at,
        updated_at: fields.updated_at,
        open_file: fields.open_file,
        owner_id,
        owner,
    })
}

pub fn normalize_user(raw: &Value) -> GraphResult<User> {
    let local = local_id(raw)?;
    let fields = RawUser::deserialize(raw)
        .map_err(|e| graph_error!(MalformedResponse, "user {}: {}", local, e))?;

    Ok(User {
        id: entity_global_id(NodeKind::User, &local)?,
        username: fields.username.unwrap_or_default(),
        display_name: fields.display_name,
        url: fields.url,
        avatar_url: fields.avatar_url,
    })
}

/// A backend id the codec refuses is a bad entity, not a bad caller argument.
fn entity_global_id(kind: NodeKind, local: &str) -> GraphResult<String> {
    kind.global_id(local)
        .map_err(|_| graph_error!(InvalidEntity, "{} id {} cannot be encoded", kind, local))
}

fn id_text(value: &Value) -> Option<String> {
    let text = match value {
        Value::String(s) => s.clone(),
        Value::Number(n) if n.is_u64() || n.is_i64() => n.to_string(),
        _ => return None,
    };
    (!text.is_empty()).then_some(text)
}
