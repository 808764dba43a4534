use serde::Serialize;
use serde_json::Value;

use super::{Project, User};

/// Any entity resolvable by global id alone.
#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(tag = "__typename")]
pub enum Node {
    Project(Project),
    User(User),
}

impl Node {
    pub fn id(&self) -> &str {
        match self {
            Node::Project(project) => &project.id,
            Node::User(user) => &user.id,
        }
    }

    pub fn node_type(&self) -> NodeType {
        match self {
            Node::Project(_) => NodeType::Project,
            Node::User(_) => NodeType::User,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeType {
    Project,
    User,
}

impl NodeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeType::Project => "Project",
            NodeType::User => "User",
        }
    }
}

/// Classify an untyped payload by its shape-defining fields: `files` marks a
/// project, `username` a user. Anything else stays unresolved.
pub fn resolve_type(value: &Value) -> Option<NodeType> {
    let object = value.as_object()?;
    if object.contains_key("files") {
        Some(NodeType::Project)
    } else if object.contains_key("username") {
        Some(NodeType::User)
    } else {
        None
    }
}
