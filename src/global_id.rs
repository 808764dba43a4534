//! Opaque global identifiers.
//!
//! A global id is `base64(kind ":" local_id)` using the standard padded
//! alphabet, so two implementations agree byte for byte on the token for
//! the same pair. Neither component may contain the separator.

use std::fmt;
use std::str::FromStr;

use base64::engine::general_purpose::STANDARD as BASE64_ENGINE;
use base64::Engine;

use crate::constants::GLOBAL_ID_SEPARATOR;
use crate::error::{GraphError, GraphResult};
use crate::graph_error;

/// Entity families that can be resolved through `node(id)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Project,
    User,
}

impl NodeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Project => "Project",
            NodeKind::User => "User",
        }
    }

    /// Mint the global id for a local id of this kind.
    pub fn global_id(&self, local_id: &str) -> GraphResult<String> {
        encode(self.as_str(), local_id)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NodeKind {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Project" => Ok(NodeKind::Project),
            "User" => Ok(NodeKind::User),
            other => Err(graph_error!(InvalidArgument, "unknown node kind '{}'", other)),
        }
    }
}

/// A decoded global id. `kind` is kept as text: a well-formed token may
/// name a family this crate does not serve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedId {
    pub kind: String,
    pub local_id: String,
}

impl DecodedId {
    /// The typed kind, or `None` for an unsupported family.
    pub fn node_kind(&self) -> Option<NodeKind> {
        self.kind.parse().ok()
    }
}

pub fn encode(kind: &str, local_id: &str) -> GraphResult<String> {
    check_component("kind", kind)?;
    check_component("local id", local_id)?;

    let payload = format!("{}{}{}", kind, GLOBAL_ID_SEPARATOR, local_id);
    Ok(BASE64_ENGINE.encode(payload.as_bytes()))
}

pub fn decode(token: &str) -> GraphResult<DecodedId> {
    let invalid = || GraphError::InvalidIdentifier(token.to_string());

    let bytes = BASE64_ENGINE.decode(token).map_err(|_| invalid())?;
    let payload = String::from_utf8(bytes).map_err(|_| invalid())?;

    let mut parts = payload.split(GLOBAL_ID_SEPARATOR);
    let (kind, local_id) = match (parts.next(), parts.next(), parts.next()) {
        (Some(kind), Some(local_id), None) => (kind, local_id),
        _ => return Err(invalid()),
    };

    if kind.is_empty() || local_id.is_empty() {
        return Err(invalid());
    }

    Ok(DecodedId {
        kind: kind.to_string(),
        local_id: local_id.to_string(),
    })
}

/// Decode `token` and require it to name `expected`.
pub fn decode_as(token: &str, expected: NodeKind) -> GraphResult<String> {
    let decoded = decode(token)?;
    if decoded.node_kind() != Some(expected) {
        return Err(graph_error!(
            InvalidIdentifier,
            "{} is a {} id, expected {}",
            token,
            decoded.kind,
            expected
        ));
    }
    Ok(decoded.local_id)
}

fn check_component(name: &str, value: &str) -> GraphResult<()> {
    if value.is_empty() {
        return Err(graph_error!(InvalidArgument, "{} must not be empty", name));
    }
    if value.contains(GLOBAL_ID_SEPARATOR) {
        return Err(graph_error!(
            InvalidArgument,
            "{} '{}' must not contain '{}'",
            name,
            value,
            GLOBAL_ID_SEPARATOR
        ));
    }
    Ok(())
}
