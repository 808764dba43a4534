use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use super::User;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Global id, minted from the backend id during normalization.
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub files: BTreeMap<String, String>,
    pub template: String,
    pub dependencies: Option<BTreeMap<String, String>>,
    pub settings: Option<ProjectSettings>,
    pub tags: Option<BTreeSet<String>>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub open_file: Option<String>,
    /// Backend id of the owning user, when the backend only sends a reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<Box<User>>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compile: Option<CompileSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dev_tools_height: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hide_dev_tools: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hide_navigation: Option<bool>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CompileSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clear_console: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hard_reload_on_change: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ignore_warnings: Option<bool>,
}

// Mutation payloads
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct ProjectPayload {
    pub project: Project,
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct DeletePayload {
    pub success: bool,
}
