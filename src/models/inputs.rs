use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use super::ProjectSettings;
use crate::constants::{CURSOR_PARAM, LIMIT_PARAM};
use crate::error::GraphResult;
use crate::graph_error;

/// Filters for project listings. Sent to the backend verbatim.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectFilters {
    pub user_id: Option<String>,
    pub tag: Option<String>,
    pub search: Option<String>,
    pub template: Option<String>,
}

impl ProjectFilters {
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        [
            ("userId", &self.user_id),
            ("tag", &self.tag),
            ("search", &self.search),
            ("template", &self.template),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.as_ref().map(|v| (name.to_string(), v.clone())))
        .collect()
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct PaginationInput {
    pub first: Option<u32>,
    pub after: Option<String>,
}

impl PaginationInput {
    pub fn new(first: Option<u32>, after: Option<String>) -> Self {
        Self { first, after }
    }

    /// `first` maps to `limit` and `after` to `cursor`.
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(first) = self.first {
            pairs.push((LIMIT_PARAM.to_string(), first.to_string()));
        }
        if let Some(after) = &self.after {
            pairs.push((CURSOR_PARAM.to_string(), after.clone()));
        }
        pairs
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub files: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dependencies: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<ProjectSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<BTreeSet<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_file: Option<String>,
}

impl CreateProjectInput {
    /// Checks that `title`, `files` and `template` are all present.
    pub fn validate(&self) -> GraphResult<()> {
        let mut missing = Vec::new();
        if is_blank(&self.title) {
            missing.push("title");
        }
        if self.files.is_none() {
            missing.push("files");
        }
        if is_blank(&self.template) {
            missing.push("template");
        }

        if missing.is_empty() {
            Ok(())
        } else {
            Err(graph_error!(
                ValidationError,
                "createProject requires {}",
                missing.join(", ")
            ))
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProjectInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub files: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dependencies: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<ProjectSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<BTreeSet<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_file: Option<String>,
}

impl UpdateProjectInput {
    /// True when the input carries no field to change.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, |v| v.trim().is_empty())
}
