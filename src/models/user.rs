use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Global id
    pub id: String,
    pub username: String,
    pub display_name: Option<String>,
    pub url: Option<String>,
    pub avatar_url: Option<String>,
}
