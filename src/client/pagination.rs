use serde_json::Value;

use super::normalize::local_id;
use crate::error::GraphResult;
use crate::graph_error;
use crate::models::{Connection, Edge, PageInfo};

/// The backend's list envelope: `{ items, hasNextPage, endCursor }`.
#[derive(Debug, Clone, PartialEq)]
pub struct RawPage {
    pub items: Vec<Value>,
    pub has_next_page: bool,
    pub end_cursor: Option<String>,
}

impl RawPage {
    pub fn from_value(value: Value) -> GraphResult<Self> {
        let Value::Object(mut envelope) = value else {
            return Err(graph_error!(MalformedResponse, "list response is not an object"));
        };

        let items = match envelope.remove("items") {
            Some(Value::Array(items)) => items,
            Some(other) => {
                return Err(graph_error!(MalformedResponse, "items is not a list: {}", other))
            }
            None => return Err(graph_error!(MalformedResponse, "list response has no items")),
        };

        let has_next_page = match envelope.remove("hasNextPage") {
            None | Some(Value::Null) => false,
            Some(Value::Bool(flag)) => flag,
            Some(other) => {
                return Err(graph_error!(MalformedResponse, "hasNextPage is not a boolean: {}", other))
            }
        };

        // An absent cursor stays None; an empty string is kept as sent.
        let end_cursor = match envelope.remove("endCursor") {
            None | Some(Value::Null) => None,
            Some(Value::String(cursor)) => Some(cursor),
            Some(other) => {
                return Err(graph_error!(MalformedResponse, "endCursor is not a string: {}", other))
            }
        };

        Ok(Self {
            items,
            has_next_page,
            end_cursor,
        })
    }

    pub fn into_connection<T, F>(self, normalize: F) -> GraphResult<Connection<T>>
    where
        F: Fn(&Value) -> GraphResult<T>,
    {
        to_connection(self.items, self.has_next_page, self.end_cursor, normalize)
    }
}

/// Build a connection from raw items, keeping backend order. Each edge's
/// cursor is the item's backend id, not its global id.
pub fn to_connection<T, F>(
    items: Vec<Value>,
    has_next_page: bool,
    end_cursor: Option<String>,
    normalize: F,
) -> GraphResult<Connection<T>>
where
    F: Fn(&Value) -> GraphResult<T>,
{
    let edges = items
        .iter()
        .map(|item| -> GraphResult<Edge<T>> {
            Ok(Edge {
                cursor: local_id(item)?,
                node: normalize(item)?,
            })
        })
        .collect::<GraphResult<Vec<_>>>()?;

    Ok(Connection {
        edges,
        page_info: PageInfo {
            has_next_page,
            end_cursor,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::normalize::normalize_project;
    use crate::error::GraphError;
    use serde_json::json;

    #[test]
    fn test_preserves_order_and_uses_local_cursors() {
        let page = RawPage::from_value(json!({
            "items": [
                { "id": "project2", "title": "Second" },
                { "id": "project1", "title": "First" },
                { "id": "project3", "title": "Third" }
            ],
            "hasNextPage": true,
            "endCursor": "cursor123"
        }))
        .unwrap();

        let connection = page.into_connection(normalize_project).unwrap();
        assert_eq!(connection.len(), 3);
        let cursors: Vec<_> = connection.edges.iter().map(|e| e.cursor.as_str()).collect();
        assert_eq!(cursors, vec!["project2", "project1", "project3"]);
        let titles: Vec<_> = connection.nodes().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Second", "First", "Third"]);
        assert_ne!(connection.edges[0].cursor, connection.edges[0].node.id);
        assert!(connection.page_info.has_next_page);
        assert_eq!(connection.page_info.end_cursor.as_deref(), Some("cursor123"));
    }

    #[test]
    fn test_missing_end_cursor_is_none() {
        let page = RawPage::from_value(json!({ "items": [], "hasNextPage": false })).unwrap();
        assert_eq!(page.end_cursor, None);

        let page = RawPage::from_value(json!({ "items": [], "endCursor": null })).unwrap();
        assert_eq!(page.end_cursor, None);
        assert!(!page.has_next_page);

        let page = RawPage::from_value(json!({ "items": [], "endCursor": "" })).unwrap();
        assert_eq!(page.end_cursor.as_deref(), Some(""));
    }

    #[test]
    fn test_malformed_envelopes() {
        for raw in [
            json!({ "hasNextPage": false }),
            json!({ "items": { "id": "p1" } }),
            json!([{ "id": "p1" }]),
            json!({ "items": [], "hasNextPage": "yes" }),
            json!({ "items": [], "endCursor": 7 }),
        ] {
            assert!(
                matches!(RawPage::from_value(raw.clone()), Err(GraphError::MalformedResponse(_))),
                "expected {} to be rejected",
                raw
            );
        }
    }

    #[test]
    fn test_item_without_id_fails_whole_page() {
        let result = to_connection(
            vec![json!({ "id": "p1" }), json!({ "title": "orphan" })],
            false,
            None,
            normalize_project,
        );
        assert!(matches!(result, Err(GraphError::InvalidEntity(_))));
    }
}
