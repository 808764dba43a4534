mod common;

use std::collections::BTreeMap;
use std::time::Duration;

use serde_json::json;

use common::{pairs, source, RecordingFetcher};
use stackblitz_graph::client::{Method, StackBlitzSource};
use stackblitz_graph::config::SourceConfig;
use stackblitz_graph::error::GraphError;
use stackblitz_graph::global_id::encode;
use stackblitz_graph::models::*;

fn sample_create_input() -> CreateProjectInput {
    CreateProjectInput {
        title: Some("New Project".to_string()),
        description: Some("A test project".to_string()),
        files: Some(BTreeMap::from([(
            "index.js".to_string(),
            "console.log(\"hello\")".to_string(),
        )])),
        template: Some("javascript".to_string()),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_fetch_projects_with_pagination_and_filters() {
    let source = source(RecordingFetcher::new().respond(json!({
        "items": [
            { "id": "project1", "title": "Project 1" },
            { "id": "project2", "title": "Project 2" }
        ],
        "hasNextPage": true,
        "endCursor": "cursor123"
    })));

    let filters = ProjectFilters {
        search: Some("test".to_string()),
        ..Default::default()
    };
    let pagination = PaginationInput::new(Some(10), Some("cursor".to_string()));

    let result = source
        .fetch_projects(Some(&filters), Some(&pagination))
        .await
        .unwrap();

    let requests = source.fetcher().requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, Method::Get);
    assert_eq!(requests[0].path(), "/projects");
    assert_eq!(
        requests[0].query,
        pairs(&[("limit", "10"), ("cursor", "cursor"), ("search", "test")])
    );

    assert_eq!(result.edges.len(), 2);
    assert_eq!(result.edges[0].cursor, "project1");
    assert_eq!(result.edges[1].cursor, "project2");
    assert_eq!(result.edges[0].node.id, encode("Project", "project1").unwrap());
    assert!(result.page_info.has_next_page);
    assert_eq!(result.page_info.end_cursor.as_deref(), Some("cursor123"));
}

#[tokio::test]
async fn test_fetch_project_by_id() {
    let source = source(RecordingFetcher::new().respond(json!({
        "id": "project1",
        "title": "Project 1",
        "description": "Test project",
        "files": { "index.js": "console.log(\"test\")" },
        "template": "javascript"
    })));

    let project = source.fetch_project("project1").await.unwrap();

    let requests = source.fetcher().requests();
    assert_eq!(requests[0].method, Method::Get);
    assert_eq!(requests[0].path(), "/projects/project1");
    assert!(requests[0].query.is_empty());
    assert_eq!(project.title, "Project 1");
    assert_eq!(project.template, "javascript");
    assert_eq!(project.files.len(), 1);
}

#[tokio::test]
async fn test_fetch_users_and_user_projects() {
    let source = source(
        RecordingFetcher::new()
            .respond(json!({ "items": [{ "id": "u1", "username": "ada" }], "hasNextPage": false }))
            .respond(json!({ "items": [], "hasNextPage": false, "endCursor": null })),
    );

    let users = source
        .fetch_users(Some(&PaginationInput::new(Some(1), None)))
        .await
        .unwrap();
    assert_eq!(users.edges[0].cursor, "u1");
    assert_eq!(users.edges[0].node.username, "ada");
    assert_eq!(users.page_info.end_cursor, None);

    let filters = ProjectFilters {
        tag: Some("react".to_string()),
        ..Default::default()
    };
    let projects = source
        .fetch_user_projects("u1", Some(&filters), None)
        .await
        .unwrap();
    assert!(projects.is_empty());

    let requests = source.fetcher().requests();
    assert_eq!(requests[0].path(), "/users");
    assert_eq!(requests[0].query, pairs(&[("limit", "1")]));
    assert_eq!(requests[1].path(), "/users/u1/projects");
    assert_eq!(requests[1].query, pairs(&[("tag", "react")]));
}

#[tokio::test]
async fn test_create_project() {
    let input = sample_create_input();
    let mut response = serde_json::to_value(&input).unwrap();
    response["id"] = json!("new-project");

    let source = source(RecordingFetcher::new().respond(response));
    let payload = source.create_project(&input).await.unwrap();

    let requests = source.fetcher().requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, Method::Post);
    assert_eq!(requests[0].path(), "/projects");
    assert_eq!(requests[0].body, Some(serde_json::to_value(&input).unwrap()));
    assert_eq!(payload.project.title, "New Project");
    assert_eq!(payload.project.id, encode("Project", "new-project").unwrap());
}

#[tokio::test]
async fn test_create_project_validation_issues_no_request() {
    for strip in ["title", "files", "template"] {
        let mut input = sample_create_input();
        match strip {
            "title" => input.title = None,
            "files" => input.files = None,
            _ => input.template = None,
        }

        let source = source(RecordingFetcher::new().respond(json!({ "id": "x" })));
        let result = source.create_project(&input).await;

        assert!(
            matches!(result, Err(GraphError::ValidationError(ref msg)) if msg.contains(strip)),
            "missing {} should fail validation",
            strip
        );
        assert_eq!(source.fetcher().request_count(), 0);
    }
}

#[tokio::test]
async fn test_update_project() {
    let source = source(RecordingFetcher::new().respond(json!({ "id": "p1", "title": "Updated Title" })));
    let input = UpdateProjectInput {
        title: Some("Updated Title".to_string()),
        ..Default::default()
    };

    let payload = source.update_project("p1", &input).await.unwrap();

    let requests = source.fetcher().requests();
    assert_eq!(requests[0].method, Method::Patch);
    assert_eq!(requests[0].path(), "/projects/p1");
    assert_eq!(requests[0].body, Some(json!({ "title": "Updated Title" })));
    assert_eq!(payload.project.title, "Updated Title");
}

#[tokio::test]
async fn test_empty_update_is_rejected_without_request() {
    let source = source(RecordingFetcher::new().respond(json!({ "id": "p1" })));

    let result = source.update_project("p1", &UpdateProjectInput::default()).await;

    assert!(matches!(result, Err(GraphError::ValidationError(_))));
    assert_eq!(source.fetcher().request_count(), 0);
}

#[tokio::test]
async fn test_delete_project() {
    let source = source(RecordingFetcher::new().respond(serde_json::Value::Null));

    let result = source.delete_project("project-id").await.unwrap();

    let requests = source.fetcher().requests();
    assert_eq!(requests[0].method, Method::Delete);
    assert_eq!(requests[0].path(), "/projects/project-id");
    assert!(result.success);
}

#[tokio::test]
async fn test_fork_without_input_sends_empty_object() {
    let source = source(RecordingFetcher::new().respond(json!({ "id": "p2", "title": "Copy" })));

    let payload = source.fork_project("p1", None).await.unwrap();

    let requests = source.fetcher().requests();
    assert_eq!(requests[0].method, Method::Post);
    assert_eq!(requests[0].path(), "/projects/p1/fork");
    assert_eq!(requests[0].body, Some(json!({})));
    assert_eq!(payload.project.id, encode("Project", "p2").unwrap());
}

#[tokio::test]
async fn test_transport_failure_is_wrapped_with_operation() {
    let source = source(RecordingFetcher::new().fail(GraphError::ApiError("status 500".to_string())));

    let err = source.fetch_user("u1").await.unwrap_err();

    match err {
        GraphError::OperationFailure { operation, source } => {
            assert_eq!(operation, "fetchUser");
            assert!(matches!(*source, GraphError::ApiError(ref msg) if msg == "status 500"));
        }
        other => panic!("Expected OperationFailure, got {:?}", other),
    }
}

#[tokio::test]
async fn test_entity_without_id_is_rejected() {
    let source = source(RecordingFetcher::new().respond(json!({ "title": "No id" })));

    let result = source.fetch_project("p1").await;

    assert!(matches!(result, Err(GraphError::InvalidEntity(_))));
}

#[tokio::test]
async fn test_list_without_items_is_malformed() {
    let source = source(RecordingFetcher::new().respond(json!({ "hasNextPage": false })));

    let result = source.fetch_projects(None, None).await;

    assert!(matches!(result, Err(GraphError::MalformedResponse(_))));
}

#[tokio::test]
async fn test_request_shaping_from_config() {
    let config = SourceConfig::default()
        .with_api_key("sk-live")
        .with_header("X-Client", "tests")
        .with_timeout(Duration::from_secs(7));
    let source = StackBlitzSource::new(
        RecordingFetcher::new().respond(json!({ "id": "u1", "username": "ada" })),
        config.clone(),
    );

    source.fetch_user("u1").await.unwrap();

    let request = &source.fetcher().requests()[0];
    assert_eq!(
        request.options.headers.get("Authorization").map(String::as_str),
        Some("Bearer sk-live")
    );
    assert_eq!(request.options.headers.get("X-Client").map(String::as_str), Some("tests"));
    assert_eq!(request.options.timeout, Duration::from_secs(7));
    assert_eq!(source.config(), &config);
}

#[tokio::test]
async fn test_ids_are_sent_as_single_segments() {
    let source = source(
        RecordingFetcher::new()
            .respond(json!({ "id": "a/b", "username": "slash" }))
            .respond(json!({ "items": [] })),
    );

    source.fetch_user("a/b").await.unwrap();
    source.fetch_user_projects("x?y#z", None, None).await.unwrap();

    let requests = source.fetcher().requests();
    assert_eq!(requests[0].segments, vec!["users", "a/b"]);
    assert_eq!(requests[1].segments, vec!["users", "x?y#z", "projects"]);
}

#[tokio::test]
async fn test_unusable_ids_fail_before_request() {
    let source = source(RecordingFetcher::new());

    for id in ["", ".", ".."] {
        assert!(matches!(source.fetch_user(id).await, Err(GraphError::InvalidIdentifier(_))));
        assert!(matches!(
            source.fork_project(id, None).await,
            Err(GraphError::InvalidIdentifier(_))
        ));
    }
    assert_eq!(source.fetcher().request_count(), 0);
}

#[tokio::test]
async fn test_backend_id_that_cannot_be_encoded() {
    let source = source(RecordingFetcher::new().respond(json!({ "items": [{ "id": "team:p1" }] })));

    let result = source.fetch_projects(None, None).await;

    assert!(matches!(result, Err(GraphError::InvalidEntity(_))));
}
