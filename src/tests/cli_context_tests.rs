use std::sync::Arc;

use crate::cli_context::{CliContext, CliContextBuilder};
use crate::config::Config;
use crate::error::GraphError;

#[test]
fn test_cli_context_new() {
    let context = CliContext::new();
    assert!(!context.has_api_key());
    assert_eq!(context.source_config().api_url, "https://api.stackblitz.com");
}

#[test]
fn test_cli_context_builder() {
    let context = CliContextBuilder::new()
        .with_config(Config::default())
        .with_api_key("test-api-key".to_string())
        .with_api_url("http://localhost:4000".to_string())
        .build()
        .unwrap();

    assert!(context.has_api_key());
    assert_eq!(context.source_config().api_key.as_deref(), Some("test-api-key"));
    assert_eq!(context.source_config().api_url, "http://localhost:4000");
}

#[test]
fn test_builder_uses_config_values() {
    let mut config = Config::default();
    config.timeout_secs = Some(3);
    config.headers.insert("X-Team".to_string(), "docs".to_string());

    let context = CliContextBuilder::new().with_config(config).build().unwrap();
    let options = context.source_config().request_options();
    assert_eq!(options.timeout.as_secs(), 3);
    assert_eq!(options.headers.get("X-Team").map(String::as_str), Some("docs"));
}

#[test]
fn test_resolvers_are_reused() {
    let mut context = CliContextBuilder::new()
        .with_config(Config::default())
        .with_api_key("test-api-key".to_string())
        .build()
        .unwrap();

    let first = context.authenticated_resolvers().unwrap();
    let second = context.resolvers();
    assert!(Arc::ptr_eq(&first, &second));
}

#[test]
fn test_authenticated_resolvers_without_api_key() {
    let mut context = CliContextBuilder::new()
        .with_config(Config::default())
        .build()
        .unwrap();

    assert!(matches!(
        context.authenticated_resolvers(),
        Err(GraphError::ApiKeyNotFound)
    ));
}
