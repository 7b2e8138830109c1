//! Shared helpers for the mock-server integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use gcore_cli::api::Entity;
use gcore_cli::auth::AuthProvider;
use mockito::ServerGuard;
use serde_json::Value;

pub const TEST_TOKEN: &str = "test-token-123";

/// Auth provider pointed at the mock server.
pub fn auth_for(server: &ServerGuard) -> Arc<AuthProvider> {
    let provider = AuthProvider::new(Some(TEST_TOKEN.to_string()))
        .expect("valid token")
        .with_base_url(&server.url())
        .expect("valid mock URL");
    Arc::new(provider)
}

/// Converts a `json!` object literal into an entity.
pub fn entity(value: Value) -> Entity {
    match value {
        Value::Object(map) => map,
        other => panic!("expected a JSON object, got {other}"),
    }
}

pub fn bearer() -> String {
    format!("Bearer {}", TEST_TOKEN)
}

/// Auth provider pointed at a port nothing listens on.
pub fn unreachable_auth() -> Arc<AuthProvider> {
    let provider = AuthProvider::new(Some(TEST_TOKEN.to_string()))
        .expect("valid token")
        .with_base_url("http://127.0.0.1:9")
        .expect("valid URL");
    Arc::new(provider)
}
