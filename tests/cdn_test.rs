//! Integration tests for the CDN client against a mock server.

mod common;

use gcore_cli::api::cdn::CreateResourceRequest;
use gcore_cli::api::{ApiError, CdnClient, TaskState};
use mockito::{Matcher, Server};
use reqwest::StatusCode;
use serde_json::json;

use common::{auth_for, bearer, entity};

#[tokio::test]
async fn test_list_resources_empty() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/cdn/v1/resources")
        .match_header("authorization", bearer().as_str())
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    let client = CdnClient::new(auth_for(&server));
    let resources = client.list_resources().await.unwrap();

    assert!(resources.is_empty());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_create_resource_round_trip() {
    let mut server = Server::new_async().await;
    let response = json!({
        "id": 42,
        "origin": "example.com",
        "cname": "cdn.example.com",
        "ssl": true,
        "status": "active"
    });
    let mock = server
        .mock("POST", "/cdn/v1/resources")
        .match_body(Matcher::Json(json!({
            "origin": "example.com",
            "cname": "cdn.example.com",
            "ssl": true
        })))
        .with_status(201)
        .with_body(response.to_string())
        .create_async()
        .await;

    let client = CdnClient::new(auth_for(&server));
    let mut request = CreateResourceRequest::new("example.com");
    request.cname = Some("cdn.example.com".to_string());

    let resource = client.create_resource(&request).await.unwrap();

    assert_eq!(resource, entity(response));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_create_resource_omits_missing_cname() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/cdn/v1/resources")
        .match_body(Matcher::Json(json!({"origin": "example.com", "ssl": false})))
        .with_status(201)
        .with_body(r#"{"id": 1}"#)
        .create_async()
        .await;

    let client = CdnClient::new(auth_for(&server));
    let mut request = CreateResourceRequest::new("example.com");
    request.ssl = false;

    client.create_resource(&request).await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_purge_then_poll_status() {
    let mut server = Server::new_async().await;
    let purge = server
        .mock("POST", "/cdn/v1/resources/42/purge")
        .match_body(Matcher::Json(json!({"urls": ["/img/logo.png", "/index.html"]})))
        .with_status(201)
        .with_body(r#"{"task_id": "task-123", "status": "pending"}"#)
        .create_async()
        .await;
    let status = server
        .mock("GET", "/cdn/v1/resources/42/purge/task-123")
        .with_status(200)
        .with_body(r#"{"status": "completed", "progress": 100}"#)
        .create_async()
        .await;

    let client = CdnClient::new(auth_for(&server));
    let task = client
        .purge_urls(42, &["/img/logo.png".to_string(), "/index.html".to_string()])
        .await
        .unwrap();
    assert_eq!(task["task_id"], "task-123");
    assert_eq!(TaskState::from_entity(&task), TaskState::Pending("pending".into()));

    let done = client.get_purge_status(42, "task-123").await.unwrap();
    assert_eq!(done["progress"], 100);
    assert!(TaskState::from_entity(&done).is_terminal());

    purge.assert_async().await;
    status.assert_async().await;
}

#[tokio::test]
async fn test_purge_all_sends_empty_object() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/cdn/v1/resources/7/purge/all")
        .match_body(Matcher::Json(json!({})))
        .with_status(201)
        .with_body(r#"{"task_id": "all-1", "status": "pending"}"#)
        .create_async()
        .await;

    let client = CdnClient::new(auth_for(&server));
    let task = client.purge_all(7).await.unwrap();

    assert_eq!(task["task_id"], "all-1");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_get_missing_resource() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/cdn/v1/resources/999")
        .with_status(404)
        .with_body(r#"{"message": "Resource not found"}"#)
        .create_async()
        .await;

    let client = CdnClient::new(auth_for(&server));
    match client.get_resource(999).await.unwrap_err() {
        ApiError::Request { status, detail } => {
            assert_eq!(status, StatusCode::NOT_FOUND);
            assert_eq!(detail, "Resource not found");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_unauthorized_maps_to_auth_error() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/cdn/v1/resources")
        .with_status(401)
        .create_async()
        .await;

    let client = CdnClient::new(auth_for(&server));
    assert!(matches!(
        client.list_resources().await.unwrap_err(),
        ApiError::InvalidCredential
    ));
}

#[tokio::test]
async fn test_non_json_success_is_decode_error() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/cdn/v1/resources")
        .with_status(200)
        .with_body("<html>maintenance</html>")
        .create_async()
        .await;

    let client = CdnClient::new(auth_for(&server));
    assert!(matches!(
        client.list_resources().await.unwrap_err(),
        ApiError::Decode(_)
    ));
}
