//! Integration tests for the load balancer client against a mock server.

mod common;

use gcore_cli::api::loadbalancer::{
    AddMemberRequest, CreateListenerRequest, CreateLoadBalancerRequest, CreatePoolRequest,
};
use gcore_cli::api::LoadBalancerClient;
use mockito::{Matcher, Server};
use serde_json::json;

use common::auth_for;

#[tokio::test]
async fn test_create_load_balancer_defaults() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/loadbalancer/v1/loadbalancers")
        .match_body(Matcher::Json(json!({
            "name": "web-lb",
            "region": "ed-1",
            "type": "http",
            "flavor": "lb1-1-1"
        })))
        .with_status(201)
        .with_body(r#"{"id": 3, "name": "web-lb", "status": "creating"}"#)
        .create_async()
        .await;

    let client = LoadBalancerClient::new(auth_for(&server));
    let balancer = client
        .create_load_balancer(&CreateLoadBalancerRequest::new("web-lb", "ed-1"))
        .await
        .unwrap();

    assert_eq!(balancer["status"], "creating");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_create_listener_uppercases_protocol() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/loadbalancer/v1/loadbalancers/3/listeners")
        .match_body(Matcher::Json(json!({"protocol": "HTTPS", "port": 443})))
        .with_status(201)
        .with_body(r#"{"id": 11}"#)
        .create_async()
        .await;

    let client = LoadBalancerClient::new(auth_for(&server));
    let mut request = CreateListenerRequest::new("https", 443);
    // Hand-edited requests are normalised too
    request.protocol = "https".into();

    client.create_listener(3, &request).await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_create_pool() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/loadbalancer/v1/loadbalancers/3/pools")
        .match_body(Matcher::Json(json!({
            "protocol": "HTTP",
            "method": "ROUND_ROBIN",
            "listener_id": 11,
            "name": "web-pool"
        })))
        .with_status(201)
        .with_body(r#"{"id": 21}"#)
        .create_async()
        .await;

    let client = LoadBalancerClient::new(auth_for(&server));
    let mut request = CreatePoolRequest::new(11, "http");
    request.name = Some("web-pool".into());

    let pool = client.create_pool(3, &request).await.unwrap();
    assert_eq!(pool["id"], 21);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_add_member_default_weight() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/loadbalancer/v1/loadbalancers/3/pools/21/members")
        .match_body(Matcher::Json(json!({
            "address": "10.0.0.5",
            "port": 8080,
            "weight": 1
        })))
        .with_status(201)
        .with_body(r#"{"id": 31, "address": "10.0.0.5"}"#)
        .create_async()
        .await;

    let client = LoadBalancerClient::new(auth_for(&server));
    client
        .add_member(3, 21, &AddMemberRequest::new("10.0.0.5", 8080))
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_list_and_delete() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/loadbalancer/v1/loadbalancers")
        .with_status(200)
        .with_body(r#"[{"id": 3, "name": "web-lb"}]"#)
        .create_async()
        .await;
    let delete = server
        .mock("DELETE", "/loadbalancer/v1/loadbalancers/3")
        .with_status(204)
        .create_async()
        .await;

    let client = LoadBalancerClient::new(auth_for(&server));
    let balancers = client.list_load_balancers().await.unwrap();
    assert_eq!(balancers[0]["name"], "web-lb");

    client.delete_load_balancer(3).await.unwrap();
    delete.assert_async().await;
}

#[tokio::test]
async fn test_list_load_balancers_empty() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/loadbalancer/v1/loadbalancers")
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    let client = LoadBalancerClient::new(auth_for(&server));
    assert!(client.list_load_balancers().await.unwrap().is_empty());
}
