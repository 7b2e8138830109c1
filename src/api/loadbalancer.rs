//
//  gcore-cli
//  api/loadbalancer.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Load balancer API client.
//!
//! # Hierarchy
//!
//! ```text
//! Load balancer
//! ├── Listeners (protocol + port)
//! └── Pools (bound to a listener)
//!     └── Members (backend address + port + weight)
//! ```
//!
//! Protocols are upper-cased before they are sent (`http` becomes `HTTP`).

use std::sync::Arc;

use serde::Serialize;

use super::client::ApiClient;
use super::common::{ApiResult, Entity};
use crate::auth::AuthProvider;

/// Base path of the load balancer API.
pub const LB_BASE_PATH: &str = "/loadbalancer/v1";

pub const DEFAULT_LB_TYPE: &str = "http";
pub const DEFAULT_FLAVOR: &str = "lb1-1-1";
pub const DEFAULT_POOL_METHOD: &str = "ROUND_ROBIN";
pub const DEFAULT_MEMBER_WEIGHT: u32 = 1;

/// Request body for creating a load balancer.
#[derive(Debug, Clone, Serialize)]
pub struct CreateLoadBalancerRequest {
    pub name: String,
    pub region: String,
    #[serde(rename = "type")]
    pub lb_type: String,
    pub flavor: String,
}

impl CreateLoadBalancerRequest {
    /// An HTTP load balancer of the default flavor.
    pub fn new(name: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            region: region.into(),
            lb_type: DEFAULT_LB_TYPE.to_string(),
            flavor: DEFAULT_FLAVOR.to_string(),
        }
    }
}

/// Request body for creating a listener.
#[derive(Debug, Clone, Serialize)]
pub struct CreateListenerRequest {
    pub protocol: String,
    pub port: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl CreateListenerRequest {
    pub fn new(protocol: &str, port: u16) -> Self {
        Self {
            protocol: protocol.to_uppercase(),
            port,
            name: None,
        }
    }
}

/// Request body for creating a backend pool.
#[derive(Debug, Clone, Serialize)]
pub struct CreatePoolRequest {
    pub protocol: String,
    pub method: String,
    pub listener_id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl CreatePoolRequest {
    /// A round-robin pool behind `listener_id`.
    pub fn new(listener_id: u64, protocol: &str) -> Self {
        Self {
            protocol: protocol.to_uppercase(),
            method: DEFAULT_POOL_METHOD.to_string(),
            listener_id,
            name: None,
        }
    }
}

/// Request body for adding a pool member.
#[derive(Debug, Clone, Serialize)]
pub struct AddMemberRequest {
    pub address: String,
    pub port: u16,
    pub weight: u32,
}

impl AddMemberRequest {
    pub fn new(address: impl Into<String>, port: u16) -> Self {
        Self {
            address: address.into(),
            port,
            weight: DEFAULT_MEMBER_WEIGHT,
        }
    }
}

/// Client for Gcore load balancers.
#[derive(Debug, Clone)]
pub struct LoadBalancerClient {
    api: ApiClient,
}

impl LoadBalancerClient {
    pub fn new(auth: Arc<AuthProvider>) -> Self {
        Self {
            api: ApiClient::new(auth, LB_BASE_PATH),
        }
    }

    pub async fn list_load_balancers(&self) -> ApiResult<Vec<Entity>> {
        self.api.get("/loadbalancers").await
    }

    pub async fn get_load_balancer(&self, lb_id: u64) -> ApiResult<Entity> {
        self.api.get(&format!("/loadbalancers/{}", lb_id)).await
    }

    pub async fn create_load_balancer(
        &self,
        request: &CreateLoadBalancerRequest,
    ) -> ApiResult<Entity> {
        self.api.post("/loadbalancers", request).await
    }

    pub async fn delete_load_balancer(&self, lb_id: u64) -> ApiResult<()> {
        self.api.delete(&format!("/loadbalancers/{}", lb_id)).await
    }

    pub async fn create_listener(
        &self,
        lb_id: u64,
        request: &CreateListenerRequest,
    ) -> ApiResult<Entity> {
        let mut request = request.clone();
        request.protocol = request.protocol.to_uppercase();

        self.api
            .post(&format!("/loadbalancers/{}/listeners", lb_id), &request)
            .await
    }

    pub async fn create_pool(&self, lb_id: u64, request: &CreatePoolRequest) -> ApiResult<Entity> {
        let mut request = request.clone();
        request.protocol = request.protocol.to_uppercase();

        self.api
            .post(&format!("/loadbalancers/{}/pools", lb_id), &request)
            .await
    }

    pub async fn add_member(
        &self,
        lb_id: u64,
        pool_id: u64,
        request: &AddMemberRequest,
    ) -> ApiResult<Entity> {
        self.api
            .post(
                &format!("/loadbalancers/{}/pools/{}/members", lb_id, pool_id),
                request,
            )
            .await
    }
}
