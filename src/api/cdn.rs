//
//  gcore-cli
//  api/cdn.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! CDN API client.
//!
//! A CDN resource fronts an origin host with Gcore edge servers. Cache
//! purges are asynchronous: submitting one returns a task id that is polled
//! with [`CdnClient::get_purge_status`].
//!
//! # Purge Lifecycle
//!
//! ```text
//! purge_urls / purge_all ──► {"task_id": "...", "status": "pending"}
//!                                      │
//!                  get_purge_status ◄──┘  (repeat)
//!                                      │
//!                        "completed" or status with an error detail
//! ```

use std::sync::Arc;

use serde::Serialize;

use super::client::{encode_path, ApiClient};
use super::common::{ApiResult, Entity};
use crate::auth::AuthProvider;

/// Base path of the CDN API.
pub const CDN_BASE_PATH: &str = "/cdn/v1";

/// Request body for creating a CDN resource.
///
/// `cname` is omitted from the JSON body when not set.
#[derive(Debug, Clone, Serialize)]
pub struct CreateResourceRequest {
    /// Origin host the CDN pulls content from
    pub origin: String,

    /// Custom domain serving the content
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cname: Option<String>,

    /// Whether the resource is served over HTTPS
    pub ssl: bool,
}

impl CreateResourceRequest {
    /// Creates a request for `origin` with SSL enabled and no CNAME.
    pub fn new(origin: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            cname: None,
            ssl: true,
        }
    }
}

#[derive(Debug, Serialize)]
struct PurgeUrlsRequest<'a> {
    urls: &'a [String],
}

/// Client for Gcore CDN resources and cache purges.
#[derive(Debug, Clone)]
pub struct CdnClient {
    api: ApiClient,
}

impl CdnClient {
    pub fn new(auth: Arc<AuthProvider>) -> Self {
        Self {
            api: ApiClient::new(auth, CDN_BASE_PATH),
        }
    }

    /// Lists all CDN resources.
    pub async fn list_resources(&self) -> ApiResult<Vec<Entity>> {
        self.api.get("/resources").await
    }

    /// Gets a single CDN resource.
    pub async fn get_resource(&self, resource_id: u64) -> ApiResult<Entity> {
        self.api.get(&format!("/resources/{}", resource_id)).await
    }

    /// Creates a CDN resource.
    pub async fn create_resource(&self, request: &CreateResourceRequest) -> ApiResult<Entity> {
        self.api.post("/resources", request).await
    }

    /// Purges specific URLs from the edge cache.
    ///
    /// Returns the purge task, typically `{"task_id": ..., "status": "pending"}`.
    pub async fn purge_urls(&self, resource_id: u64, urls: &[String]) -> ApiResult<Entity> {
        self.api
            .post(
                &format!("/resources/{}/purge", resource_id),
                &PurgeUrlsRequest { urls },
            )
            .await
    }

    /// Purges the entire cache of a resource.
    pub async fn purge_all(&self, resource_id: u64) -> ApiResult<Entity> {
        self.api
            .post(
                &format!("/resources/{}/purge/all", resource_id),
                &serde_json::json!({}),
            )
            .await
    }

    /// Gets the status of a purge task.
    pub async fn get_purge_status(&self, resource_id: u64, task_id: &str) -> ApiResult<Entity> {
        let resource_id = resource_id.to_string();
        let path = encode_path(["resources", resource_id.as_str(), "purge", task_id])?;
        self.api.get(&path).await
    }
}
