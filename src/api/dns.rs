//
//  gcore-cli
//  api/dns.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! DNS API client.
//!
//! Zones are addressed by numeric id; records live under their zone.

use std::sync::Arc;

use serde::Serialize;

use super::client::ApiClient;
use super::common::{ApiResult, Entity};
use crate::auth::AuthProvider;

/// Base path of the DNS API.
pub const DNS_BASE_PATH: &str = "/dns/v2";

/// TTL used when the caller does not pick one.
pub const DEFAULT_TTL: u32 = 3600;

/// Record content: a single value or a set of values (e.g. several A records).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RecordContent {
    Single(String),
    Multiple(Vec<String>),
}

impl From<&str> for RecordContent {
    fn from(value: &str) -> Self {
        Self::Single(value.to_string())
    }
}

impl From<String> for RecordContent {
    fn from(value: String) -> Self {
        Self::Single(value)
    }
}

impl From<Vec<String>> for RecordContent {
    fn from(values: Vec<String>) -> Self {
        Self::Multiple(values)
    }
}

/// Request body for creating a DNS record.
#[derive(Debug, Clone, Serialize)]
pub struct CreateRecordRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub content: RecordContent,
    pub ttl: u32,
}

impl CreateRecordRequest {
    /// Builds a record request. The type is upper-cased (`"a"` becomes `"A"`)
    /// and the TTL defaults to [`DEFAULT_TTL`].
    pub fn new(
        name: impl Into<String>,
        record_type: &str,
        content: impl Into<RecordContent>,
    ) -> Self {
        Self {
            name: name.into(),
            record_type: record_type.to_uppercase(),
            content: content.into(),
            ttl: DEFAULT_TTL,
        }
    }

    pub fn ttl(mut self, ttl: u32) -> Self {
        self.ttl = ttl;
        self
    }
}

#[derive(Debug, Serialize)]
struct CreateZoneRequest<'a> {
    name: &'a str,
}

/// Client for Gcore DNS zones and records.
#[derive(Debug, Clone)]
pub struct DnsClient {
    api: ApiClient,
}

impl DnsClient {
    pub fn new(auth: Arc<AuthProvider>) -> Self {
        Self {
            api: ApiClient::new(auth, DNS_BASE_PATH),
        }
    }

    pub async fn list_zones(&self) -> ApiResult<Vec<Entity>> {
        self.api.get("/zones").await
    }

    pub async fn get_zone(&self, zone_id: u64) -> ApiResult<Entity> {
        self.api.get(&format!("/zones/{}", zone_id)).await
    }

    pub async fn create_zone(&self, name: &str) -> ApiResult<Entity> {
        self.api.post("/zones", &CreateZoneRequest { name }).await
    }

    pub async fn delete_zone(&self, zone_id: u64) -> ApiResult<()> {
        self.api.delete(&format!("/zones/{}", zone_id)).await
    }

    pub async fn list_records(&self, zone_id: u64) -> ApiResult<Vec<Entity>> {
        self.api.get(&format!("/zones/{}/records", zone_id)).await
    }

    /// Creates a record in a zone.
    ///
    /// The record type is upper-cased again here, so a hand-built
    /// [`CreateRecordRequest`] is normalised as well.
    pub async fn create_record(
        &self,
        zone_id: u64,
        request: &CreateRecordRequest,
    ) -> ApiResult<Entity> {
        let mut request = request.clone();
        request.record_type = request.record_type.to_uppercase();

        self.api
            .post(&format!("/zones/{}/records", zone_id), &request)
            .await
    }

    pub async fn delete_record(&self, zone_id: u64, record_id: u64) -> ApiResult<()> {
        self.api
            .delete(&format!("/zones/{}/records/{}", zone_id, record_id))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_request_defaults() {
        let request = CreateRecordRequest::new("www", "cname", "example.com");
        assert_eq!(request.record_type, "CNAME");
        assert_eq!(request.ttl, DEFAULT_TTL);

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["type"], "CNAME");
        assert_eq!(json["content"], "example.com");
    }

    #[test]
    fn test_record_content_shapes() {
        let single: RecordContent = "192.0.2.1".into();
        assert_eq!(serde_json::to_value(&single).unwrap(), serde_json::json!("192.0.2.1"));

        // A one-element list stays a list on the wire
        let one: RecordContent = vec!["192.0.2.1".to_string()].into();
        assert_eq!(serde_json::to_value(&one).unwrap(), serde_json::json!(["192.0.2.1"]));

        let multiple: RecordContent = vec!["192.0.2.1".to_string(), "192.0.2.2".to_string()].into();
        assert_eq!(
            serde_json::to_value(&multiple).unwrap(),
            serde_json::json!(["192.0.2.1", "192.0.2.2"])
        );
    }
}
