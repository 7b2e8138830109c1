//
//  gcore-cli
//  api/ssl.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! SSL certificate API client.
//!
//! Certificates are either uploaded (custom certificate + private key) or
//! requested from Gcore, in which case the domains must be validated before
//! the certificate becomes active. Validation progress is polled with
//! [`SslClient::get_validation_status`].

use std::sync::Arc;

use serde::Serialize;

use super::client::ApiClient;
use super::common::{ApiResult, Entity};
use crate::auth::AuthProvider;

/// Base path of the SSL API.
pub const SSL_BASE_PATH: &str = "/ssl/v1";

/// How domain ownership is proven for a managed certificate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationMethod {
    #[default]
    Dns,
    Http,
}

/// Request body for uploading a custom certificate.
#[derive(Debug, Clone, Serialize)]
pub struct UploadCertificateRequest {
    pub name: String,
    pub certificate: String,
    pub private_key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chain: Option<String>,
}

/// Request body for a Gcore-managed certificate.
#[derive(Debug, Clone, Serialize)]
pub struct RequestCertificateRequest {
    pub domains: Vec<String>,
    pub validation_method: ValidationMethod,
}

impl RequestCertificateRequest {
    /// A request validated over DNS.
    pub fn new(domains: Vec<String>) -> Self {
        Self {
            domains,
            validation_method: ValidationMethod::Dns,
        }
    }
}

/// Client for Gcore SSL certificates.
#[derive(Debug, Clone)]
pub struct SslClient {
    api: ApiClient,
}

impl SslClient {
    pub fn new(auth: Arc<AuthProvider>) -> Self {
        Self {
            api: ApiClient::new(auth, SSL_BASE_PATH),
        }
    }

    pub async fn list_certificates(&self) -> ApiResult<Vec<Entity>> {
        self.api.get("/certificates").await
    }

    pub async fn get_certificate(&self, cert_id: u64) -> ApiResult<Entity> {
        self.api.get(&format!("/certificates/{}", cert_id)).await
    }

    pub async fn upload_certificate(&self, request: &UploadCertificateRequest) -> ApiResult<Entity> {
        self.api.post("/certificates", request).await
    }

    /// Requests a managed certificate. The response carries the certificate
    /// id and a pending status.
    pub async fn request_certificate(
        &self,
        request: &RequestCertificateRequest,
    ) -> ApiResult<Entity> {
        self.api.post("/certificates/request", request).await
    }

    /// Gets the domain validation status of a requested certificate.
    pub async fn get_validation_status(&self, cert_id: u64) -> ApiResult<Entity> {
        self.api
            .get(&format!("/certificates/{}/validation", cert_id))
            .await
    }

    pub async fn delete_certificate(&self, cert_id: u64) -> ApiResult<()> {
        self.api.delete(&format!("/certificates/{}", cert_id)).await
    }
}
