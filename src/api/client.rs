//
//  gcore-cli
//  api/client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # HTTP Client Wrapper for the Gcore API
//!
//! This module provides the request path shared by every resource client.
//! It attaches authentication headers, serializes JSON bodies, maps status
//! codes to [`ApiError`] and decodes responses.
//!
//! ## Features
//!
//! - Authentication header injection from a shared [`AuthProvider`]
//! - One versioned base path per resource family (`/cdn/v1`, `/dns/v2`, ...)
//! - JSON serialization/deserialization
//! - Streaming request and response bodies for object storage
//! - `tracing` debug events for every request

use std::path::Path;
use std::sync::Arc;

use reqwest::header::{HeaderValue, CONTENT_TYPE};
use reqwest::{Body, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::io::AsyncWriteExt;
use tracing::debug;
use url::Url;

use crate::api::common::{ApiError, ApiResult};
use crate::auth::AuthProvider;

/// Scratch origin used only to borrow `url`'s path-segment encoding.
const SEGMENT_ORIGIN: &str = "http://segments.invalid/";

/// Builds a request path from raw segments, percent-encoding each one.
///
/// Names chosen by users (bucket names, object keys, task ids) may contain
/// `#`, `?`, `%` or spaces; encoded, none of them can end the path early.
///
/// ```rust
/// use gcore_cli::api::client::encode_path;
///
/// let path = encode_path(["buckets", "b", "objects", "report#1.txt"]).unwrap();
/// assert_eq!(path, "/buckets/b/objects/report%231.txt");
/// ```
pub fn encode_path<'a, I>(segments: I) -> ApiResult<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut url = Url::parse(SEGMENT_ORIGIN)
        .map_err(|e| ApiError::Configuration(format!("Could not build request path: {}", e)))?;
    url.path_segments_mut()
        .map_err(|_| ApiError::Configuration("Could not build request path".to_string()))?
        .pop_if_empty()
        .extend(segments);
    Ok(url.path().to_string())
}

/// The HTTP client for one Gcore resource family.
///
/// Every resource client wraps an `ApiClient` built for its own base path.
/// The [`AuthProvider`] is shared, not owned: cloning an `ApiClient` or
/// building several from the same provider reuses the credential and the
/// underlying connection pool.
///
/// # Example
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use gcore_cli::api::ApiClient;
/// use gcore_cli::api::common::Entity;
/// use gcore_cli::auth::AuthProvider;
///
/// # async fn example() -> anyhow::Result<()> {
/// let auth = Arc::new(AuthProvider::new(None)?);
/// let client = ApiClient::new(auth, "/cdn/v1");
/// let resources: Vec<Entity> = client.get("/resources").await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ApiClient {
    auth: Arc<AuthProvider>,
    base_path: &'static str,
}

impl ApiClient {
    /// Creates a client for the family rooted at `base_path`.
    pub fn new(auth: Arc<AuthProvider>, base_path: &'static str) -> Self {
        Self { auth, base_path }
    }

    /// The shared auth provider.
    pub fn auth(&self) -> &Arc<AuthProvider> {
        &self.auth
    }

    /// Returns the base URL for this family, e.g. `https://api.gcore.com/cdn/v1`.
    pub fn base_url(&self) -> String {
        format!("{}{}", self.auth.base_url(), self.base_path)
    }

    /// Returns the full URL for `path`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url(), path)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.url(path);
        debug!(%method, %url, "gcore api request");
        self.auth
            .apply_to_request(self.auth.http().request(method, url))
    }

    /// Sends a request and turns non-success statuses into errors.
    async fn send(&self, request: RequestBuilder) -> ApiResult<Response> {
        let response = request.send().await.map_err(ApiError::Transport)?;
        let status = response.status();
        debug!(%status, "gcore api response");

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(ApiError::from_response(status, &text));
        }

        Ok(response)
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
        response.json().await.map_err(ApiError::Decode)
    }

    /// Makes a GET request and decodes the JSON response.
    ///
    /// # Errors
    ///
    /// - [`ApiError::InvalidCredential`] / [`ApiError::InsufficientPermission`] on 401/403
    /// - [`ApiError::Request`] on any other non-2xx status
    /// - [`ApiError::Transport`] if the request could not be sent
    /// - [`ApiError::Decode`] if the body is not the expected JSON
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let response = self.send(self.request(Method::GET, path)).await?;
        Self::decode(response).await
    }

    /// Makes a GET request with query parameters.
    ///
    /// Pairs whose value is `None` are left out of the query string.
    pub async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, Option<&str>)],
    ) -> ApiResult<T> {
        let params: Vec<(&str, &str)> = query
            .iter()
            .filter_map(|(k, v)| v.map(|v| (*k, v)))
            .collect();

        let request = self.request(Method::GET, path).query(&params);
        let response = self.send(request).await?;
        Self::decode(response).await
    }

    /// Makes a POST request with a JSON body and decodes the JSON response.
    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let request = self.request(Method::POST, path).json(body);
        let response = self.send(request).await?;
        Self::decode(response).await
    }

    /// Makes a DELETE request. Any response body is discarded.
    pub async fn delete(&self, path: &str) -> ApiResult<()> {
        self.send(self.request(Method::DELETE, path)).await?;
        Ok(())
    }

    /// Streams a local file as the body of a PUT request.
    ///
    /// The file is read in chunks by the transport rather than loaded into
    /// memory. `content_type` replaces the default JSON content type.
    pub async fn put_file<T: DeserializeOwned>(
        &self,
        path: &str,
        file: &Path,
        content_type: &str,
    ) -> ApiResult<T> {
        let handle = tokio::fs::File::open(file).await?;
        let length = handle.metadata().await?.len();

        let content_type = HeaderValue::from_str(content_type).map_err(|e| {
            ApiError::Configuration(format!("Invalid content type '{}': {}", content_type, e))
        })?;
        let mut headers = self.auth.headers();
        headers.insert(CONTENT_TYPE, content_type);

        let url = self.url(path);
        debug!(%url, file = %file.display(), length, "gcore api upload");

        let request = self
            .auth
            .http()
            .put(url)
            .headers(headers)
            .header(reqwest::header::CONTENT_LENGTH, length)
            .body(Body::from(handle));

        let response = self.send(request).await?;
        Self::decode(response).await
    }

    /// Streams the body of a GET response into a local file.
    ///
    /// Chunks are written as they arrive. The destination is only created
    /// once the API has answered with a success status, so a failed request
    /// leaves no empty file behind.
    ///
    /// # Returns
    ///
    /// The number of bytes written.
    pub async fn get_to_file(&self, path: &str, destination: &Path) -> ApiResult<u64> {
        let mut response = self.send(self.request(Method::GET, path)).await?;

        let mut file = tokio::fs::File::create(destination).await?;
        let mut written: u64 = 0;

        while let Some(chunk) = response.chunk().await.map_err(ApiError::Transport)? {
            file.write_all(&chunk).await?;
            written += chunk.len() as u64;
        }
        file.flush().await?;

        debug!(destination = %destination.display(), written, "gcore api download");
        Ok(written)
    }
}
