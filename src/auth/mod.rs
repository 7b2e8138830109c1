//
//  gcore-cli
//  auth/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Authentication Module
//!
//! Gcore authenticates every request with a permanent API token sent as a
//! bearer token. This module owns that credential.
//!
//! ## Module Structure
//!
//! - [`AuthProvider`]: holds the credential, builds headers and validates it
//! - [`token`]: token input and display helpers used by `gcore auth`
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use gcore_cli::auth::AuthProvider;
//!
//! # async fn example() -> anyhow::Result<()> {
//! // Explicit token, falling back to GCORE_API_TOKEN when `None`
//! let auth = Arc::new(AuthProvider::new(Some("my-token".to_string()))?);
//!
//! if auth.validate().await? {
//!     println!("Token accepted");
//! }
//! # Ok(())
//! # }
//! ```

mod token;

pub use token::*;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, RequestBuilder};
use tracing::debug;
use url::Url;

use crate::api::common::{ApiError, ApiResult};

/// Environment variable holding the API token.
pub const TOKEN_ENV: &str = "GCORE_API_TOKEN";

/// Production API host.
pub const DEFAULT_BASE_URL: &str = "https://api.gcore.com";

/// Endpoint used by [`AuthProvider::validate`].
pub const VERIFY_PATH: &str = "/iam/v1/auth/jwt/verify";

/// Holds the Gcore API credential and the HTTP transport shared by all
/// resource clients.
///
/// An `AuthProvider` is constructed once per process and is immutable after
/// construction. Resource clients hold it behind an `Arc`, so a single
/// instance can back the CDN, DNS, storage, SSL and load balancer clients
/// of one invocation at the same time.
///
/// # Credential Resolution
///
/// | Order | Source |
/// |-------|--------|
/// | 1 | Explicit argument (e.g. `--token`) |
/// | 2 | `GCORE_API_TOKEN` environment variable |
/// | 3 | Stored token (config file), via [`AuthProvider::from_sources`] |
///
/// Empty strings are treated as absent.
#[derive(Clone)]
pub struct AuthProvider {
    token: String,
    authorization: HeaderValue,
    base_url: String,
    http: Client,
}

impl std::fmt::Debug for AuthProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthProvider")
            .field("token", &mask_token(&self.token))
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl AuthProvider {
    /// Creates a provider from an explicit token or `GCORE_API_TOKEN`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Configuration`] if neither source holds a
    /// non-empty token, or if the token contains characters that cannot be
    /// sent in an HTTP header. No network call is made.
    pub fn new(explicit: Option<String>) -> ApiResult<Self> {
        Self::from_sources(explicit, None)
    }

    /// Creates a provider from an explicit token, the environment, or a
    /// stored token, in that order.
    pub fn from_sources(explicit: Option<String>, stored: Option<String>) -> ApiResult<Self> {
        let token = non_empty(explicit)
            .or_else(|| non_empty(std::env::var(TOKEN_ENV).ok()))
            .or_else(|| non_empty(stored))
            .ok_or_else(|| {
                ApiError::Configuration(format!(
                    "API token must be provided or set in {} environment variable",
                    TOKEN_ENV
                ))
            })?;

        Self::with_token(token)
    }

    fn with_token(token: String) -> ApiResult<Self> {
        if !validate_token(&token) {
            return Err(ApiError::Configuration(
                "API token must not contain whitespace or control characters".to_string(),
            ));
        }

        let mut authorization = HeaderValue::from_str(&format!("Bearer {}", token))
            .map_err(|e| ApiError::Configuration(format!("Invalid API token: {}", e)))?;
        authorization.set_sensitive(true);

        let http = Client::builder()
            .user_agent(format!("gcore-cli/{}", crate::VERSION))
            .build()
            .map_err(|e| ApiError::Configuration(format!("Could not build HTTP client: {}", e)))?;

        Ok(Self {
            token,
            authorization,
            base_url: DEFAULT_BASE_URL.to_string(),
            http,
        })
    }

    /// Points the provider (and every client built from it) at another host.
    ///
    /// Used for tests and for alternative API endpoints. A trailing slash is
    /// stripped.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Configuration`] if `base_url` is not an absolute
    /// http(s) URL.
    pub fn with_base_url(mut self, base_url: &str) -> ApiResult<Self> {
        let parsed = Url::parse(base_url)
            .map_err(|e| ApiError::Configuration(format!("Invalid API URL '{}': {}", base_url, e)))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ApiError::Configuration(format!(
                "Invalid API URL '{}': scheme must be http or https",
                base_url
            )));
        }
        self.base_url = base_url.trim_end_matches('/').to_string();
        Ok(self)
    }

    /// The API host, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The raw token.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// The HTTP transport shared by all clients built on this provider.
    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    /// Returns the headers every JSON request carries.
    ///
    /// - `Authorization: Bearer <token>`
    /// - `Content-Type: application/json`
    pub fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, self.authorization.clone());
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers
    }

    /// Applies [`headers`](Self::headers) to a request.
    pub fn apply_to_request(&self, request: RequestBuilder) -> RequestBuilder {
        request.headers(self.headers())
    }

    /// Verifies the token against the Gcore IAM service.
    ///
    /// # Returns
    ///
    /// `Ok(true)` on any 2xx response.
    ///
    /// # Errors
    ///
    /// - [`ApiError::InvalidCredential`] on 401
    /// - [`ApiError::InsufficientPermission`] on 403
    /// - [`ApiError::Request`] on any other non-success status
    /// - [`ApiError::Transport`] if the service could not be reached
    pub async fn validate(&self) -> ApiResult<bool> {
        let url = format!("{}{}", self.base_url, VERIFY_PATH);
        debug!(%url, "validating API token");

        let response = self
            .apply_to_request(self.http.get(&url))
            .send()
            .await
            .map_err(ApiError::Transport)?;

        let status = response.status();
        debug!(%status, "token verification response");

        if status.is_success() {
            return Ok(true);
        }

        let body = response.text().await.unwrap_or_default();
        Err(ApiError::from_response(status, &body))
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headers_contain_bearer_and_json() {
        let auth = AuthProvider::new(Some("test-token".to_string())).unwrap();
        let headers = auth.headers();
        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer test-token");
        assert_eq!(headers.get(CONTENT_TYPE).unwrap(), "application/json");
    }

    #[test]
    fn test_explicit_token_wins_over_env() {
        temp_env::with_var(TOKEN_ENV, Some("env-token"), || {
            let auth = AuthProvider::new(Some("explicit".to_string())).unwrap();
            assert_eq!(auth.token(), "explicit");
        });
    }

    #[test]
    fn test_env_token_used_when_no_explicit() {
        temp_env::with_var(TOKEN_ENV, Some("env-token"), || {
            let auth = AuthProvider::from_sources(None, Some("stored".to_string())).unwrap();
            assert_eq!(auth.token(), "env-token");
        });
    }

    #[test]
    fn test_stored_token_is_last_resort() {
        temp_env::with_var_unset(TOKEN_ENV, || {
            let auth = AuthProvider::from_sources(None, Some("stored".to_string())).unwrap();
            assert_eq!(auth.token(), "stored");
        });
    }

    #[test]
    fn test_missing_token_is_configuration_error() {
        temp_env::with_var_unset(TOKEN_ENV, || {
            let err = AuthProvider::new(None).unwrap_err();
            assert!(matches!(err, ApiError::Configuration(_)));
        });
    }

    #[test]
    fn test_empty_tokens_count_as_missing() {
        temp_env::with_var(TOKEN_ENV, Some("  "), || {
            let err = AuthProvider::from_sources(Some(String::new()), None).unwrap_err();
            assert!(matches!(err, ApiError::Configuration(_)));
        });
    }

    #[test]
    fn test_token_with_inner_whitespace_rejected() {
        let err = AuthProvider::new(Some("abc def".to_string())).unwrap_err();
        assert!(matches!(err, ApiError::Configuration(_)));
    }

    #[test]
    fn test_with_base_url() {
        let auth = AuthProvider::new(Some("t".to_string()))
            .unwrap()
            .with_base_url("http://127.0.0.1:8080/")
            .unwrap();
        assert_eq!(auth.base_url(), "http://127.0.0.1:8080");

        let err = AuthProvider::new(Some("t".to_string()))
            .unwrap()
            .with_base_url("not a url")
            .unwrap_err();
        assert!(matches!(err, ApiError::Configuration(_)));
    }

    #[test]
    fn test_debug_masks_token() {
        let auth = AuthProvider::new(Some("supersecrettoken".to_string())).unwrap();
        let debug = format!("{:?}", auth);
        assert!(!debug.contains("supersecrettoken"));
    }
}
