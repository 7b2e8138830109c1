//
//  gcore-cli
//  api/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # API Client Layer
//!
//! HTTP clients for the Gcore REST API. Each resource family has its own
//! versioned base path on `https://api.gcore.com`:
//!
//! | Family | Client | Base path |
//! |--------|--------|-----------|
//! | CDN | [`CdnClient`] | `/cdn/v1` |
//! | DNS | [`DnsClient`] | `/dns/v2` |
//! | Object storage | [`StorageClient`] | `/storage/v1` |
//! | SSL certificates | [`SslClient`] | `/ssl/v1` |
//! | Load balancers | [`LoadBalancerClient`] | `/loadbalancer/v1` |
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use gcore_cli::api::{CdnClient, DnsClient};
//! use gcore_cli::auth::AuthProvider;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let auth = Arc::new(AuthProvider::new(None)?);
//!
//! // Both clients share the same credential
//! let cdn = CdnClient::new(auth.clone());
//! let dns = DnsClient::new(auth);
//!
//! let resources = cdn.list_resources().await?;
//! let zones = dns.list_zones().await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Every operation returns [`ApiResult`]. Clients never retry or swallow
//! errors:
//!
//! - `InvalidCredential` / `InsufficientPermission`: 401 / 403
//! - `Request`: any other non-2xx, with status and server detail
//! - `Transport`: the API could not be reached

/// Shared request path for all resource families.
pub mod client;

/// Error taxonomy, entity type and task-state classification.
pub mod common;

/// CDN resources and cache purges.
pub mod cdn;

/// DNS zones and records.
pub mod dns;

/// Load balancers, listeners, pools and members.
pub mod loadbalancer;

/// SSL certificates.
pub mod ssl;

/// Object storage buckets and objects.
pub mod storage;

pub use cdn::CdnClient;
pub use client::ApiClient;
pub use common::{ApiError, ApiResult, Entity, TaskState};
pub use dns::DnsClient;
pub use loadbalancer::LoadBalancerClient;
pub use ssl::SslClient;
pub use storage::StorageClient;
