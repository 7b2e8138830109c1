//
//  gcore-cli
//  lib.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Gcore CLI Library
//!
//! Command-line client and API library for the Gcore cloud platform.
//!
//! ## Overview
//!
//! The library holds a single credential (an [`auth::AuthProvider`]) and a
//! set of resource clients that share it. Each client maps its operations
//! to authenticated JSON requests against `https://api.gcore.com` and hands
//! back the server's JSON objects unmodified.
//!
//! ## Features
//!
//! - **CDN**: resources and cache purges, with purge task polling
//! - **DNS**: zones and records
//! - **Object Storage**: buckets plus streaming object upload and download
//! - **SSL**: uploaded and Gcore-managed certificates
//! - **Load Balancers**: balancers, listeners, pools and members
//!
//! ## Module Structure
//!
//! - [`cli`]: Command-line interface definitions using clap
//! - [`api`]: Resource clients, error taxonomy and shared request path
//! - [`auth`]: Credential resolution and token verification
//! - [`config`]: YAML configuration file
//! - [`output`]: Output formatting (Table, JSON)
//! - [`interactive`]: Confirmation prompts
//! - [`util`]: Utility functions
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use gcore_cli::api::{CdnClient, cdn::CreateResourceRequest};
//! use gcore_cli::auth::AuthProvider;
//!
//! # async fn example() -> anyhow::Result<()> {
//! // Reads GCORE_API_TOKEN when no explicit token is given
//! let auth = Arc::new(AuthProvider::new(None)?);
//! let cdn = CdnClient::new(auth);
//!
//! let mut request = CreateResourceRequest::new("example.com");
//! request.cname = Some("cdn.example.com".to_string());
//! let resource = cdn.create_resource(&request).await?;
//! println!("created resource {}", resource["id"]);
//! # Ok(())
//! # }
//! ```

/// Command-line interface definitions.
pub mod cli;

/// Gcore REST API clients.
pub mod api;

/// API token handling.
pub mod auth;

/// Configuration file management.
pub mod config;

/// Terminal and JSON output.
pub mod output;

/// Interactive prompts.
pub mod interactive;

/// Formatting helpers.
pub mod util;

pub use cli::Cli;

pub use config::Config;

/// Binary name.
pub const APP_NAME: &str = "gcore";

/// Crate version, also sent in the `User-Agent` header.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Process exit codes.
pub mod exit_codes {
    /// Command succeeded.
    pub const SUCCESS: i32 = 0;

    /// Unclassified failure.
    pub const ERROR: i32 = 1;

    /// Missing or unusable token or API URL.
    pub const CONFIG_ERROR: i32 = 3;

    /// The API rejected the token (401) or its permissions (403).
    pub const AUTH_ERROR: i32 = 4;

    /// The requested resource does not exist (404).
    pub const NOT_FOUND: i32 = 8;

    /// The API throttled the request (429).
    pub const RATE_LIMIT: i32 = 32;
}
