//
//  gcore-cli
//  cli/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! CLI command definitions using clap derive macros

mod auth;
mod cdn;
mod completion;
mod config;
mod dns;
mod loadbalancer;
mod ssl;
mod storage;
mod wait;

pub use auth::AuthCommand;
pub use cdn::CdnCommand;
pub use completion::CompletionCommand;
pub use config::ConfigCommand;
pub use dns::DnsCommand;
pub use loadbalancer::LoadBalancerCommand;
pub use ssl::SslCommand;
pub use storage::StorageCommand;
pub use wait::WaitArgs;

use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;

use crate::auth::AuthProvider;
use crate::config::Config;
use crate::output::{OutputFormat, OutputWriter};

/// Gcore CLI - manage Gcore cloud resources from the command line
#[derive(Parser, Debug)]
#[command(
    name = "gcore",
    version,
    about = "Work with the Gcore cloud platform from the command line",
    long_about = "gcore manages CDN resources, DNS zones, object storage, SSL certificates\n\
                  and load balancers through the Gcore REST API.\n\n\
                  Authenticate with 'gcore auth login', the GCORE_API_TOKEN environment\n\
                  variable, or the --token flag.",
    propagate_version = true,
    after_help = "Use 'gcore <command> --help' for more information about a command."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOptions,
}

/// Options accepted by every command.
#[derive(Parser, Debug, Clone, Default)]
pub struct GlobalOptions {
    /// API token. Overrides GCORE_API_TOKEN and the saved token
    #[arg(long, global = true, value_name = "TOKEN")]
    pub token: Option<String>,

    /// Gcore API host
    #[arg(long, global = true, env = "GCORE_API_URL", value_name = "URL")]
    pub api_url: Option<String>,

    /// Output raw JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Log requests to stderr
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

impl GlobalOptions {
    /// Output writer for the selected format.
    pub fn output(&self) -> OutputWriter {
        OutputWriter::new(OutputFormat::from_json_flag(self.json))
    }

    /// Builds the shared credential from the flags, the environment and the
    /// saved configuration.
    pub fn auth_provider(&self) -> Result<Arc<AuthProvider>> {
        let config = Config::load()?;
        self.auth_provider_with(&config)
    }

    /// Like [`auth_provider`](Self::auth_provider) with an already loaded
    /// configuration.
    pub fn auth_provider_with(&self, config: &Config) -> Result<Arc<AuthProvider>> {
        let mut provider =
            AuthProvider::from_sources(self.token.clone(), config.token().map(str::to_string))?;

        if let Some(url) = config.resolve_api_url(self.api_url.as_deref()) {
            provider = provider.with_base_url(&url)?;
        }

        debug!(base_url = provider.base_url(), "resolved API endpoint");
        Ok(Arc::new(provider))
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage the API token
    Auth(AuthCommand),

    /// CDN resources and cache purges
    Cdn(CdnCommand),

    /// DNS zones and records
    Dns(DnsCommand),

    /// Object storage buckets and objects
    #[command(visible_alias = "s3")]
    Storage(StorageCommand),

    /// SSL certificates
    #[command(visible_alias = "cert")]
    Ssl(SslCommand),

    /// Load balancers, listeners, pools and members
    #[command(name = "lb", visible_alias = "loadbalancer")]
    Lb(LoadBalancerCommand),

    /// Inspect the configuration file
    Config(ConfigCommand),

    /// Generate shell completion scripts
    Completion(CompletionCommand),

    /// Show version information
    Version,
}
