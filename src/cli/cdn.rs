//
//  gcore-cli
//  cli/cdn.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! CDN commands
//!
//! Resources plus cache purges. Purges run asynchronously on Gcore's side;
//! `--wait` polls the purge task until it completes.

use anyhow::{bail, Result};
use clap::{Args, Subcommand};

use crate::api::cdn::CreateResourceRequest;
use crate::api::{CdnClient, Entity};

use super::wait::{wait_for_task, WaitArgs};
use super::GlobalOptions;

const RESOURCE_COLUMNS: &[(&str, &str)] = &[
    ("ID", "id"),
    ("CNAME", "cname"),
    ("ORIGIN", "origin"),
    ("SSL", "ssl"),
    ("STATUS", "status"),
];

/// CDN resources and cache purges
#[derive(Args, Debug)]
pub struct CdnCommand {
    #[command(subcommand)]
    pub command: CdnSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum CdnSubcommand {
    /// List CDN resources
    #[command(visible_alias = "ls")]
    List,

    /// Show a CDN resource
    #[command(visible_alias = "view")]
    Get(GetArgs),

    /// Create a CDN resource
    Create(CreateArgs),

    /// Purge specific URLs from the cache
    Purge(PurgeArgs),

    /// Purge the whole cache of a resource
    PurgeAll(PurgeAllArgs),

    /// Show the status of a purge task
    PurgeStatus(PurgeStatusArgs),
}

#[derive(Args, Debug)]
pub struct GetArgs {
    /// Resource ID
    pub id: u64,
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Origin host content is pulled from
    #[arg(long)]
    pub origin: String,

    /// Custom domain served by the resource
    #[arg(long)]
    pub cname: Option<String>,

    /// Serve over plain HTTP only
    #[arg(long)]
    pub no_ssl: bool,
}

#[derive(Args, Debug)]
pub struct PurgeArgs {
    /// Resource ID
    pub id: u64,

    /// URLs or paths to purge
    #[arg(required = true, num_args = 1..)]
    pub urls: Vec<String>,

    #[command(flatten)]
    pub wait: WaitArgs,
}

#[derive(Args, Debug)]
pub struct PurgeAllArgs {
    /// Resource ID
    pub id: u64,

    #[command(flatten)]
    pub wait: WaitArgs,
}

#[derive(Args, Debug)]
pub struct PurgeStatusArgs {
    /// Resource ID
    pub id: u64,

    /// Purge task ID
    pub task_id: String,
}

impl CdnCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = CdnClient::new(global.auth_provider()?);

        match &self.command {
            CdnSubcommand::List => list(&client, global).await,
            CdnSubcommand::Get(args) => get(&client, args, global).await,
            CdnSubcommand::Create(args) => create(&client, args, global).await,
            CdnSubcommand::Purge(args) => purge(&client, args, global).await,
            CdnSubcommand::PurgeAll(args) => purge_all(&client, args, global).await,
            CdnSubcommand::PurgeStatus(args) => purge_status(&client, args, global).await,
        }
    }
}

async fn list(client: &CdnClient, global: &GlobalOptions) -> Result<()> {
    let resources = client.list_resources().await?;
    global.output().write_list(&resources, RESOURCE_COLUMNS)
}

async fn get(client: &CdnClient, args: &GetArgs, global: &GlobalOptions) -> Result<()> {
    let resource = client.get_resource(args.id).await?;
    global.output().write(&resource)
}

async fn create(client: &CdnClient, args: &CreateArgs, global: &GlobalOptions) -> Result<()> {
    let mut request = CreateResourceRequest::new(&args.origin);
    request.cname = args.cname.clone();
    request.ssl = !args.no_ssl;

    let resource = client.create_resource(&request).await?;

    let writer = global.output();
    if !writer.is_json() {
        writer.write_success("Created CDN resource");
    }
    writer.write(&resource)
}

async fn purge(client: &CdnClient, args: &PurgeArgs, global: &GlobalOptions) -> Result<()> {
    let task = client.purge_urls(args.id, &args.urls).await?;
    finish_purge(client, args.id, task, &args.wait, global).await
}

async fn purge_all(client: &CdnClient, args: &PurgeAllArgs, global: &GlobalOptions) -> Result<()> {
    let task = client.purge_all(args.id).await?;
    finish_purge(client, args.id, task, &args.wait, global).await
}

async fn purge_status(
    client: &CdnClient,
    args: &PurgeStatusArgs,
    global: &GlobalOptions,
) -> Result<()> {
    let status = client.get_purge_status(args.id, &args.task_id).await?;
    global.output().write(&status)
}

/// Prints a submitted purge task, optionally polling it to completion.
async fn finish_purge(
    client: &CdnClient,
    resource_id: u64,
    task: Entity,
    wait: &WaitArgs,
    global: &GlobalOptions,
) -> Result<()> {
    let writer = global.output();

    if !wait.wait {
        if !writer.is_json() {
            writer.write_success("Purge submitted");
        }
        return writer.write(&task);
    }

    let Some(id) = task_id(&task) else {
        bail!("Purge response carried no task id to wait on");
    };

    let id = id.as_str();
    let status = wait_for_task("Purge", wait, || client.get_purge_status(resource_id, id)).await?;
    writer.write(&status)
}

/// Reads the purge task id, which Gcore returns as a string or a number.
fn task_id(task: &Entity) -> Option<String> {
    match task.get("task_id").or_else(|| task.get("id"))? {
        serde_json::Value::String(s) if !s.is_empty() => Some(s.clone()),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
