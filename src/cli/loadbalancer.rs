//
//  gcore-cli
//  cli/loadbalancer.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Load balancer commands
//!
//! A balancer is built up in steps: create it, add a listener, add a pool
//! behind the listener, then add backend members to the pool.

use anyhow::Result;
use clap::{Args, Subcommand};
use serde_json::json;

use crate::api::loadbalancer::{
    AddMemberRequest, CreateListenerRequest, CreateLoadBalancerRequest, CreatePoolRequest,
    DEFAULT_FLAVOR, DEFAULT_LB_TYPE, DEFAULT_MEMBER_WEIGHT, DEFAULT_POOL_METHOD,
};
use crate::api::LoadBalancerClient;
use crate::interactive::confirm_destructive;

use super::GlobalOptions;

const LB_COLUMNS: &[(&str, &str)] = &[
    ("ID", "id"),
    ("NAME", "name"),
    ("REGION", "region"),
    ("TYPE", "type"),
    ("FLAVOR", "flavor"),
    ("STATUS", "status"),
];

/// Load balancers, listeners, pools and members
#[derive(Args, Debug)]
pub struct LoadBalancerCommand {
    #[command(subcommand)]
    pub command: LoadBalancerSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum LoadBalancerSubcommand {
    /// List load balancers
    #[command(visible_alias = "ls")]
    List,

    /// Show a load balancer
    Get(LbIdArgs),

    /// Create a load balancer
    Create(CreateArgs),

    /// Delete a load balancer
    Delete(DeleteArgs),

    /// Add a listener to a load balancer
    Listener(ListenerArgs),

    /// Add a backend pool behind a listener
    Pool(PoolArgs),

    /// Add a backend member to a pool
    Member(MemberArgs),
}

#[derive(Args, Debug)]
pub struct LbIdArgs {
    /// Load balancer ID
    pub id: u64,
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Name of the load balancer
    pub name: String,

    /// Region to create it in
    #[arg(long)]
    pub region: String,

    /// Load balancer type
    #[arg(long = "type", default_value = DEFAULT_LB_TYPE)]
    pub lb_type: String,

    /// Instance flavor
    #[arg(long, default_value = DEFAULT_FLAVOR)]
    pub flavor: String,
}

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Load balancer ID
    pub id: u64,

    /// Skip the confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}

#[derive(Args, Debug)]
pub struct ListenerArgs {
    /// Load balancer ID
    pub lb_id: u64,

    /// Protocol (HTTP, HTTPS, TCP, UDP); case-insensitive
    #[arg(long)]
    pub protocol: String,

    /// Port to listen on
    #[arg(long)]
    pub port: u16,

    /// Listener name
    #[arg(long)]
    pub name: Option<String>,
}

#[derive(Args, Debug)]
pub struct PoolArgs {
    /// Load balancer ID
    pub lb_id: u64,

    /// Listener the pool serves
    #[arg(long = "listener", value_name = "LISTENER_ID")]
    pub listener_id: u64,

    /// Backend protocol; case-insensitive
    #[arg(long)]
    pub protocol: String,

    /// Balancing method
    #[arg(long, default_value = DEFAULT_POOL_METHOD)]
    pub method: String,

    /// Pool name
    #[arg(long)]
    pub name: Option<String>,
}

#[derive(Args, Debug)]
pub struct MemberArgs {
    /// Load balancer ID
    pub lb_id: u64,

    /// Pool ID
    pub pool_id: u64,

    /// Backend address
    #[arg(long)]
    pub address: String,

    /// Backend port
    #[arg(long)]
    pub port: u16,

    /// Relative weight
    #[arg(long, default_value_t = DEFAULT_MEMBER_WEIGHT)]
    pub weight: u32,
}

impl LoadBalancerCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = LoadBalancerClient::new(global.auth_provider()?);
        let writer = global.output();

        match &self.command {
            LoadBalancerSubcommand::List => {
                let balancers = client.list_load_balancers().await?;
                writer.write_list(&balancers, LB_COLUMNS)
            }
            LoadBalancerSubcommand::Get(args) => {
                let balancer = client.get_load_balancer(args.id).await?;
                writer.write(&balancer)
            }
            LoadBalancerSubcommand::Create(args) => {
                let mut request =
                    CreateLoadBalancerRequest::new(args.name.as_str(), args.region.as_str());
                request.lb_type = args.lb_type.clone();
                request.flavor = args.flavor.clone();

                let balancer = client.create_load_balancer(&request).await?;
                if !writer.is_json() {
                    writer.write_success(&format!("Created load balancer {}", args.name));
                }
                writer.write(&balancer)
            }
            LoadBalancerSubcommand::Delete(args) => {
                let prompt = format!("Delete load balancer {}?", args.id);
                if !confirm_destructive(&prompt, args.yes)? {
                    writer.write_info("Cancelled");
                    return Ok(());
                }
                client.delete_load_balancer(args.id).await?;
                writer.write_outcome(
                    &format!("Deleted load balancer {}", args.id),
                    &json!({ "deleted": true, "id": args.id }),
                )
            }
            LoadBalancerSubcommand::Listener(args) => {
                let mut request = CreateListenerRequest::new(&args.protocol, args.port);
                request.name = args.name.clone();

                let listener = client.create_listener(args.lb_id, &request).await?;
                if !writer.is_json() {
                    writer.write_success(&format!(
                        "Added {} listener on port {}",
                        request.protocol, args.port
                    ));
                }
                writer.write(&listener)
            }
            LoadBalancerSubcommand::Pool(args) => {
                let mut request = CreatePoolRequest::new(args.listener_id, &args.protocol);
                request.method = args.method.clone();
                request.name = args.name.clone();

                let pool = client.create_pool(args.lb_id, &request).await?;
                if !writer.is_json() {
                    writer.write_success(&format!(
                        "Added {} pool to listener {}",
                        request.protocol, args.listener_id
                    ));
                }
                writer.write(&pool)
            }
            LoadBalancerSubcommand::Member(args) => {
                let mut request = AddMemberRequest::new(args.address.as_str(), args.port);
                request.weight = args.weight;

                let member = client.add_member(args.lb_id, args.pool_id, &request).await?;
                if !writer.is_json() {
                    writer.write_success(&format!(
                        "Added member {}:{} to pool {}",
                        args.address, args.port, args.pool_id
                    ));
                }
                writer.write(&member)
            }
        }
    }
}
