//
//  gcore-cli
//  cli/dns.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! DNS zone and record commands

use anyhow::Result;
use clap::{Args, Subcommand};
use serde_json::json;

use crate::api::dns::{CreateRecordRequest, RecordContent, DEFAULT_TTL};
use crate::api::DnsClient;
use crate::interactive::confirm_destructive;

use super::GlobalOptions;

const ZONE_COLUMNS: &[(&str, &str)] = &[
    ("ID", "id"),
    ("NAME", "name"),
    ("STATUS", "status"),
    ("RECORDS", "records_count"),
];

const RECORD_COLUMNS: &[(&str, &str)] = &[
    ("ID", "id"),
    ("NAME", "name"),
    ("TYPE", "type"),
    ("CONTENT", "content"),
    ("TTL", "ttl"),
];

/// DNS zones and records
#[derive(Args, Debug)]
pub struct DnsCommand {
    #[command(subcommand)]
    pub command: DnsSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum DnsSubcommand {
    /// Manage zones
    #[command(subcommand)]
    Zone(ZoneSubcommand),

    /// Manage records inside a zone
    #[command(subcommand, visible_alias = "rr")]
    Record(RecordSubcommand),
}

#[derive(Subcommand, Debug)]
pub enum ZoneSubcommand {
    /// List zones
    #[command(visible_alias = "ls")]
    List,

    /// Show a zone
    Get(ZoneIdArgs),

    /// Create a zone
    Create(CreateZoneArgs),

    /// Delete a zone and all of its records
    Delete(DeleteZoneArgs),
}

#[derive(Subcommand, Debug)]
pub enum RecordSubcommand {
    /// List records in a zone
    #[command(visible_alias = "ls")]
    List(ZoneIdArgs),

    /// Create a record
    Create(CreateRecordArgs),

    /// Delete a record
    Delete(DeleteRecordArgs),
}

#[derive(Args, Debug)]
pub struct ZoneIdArgs {
    /// Zone ID
    pub zone_id: u64,
}

#[derive(Args, Debug)]
pub struct CreateZoneArgs {
    /// Domain name, e.g. example.com
    pub name: String,
}

#[derive(Args, Debug)]
pub struct DeleteZoneArgs {
    /// Zone ID
    pub zone_id: u64,

    /// Skip the confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}

#[derive(Args, Debug)]
pub struct CreateRecordArgs {
    /// Zone ID
    pub zone_id: u64,

    /// Record name, e.g. www
    #[arg(long)]
    pub name: String,

    /// Record type (A, AAAA, CNAME, MX, TXT, ...); case-insensitive
    #[arg(long = "type", value_name = "TYPE")]
    pub record_type: String,

    /// Record value. Repeat for multi-value records
    #[arg(long, required = true, num_args = 1..)]
    pub content: Vec<String>,

    /// Time to live in seconds
    #[arg(long, default_value_t = DEFAULT_TTL)]
    pub ttl: u32,
}

#[derive(Args, Debug)]
pub struct DeleteRecordArgs {
    /// Zone ID
    pub zone_id: u64,

    /// Record ID
    pub record_id: u64,

    /// Skip the confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}

impl DnsCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = DnsClient::new(global.auth_provider()?);
        let writer = global.output();

        match &self.command {
            DnsSubcommand::Zone(ZoneSubcommand::List) => {
                let zones = client.list_zones().await?;
                writer.write_list(&zones, ZONE_COLUMNS)
            }
            DnsSubcommand::Zone(ZoneSubcommand::Get(args)) => {
                let zone = client.get_zone(args.zone_id).await?;
                writer.write(&zone)
            }
            DnsSubcommand::Zone(ZoneSubcommand::Create(args)) => {
                let zone = client.create_zone(&args.name).await?;
                if !writer.is_json() {
                    writer.write_success(&format!("Created zone {}", args.name));
                }
                writer.write(&zone)
            }
            DnsSubcommand::Zone(ZoneSubcommand::Delete(args)) => {
                let prompt = format!("Delete zone {} and all of its records?", args.zone_id);
                if !confirm_destructive(&prompt, args.yes)? {
                    writer.write_info("Cancelled");
                    return Ok(());
                }
                client.delete_zone(args.zone_id).await?;
                writer.write_outcome(
                    &format!("Deleted zone {}", args.zone_id),
                    &json!({ "deleted": true, "zone_id": args.zone_id }),
                )
            }
            DnsSubcommand::Record(RecordSubcommand::List(args)) => {
                let records = client.list_records(args.zone_id).await?;
                writer.write_list(&records, RECORD_COLUMNS)
            }
            DnsSubcommand::Record(RecordSubcommand::Create(args)) => {
                let request = CreateRecordRequest::new(
                    args.name.as_str(),
                    &args.record_type,
                    record_content(&args.content),
                )
                .ttl(args.ttl);

                let record = client.create_record(args.zone_id, &request).await?;
                if !writer.is_json() {
                    writer.write_success(&format!(
                        "Created {} record {}",
                        request.record_type, request.name
                    ));
                }
                writer.write(&record)
            }
            DnsSubcommand::Record(RecordSubcommand::Delete(args)) => {
                let prompt = format!(
                    "Delete record {} from zone {}?",
                    args.record_id, args.zone_id
                );
                if !confirm_destructive(&prompt, args.yes)? {
                    writer.write_info("Cancelled");
                    return Ok(());
                }
                client.delete_record(args.zone_id, args.record_id).await?;
                writer.write_outcome(
                    &format!("Deleted record {}", args.record_id),
                    &json!({ "deleted": true, "zone_id": args.zone_id, "record_id": args.record_id }),
                )
            }
        }
    }
}

/// A single `--content` is sent as a string, repeated ones as a list.
fn record_content(values: &[String]) -> RecordContent {
    match values {
        [value] => RecordContent::Single(value.clone()),
        _ => RecordContent::Multiple(values.to_vec()),
    }
}
